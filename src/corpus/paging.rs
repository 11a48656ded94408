use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::Post;

/// Largest page `paginate` will build
pub const MAX_PAGE_SIZE: usize = 100;

/// Deterministic endless feed over a small base set.
///
/// The base posts come first; after them the set repeats with ids
/// `{id}-{cycle}-{index}` and engagement / timestamps drawn from an RNG
/// seeded by `(seed, cycle, index)`. Same arguments, same page.
/// `limit` is capped at [`MAX_PAGE_SIZE`].
pub fn paginate(base: &[Post], offset: usize, limit: usize, seed: u64) -> Vec<Post> {
    let limit = limit.min(MAX_PAGE_SIZE);
    if base.is_empty() || limit == 0 {
        return Vec::new();
    }

    (offset..offset.saturating_add(limit))
        .map(|position| {
            let cycle = position / base.len();
            let index = position % base.len();
            let post = &base[index];

            if cycle == 0 {
                post.clone()
            } else {
                synthesize(post, cycle, index, seed)
            }
        })
        .collect()
}

fn synthesize(post: &Post, cycle: usize, index: usize, seed: u64) -> Post {
    let mut rng = StdRng::seed_from_u64(seed ^ ((cycle as u64) << 32) ^ index as u64);

    let mut copy = post.clone();
    copy.id = format!("{}-{}-{}", post.id, cycle, index);
    copy.votes = rng.gen_range(50..550);
    copy.comment_count = rng.gen_range(10..110);
    copy.timestamp = post.timestamp - Duration::hours(rng.gen_range(1..=24));
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use chrono::Utc;
    use std::collections::HashSet;

    fn base() -> Vec<Post> {
        (0..3)
            .map(|i| Post::new(i.to_string(), "t", "s", Category::Discussion, Utc::now()))
            .collect()
    }

    #[test]
    fn test_first_page_is_base() {
        let posts = base();
        let page = paginate(&posts, 0, 3, 7);
        assert_eq!(page, posts);
    }

    #[test]
    fn test_cycled_ids_are_unique() {
        let page = paginate(&base(), 0, 10, 7);
        assert_eq!(page.len(), 10);
        assert_eq!(page[3].id, "0-1-0");
        assert_eq!(page[9].id, "0-3-0");

        let ids: HashSet<&str> = page.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_deterministic_per_seed() {
        let posts = base();
        assert_eq!(paginate(&posts, 4, 5, 42), paginate(&posts, 4, 5, 42));

        let a = paginate(&posts, 3, 3, 1);
        let b = paginate(&posts, 3, 3, 2);
        let differs = a
            .iter()
            .zip(&b)
            .any(|(x, y)| x.votes != y.votes || x.comment_count != y.comment_count);
        assert!(differs);
    }

    #[test]
    fn test_offset_pages_line_up() {
        let posts = base();
        let whole = paginate(&posts, 0, 8, 9);
        let tail = paginate(&posts, 5, 3, 9);
        assert_eq!(&whole[5..], &tail[..]);
    }

    #[test]
    fn test_oversized_limit_is_capped() {
        let page = paginate(&base(), 0, usize::MAX / 2, 0);
        assert_eq!(page.len(), MAX_PAGE_SIZE);

        let tail = paginate(&base(), usize::MAX - 1, 10, 0);
        assert_eq!(tail.len(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(paginate(&[], 0, 5, 1).is_empty());
        assert!(paginate(&base(), 0, 0, 1).is_empty());
    }
}
