pub mod paging;
pub mod seed;
pub mod slug;

use std::collections::HashSet;
use std::path::Path;

use crate::core::Post;
use crate::error::{Result, SearchError};

pub use paging::{paginate, MAX_PAGE_SIZE};
pub use seed::seed_posts;
pub use slug::{show_slug, slug_from_tag};

/// Read-only post collection the ranker searches
pub trait PostCorpus: Send + Sync {
    /// Every post, in corpus order
    fn posts(&self) -> &[Post];

    /// Deterministic pseudo-paged feed, see [`paginate`]
    fn page(&self, offset: usize, limit: usize, seed: u64) -> Vec<Post> {
        paginate(self.posts(), offset, limit, seed)
    }

    /// Show name behind a slug, `None` when no post is about it
    fn show_name(&self, slug: &str) -> Option<&str> {
        self.posts()
            .iter()
            .find(|post| is_about(post, slug))
            .map(|post| post.show.as_str())
    }

    /// Posts about one show, in corpus order
    fn show_posts(&self, slug: &str) -> Vec<Post> {
        self.posts()
            .iter()
            .filter(|post| is_about(post, slug))
            .cloned()
            .collect()
    }

    /// Pseudo-paged feed of one show; empty for an unknown slug
    fn show_page(&self, slug: &str, offset: usize, limit: usize, seed: u64) -> Vec<Post> {
        paginate(&self.show_posts(slug), offset, limit, seed)
    }

    fn len(&self) -> usize {
        self.posts().len()
    }

    fn is_empty(&self) -> bool {
        self.posts().is_empty()
    }
}

fn is_about(post: &Post, slug: &str) -> bool {
    !slug.is_empty() && show_slug(&post.show) == slug
}

/// In-memory corpus, loaded once
#[derive(Debug, Clone, Default)]
pub struct StaticCorpus {
    posts: Vec<Post>,
}

impl StaticCorpus {
    /// Build a corpus, rejecting duplicate ids
    pub fn new(posts: Vec<Post>) -> Result<Self> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.id.as_str()) {
                return Err(SearchError::Config(format!("Duplicate post id: {}", post.id)));
            }
        }
        Ok(Self { posts })
    }

    /// The bundled demo posts
    pub fn seeded() -> Self {
        Self { posts: seed_posts() }
    }

    /// Parse a JSON array of posts
    pub fn from_json(json: &str) -> Result<Self> {
        let posts: Vec<Post> = serde_json::from_str(json)?;
        Self::new(posts)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let corpus = Self::from_json(&json)?;
        tracing::info!("📚 Loaded {} posts from {}", corpus.len(), path.as_ref().display());
        Ok(corpus)
    }
}

impl PostCorpus for StaticCorpus {
    fn posts(&self) -> &[Post] {
        &self.posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_corpus() {
        let corpus = StaticCorpus::seeded();
        assert_eq!(corpus.len(), 15);
        assert_eq!(corpus.page(0, 5, 1).len(), 5);
    }

    #[test]
    fn test_show_page() {
        let corpus = StaticCorpus::seeded();
        assert_eq!(corpus.show_name("breaking-bad"), Some("Breaking Bad"));
        assert_eq!(corpus.show_name("the-wire"), None);
        assert_eq!(corpus.show_name(""), None);

        let page = corpus.show_page("breaking-bad", 0, 3, 1);
        let ids: Vec<&str> = page.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "1-1-0", "1-2-0"]);
        assert!(page.iter().all(|p| p.show == "Breaking Bad"));

        assert_eq!(corpus.show_page("breaking-bad", 1, 2, 1), page[1..].to_vec());
        assert!(corpus.show_page("the-wire", 0, 5, 1).is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": "1", "title": "A", "timestamp": "2024-01-01T00:00:00Z", "category": "news"},
            {"id": "1", "title": "B", "timestamp": "2024-01-02T00:00:00Z", "category": "news"}
        ]"#;

        assert!(matches!(StaticCorpus::from_json(json), Err(SearchError::Config(_))));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "a", "title": "Pilot", "tv_show": "Severance", "votes": 12,
             "comment_count": 3, "timestamp": "2024-02-01T08:00:00Z", "category": "review"}
        ]"#;

        let corpus = StaticCorpus::from_json(json).unwrap();
        assert_eq!(corpus.posts()[0].show, "Severance");
        assert_eq!(corpus.posts()[0].votes, 12);
    }
}
