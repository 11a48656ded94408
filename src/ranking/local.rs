use chrono::{DateTime, Utc};

use crate::core::{Category, MatchType, Post, RankOptions, SearchResult};

const TITLE_EXACT: f64 = 200.0;
const TITLE_CONTAINS: f64 = 100.0;
const SHOW_EXACT: f64 = 150.0;
const SHOW_CONTAINS: f64 = 80.0;
const BODY_CONTAINS: f64 = 60.0;
const AUTHOR_CONTAINS: f64 = 40.0;
const CATEGORY_CONTAINS: f64 = 30.0;

const VOTE_CAP: u32 = 100;
const ENGAGEMENT_CAP: u32 = 50;

/// Substring scorer over the fixed corpus
///
/// Scores are integers: field bonuses, capped popularity and engagement,
/// and a recency bonus (< 7 days: +20, < 30 days: +10).
pub struct LocalScorer;

impl LocalScorer {
    pub fn new() -> Self {
        Self
    }

    /// Does the post pass the category filter?
    pub fn in_category(post: &Post, category: Option<Category>) -> bool {
        category.map_or(true, |c| post.category == c)
    }

    /// At least one searched field contains the (lowercase) query
    pub fn matches(&self, post: &Post, query_lower: &str, include_content: bool) -> bool {
        if query_lower.is_empty() {
            return false;
        }

        contains(&post.title, query_lower)
            || contains(&post.show, query_lower)
            || contains(&post.author, query_lower)
            || post.category.as_str().contains(query_lower)
            || (include_content && contains(post.body_text(), query_lower))
    }

    /// Rounded relevance of one post
    pub fn score(
        &self,
        post: &Post,
        query_lower: &str,
        include_content: bool,
        now: DateTime<Utc>,
    ) -> u32 {
        let mut score = 0.0;

        let title = post.title.to_lowercase();
        if title == query_lower {
            score += TITLE_EXACT;
        } else if title.contains(query_lower) {
            score += TITLE_CONTAINS;
        }

        let show = post.show.to_lowercase();
        if show == query_lower {
            score += SHOW_EXACT;
        } else if show.contains(query_lower) {
            score += SHOW_CONTAINS;
        }

        if include_content && contains(post.body_text(), query_lower) {
            score += BODY_CONTAINS;
        }

        if contains(&post.author, query_lower) {
            score += AUTHOR_CONTAINS;
        }

        if post.category.as_str().contains(query_lower) {
            score += CATEGORY_CONTAINS;
        }

        score += f64::from(post.votes.min(VOTE_CAP)) * 0.5;
        score += f64::from(post.comment_count.saturating_mul(2).min(ENGAGEMENT_CAP));
        score += recency_bonus(post.timestamp, now);

        score.round() as u32
    }

    /// First literally matching field: title → show → body → semantic
    pub fn match_type(&self, post: &Post, query_lower: &str, include_content: bool) -> MatchType {
        if contains(&post.title, query_lower) {
            MatchType::Title
        } else if contains(&post.show, query_lower) {
            MatchType::TvShow
        } else if include_content && contains(post.body_text(), query_lower) {
            MatchType::Content
        } else {
            MatchType::Semantic
        }
    }

    /// Filter, score and sort; returns every match (no limit applied)
    pub fn rank(
        &self,
        query: &str,
        posts: &[Post],
        options: &RankOptions,
        now: DateTime<Utc>,
    ) -> Vec<SearchResult> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<SearchResult> = posts
            .iter()
            .filter(|post| Self::in_category(post, options.category))
            .filter(|post| self.matches(post, &query_lower, options.include_content))
            .map(|post| SearchResult {
                post: post.clone(),
                relevance_score: self.score(post, &query_lower, options.include_content, now),
                match_type: self.match_type(post, &query_lower, options.include_content),
            })
            .collect();

        // Stable: ties keep corpus order
        ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));

        ranked
    }
}

impl Default for LocalScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn contains(field: &str, query_lower: &str) -> bool {
    !field.is_empty() && field.to_lowercase().contains(query_lower)
}

fn recency_bonus(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_days = (now - timestamp).num_seconds() as f64 / 86_400.0;
    if age_days < 7.0 {
        20.0
    } else if age_days < 30.0 {
        10.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap()
    }

    fn finale(timestamp: DateTime<Utc>) -> Post {
        Post::new(
            "1",
            "Breaking Bad Season 5 Finale Discussion",
            "Breaking Bad",
            Category::Discussion,
            timestamp,
        )
        .with_author("tvfanatic92")
        .with_body("Walter White's journey comes full circle.")
        .with_engagement(245, 89)
    }

    #[test]
    fn test_breaking_bad_finale_score() {
        let scorer = LocalScorer::new();
        let post = finale(now() - Duration::days(3));

        // title contains +100, show equal +150, votes 50, comments 50, recency 20
        assert_eq!(scorer.score(&post, "breaking bad", false, now()), 370);
        assert_eq!(scorer.match_type(&post, "breaking bad", false), MatchType::Title);
    }

    #[test]
    fn test_recency_boundaries() {
        let scorer = LocalScorer::new();
        let base = scorer.score(&finale(now() - Duration::days(40)), "finale", false, now());

        let week = scorer.score(&finale(now() - Duration::days(7)), "finale", false, now());
        assert_eq!(week, base + 10);

        let fresh = scorer.score(&finale(now() - Duration::hours(167)), "finale", false, now());
        assert_eq!(fresh, base + 20);
    }

    #[test]
    fn test_exact_title_match() {
        let scorer = LocalScorer::new();
        let post = Post::new("9", "Ozark", "Other", Category::News, now() - Duration::days(90));
        assert_eq!(scorer.score(&post, "ozark", false, now()), 200);
    }

    #[test]
    fn test_body_only_searched_on_request() {
        let scorer = LocalScorer::new();
        let post = finale(now());

        assert!(!scorer.matches(&post, "walter", false));
        assert!(scorer.matches(&post, "walter", true));
        assert_eq!(scorer.match_type(&post, "walter", true), MatchType::Content);

        let without = scorer.score(&post, "walter", false, now());
        let with = scorer.score(&post, "walter", true, now());
        assert_eq!(with, without + 60);
    }

    #[test]
    fn test_author_and_category_matches_are_semantic() {
        let scorer = LocalScorer::new();
        let post = finale(now());

        assert!(scorer.matches(&post, "tvfanatic", false));
        assert_eq!(scorer.match_type(&post, "tvfanatic", false), MatchType::Semantic);
        assert!(scorer.matches(&post, "discuss", false));
    }

    #[test]
    fn test_rank_filters_and_sorts_stably() {
        let scorer = LocalScorer::new();
        let old = now() - Duration::days(100);
        let posts = vec![
            Post::new("a", "Ozark recap", "Ozark", Category::Review, old),
            Post::new("b", "Ozark theory", "Ozark", Category::Theory, old),
            Post::new("c", "Ozark review", "Ozark", Category::Review, old).with_engagement(100, 0),
            Post::new("d", "The Crown", "The Crown", Category::Review, old),
        ];

        let all = scorer.rank("ozark", &posts, &RankOptions::default(), now());
        let ids: Vec<&str> = all.iter().map(|r| r.post.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);

        let reviews = RankOptions {
            category: Some(Category::Review),
            ..RankOptions::default()
        };
        let filtered = scorer.rank("ozark", &posts, &reviews, now());
        assert!(filtered.iter().all(|r| r.post.category == Category::Review));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let scorer = LocalScorer::new();
        let posts = vec![finale(now())];
        assert!(scorer.rank("   ", &posts, &RankOptions::default(), now()).is_empty());
    }
}
