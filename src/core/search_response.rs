use serde::{Deserialize, Serialize};
use crate::core::Post;

/// Which field made a post match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Title,
    TvShow,
    Content,
    /// No literal match; surfaced by the remote scorer (or by author/category)
    Semantic,
}

/// Whether a remote provider backs the ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    Remote,
    LocalOnly,
}

impl SearchMode {
    pub fn is_remote(&self) -> bool {
        matches!(self, SearchMode::Remote)
    }
}

/// A post plus its computed relevance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(flatten)]
    pub post: Post,

    pub relevance_score: u32,

    pub match_type: MatchType,
}

/// Filters and caps for a post search
#[derive(Debug, Clone, PartialEq)]
pub struct RankOptions {
    /// `None` searches every category
    pub category: Option<crate::core::Category>,
    pub limit: usize,
    pub include_content: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            category: None,
            limit: 20,
            include_content: false,
        }
    }
}

/// Ranked posts and suggestions for one query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,

    /// Query after remote rewriting (equal to the input in local mode)
    pub enhanced_query: String,

    #[serde(default)]
    pub suggestions: Vec<String>,

    /// Match count before the limit was applied
    pub total_count: usize,

    pub elapsed_ms: f64,

    pub mode: SearchMode,
}

impl SearchResponse {
    /// Response for a query that produced nothing
    pub fn empty(query: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            results: Vec::new(),
            enhanced_query: query.into(),
            suggestions: Vec::new(),
            total_count: 0,
            elapsed_ms: 0.0,
            mode,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        let top = self
            .results
            .first()
            .map(|r| format!("{} ({})", r.post.title, r.relevance_score))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{} → {}/{} results, top: {} [{:?}] {:.1}ms",
            self.enhanced_query,
            self.results.len(),
            self.total_count,
            top,
            self.mode,
            self.elapsed_ms
        )
    }
}
