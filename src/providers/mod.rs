pub mod fenced;
pub mod openai;

use async_trait::async_trait;
use crate::core::{Post, Suggestion};
use crate::error::Result;

pub use fenced::{parse_fenced_json, parse_relevance, parse_suggestions, strip_code_fence};
pub use openai::OpenAiProvider;

/// Trait for hosted text-completion backends (OpenAI-compatible, fakes in tests)
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Rewrite a query into a semantically expanded phrasing
    async fn enhance_query(&self, query: &str) -> Result<String>;

    /// Categorized suggestions for a query
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>>;

    /// Relevance of one post to the query, 0-100
    async fn score_relevance(&self, query: &str, post: &Post) -> Result<u8>;

    /// Get provider name
    fn name(&self) -> &str;
}
