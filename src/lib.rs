//! # TV Posts Search
//!
//! Post search and typeahead suggestions for the TV Posts feed:
//! - Local substring ranking with popularity, engagement and recency bonuses
//! - Rule-based and catalog-based suggestions
//! - Optional completion provider (OpenAI-compatible) for query rewriting,
//!   suggestions and semantic scoring, with silent local fallback
//! - Session storage (memory or SQLite) for the signed-in account
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tvposts_search::{RankOptions, SearchRanker, StaticCorpus};
//!
//! #[tokio::main]
//! async fn main() {
//!     let ranker = SearchRanker::new(Arc::new(StaticCorpus::seeded()), None);
//!
//!     let response = ranker.rank("breaking bad", &RankOptions::default()).await;
//!     for result in &response.results {
//!         println!("{} - {}", result.post.title, result.relevance_score);
//!     }
//! }
//! ```

pub mod clock;
pub mod config;
pub mod core;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod latest;
pub mod providers;
pub mod ranking;
pub mod session;
pub mod suggest;

// Re-export primary types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SearchConfig;
pub use core::{
    Category, MatchType, Post, RankOptions, SearchMode, SearchResponse, SearchResult, Suggestion,
    SuggestionType,
};
pub use corpus::{PostCorpus, StaticCorpus};
pub use engine::{RankerSettings, SearchRanker};
pub use error::{Result, SearchError};
pub use latest::{LatestQuery, QueryTicket};
pub use providers::CompletionProvider;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
