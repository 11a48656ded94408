pub mod post;
pub mod search_response;
pub mod suggestion;

pub use post::{Category, Post};
pub use search_response::{MatchType, RankOptions, SearchMode, SearchResponse, SearchResult};
pub use suggestion::{Suggestion, SuggestionMetadata, SuggestionType};
