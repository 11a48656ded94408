pub mod catalog;
pub mod patterns;

pub use catalog::{local_suggestions, MAX_TYPEAHEAD_SUGGESTIONS};
pub use patterns::{pattern_suggestions, MAX_PATTERN_SUGGESTIONS};
