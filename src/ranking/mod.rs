pub mod local;
pub mod semantic;

pub use local::LocalScorer;
pub use semantic::{blend, blend_score, effective_score, SemanticCandidate};
