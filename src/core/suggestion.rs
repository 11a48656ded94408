use serde::{Deserialize, Serialize};

fn default_confidence() -> f64 {
    0.5
}

/// Kind of entity a suggestion points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    TvShow,
    Actor,
    Genre,
    Topic,
    Character,
}

/// Advisory details, never used for ranking
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SuggestionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Typeahead completion or entity name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub text: String,

    #[serde(rename = "type")]
    pub kind: SuggestionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 0.0 - 1.0
    #[serde(default = "default_confidence")]
    pub confidence: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SuggestionMetadata>,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, kind: SuggestionType, confidence: f64) -> Self {
        Self {
            text: text.into(),
            kind,
            description: None,
            confidence: confidence.clamp(0.0, 1.0),
            metadata: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_metadata(mut self, metadata: SuggestionMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Usable means non-blank text; also pins confidence into [0, 1]
    pub fn into_usable(mut self) -> Option<Self> {
        if self.text.trim().is_empty() {
            return None;
        }
        self.confidence = if self.confidence.is_finite() {
            self.confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Some(self)
    }
}
