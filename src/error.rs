use thiserror::Error;

/// Main error type for the search core
#[derive(Error, Debug)]
pub enum SearchError {
    /// Session store database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Completion provider errors (transport or non-success status)
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// Provider answered, but not with something we can use
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Provider call exceeded the configured bound
    #[error("Provider '{provider}' timed out after {millis}ms")]
    Timeout { provider: String, millis: u64 },

    /// Invalid configuration or corpus data
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session store errors
    #[error("Session store error: {0}")]
    Store(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for SearchError {
    fn from(s: String) -> Self {
        SearchError::Other(s)
    }
}

impl From<&str> for SearchError {
    fn from(s: &str) -> Self {
        SearchError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SearchError>;
