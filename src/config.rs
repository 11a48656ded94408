//! Search configuration
//!
//! Loaded from an optional YAML file, then overlaid with environment
//! variables. Every field has a default, so an empty file (or no file) is a
//! valid local-only configuration.
//!
//! ```yaml
//! provider:
//!   api_key: sk-...
//!   suggestion_model: gpt-4o
//! timeouts:
//!   connect: 3.0
//!   request: 8.0
//! search:
//!   default_limit: 12
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, SearchError};

/// Environment variables checked (in order) for the provider key
pub const API_KEY_ENV_VARS: [&str; 2] = ["TVPOSTS_OPENAI_API_KEY", "OPENAI_API_KEY"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub provider: ProviderConfig,
    pub timeouts: TimeoutConfig,
    pub search: SearchDefaults,
}

/// Completion provider settings; no key means local-only search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub suggestion_model: String,
    pub enhance_model: String,
    pub scoring_model: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            suggestion_model: "gpt-4o".to_string(),
            enhance_model: "gpt-3.5-turbo".to_string(),
            scoring_model: "gpt-3.5-turbo".to_string(),
        }
    }
}

impl ProviderConfig {
    /// Key if present and not blank
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

/// Provider call bounds, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// TCP connection timeout (short: provider down = fast fail)
    pub connect: f64,

    /// Whole-call bound; expiry counts as a provider failure
    pub request: f64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect: 5.0,
            request: 5.0,
        }
    }
}

impl TimeoutConfig {
    pub fn connect_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.connect)
            .unwrap_or_else(|_| Duration::from_secs_f64(Self::default().connect))
    }

    pub fn request_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.request)
            .unwrap_or_else(|_| Duration::from_secs_f64(Self::default().request))
    }

    /// Both bounds must be finite, non-negative second counts
    pub fn validate(&self) -> Result<()> {
        for (name, secs) in [("connect", self.connect), ("request", self.request)] {
            if Duration::try_from_secs_f64(secs).is_err() {
                return Err(SearchError::Config(format!(
                    "timeouts.{} must be a finite, non-negative number of seconds, got {}",
                    name, secs
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for TimeoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connect={}s, request={}s", self.connect, self.request)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDefaults {
    pub default_limit: usize,

    /// Callers should not run post search below this many characters
    pub min_search_len: usize,

    /// `suggest` returns nothing below this many characters
    pub min_suggest_len: usize,

    /// Concurrent per-post relevance calls
    pub scoring_concurrency: usize,

    /// Upper bound for feed page requests
    pub max_page_size: usize,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            default_limit: 20,
            min_search_len: 3,
            min_suggest_len: 2,
            scoring_concurrency: 4,
            max_page_size: 50,
        }
    }
}

impl SearchConfig {
    /// Parse YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.timeouts.validate()?;
        Ok(config)
    }

    /// Read the file when it exists, apply the environment overlay
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) if p.exists() => {
                tracing::debug!("Loading config from {}", p.display());
                Self::from_yaml(&std::fs::read_to_string(p)?)?
            }
            Some(p) => {
                tracing::warn!("⚠️ Config file {} not found, using defaults", p.display());
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Fill the provider key from the environment when the file has none
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.provider.usable_api_key().is_some() {
            return;
        }

        self.provider.api_key = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|key| !key.trim().is_empty());
    }
}
