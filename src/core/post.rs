use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Discussion category attached to every post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Discussion,
    Theory,
    Review,
    Ranking,
    Comparison,
    Analysis,
    Explanation,
    Technical,
    News,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Discussion,
        Category::Theory,
        Category::Review,
        Category::Ranking,
        Category::Comparison,
        Category::Analysis,
        Category::Explanation,
        Category::Technical,
        Category::News,
    ];

    /// Lowercase label, also the text that category matching searches
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Discussion => "discussion",
            Category::Theory => "theory",
            Category::Review => "review",
            Category::Ranking => "ranking",
            Category::Comparison => "comparison",
            Category::Analysis => "analysis",
            Category::Explanation => "explanation",
            Category::Technical => "technical",
            Category::News => "news",
        }
    }

    /// Parse a category filter where `"all"` (or blank) means no filtering
    pub fn parse_filter(raw: &str) -> Result<Option<Category>, SearchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| SearchError::Config(format!("Unknown category: {}", s)))
    }
}

/// A corpus entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// TV show the post is about
    #[serde(default, rename = "tv_show")]
    pub show: String,

    #[serde(default)]
    pub season: Option<u32>,

    #[serde(default)]
    pub episode: Option<u32>,

    /// Free text, only searched on request
    #[serde(default, rename = "content")]
    pub body: Option<String>,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub votes: u32,

    #[serde(default)]
    pub comment_count: u32,

    pub timestamp: DateTime<Utc>,

    pub category: Category,
}

impl Post {
    /// Create a post with the required fields; counts start at zero
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        show: impl Into<String>,
        category: Category,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            show: show.into(),
            season: None,
            episode: None,
            body: None,
            author: String::new(),
            votes: 0,
            comment_count: 0,
            timestamp,
            category,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_engagement(mut self, votes: u32, comment_count: u32) -> Self {
        self.votes = votes;
        self.comment_count = comment_count;
        self
    }

    pub fn with_episode(mut self, season: Option<u32>, episode: Option<u32>) -> Self {
        self.season = season;
        self.episode = episode;
        self
    }

    /// Body text, empty when absent
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Short label for logging, e.g. `Breaking Bad S5E16`
    pub fn display_name(&self) -> String {
        match (self.season, self.episode) {
            (Some(s), Some(e)) => format!("{} S{}E{}", self.show, s, e),
            (Some(s), None) => format!("{} S{}", self.show, s),
            _ => self.show.clone(),
        }
    }
}
