use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{ProviderConfig, TimeoutConfig};
use crate::core::{Post, Suggestion};
use crate::providers::{fenced, CompletionProvider};
use crate::error::{Result, SearchError};

const PROVIDER: &str = "openai";

const SUGGESTION_PROMPT: &str = r#"You are a TV show search assistant. Generate 8-12 diverse, categorized search suggestions based on the user's input.

Return suggestions in this JSON format:
[
  {
    "text": "suggestion text",
    "type": "tv_show|actor|character|genre|topic",
    "description": "brief description",
    "confidence": 0.95,
    "metadata": {
      "year": "2023",
      "network": "HBO",
      "genre": "Drama"
    }
  }
]

Types:
- tv_show: TV series names
- actor: Real actor/actress names
- character: Fictional character names
- genre: TV genres (drama, comedy, etc.)
- topic: Discussion topics, themes, or general terms

Focus on popular and relevant TV content. Include confidence scores (0.1-1.0).
Prioritize variety across different types and ensure high-quality, relevant suggestions.
Include both current and classic TV content when appropriate."#;

const ENHANCE_PROMPT: &str = "You are a search query enhancer for a TV show discussion platform. \
Improve the user's search query to be more comprehensive and likely to find relevant TV show \
discussions, reviews, and content. Return only the enhanced query without explanation.";

const RELEVANCE_PROMPT: &str = "You rate how relevant a TV discussion post is to a search query. \
Reply with a single integer from 0 (unrelated) to 100 (exactly what the user wants) and nothing else.";

/// OpenAI-compatible chat completions client
pub struct OpenAiProvider {
    client: Client,
    config: ProviderConfig,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    /// Build a provider from config; `Ok(None)` when no API key is configured
    pub fn from_config(config: &ProviderConfig, timeouts: &TimeoutConfig) -> Result<Option<Self>> {
        let Some(api_key) = config.usable_api_key() else {
            tracing::info!("No completion provider key configured, search runs local-only");
            return Ok(None);
        };

        let client = Client::builder()
            .connect_timeout(timeouts.connect_duration())
            .timeout(timeouts.request_duration())
            .build()
            .map_err(SearchError::HttpRequest)?;

        Ok(Some(Self {
            client,
            config: config.clone(),
            api_key: api_key.to_string(),
        }))
    }

    /// Send one chat completion and return the trimmed reply text
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: String,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));

        let request = ChatRequest {
            model,
            messages: vec![
                ChatMessage { role: "system", content: system.to_string() },
                ChatMessage { role: "user", content: user },
            ],
            max_tokens,
            temperature,
        };

        let response = self.client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Provider {
                provider: PROVIDER.to_string(),
                message: format!("Request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Provider {
                provider: PROVIDER.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| SearchError::MalformedResponse(format!("Invalid JSON: {}", e)))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(SearchError::MalformedResponse("empty completion".to_string()));
        }

        Ok(content)
    }
}

/// Compact post description for the relevance prompt
fn describe_post(post: &Post) -> String {
    let mut text = format!(
        "Title: {}\nShow: {}\nCategory: {}\nAuthor: {}",
        post.title, post.show, post.category, post.author
    );
    if let Some(body) = post.body.as_deref().filter(|b| !b.is_empty()) {
        text.push_str("\nContent: ");
        text.push_str(body);
    }
    text
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn enhance_query(&self, query: &str) -> Result<String> {
        self.complete(
            &self.config.enhance_model,
            ENHANCE_PROMPT,
            format!("Enhance this search query: \"{}\"", query),
            50,
            0.3,
        )
        .await
    }

    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>> {
        let reply = self
            .complete(
                &self.config.suggestion_model,
                SUGGESTION_PROMPT,
                format!("Generate search suggestions for: \"{}\"", query),
                800,
                0.7,
            )
            .await?;

        fenced::parse_suggestions(&reply)
    }

    async fn score_relevance(&self, query: &str, post: &Post) -> Result<u8> {
        let reply = self
            .complete(
                &self.config.scoring_model,
                RELEVANCE_PROMPT,
                format!("Query: \"{}\"\n\n{}", query, describe_post(post)),
                5,
                0.0,
            )
            .await?;

        fenced::parse_relevance(&reply)
    }

    fn name(&self) -> &str {
        PROVIDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use chrono::Utc;

    #[test]
    fn test_no_key_means_no_provider() {
        let provider =
            OpenAiProvider::from_config(&ProviderConfig::default(), &TimeoutConfig::default())
                .unwrap();
        assert!(provider.is_none());
    }

    #[test]
    fn test_describe_post() {
        let post = Post::new("1", "Finale", "Ozark", Category::Review, Utc::now())
            .with_author("laundryExpert")
            .with_body("The Byrde family's story concludes.");

        let text = describe_post(&post);
        assert!(text.contains("Show: Ozark"));
        assert!(text.contains("Category: review"));
        assert!(text.ends_with("The Byrde family's story concludes."));
    }

    #[tokio::test]
    #[ignore] // Requires network access and OPENAI_API_KEY
    async fn test_live_suggestions() {
        let mut config = ProviderConfig::default();
        config.api_key = std::env::var("OPENAI_API_KEY").ok();
        let provider = OpenAiProvider::from_config(&config, &TimeoutConfig::default())
            .unwrap()
            .unwrap();

        let suggestions = provider.suggest("breaking bad").await.unwrap();
        assert!(!suggestions.is_empty());
    }
}
