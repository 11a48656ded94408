use futures::future::{BoxFuture, FutureExt};
use futures::stream::{self, StreamExt};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::config::SearchConfig;
use crate::core::{Post, RankOptions, SearchMode, SearchResponse, Suggestion};
use crate::corpus::PostCorpus;
use crate::error::{Result, SearchError};
use crate::providers::{CompletionProvider, OpenAiProvider};
use crate::ranking::{blend, LocalScorer, SemanticCandidate};
use crate::suggest::{
    local_suggestions, pattern_suggestions, MAX_PATTERN_SUGGESTIONS, MAX_TYPEAHEAD_SUGGESTIONS,
};

/// Post search and typeahead over a fixed corpus
///
/// Runs fully locally by default. With a [`CompletionProvider`] it rewrites
/// the query, asks for suggestions and blends per-post semantic scores into
/// the local ones; every provider failure is logged and masked by the local
/// computation, so `rank` and `suggest` never fail.
pub struct SearchRanker {
    corpus: Arc<dyn PostCorpus>,
    provider: Option<Arc<dyn CompletionProvider>>,
    clock: Arc<dyn Clock>,
    scorer: LocalScorer,
    settings: RankerSettings,
}

/// Ranker tuning
#[derive(Debug, Clone)]
pub struct RankerSettings {
    /// Upper bound for any single provider call
    pub request_timeout: Duration,
    pub scoring_concurrency: usize,
    pub min_suggest_len: usize,
    pub default_limit: usize,
}

impl Default for RankerSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(5),
            scoring_concurrency: 4,
            min_suggest_len: 2,
            default_limit: 20,
        }
    }
}

impl From<&SearchConfig> for RankerSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            request_timeout: config.timeouts.request_duration(),
            scoring_concurrency: config.search.scoring_concurrency.max(1),
            min_suggest_len: config.search.min_suggest_len,
            default_limit: config.search.default_limit,
        }
    }
}

impl SearchRanker {
    /// Create a ranker; `provider = None` is local-only mode
    pub fn new(
        corpus: Arc<dyn PostCorpus>,
        provider: Option<Arc<dyn CompletionProvider>>,
    ) -> Self {
        match &provider {
            Some(p) => tracing::info!("✅ Completion provider '{}' enabled", p.name()),
            None => tracing::info!("⚠️ No completion provider, using local search only"),
        }

        Self {
            corpus,
            provider,
            clock: Arc::new(SystemClock),
            scorer: LocalScorer::new(),
            settings: RankerSettings::default(),
        }
    }

    /// Create a ranker from config, with the OpenAI provider when a key is set
    pub fn from_config(config: &SearchConfig, corpus: Arc<dyn PostCorpus>) -> Result<Self> {
        let provider = OpenAiProvider::from_config(&config.provider, &config.timeouts)?
            .map(|p| Arc::new(p) as Arc<dyn CompletionProvider>);

        Ok(Self::new(corpus, provider).with_settings(RankerSettings::from(config)))
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_settings(mut self, settings: RankerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Capability flag for the presentation layer
    pub fn mode(&self) -> SearchMode {
        if self.provider.is_some() {
            SearchMode::Remote
        } else {
            SearchMode::LocalOnly
        }
    }

    pub fn is_remote_available(&self) -> bool {
        self.mode().is_remote()
    }

    pub fn corpus(&self) -> &dyn PostCorpus {
        self.corpus.as_ref()
    }

    /// Options with the configured default limit
    pub fn default_options(&self) -> RankOptions {
        RankOptions {
            limit: self.settings.default_limit,
            ..RankOptions::default()
        }
    }

    /// Rank posts for a query and produce post-search suggestions
    pub async fn rank(&self, query: &str, options: &RankOptions) -> SearchResponse {
        let start = Instant::now();
        let query = query.trim();

        if query.is_empty() {
            return SearchResponse::empty(query, self.mode());
        }

        let now = self.clock.now();
        let mut response = match &self.provider {
            Some(provider) => self.rank_remote(provider.as_ref(), query, options, now).await,
            None => self.rank_local(query, options, now),
        };

        response.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!("🔍 {}", response.display());
        response
    }

    /// Pure local path, independent of any provider
    pub fn rank_local(&self, query: &str, options: &RankOptions, now: DateTime<Utc>) -> SearchResponse {
        let query = query.trim();
        let mut results = self.scorer.rank(query, self.corpus.posts(), options, now);
        let total_count = results.len();
        results.truncate(options.limit);

        SearchResponse {
            results,
            enhanced_query: query.to_string(),
            suggestions: pattern_suggestions(query),
            total_count,
            elapsed_ms: 0.0,
            mode: self.mode(),
        }
    }

    async fn rank_remote(
        &self,
        provider: &dyn CompletionProvider,
        query: &str,
        options: &RankOptions,
        now: DateTime<Utc>,
    ) -> SearchResponse {
        let enhanced_query = match self.guarded(provider, provider.enhance_query(query)).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => query.to_string(),
            Err(e) => {
                tracing::warn!("Query enhancement failed, using original query: {}", e);
                query.to_string()
            }
        };

        let (suggestions, candidates) = tokio::join!(
            self.remote_pattern_suggestions(provider, query, &enhanced_query),
            self.score_candidates(provider, query, &enhanced_query, options, now),
        );

        let mut results = if candidates.iter().all(|c| c.remote_score.is_none()) {
            if !candidates.is_empty() {
                tracing::warn!("⚠️ Semantic scoring unavailable, falling back to local ranking");
            }
            self.scorer.rank(query, self.corpus.posts(), options, now)
        } else {
            blend(candidates)
        };

        let total_count = results.len();
        results.truncate(options.limit);

        SearchResponse {
            results,
            enhanced_query,
            suggestions,
            total_count,
            elapsed_ms: 0.0,
            mode: self.mode(),
        }
    }

    /// Provider suggestions as plain texts, or the pattern rules when it has none
    async fn remote_pattern_suggestions(
        &self,
        provider: &dyn CompletionProvider,
        query: &str,
        enhanced_query: &str,
    ) -> Vec<String> {
        match self.guarded(provider, provider.suggest(enhanced_query)).await {
            Ok(list) => {
                let texts: Vec<String> = list
                    .into_iter()
                    .filter_map(Suggestion::into_usable)
                    .map(|s| s.text)
                    .take(MAX_PATTERN_SUGGESTIONS)
                    .collect();

                if texts.is_empty() {
                    tracing::debug!("Provider returned no suggestions, using pattern rules");
                    pattern_suggestions(query)
                } else {
                    texts
                }
            }
            Err(e) => {
                tracing::warn!("Suggestion request failed: {}", e);
                pattern_suggestions(query)
            }
        }
    }

    /// Ask the provider to score every category-matching post
    async fn score_candidates(
        &self,
        provider: &dyn CompletionProvider,
        query: &str,
        enhanced_query: &str,
        options: &RankOptions,
        now: DateTime<Utc>,
    ) -> Vec<SemanticCandidate> {
        let query_lower = query.to_lowercase();

        let pending: Vec<BoxFuture<'_, SemanticCandidate>> = self
            .corpus
            .posts()
            .iter()
            .filter(|post| LocalScorer::in_category(post, options.category))
            .map(|post| {
                self.score_candidate(provider, post, &query_lower, enhanced_query, options, now)
                    .boxed()
            })
            .collect();

        stream::iter(pending)
            .buffered(self.settings.scoring_concurrency.max(1))
            .collect()
            .await
    }

    /// Local score against the original query plus one remote relevance call
    async fn score_candidate(
        &self,
        provider: &dyn CompletionProvider,
        post: &Post,
        query_lower: &str,
        enhanced_query: &str,
        options: &RankOptions,
        now: DateTime<Utc>,
    ) -> SemanticCandidate {
        let local_score = if self.scorer.matches(post, query_lower, options.include_content) {
            self.scorer.score(post, query_lower, options.include_content, now)
        } else {
            0
        };

        let remote_score = match self
            .guarded(provider, provider.score_relevance(enhanced_query, post))
            .await
        {
            Ok(score) => Some(score),
            Err(e) => {
                tracing::warn!("Relevance scoring failed for post {}: {}", post.id, e);
                None
            }
        };

        SemanticCandidate {
            post: post.clone(),
            local_score,
            match_type: self.scorer.match_type(post, query_lower, options.include_content),
            remote_score,
        }
    }

    /// Typeahead suggestions; provider output replaces the local list when non-empty
    pub async fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let query = query.trim();
        if query.chars().count() < self.settings.min_suggest_len {
            return Vec::new();
        }

        if let Some(provider) = &self.provider {
            match self.guarded(provider.as_ref(), provider.suggest(query)).await {
                Ok(list) => {
                    let mut usable: Vec<Suggestion> =
                        list.into_iter().filter_map(Suggestion::into_usable).collect();
                    if !usable.is_empty() {
                        usable.truncate(MAX_TYPEAHEAD_SUGGESTIONS);
                        return usable;
                    }
                    tracing::debug!("Provider returned no suggestions for '{}'", query);
                }
                Err(e) => {
                    tracing::warn!("Typeahead request failed, using local suggestions: {}", e);
                }
            }
        }

        local_suggestions(query)
    }

    /// Bound a provider call by the configured timeout
    async fn guarded<T, F>(&self, provider: &dyn CompletionProvider, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.settings.request_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(SearchError::Timeout {
                provider: provider.name().to_string(),
                millis: self.settings.request_timeout.as_millis() as u64,
            }),
        }
    }
}
