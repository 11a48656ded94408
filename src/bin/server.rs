use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tvposts_search::{
    Category, Post, RankOptions, SearchConfig, SearchError, SearchMode, SearchRanker,
    SearchResponse, StaticCorpus, Suggestion,
};

#[derive(Clone)]
struct AppState {
    ranker: Arc<SearchRanker>,
    config: Arc<SearchConfig>,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    query: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    include_content: bool,
}

#[derive(Debug, Deserialize)]
struct SuggestRequest {
    query: String,
}

#[derive(Debug, Serialize)]
struct SuggestResponse {
    suggestions: Vec<Suggestion>,
    mode: SearchMode,
}

#[derive(Debug, Deserialize)]
struct PostsParams {
    #[serde(default)]
    offset: usize,
    #[serde(default = "default_page_size")]
    limit: usize,
    #[serde(default)]
    seed: u64,
}

fn default_page_size() -> usize { 10 }

#[derive(Debug, Serialize)]
struct ShowPostsResponse {
    show: String,
    slug: String,
    posts: Vec<Post>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    mode: SearchMode,
    posts: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tvposts_search_server=debug,tvposts_search=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::var("CONFIG_PATH").ok().map(PathBuf::from);
    let corpus_path = std::env::var("CORPUS_PATH").ok();
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("🚀 Starting TV Posts search server");
    tracing::info!("🔌 Port: {}", port);

    let config = SearchConfig::load(config_path.as_deref())?;
    tracing::info!("⏱️ Provider timeouts: {}", config.timeouts);

    let corpus = match corpus_path {
        Some(path) => StaticCorpus::from_json_file(path)?,
        None => StaticCorpus::seeded(),
    };

    let ranker = SearchRanker::from_config(&config, Arc::new(corpus))?;

    let state = AppState {
        ranker: Arc::new(ranker),
        config: Arc::new(config),
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/search", post(search_handler))
        .route("/v1/suggest", post(suggest_handler))
        .route("/v1/posts", get(posts_handler))
        .route("/v1/shows/:slug/posts", get(show_posts_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("📺 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: tvposts_search::VERSION.to_string(),
        mode: state.ranker.mode(),
        posts: state.ranker.corpus().len(),
    })
}

async fn search_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    tracing::debug!("Search request: {:?}", req);

    let min_len = state.config.search.min_search_len;
    if req.query.trim().chars().count() < min_len {
        return Err(AppError(SearchError::Config(format!(
            "query must be at least {} characters",
            min_len
        ))));
    }

    let category = match req.category.as_deref() {
        Some(raw) => Category::parse_filter(raw)?,
        None => None,
    };

    let options = RankOptions {
        category,
        limit: req.limit.unwrap_or(state.config.search.default_limit),
        include_content: req.include_content,
    };

    let response = state.ranker.rank(&req.query, &options).await;

    tracing::info!(
        "✅ {} → {} results ({}ms)",
        req.query,
        response.total_count,
        response.elapsed_ms
    );

    Ok(Json(response))
}

async fn suggest_handler(
    State(state): State<AppState>,
    Json(req): Json<SuggestRequest>,
) -> Json<SuggestResponse> {
    let suggestions = state.ranker.suggest(&req.query).await;

    Json(SuggestResponse {
        suggestions,
        mode: state.ranker.mode(),
    })
}

async fn posts_handler(
    State(state): State<AppState>,
    Query(params): Query<PostsParams>,
) -> Json<Vec<Post>> {
    let limit = params.limit.min(state.config.search.max_page_size);
    Json(state.ranker.corpus().page(params.offset, limit, params.seed))
}

async fn show_posts_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PostsParams>,
) -> Result<Json<ShowPostsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let corpus = state.ranker.corpus();

    let Some(show) = corpus.show_name(&slug) else {
        tracing::debug!("Unknown show slug: {}", slug);
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse { error: format!("Unknown show: {}", slug) }),
        ));
    };

    let limit = params.limit.min(state.config.search.max_page_size);
    let posts = corpus.show_page(&slug, params.offset, limit, params.seed);

    Ok(Json(ShowPostsResponse {
        show: show.to_string(),
        slug,
        posts,
    }))
}

// Error handling
struct AppError(SearchError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            SearchError::Config(message) => (StatusCode::BAD_REQUEST, message),
            SearchError::Provider { provider, message } => {
                (StatusCode::BAD_GATEWAY, format!("Provider '{}' error: {}", provider, message))
            }
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<SearchError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
