//! HTTP surface: aggregated news, article extraction, health.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use mookka_core::{Category, NewsItem, Source};
use mookka_news::{collect_news, fetch_article, Clock, FeedClient, NewsCache};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<FeedClient>,
    pub cache: Arc<NewsCache>,
    pub clock: Arc<dyn Clock>,
    pub sources: &'static [Source],
    pub fetch_timeout: Duration,
    pub max_concurrent: usize,
}

#[derive(Debug, Serialize)]
struct NewsResponse {
    news: Vec<NewsItem>,
}

#[derive(Debug, Deserialize)]
struct NewsQuery {
    /// Optional category filter; unrecognized values are ignored.
    #[serde(rename = "type")]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleRequest {
    url: String,
}

#[derive(Debug, Serialize)]
struct ArticleResponse {
    content: Vec<String>,
    url: String,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    error: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

/// The data is read-only and unauthenticated, so a wildcard origin is
/// acceptable.
fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/news", get(get_news))
        .route("/api/v1/article", post(post_article))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Serve the aggregated list, refreshing through the cache when stale.
/// The optional `type` filter applies after cache retrieval; the cache
/// always holds the full unfiltered set.
async fn get_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> impl IntoResponse {
    let items = state
        .cache
        .get_or_refresh(|| {
            collect_news(
                &state.client,
                state.sources,
                state.fetch_timeout,
                state.max_concurrent,
                state.clock.now(),
            )
        })
        .await;

    let news = match query.category.as_deref().map(str::parse::<Category>) {
        Some(Ok(category)) => items
            .into_iter()
            .filter(|item| item.category == category)
            .collect(),
        // Absent or unrecognized filter: full list.
        _ => items,
    };

    Json(NewsResponse { news })
}

async fn post_article(
    State(state): State<AppState>,
    body: Result<Json<ArticleRequest>, JsonRejection>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            format!("invalid request body: {rejection}"),
        )
    })?;

    let url = request.url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "url must be an absolute http(s) URL",
        ));
    }

    match fetch_article(&state.client, url).await {
        Ok(article) => Ok(Json(ArticleResponse {
            content: article.content,
            url: article.url,
        })),
        Err(e) => {
            tracing::warn!(url, error = %e, "article fetch failed");
            Err(ApiError::new(
                StatusCode::BAD_GATEWAY,
                "could not fetch the article page",
            ))
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
