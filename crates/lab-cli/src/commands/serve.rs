//! Serve command - read-only JSON API over the catalog

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use lab_config::Config;
use lab_core::{
    CatalogRecord, CategoryFilter, DifficultyFilter, FilterLabels, PaginatedResult, QueryError,
    QueryParams,
};
use lab_engine::QueryService;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

#[derive(Clone)]
struct AppState {
    service: Arc<QueryService>,
    page_size: u32,
}

/// Query string of `GET /api/examples`; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExamplesQuery {
    page: Option<u32>,
    page_size: Option<u32>,
    search: Option<String>,
    difficulty: Option<String>,
    category: Option<String>,
}

impl ExamplesQuery {
    fn into_params(self, default_page_size: u32) -> Result<QueryParams, QueryError> {
        let difficulty = match self.difficulty.as_deref() {
            Some(d) => d.parse::<DifficultyFilter>()?,
            None => DifficultyFilter::All,
        };
        let category = match self.category.as_deref() {
            Some(c) => c.parse::<CategoryFilter>()?,
            None => CategoryFilter::All,
        };

        Ok(QueryParams {
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(default_page_size),
            search: self.search,
            difficulty,
            category,
        })
    }
}

struct ApiError(QueryError);

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            QueryError::Validation(_) => StatusCode::BAD_REQUEST,
            QueryError::NotFound(_) => StatusCode::NOT_FOUND,
            QueryError::QueryFailed => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

pub async fn handle(host: &str, port: u16, config: &Config) -> Result<()> {
    let service = Arc::new(super::build_service(config)?);
    spawn_purge(service.clone(), config.ttl());
    let app = router(service, config.page_size);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Catalog API listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically drop expired pages that were never read again
fn spawn_purge(service: Arc<QueryService>, every: std::time::Duration) {
    if every.is_zero() {
        return;
    }
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let purged = service.purge_expired();
            debug!(purged, cached = service.cached_pages(), "cache purge");
        }
    });
}

fn router(service: Arc<QueryService>, page_size: u32) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_info))
        .route("/api/examples", get(api_list_examples))
        .route("/api/examples/:id", get(api_get_example))
        .route("/api/labels", get(api_labels))
        .layer(cors)
        .with_state(AppState { service, page_size })
}

/// GET / - service info and cache counters
async fn handle_info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let stats = state.service.stats();
    Json(serde_json::json!({
        "name": "lab",
        "version": env!("CARGO_PKG_VERSION"),
        "cache": {
            "hits": stats.hits,
            "misses": stats.misses,
            "cachedPages": state.service.cached_pages(),
        }
    }))
}

/// GET /api/examples - one page of the filtered catalog
async fn api_list_examples(
    State(state): State<AppState>,
    query: Result<Query<ExamplesQuery>, QueryRejection>,
) -> Result<Json<PaginatedResult>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        ApiError(QueryError::validation(rejection.body_text()))
    })?;
    let params = query.into_params(state.page_size)?;
    Ok(Json(state.service.fetch_page(params).await?))
}

/// GET /api/examples/:id
async fn api_get_example(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogRecord>, ApiError> {
    Ok(Json(state.service.get_record(&id).await?))
}

async fn api_labels() -> Json<FilterLabels> {
    Json(FilterLabels::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use lab_catalog::CatalogStore;
    use lab_engine::{PageCache, QueryServiceConfig};
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        let service = QueryService::new(
            Arc::new(CatalogStore::builtin().unwrap()),
            Arc::new(PageCache::new()),
            QueryServiceConfig {
                latency: Duration::ZERO,
                ..Default::default()
            },
        );
        router(Arc::new(service), 6)
    }

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_list_examples_defaults() {
        let (status, body) = get("/api/examples").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], 1);
        assert_eq!(body["pageSize"], 6);
        assert_eq!(body["totalItems"], 21);
        assert_eq!(body["totalPages"], 4);
        assert_eq!(body["items"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_list_examples_filters() {
        let (status, body) = get("/api/examples?category=apis&difficulty=5&search=SERVER").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalItems"], 1);
        assert_eq!(body["items"][0]["id"], "use-server");
    }

    #[tokio::test]
    async fn test_bad_filter_is_bad_request() {
        let (status, body) = get("/api/examples?difficulty=9").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, _) = get("/api/examples?page=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_query_string_is_json_bad_request() {
        let (status, body) = get("/api/examples?page=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid query"));

        let (status, body) = get("/api/examples?pageSize=-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_example() {
        let (status, body) = get("/api/examples/use-state").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["difficultyLevel"], 1);

        let (status, _) = get("/api/examples/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_labels_and_info() {
        let (status, body) = get("/api/labels").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"][0]["value"], "all");

        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "lab");
        assert_eq!(body["cache"]["cachedPages"], 0);
    }

    #[tokio::test]
    async fn test_info_counts_cached_pages() {
        let app = app();
        for uri in ["/api/examples", "/api/examples?page=2", "/"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            if uri == "/" {
                let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
                let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
                assert_eq!(body["cache"]["cachedPages"], 2);
                assert_eq!(body["cache"]["misses"], 2);
            }
        }
    }
}
