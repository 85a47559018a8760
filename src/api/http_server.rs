// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use super::{classify::classify_handler, ApiError, ApiServer};

#[derive(Clone)]
pub struct AppState {
    pub api_server: Arc<ApiServer>,
}

impl AppState {
    pub fn new(api_server: ApiServer) -> Self {
        Self {
            api_server: Arc::new(api_server),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // The single page
        .route("/", get(index_handler))
        // Health check
        .route("/health", get(health_handler))
        // Version info
        .route("/version", get(version_handler))
        // Category registry
        .route("/v1/categories", get(categories_handler))
        // Classification endpoint
        .route("/v1/classify", post(classify_handler))
        // Last result per session
        .route("/v1/session/:session_id", get(session_handler))
        // Display assets (logo + category images)
        .route("/assets/:name", get(asset_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(api_server: ApiServer) -> Result<(), Box<dyn std::error::Error>> {
    let addr = api_server.config().listen_addr.parse::<SocketAddr>()?;
    let state = AppState::new(api_server);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let health = state.api_server.health_check().await;
    axum::response::Json(health)
}

async fn version_handler() -> impl IntoResponse {
    axum::response::Json(crate::version::get_version_info())
}

async fn categories_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::response::Json(state.api_server.list_categories())
}

async fn session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    axum::response::Json(state.api_server.session_view(session_id).await)
}

/// Serves registered display assets. Unregistered names and files missing
/// on disk both produce 404; the page renders its own warning for that.
async fn asset_handler(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let registry = state.api_server.registry();

    let Some(path) = registry.resolve_asset(&name) else {
        return ApiErrorResponse(ApiError::NotFound(format!("unknown asset '{}'", name)))
            .into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(_) => ApiErrorResponse(ApiError::NotFound(format!(
            "asset '{}' missing at {}",
            name,
            path.display()
        )))
        .into_response(),
    }
}

// Error response wrapper
pub struct ApiErrorResponse(pub ApiError);

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let error_response = self.0.to_response(None);

        (status, axum::response::Json(error_response)).into_response()
    }
}
