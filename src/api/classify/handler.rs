// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /v1/classify HTTP handler.

use crate::api::classify::{ClassifyRequest, ClassifyResponse};
use crate::api::http_server::{ApiErrorResponse, AppState};
use axum::{extract::State, Json};

/// Thin axum wrapper; validation, the single boundary call, rendering, and
/// session bookkeeping all live in [`crate::api::ApiServer`].
pub async fn classify_handler(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiErrorResponse> {
    state
        .api_server
        .handle_classify_request(request)
        .await
        .map(Json)
        .map_err(ApiErrorResponse)
}
