// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ClassifyResponse type for POST /v1/classify.

use crate::api::response_formatter::ResultView;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response body for POST /v1/classify
///
/// # Example
/// ```json
/// {
///   "requestId": "1d0c6e83-8d67-4f0e-a5a2-bd3f9f21c0a4",
///   "sessionId": "5f2c9c1e-0c7b-4f13-9f5e-3a4d0e6a9b21",
///   "classifier": "mock",
///   "result": {
///     "tweet": "You are not smart enough to have an opinion",
///     "category": "Gender",
///     "slug": "gender",
///     "banner": "The tweet is classified as: Gender",
///     "assetUrl": "/assets/gender",
///     "confidence": { "fraction": 0.91, "percent": "91.00%" }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub request_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,

    /// Which boundary implementation served the prediction.
    pub classifier: String,

    pub result: ResultView,
}
