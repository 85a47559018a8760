// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /v1/session/{id} endpoint tests: placeholder state, last-result
//! bookkeeping, and the stale-result policy on classifier failure.

use super::helpers::{
    app_with, full_asset_dir, get_request, json_request, response_json, FailingClassifier,
    FixedClassifier,
};
use async_trait::async_trait;
use axum::http::StatusCode;
use cyberbully_recognition::classifier::{ClassifierError, Prediction, TweetClassifier};
use cyberbully_recognition::registry::Category;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use uuid::Uuid;

/// Succeeds once, then reports the model as gone.
struct SecondCallFails {
    calls: AtomicUsize,
}

#[async_trait]
impl TweetClassifier for SecondCallFails {
    async fn predict(&self, _text: &str) -> Result<Prediction, ClassifierError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Prediction::new(Category::Gender, Some(0.91))
        } else {
            Err(ClassifierError::ModelUnavailable("model went away".into()))
        }
    }

    fn name(&self) -> &str {
        "flaky"
    }
}

#[tokio::test]
async fn test_unknown_session_gets_placeholder() {
    let assets = full_asset_dir();
    let classifier = FixedClassifier::new(Category::Age, Some(0.5));
    let app = app_with(classifier, assets.path());

    let session_id = Uuid::new_v4();
    let response = app
        .oneshot(get_request(&format!("/v1/session/{}", session_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["sessionId"], session_id.to_string());
    assert!(body["result"].is_null());
    assert_eq!(
        body["message"],
        "Please enter a tweet in the text box above to see a prediction."
    );
}

#[tokio::test]
async fn test_classify_then_session_returns_last_result() {
    let assets = full_asset_dir();
    let classifier = FixedClassifier::new(Category::Ethnicity, Some(0.66));
    let app = app_with(classifier, assets.path());

    let session_id = Uuid::new_v4();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "some tweet", "sessionId": session_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_request(&format!("/v1/session/{}", session_id)))
        .await
        .unwrap();
    let body = response_json(response).await;

    assert_eq!(body["result"]["category"], "Ethnicity");
    assert_eq!(body["result"]["tweet"], "some tweet");
    assert!(!body["updatedAt"].as_str().unwrap().is_empty());
    assert!(body.get("message").is_none());
}

// The failure policy: a ModelUnavailable outcome leaves the previously
// stored record visible, so the page can keep the last good result next to
// the error banner.
#[tokio::test]
async fn test_model_unavailable_keeps_previous_record() {
    let assets = full_asset_dir();
    let classifier = Arc::new(SecondCallFails {
        calls: AtomicUsize::new(0),
    });
    let app = app_with(classifier, assets.path());

    let session_id = Uuid::new_v4();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "first tweet", "sessionId": session_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "second tweet", "sessionId": session_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = app
        .oneshot(get_request(&format!("/v1/session/{}", session_id)))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["result"]["tweet"], "first tweet");
    assert_eq!(body["result"]["category"], "Gender");
}

// Empty-input rejection must leave the stored record untouched as well.
#[tokio::test]
async fn test_empty_input_keeps_previous_record() {
    let assets = full_asset_dir();
    let classifier = FixedClassifier::new(Category::Gender, Some(0.91));
    let app = app_with(classifier, assets.path());

    let session_id = Uuid::new_v4();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "first tweet", "sessionId": session_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "", "sessionId": session_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(get_request(&format!("/v1/session/{}", session_id)))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["result"]["tweet"], "first tweet");
}

#[tokio::test]
async fn test_model_failure_leaves_session_empty_not_partial() {
    let assets = full_asset_dir();
    let app = app_with(Arc::new(FailingClassifier), assets.path());

    let session_id = Uuid::new_v4();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "some tweet", "sessionId": session_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // No partial result was stored.
    let response = app
        .oneshot(get_request(&format!("/v1/session/{}", session_id)))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert!(body["result"].is_null());
}
