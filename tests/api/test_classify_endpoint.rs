// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /v1/classify endpoint tests: the full request/response contract,
//! the empty-input path, failure surfacing, and asset-missing rendering.

use super::helpers::{
    app_with, asset_dir_without, full_asset_dir, json_request, response_json, FailingClassifier,
    FixedClassifier,
};
use axum::http::StatusCode;
use cyberbully_recognition::registry::Category;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

#[tokio::test]
async fn test_classify_returns_rendered_result() {
    let assets = full_asset_dir();
    let classifier = FixedClassifier::new(Category::Gender, Some(0.91));
    let app = app_with(classifier.clone(), assets.path());

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "You are not smart enough to have an opinion" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    assert_eq!(body["classifier"], "fixed");
    assert!(!body["requestId"].as_str().unwrap().is_empty());

    let result = &body["result"];
    assert_eq!(
        result["tweet"],
        "You are not smart enough to have an opinion"
    );
    assert_eq!(result["category"], "Gender");
    assert_eq!(result["assetUrl"], "/assets/gender");
    assert_eq!(result["confidence"]["percent"], "91.00%");
    assert_eq!(result["confidence"]["fraction"].as_f64().unwrap(), 0.91f32 as f64);
    assert!(result.get("assetWarning").is_none());

    assert_eq!(classifier.calls(), 1);
}

#[tokio::test]
async fn test_empty_text_never_calls_classifier() {
    let assets = full_asset_dir();
    let classifier = FixedClassifier::new(Category::Age, Some(0.5));
    let app = app_with(classifier.clone(), assets.path());

    for text in ["", "   ", "\n\t"] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/v1/classify", json!({ "text": text })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error_type"], "validation_error");
        assert_eq!(body["message"], "Please enter a tweet to analyze");
    }

    assert_eq!(classifier.calls(), 0);
}

#[tokio::test]
async fn test_one_submit_is_exactly_one_boundary_call() {
    let assets = full_asset_dir();
    let classifier = FixedClassifier::new(Category::Religion, Some(0.7));
    let app = app_with(classifier.clone(), assets.path());

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "some tweet" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(classifier.calls(), 1);
}

#[tokio::test]
async fn test_model_unavailable_is_503_without_crash() {
    let assets = full_asset_dir();
    let app = app_with(Arc::new(FailingClassifier), assets.path());

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "some tweet" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = response_json(response).await;
    assert_eq!(body["error_type"], "service_unavailable");
    assert_eq!(body["message"], "model file not found");
}

#[tokio::test]
async fn test_missing_asset_still_renders_label_and_confidence() {
    let assets = asset_dir_without("gender_cyberbullying.png");
    let classifier = FixedClassifier::new(Category::Gender, Some(0.91));
    let app = app_with(classifier, assets.path());

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "some tweet" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let result = &body["result"];

    assert_eq!(result["category"], "Gender");
    assert_eq!(result["confidence"]["percent"], "91.00%");
    assert!(result.get("assetUrl").is_none());
    assert!(result["assetWarning"]
        .as_str()
        .unwrap()
        .contains("not found"));
}

#[tokio::test]
async fn test_result_omits_confidence_when_boundary_gives_none() {
    let assets = full_asset_dir();
    let classifier = FixedClassifier::new(Category::NotCyberbullying, None);
    let app = app_with(classifier, assets.path());

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "have a nice day" }),
        ))
        .await
        .unwrap();

    let body = response_json(response).await;
    assert_eq!(body["result"]["category"], "Not Cyberbullying");
    assert!(body["result"].get("confidence").is_none());
}

#[tokio::test]
async fn test_oversized_text_is_rejected() {
    let assets = full_asset_dir();
    let classifier = FixedClassifier::new(Category::Age, Some(0.5));
    let app = app_with(classifier.clone(), assets.path());

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/classify",
            json!({ "text": "x".repeat(1001) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(classifier.calls(), 0);
}
