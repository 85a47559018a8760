// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Client for an external prediction service speaking plain JSON.

use crate::classifier::boundary::parse_prediction;
use crate::classifier::{ClassifierError, Prediction, TweetClassifier};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

// --- Wire contract with the prediction service ---

#[derive(serde::Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

#[derive(serde::Deserialize)]
struct PredictResponse {
    category: String,
    confidence: Option<f32>,
}

/// Delegates classification to an external HTTP service.
///
/// Transport failures and non-success statuses surface as
/// [`ClassifierError::ModelUnavailable`]; replies outside the closed
/// category contract surface as [`ClassifierError::MalformedResponse`].
pub struct RemoteClassifier {
    client: Client,
    endpoint: String,
}

impl RemoteClassifier {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        // Fail configuration errors at startup, not on first predict.
        url::Url::parse(endpoint)
            .with_context(|| format!("invalid classifier endpoint '{}'", endpoint))?;

        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("remote classifier configured: endpoint={}", endpoint);

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TweetClassifier for RemoteClassifier {
    async fn predict(&self, text: &str) -> Result<Prediction, ClassifierError> {
        let response = self
            .client
            .post(format!("{}/v1/classify", self.endpoint))
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| ClassifierError::ModelUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::ModelUnavailable(format!(
                "prediction service returned {}",
                status
            )));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::MalformedResponse(e.to_string()))?;

        debug!(
            "remote classifier returned '{}' (confidence {:?})",
            body.category, body.confidence
        );
        parse_prediction(&body.category, body.confidence)
    }

    fn name(&self) -> &str {
        "remote"
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(format!("{}/health", self.endpoint))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
