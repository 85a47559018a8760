// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Classifier boundary: the contract between this layer and the prediction
//! model. The model itself is opaque: implementations delegate to an
//! external service or to the demo mock, never to inline inference code.

use crate::registry::Category;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output of one classification request.
///
/// Immutable after creation; the next request for the same session replaces
/// it. Confidence, when present, is guaranteed to be in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl Prediction {
    /// Build a prediction, enforcing the boundary guarantee on confidence.
    pub fn new(category: Category, confidence: Option<f32>) -> Result<Self, ClassifierError> {
        if let Some(c) = confidence {
            if !(0.0..=1.0).contains(&c) || c.is_nan() {
                return Err(ClassifierError::MalformedResponse(format!(
                    "confidence {} outside [0, 1]",
                    c
                )));
            }
        }
        Ok(Self {
            category,
            confidence,
        })
    }
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The underlying model cannot produce a result right now. Surfaced to
    /// the user as an error; recoverable by a new explicit submit.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// The boundary returned something outside its contract (unknown label,
    /// confidence out of range, unparseable body).
    #[error("malformed classifier response: {0}")]
    MalformedResponse(String),
}

/// The external prediction function.
///
/// Callers validate non-emptiness before calling; implementations return
/// exactly one category from the closed set. One call per submit, no
/// retries, no debouncing.
#[async_trait]
pub trait TweetClassifier: Send + Sync {
    async fn predict(&self, text: &str) -> Result<Prediction, ClassifierError>;

    /// Implementation name, reported in responses and health checks.
    fn name(&self) -> &str;

    /// Whether the boundary expects `predict` to succeed right now.
    async fn health_check(&self) -> bool {
        true
    }
}

/// Interpret a raw (label, confidence) pair from a boundary implementation.
pub fn parse_prediction(
    label: &str,
    confidence: Option<f32>,
) -> Result<Prediction, ClassifierError> {
    let category = Category::from_label(label).ok_or_else(|| {
        ClassifierError::MalformedResponse(format!("unknown category label '{}'", label))
    })?;
    Prediction::new(category, confidence)
}
