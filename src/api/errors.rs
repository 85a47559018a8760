// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    pub request_id: Option<String>,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    NotFound(String),
    InvalidRequest(String),
    ValidationError {
        field: String,
        message: String,
    },
    /// The classifier boundary cannot produce a result. No partial result is
    /// shown; a new explicit submit is required.
    ModelUnavailable(String),
    /// The classifier boundary replied outside its contract.
    UpstreamContractViolation(String),
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self, request_id: Option<String>) -> ErrorResponse {
        let (error_type, message, details) = match self {
            ApiError::NotFound(msg) => ("not_found", msg.clone(), None),
            ApiError::InvalidRequest(msg) => ("invalid_request", msg.clone(), None),
            ApiError::ValidationError { field, message } => {
                let mut details = HashMap::new();
                details.insert(
                    "field".to_string(),
                    serde_json::Value::String(field.clone()),
                );
                ("validation_error", message.clone(), Some(details))
            }
            ApiError::ModelUnavailable(msg) => ("service_unavailable", msg.clone(), None),
            ApiError::UpstreamContractViolation(msg) => ("upstream_error", msg.clone(), None),
            ApiError::InternalError(msg) => ("internal_error", msg.clone(), None),
        };

        ErrorResponse {
            error_type: error_type.to_string(),
            message,
            request_id,
            details,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::InvalidRequest(_) | ApiError::ValidationError { .. } => 400,
            ApiError::ModelUnavailable(_) => 503,
            ApiError::UpstreamContractViolation(_) => 502,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::ValidationError { field, message } => {
                write!(f, "Validation error for {}: {}", field, message)
            }
            ApiError::ModelUnavailable(msg) => write!(f, "Model unavailable: {}", msg),
            ApiError::UpstreamContractViolation(msg) => {
                write!(f, "Upstream contract violation: {}", msg)
            }
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<crate::classifier::ClassifierError> for ApiError {
    fn from(err: crate::classifier::ClassifierError) -> Self {
        use crate::classifier::ClassifierError;
        match err {
            ClassifierError::ModelUnavailable(msg) => ApiError::ModelUnavailable(msg),
            ClassifierError::MalformedResponse(msg) => ApiError::UpstreamContractViolation(msg),
        }
    }
}
