// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ClassifyRequest type for POST /v1/classify.

use crate::api::ApiError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Warning shown when the user submits with no text.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a tweet to analyze";

/// Upper bound on submitted text. Tweets are short; this covers the
/// historical 280-character limit with ample margin.
pub const MAX_TWEET_CHARS: usize = 1000;

/// Request body for POST /v1/classify
///
/// # Fields
/// - `text`: the raw tweet text to classify
/// - `session_id`: optional session handle; when present, the session's
///   last-result record is updated on success
/// - `request_id`: optional caller-supplied id echoed in the response
///
/// # Example
/// ```json
/// {
///   "text": "What's on your mind?",
///   "sessionId": "5f2c9c1e-0c7b-4f13-9f5e-3a4d0e6a9b21"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ClassifyRequest {
    /// Validates the request before any classifier call is made.
    ///
    /// # Validation Rules
    /// 1. **text**: cannot be empty or whitespace-only (the `EmptyInput`
    ///    condition; the classifier boundary is never called for it)
    /// 2. **text length**: at most [`MAX_TWEET_CHARS`] characters
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.text.trim().is_empty() {
            return Err(ApiError::ValidationError {
                field: "text".to_string(),
                message: EMPTY_INPUT_MESSAGE.to_string(),
            });
        }

        let chars = self.text.chars().count();
        if chars > MAX_TWEET_CHARS {
            return Err(ApiError::ValidationError {
                field: "text".to_string(),
                message: format!(
                    "text cannot exceed {} characters (got {})",
                    MAX_TWEET_CHARS, chars
                ),
            });
        }

        Ok(())
    }
}
