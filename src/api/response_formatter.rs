// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Shapes a prediction into the payload the page renders: echoed tweet,
//! label, display asset (or a warning when the file is missing), and the
//! confidence indicator.

use crate::classifier::Prediction;
use crate::registry::CategoryRegistry;
use serde::{Deserialize, Serialize};

/// Message shown in the result region before any prediction exists.
pub const PLACEHOLDER_MESSAGE: &str =
    "Please enter a tweet in the text box above to see a prediction.";

/// Confidence rendered two ways: a fraction for the proportional bar and a
/// fixed two-decimal percentage text (e.g. `91.00%`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceView {
    pub fraction: f32,
    pub percent: String,
}

/// Everything the result region needs for one prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    /// The submitted text, echoed verbatim.
    pub tweet: String,
    pub category: String,
    pub slug: String,
    pub icon: String,
    pub color: String,
    pub banner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<ConfidenceView>,
}

/// `91.00%`-style text for a confidence in [0, 1].
pub fn format_confidence_percent(confidence: f32) -> String {
    format!("{:.2}%", confidence * 100.0)
}

pub fn confidence_view(confidence: f32) -> ConfidenceView {
    ConfidenceView {
        fraction: confidence,
        percent: format_confidence_percent(confidence),
    }
}

/// Build the display payload for a prediction.
///
/// Asset presence is checked here, at render time: a missing file swaps the
/// image for a warning while label and confidence still render.
pub fn render_result(
    registry: &CategoryRegistry,
    tweet: &str,
    prediction: &Prediction,
) -> ResultView {
    let info = registry.lookup(prediction.category);
    let label = prediction.category.label();

    let (asset_url, asset_warning) = if registry.asset_available(prediction.category) {
        (Some(registry.asset_url(prediction.category)), None)
    } else {
        let path = registry.asset_path(prediction.category);
        (
            None,
            Some(format!("Result image not found at '{}'.", path.display())),
        )
    };

    ResultView {
        tweet: tweet.to_string(),
        category: label.to_string(),
        slug: prediction.category.slug().to_string(),
        icon: info.icon.to_string(),
        color: info.color.to_string(),
        banner: format!("The tweet is classified as: {}", label),
        asset_url,
        asset_warning,
        confidence: prediction.confidence.map(confidence_view),
    }
}
