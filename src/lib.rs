// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod classifier;
pub mod config;
pub mod registry;
pub mod version;

// Re-export main types
pub use api::{ApiConfig, ApiServer, ClassifyRequest, ClassifyResponse};
pub use classifier::{
    ClassifierError, MockClassifier, Prediction, RemoteClassifier, TweetClassifier,
};
pub use config::{AppConfig, ClassifierMode};
pub use registry::{Category, CategoryDisplayInfo, CategoryRegistry};
