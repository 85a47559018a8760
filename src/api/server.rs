// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use super::classify::{ClassifyRequest, ClassifyResponse};
use super::handlers::{CategoriesResponse, CategoryView, HealthResponse, SessionResponse};
use super::response_formatter::{render_result, PLACEHOLDER_MESSAGE};
use super::sessions::SessionStore;
use super::ApiError;
use crate::classifier::TweetClassifier;
use crate::registry::{Category, CategoryRegistry};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub listen_addr: String,
    pub request_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            request_timeout: Duration::from_secs(30),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

/// Request/response core behind the HTTP surface: one classifier boundary,
/// one category registry, per-session last-result records.
pub struct ApiServer {
    config: ApiConfig,
    classifier: Arc<dyn TweetClassifier>,
    registry: Arc<CategoryRegistry>,
    sessions: SessionStore,
}

impl ApiServer {
    pub fn new(
        config: ApiConfig,
        classifier: Arc<dyn TweetClassifier>,
        registry: Arc<CategoryRegistry>,
    ) -> Self {
        Self {
            config,
            classifier,
            registry,
            sessions: SessionStore::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handle one classification request.
    ///
    /// Validation runs first; a request that fails it never reaches the
    /// classifier and never touches session state. On success the boundary
    /// is called exactly once and the session record (if a session id was
    /// supplied) is replaced. On failure the stored record is left as-is.
    pub async fn handle_classify_request(
        &self,
        request: ClassifyRequest,
    ) -> Result<ClassifyResponse, ApiError> {
        request.validate()?;

        let request_id = request
            .request_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let prediction = self.classifier.predict(&request.text).await.map_err(|e| {
            warn!("classification failed (request {}): {}", request_id, e);
            ApiError::from(e)
        })?;

        let result = render_result(&self.registry, &request.text, &prediction);
        if let Some(warning) = &result.asset_warning {
            warn!("request {}: {}", request_id, warning);
        }

        if let Some(session_id) = request.session_id {
            self.sessions
                .record(session_id, request.text.clone(), result.clone())
                .await;
        }

        info!(
            "request {} classified as '{}' by {}",
            request_id,
            result.category,
            self.classifier.name()
        );

        Ok(ClassifyResponse {
            request_id,
            session_id: request.session_id,
            classifier: self.classifier.name().to_string(),
            result,
        })
    }

    pub fn list_categories(&self) -> CategoriesResponse {
        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let info = self.registry.lookup(category);
                CategoryView {
                    category: category.label().to_string(),
                    slug: category.slug().to_string(),
                    icon: info.icon.to_string(),
                    color: info.color.to_string(),
                    asset_url: self.registry.asset_url(category),
                    asset_available: self.registry.asset_available(category),
                }
            })
            .collect();

        CategoriesResponse { categories }
    }

    pub async fn session_view(&self, session_id: Uuid) -> SessionResponse {
        match self.sessions.get(session_id).await {
            Some(record) => SessionResponse {
                session_id,
                result: Some(record.result),
                updated_at: Some(record.updated_at),
                message: None,
            },
            None => SessionResponse {
                session_id,
                result: None,
                updated_at: None,
                message: Some(PLACEHOLDER_MESSAGE.to_string()),
            },
        }
    }

    /// Aggregate health: classifier reachability plus asset presence.
    /// Degraded is reported, never fatal; the page stays up either way.
    pub async fn health_check(&self) -> HealthResponse {
        let mut issues = Vec::new();

        if !self.classifier.health_check().await {
            issues.push(format!("classifier '{}' unavailable", self.classifier.name()));
        }

        if !self.registry.logo_available() {
            issues.push("logo asset missing".to_string());
        }
        for category in Category::ALL {
            if !self.registry.asset_available(category) {
                issues.push(format!("asset for '{}' missing", category.label()));
            }
        }

        if issues.is_empty() {
            HealthResponse {
                status: "healthy".to_string(),
                issues: None,
            }
        } else {
            HealthResponse {
                status: "degraded".to_string(),
                issues: Some(issues),
            }
        }
    }
}
