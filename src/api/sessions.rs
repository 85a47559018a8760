// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Per-session memory of the last classification.
//!
//! Sessions are isolated from each other and hold exactly one record: the
//! most recent successful classification. A failed request never touches
//! the stored record, so the page keeps showing the last good result next
//! to the error banner.

use crate::api::response_formatter::ResultView;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: Uuid,
    pub tweet: String,
    pub result: ResultView,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    records: RwLock<HashMap<Uuid, SessionRecord>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session's record with a new result.
    pub async fn record(&self, session_id: Uuid, tweet: String, result: ResultView) {
        let mut records = self.records.write().await;
        records.insert(
            session_id,
            SessionRecord {
                session_id,
                tweet,
                result,
                updated_at: Utc::now(),
            },
        );
    }

    pub async fn get(&self, session_id: Uuid) -> Option<SessionRecord> {
        self.records.read().await.get(&session_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
