// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod classify;
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod response_formatter;
pub mod server;
pub mod sessions;

pub use classify::{classify_handler, ClassifyRequest, ClassifyResponse};
pub use errors::{ApiError, ErrorResponse};
pub use handlers::{CategoriesResponse, CategoryView, HealthResponse, SessionResponse};
pub use response_formatter::{ConfidenceView, ResultView};
pub use server::{ApiConfig, ApiServer};
pub use sessions::{SessionRecord, SessionStore};
