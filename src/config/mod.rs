// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Service configuration: environment variables with defaults, optionally
//! overridden by CLI flags in `main`.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Which classifier boundary implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierMode {
    /// Random demo predictions; no external service required.
    Mock,
    /// Delegate to an external prediction service over HTTP.
    Remote,
}

impl FromStr for ClassifierMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(ClassifierMode::Mock),
            "remote" => Ok(ClassifierMode::Remote),
            other => bail!("unknown classifier mode '{}' (expected 'mock' or 'remote')", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: String,
    pub assets_dir: PathBuf,
    pub classifier_mode: ClassifierMode,
    /// Required when `classifier_mode` is `Remote`.
    pub classifier_endpoint: Option<String>,
    pub classifier_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            assets_dir: PathBuf::from("./assets/images"),
            classifier_mode: ClassifierMode::Mock,
            classifier_endpoint: None,
            classifier_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// Variables: `LISTEN_ADDR`, `ASSETS_DIR`, `CLASSIFIER_MODE`,
    /// `CLASSIFIER_ENDPOINT`, `CLASSIFIER_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr);
        let assets_dir = env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);
        let classifier_mode = match env::var("CLASSIFIER_MODE") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.classifier_mode,
        };
        let classifier_endpoint = env::var("CLASSIFIER_ENDPOINT").ok();
        let classifier_timeout = env::var("CLASSIFIER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.classifier_timeout);

        let config = Self {
            listen_addr,
            assets_dir,
            classifier_mode,
            classifier_endpoint,
            classifier_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.listen_addr
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("invalid listen address '{}'", self.listen_addr))?;

        if self.classifier_mode == ClassifierMode::Remote {
            let endpoint = self
                .classifier_endpoint
                .as_deref()
                .context("CLASSIFIER_ENDPOINT is required in remote mode")?;
            url::Url::parse(endpoint)
                .with_context(|| format!("invalid classifier endpoint '{}'", endpoint))?;
        }

        Ok(())
    }
}
