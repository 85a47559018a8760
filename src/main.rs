// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use cyberbully_recognition::{
    api::{http_server, ApiConfig, ApiServer},
    classifier::{MockClassifier, RemoteClassifier, TweetClassifier},
    config::{AppConfig, ClassifierMode},
    registry::CategoryRegistry,
    version,
};
use std::{env, path::PathBuf, sync::Arc, time::Duration};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "cyberbully-recognition",
    about = "Cyberbullying tweet recognition demo service",
    version = version::VERSION_NUMBER
)]
struct Cli {
    /// Address to serve the app on
    #[arg(long, env = "LISTEN_ADDR")]
    listen_addr: Option<String>,

    /// Directory holding the logo and category images
    #[arg(long, env = "ASSETS_DIR")]
    assets_dir: Option<PathBuf>,

    /// Classifier boundary implementation: 'mock' or 'remote'
    #[arg(long, env = "CLASSIFIER_MODE")]
    classifier_mode: Option<String>,

    /// Prediction service URL (required with --classifier-mode remote)
    #[arg(long, env = "CLASSIFIER_ENDPOINT")]
    classifier_endpoint: Option<String>,

    /// Per-request classifier timeout in seconds
    #[arg(long, env = "CLASSIFIER_TIMEOUT_SECS")]
    classifier_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("🛡️  {}", version::get_version_string());

    let defaults = AppConfig::default();
    let config = AppConfig {
        listen_addr: cli.listen_addr.unwrap_or(defaults.listen_addr),
        assets_dir: cli.assets_dir.unwrap_or(defaults.assets_dir),
        classifier_mode: match cli.classifier_mode {
            Some(mode) => mode.parse()?,
            None => defaults.classifier_mode,
        },
        classifier_endpoint: cli.classifier_endpoint,
        classifier_timeout: cli
            .classifier_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.classifier_timeout),
    };
    config.validate()?;

    let registry = Arc::new(CategoryRegistry::new(&config.assets_dir));
    let issues = registry.verify_assets();
    if issues.is_empty() {
        info!("all display assets verified in {}", config.assets_dir.display());
    } else {
        warn!(
            "{} display asset(s) unavailable; the page will render warnings in their place",
            issues.len()
        );
    }

    let classifier: Arc<dyn TweetClassifier> = match config.classifier_mode {
        ClassifierMode::Mock => {
            info!("using mock classifier (demo mode)");
            Arc::new(MockClassifier::new())
        }
        ClassifierMode::Remote => {
            let endpoint = config
                .classifier_endpoint
                .as_deref()
                .context("CLASSIFIER_ENDPOINT is required in remote mode")?;
            let remote = RemoteClassifier::new(endpoint, config.classifier_timeout)?;
            if !remote.health_check().await {
                warn!("prediction service at {} is not reachable yet", endpoint);
            }
            Arc::new(remote)
        }
    };

    let api_config = ApiConfig {
        listen_addr: config.listen_addr.clone(),
        request_timeout: config.classifier_timeout,
        ..ApiConfig::default()
    };
    let api_server = ApiServer::new(api_config, classifier, registry);

    http_server::start_server(api_server)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
