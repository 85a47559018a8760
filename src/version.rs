// Version information for the Cyberbullying Recognition service

/// Full version string
pub const VERSION: &str = "v0.1.0-2025-08-07";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-07";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "six-category-classification",
    "mock-classifier",
    "remote-classifier",
    "confidence-indicator",
    "session-last-result",
    "asset-verification",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Cyberbullying Recognition {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}
