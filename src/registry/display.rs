// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Static category → display-asset registry.
//!
//! One entry per [`Category`], built at startup and never mutated. Lookup is
//! total by construction (fixed array indexed by the category discriminant);
//! a physically missing asset file is a separate, per-render condition and
//! never a lookup failure.

use crate::registry::Category;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Display configuration for a single category.
#[derive(Debug, Clone)]
pub struct CategoryDisplayInfo {
    pub category: Category,
    /// File name under the assets directory.
    pub asset_file: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// A problem found while verifying assets on disk.
#[derive(Debug, Clone)]
pub struct AssetIssue {
    pub name: String,
    pub path: PathBuf,
    pub reason: String,
}

const LOGO_FILE: &str = "logo.png";

/// Process-wide constant mapping from category to display asset.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    assets_dir: PathBuf,
    entries: [CategoryDisplayInfo; 6],
}

impl CategoryRegistry {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        let entries = [
            CategoryDisplayInfo {
                category: Category::Age,
                asset_file: "age_cyberbullying.png",
                icon: "🧒",
                color: "#e4572e",
            },
            CategoryDisplayInfo {
                category: Category::Ethnicity,
                asset_file: "ethnicity_cyberbullying.png",
                icon: "🌍",
                color: "#17bebb",
            },
            CategoryDisplayInfo {
                category: Category::Gender,
                asset_file: "gender_cyberbullying.png",
                icon: "⚧",
                color: "#76448a",
            },
            CategoryDisplayInfo {
                category: Category::Religion,
                asset_file: "religion_cyberbullying.png",
                icon: "🛐",
                color: "#2e6fe4",
            },
            CategoryDisplayInfo {
                category: Category::OtherCyberbullying,
                asset_file: "other_cyberbullying.png",
                icon: "⚠️",
                color: "#ffc914",
            },
            CategoryDisplayInfo {
                category: Category::NotCyberbullying,
                asset_file: "not_cyberbullying.png",
                icon: "✅",
                color: "#2ea44f",
            },
        ];

        Self {
            assets_dir: assets_dir.into(),
            entries,
        }
    }

    /// Total lookup over the closed category set.
    pub fn lookup(&self, category: Category) -> &CategoryDisplayInfo {
        let entry = &self.entries[category.index()];
        debug_assert_eq!(entry.category, category);
        entry
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// On-disk path of a category's display asset.
    pub fn asset_path(&self, category: Category) -> PathBuf {
        self.assets_dir.join(self.lookup(category).asset_file)
    }

    pub fn logo_path(&self) -> PathBuf {
        self.assets_dir.join(LOGO_FILE)
    }

    /// Whether the asset file is present at this moment. Checked per render;
    /// absence is reported as a warning, not a failure.
    pub fn asset_available(&self, category: Category) -> bool {
        self.asset_path(category).is_file()
    }

    pub fn logo_available(&self) -> bool {
        self.logo_path().is_file()
    }

    /// Public route path for a category's asset.
    pub fn asset_url(&self, category: Category) -> String {
        format!("/assets/{}", category.slug())
    }

    /// Resolve a route name (`logo` or a category slug) to a file path.
    /// Only registered names resolve; anything else is a 404 at the route.
    pub fn resolve_asset(&self, name: &str) -> Option<PathBuf> {
        if name == "logo" {
            return Some(self.logo_path());
        }
        Category::ALL
            .iter()
            .find(|c| c.slug() == name)
            .map(|c| self.asset_path(*c))
    }

    /// Verify every registered asset (logo included) by decoding it.
    ///
    /// Runs once at startup. Missing or undecodable files are logged and
    /// returned; the service keeps running and renders a warning in place of
    /// the image instead.
    pub fn verify_assets(&self) -> Vec<AssetIssue> {
        let mut issues = Vec::new();

        let mut check = |name: String, path: PathBuf| {
            if !path.is_file() {
                issues.push(AssetIssue {
                    name,
                    path,
                    reason: "file not found".to_string(),
                });
                return;
            }
            if let Err(e) = image::open(&path) {
                issues.push(AssetIssue {
                    name,
                    path,
                    reason: format!("failed to decode: {}", e),
                });
            }
        };

        check("logo".to_string(), self.logo_path());
        for category in Category::ALL {
            check(category.slug().to_string(), self.asset_path(category));
        }

        for issue in &issues {
            warn!(
                "display asset '{}' unavailable at {}: {}",
                issue.name,
                issue.path.display(),
                issue.reason
            );
        }

        issues
    }
}
