// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! The closed set of tweet classification categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six labels the classifier boundary can return.
///
/// The set is closed: every prediction carries exactly one of these, and
/// every member has a registry entry. Wire format uses the human labels
/// (`"Other Cyberbullying"`, `"Not Cyberbullying"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Age,
    Ethnicity,
    Gender,
    Religion,
    #[serde(rename = "Other Cyberbullying")]
    OtherCyberbullying,
    #[serde(rename = "Not Cyberbullying")]
    NotCyberbullying,
}

impl Category {
    /// All six members, in registry order.
    pub const ALL: [Category; 6] = [
        Category::Age,
        Category::Ethnicity,
        Category::Gender,
        Category::Religion,
        Category::OtherCyberbullying,
        Category::NotCyberbullying,
    ];

    /// Human-readable label, as shown in the UI and on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Age => "Age",
            Category::Ethnicity => "Ethnicity",
            Category::Gender => "Gender",
            Category::Religion => "Religion",
            Category::OtherCyberbullying => "Other Cyberbullying",
            Category::NotCyberbullying => "Not Cyberbullying",
        }
    }

    /// Stable slug used in asset routes.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Age => "age",
            Category::Ethnicity => "ethnicity",
            Category::Gender => "gender",
            Category::Religion => "religion",
            Category::OtherCyberbullying => "other_cyberbullying",
            Category::NotCyberbullying => "not_cyberbullying",
        }
    }

    /// Position in [`Category::ALL`]; registry storage is indexed by this.
    pub fn index(&self) -> usize {
        match self {
            Category::Age => 0,
            Category::Ethnicity => 1,
            Category::Gender => 2,
            Category::Religion => 3,
            Category::OtherCyberbullying => 4,
            Category::NotCyberbullying => 5,
        }
    }

    /// Parse a label as produced by the classifier boundary.
    ///
    /// Accepts the exact labels only (after trimming); anything else is a
    /// contract violation on the boundary's side.
    pub fn from_label(label: &str) -> Option<Category> {
        match label.trim() {
            "Age" => Some(Category::Age),
            "Ethnicity" => Some(Category::Ethnicity),
            "Gender" => Some(Category::Gender),
            "Religion" => Some(Category::Religion),
            "Other Cyberbullying" => Some(Category::OtherCyberbullying),
            "Not Cyberbullying" => Some(Category::NotCyberbullying),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
