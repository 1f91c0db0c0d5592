//! Build and query policies

use serde::{Deserialize, Serialize};

/// What to do when two raw items collapse into the same tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Merge into one row, concatenating properties in input order
    #[default]
    Merge,
    /// Fail with `DuplicateEntry`
    Reject,
}

impl DuplicatePolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "merge" => Some(DuplicatePolicy::Merge),
            "reject" | "error" => Some(DuplicatePolicy::Reject),
            _ => None,
        }
    }
}

/// Output mode of the keyword filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Only the items that contain a keyword
    #[default]
    Simple,
    /// Matched items plus the items that make up their ancestor branches
    Subtree,
}
