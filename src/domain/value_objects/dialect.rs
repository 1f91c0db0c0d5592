//! Input dialect value object - selects how raw items are read

use serde::{Deserialize, Serialize};

/// Notation of the raw input items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputDialect {
    /// Slash-separated paths; a trailing `/` marks a branch
    #[default]
    Path,
    /// Dotted numeric prefix plus free text, e.g. `1.2.3 Some heading`
    #[serde(alias = "dot-space")]
    #[value(name = "dotspace", alias = "dot-space")]
    DotSpace,
}

impl InputDialect {
    /// Parse a loosely written dialect name (config files, env vars)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "path" | "paths" => Some(InputDialect::Path),
            "dotspace" | "dot-space" | "dot_space" => Some(InputDialect::DotSpace),
            _ => None,
        }
    }
}

impl std::fmt::Display for InputDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputDialect::Path => write!(f, "path"),
            InputDialect::DotSpace => write!(f, "dotspace"),
        }
    }
}
