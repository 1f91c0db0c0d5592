//! Orientation and charset value objects for tree rendering

use serde::{Deserialize, Serialize};

/// Which margin carries the trunk of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Trunk on the left, labels after the connectors
    #[default]
    Default,
    /// Trunk on the right margin, lines right-justified
    #[serde(alias = "to_right", alias = "right")]
    Mirrored,
}

impl Orientation {
    pub fn is_mirrored(&self) -> bool {
        matches!(self, Orientation::Mirrored)
    }

    /// Parse a loosely written orientation name (config files, env vars)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "default" | "left" => Some(Orientation::Default),
            "mirrored" | "right" | "to_right" | "to-right" => Some(Orientation::Mirrored),
            _ => None,
        }
    }
}

/// Glyph alphabet used for connectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Box-drawing characters
    #[default]
    Unicode,
    /// Plain ASCII fallback for terminals without Unicode
    Ascii,
}

impl Charset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "unicode" | "utf8" | "utf-8" => Some(Charset::Unicode),
            "ascii" => Some(Charset::Ascii),
            _ => None,
        }
    }
}
