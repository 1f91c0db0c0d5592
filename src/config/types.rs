//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::{BuildOptions, RenderOptions};
use crate::domain::services::assembler::DEFAULT_PROPERTY_SEPARATOR;
use crate::domain::services::normalizer::{DEFAULT_PAD_WIDTH, DEFAULT_PSEUDO_MARKER};
use crate::domain::value_objects::{Charset, DuplicatePolicy, InputDialect, Orientation};
use crate::error::ListTreeResult;

use super::loader::{self, ConfigWarning};

/// Input configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub dialect: InputDialect,

    #[serde(default = "default_pad_width")]
    pub pad_width: usize,

    #[serde(default = "default_pseudo_marker")]
    pub pseudo_marker: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dialect: InputDialect::default(),
            pad_width: default_pad_width(),
            pseudo_marker: default_pseudo_marker(),
        }
    }
}

fn default_pad_width() -> usize {
    DEFAULT_PAD_WIDTH
}

fn default_pseudo_marker() -> String {
    DEFAULT_PSEUDO_MARKER.to_string()
}

/// Build configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuildConfig {
    #[serde(default)]
    pub duplicates: DuplicatePolicy,

    #[serde(default)]
    pub infer_parents: bool,
}

/// Render configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub orientation: Orientation,

    #[serde(default)]
    pub charset: Charset,

    #[serde(default = "default_true")]
    pub show_property: bool,

    #[serde(default = "default_property_separator")]
    pub property_separator: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_suffix: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            charset: Charset::default(),
            show_property: true,
            property_separator: default_property_separator(),
            branch_suffix: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_property_separator() -> String {
    DEFAULT_PROPERTY_SEPARATOR.to_string()
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ListTreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ListTreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the working directory, the user config, or defaults
    pub fn discover(explicit: Option<&Path>) -> ListTreeResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (LISTTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            dialect: self.input.dialect,
            pad_width: self.input.pad_width,
            pseudo_marker: self.input.pseudo_marker.clone(),
            duplicates: self.build.duplicates,
            infer_parents: self.build.infer_parents,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            orientation: self.render.orientation,
            charset: self.render.charset,
            show_property: self.render.show_property,
            property_separator: self.render.property_separator.clone(),
            branch_suffix: self.render.branch_suffix.clone(),
        }
    }
}
