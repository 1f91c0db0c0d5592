//! Configuration module for ListTree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LISTTREE_*)
//! 3. `--config <file>`
//! 4. Working directory config (./listtree.toml)
//! 5. User config (~/.config/listtree/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, LOCAL_CONFIG_FILE};
pub use types::{BuildConfig, ColorMode, Config, InputConfig, OutputConfig, RenderConfig};
