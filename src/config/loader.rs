//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Charset, DuplicatePolicy, InputDialect, Orientation};
use crate::error::{ListTreeError, ListTreeResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "listtree.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ListTreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used in messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> ListTreeResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ListTreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration
///
/// An explicit file must load. Otherwise `./listtree.toml` and then the user
/// config (`<config dir>/listtree/config.toml`) are tried; a discovered
/// file that fails to parse is logged and skipped. Environment overrides
/// are applied last.
pub fn discover(explicit: Option<&Path>) -> ListTreeResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    for candidate in candidate_paths() {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                log::debug!("loaded config from {}", candidate.display());
                return Ok((with_env_overrides(config), warnings));
            }
            Err(err) => log::warn!("ignoring {}: {}", candidate.display(), err),
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("listtree").join("config.toml"));
    }
    paths
}

/// Apply environment variable overrides (LISTTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(value) = get_env("LISTTREE_DIALECT") {
        match InputDialect::from_name(&value) {
            Some(dialect) => config.input.dialect = dialect,
            None => log::warn!("ignoring LISTTREE_DIALECT={}", value),
        }
    }

    if let Some(value) = get_env("LISTTREE_ORIENTATION") {
        match Orientation::from_name(&value) {
            Some(orientation) => config.render.orientation = orientation,
            None => log::warn!("ignoring LISTTREE_ORIENTATION={}", value),
        }
    }

    if let Some(value) = get_env("LISTTREE_CHARSET") {
        match Charset::from_name(&value) {
            Some(charset) => config.render.charset = charset,
            None => log::warn!("ignoring LISTTREE_CHARSET={}", value),
        }
    }

    if let Some(value) = get_env("LISTTREE_DUPLICATES") {
        match DuplicatePolicy::from_name(&value) {
            Some(policy) => config.build.duplicates = policy,
            None => log::warn!("ignoring LISTTREE_DUPLICATES={}", value),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "input",
        "dialect",
        "pad_width",
        "pseudo_marker",
        "build",
        "duplicates",
        "infer_parents",
        "render",
        "orientation",
        "charset",
        "show_property",
        "property_separator",
        "branch_suffix",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
