//! Normalized items and structural records
//!
//! A `NormalizedItem` is one raw input item after dialect handling. A
//! `Record` adds the structural fields derived from its path.

/// One raw item reduced to a canonical path and a branch flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedItem {
    /// Position of the raw item in the input
    pub index: usize,
    /// Canonical path: no leading or trailing separator, no empty segments
    pub path: String,
    pub is_branch: bool,
    pub property: String,
}

/// Structural view of one item, before grouping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Input position, `None` for parents synthesised during the build
    pub source: Option<usize>,
    pub path: String,
    pub is_branch: bool,
    /// Path without its final segment; empty for top-level records
    pub parent_path: String,
    /// Final path segment
    pub name: String,
    /// 1-based depth
    pub level: usize,
    pub property: String,
}

impl Record {
    /// Grouping key: records that agree on all of these become one row
    pub fn key(&self) -> (&str, bool, &str, &str, usize) {
        (
            &self.path,
            self.is_branch,
            &self.parent_path,
            &self.name,
            self.level,
        )
    }

    pub fn is_synthetic(&self) -> bool {
        self.source.is_none()
    }
}
