//! Output Rendering
//!
//! Text, JSON, and row-table forms of a built tree.

use std::fmt::Write as _;

use crossterm::style::{Color, Stylize};
use serde_json::{json, Value};

use crate::application::ListTree;
use crate::domain::entities::Entry;
use crate::domain::services::TreeLine;
use crate::domain::value_objects::FilterMode;
use crate::error::ListTreeResult;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON events for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

pub mod colors {
    use super::Color;

    pub const BRANCH: Color = Color::Cyan;
    pub const GLYPH: Color = Color::DarkGrey;
}

/// Join lines with newlines, coloring branch labels and glyphs when asked
pub fn render_text(lines: &[TreeLine], color: bool) -> String {
    if !color {
        return crate::domain::services::join_lines(lines);
    }

    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let label = if line.is_branch {
            line.label.as_str().with(colors::BRANCH).to_string()
        } else {
            line.label.clone()
        };
        let prefix = if line.prefix.is_empty() {
            String::new()
        } else {
            line.prefix.as_str().with(colors::GLYPH).to_string()
        };
        out.push_str(&" ".repeat(line.padding));
        if line.is_mirrored() {
            out.push_str(&label);
            out.push_str(&prefix);
        } else {
            out.push_str(&prefix);
            out.push_str(&label);
        }
    }
    out
}

/// Tab-separated row table with a header line
pub fn rows_table(entries: &[Entry]) -> String {
    let mut out = String::from("row_index\tlevel\tbranch\tpath\tparent\tname\tproperty\n");
    for entry in entries {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            entry.row_index,
            entry.level,
            entry.is_branch,
            entry.path,
            entry.parent_path,
            entry.name,
            entry.property
        );
    }
    out
}

/// The `tree` event: rendered lines plus the rows behind them
pub fn tree_event(tree: &ListTree, lines: &[TreeLine]) -> ListTreeResult<Value> {
    let rendered: Vec<String> = lines.iter().map(ToString::to_string).collect();
    Ok(json!({
        "event": "tree",
        "max_level": tree.max_level(),
        "lines": rendered,
        "rows": serde_json::to_value(tree.rows())?,
    }))
}

/// The `filter` event: the kept raw items, in input order
pub fn filter_event(keywords: &[String], mode: FilterMode, items: &[&str]) -> Value {
    let mode = match mode {
        FilterMode::Simple => "simple",
        FilterMode::Subtree => "subtree",
    };
    json!({
        "event": "filter",
        "mode": mode,
        "keywords": keywords,
        "items": items,
    })
}
