//! Tree assembly
//!
//! Joins each row's glyph columns with its label, in row order.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::domain::entities::Entry;
use crate::domain::value_objects::{GlyphSet, InputDialect, Orientation};

use super::prefix::PrefixGrid;

/// Default text placed between a name and its property
pub const DEFAULT_PROPERTY_SEPARATOR: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOptions {
    pub dialect: InputDialect,
    pub orientation: Orientation,
    /// Append the property to path-dialect labels
    pub show_property: bool,
    pub property_separator: String,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            dialect: InputDialect::default(),
            orientation: Orientation::default(),
            show_property: true,
            property_separator: DEFAULT_PROPERTY_SEPARATOR.to_string(),
        }
    }
}

/// One printable line of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub row_index: usize,
    pub is_branch: bool,
    /// Glyph columns, already ordered for the orientation
    pub prefix: String,
    pub label: String,
    /// Leading spaces added to right-justify mirrored lines
    pub padding: usize,
    mirrored: bool,
}

impl TreeLine {
    /// Display width in terminal columns, padding included
    pub fn width(&self) -> usize {
        self.padding + self.prefix.width() + self.label.width()
    }

    /// Whether the label comes before the glyphs
    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:pad$}", "", pad = self.padding)?;
        if self.mirrored {
            write!(f, "{}{}", self.label, self.prefix)
        } else {
            write!(f, "{}{}", self.prefix, self.label)
        }
    }
}

/// Build the printable lines for entries sorted by row index
///
/// When no entry is a branch the listing is flat, and each row shows its
/// full path instead of its name.
pub fn assemble_lines(
    entries: &[Entry],
    grid: &PrefixGrid,
    glyphs: &GlyphSet,
    options: &AssembleOptions,
) -> Vec<TreeLine> {
    let flat = !entries.iter().any(|e| e.is_branch);
    let mirrored = options.orientation.is_mirrored();

    let mut lines: Vec<TreeLine> = entries
        .iter()
        .map(|entry| {
            let columns = grid.row(entry.row_index);
            let prefix: String = if flat {
                String::new()
            } else if mirrored {
                columns.iter().rev().map(|g| glyphs.get(*g)).collect()
            } else {
                columns.iter().map(|g| glyphs.get(*g)).collect()
            };
            TreeLine {
                row_index: entry.row_index,
                is_branch: entry.is_branch,
                prefix,
                label: label_for(entry, flat, glyphs, options),
                padding: 0,
                mirrored,
            }
        })
        .collect();

    if mirrored {
        let widest = lines.iter().map(TreeLine::width).max().unwrap_or(0);
        for line in lines.iter_mut() {
            line.padding = widest - line.width();
        }
    }

    lines
}

/// The label text is the same in both orientations; only the glyph columns
/// move to the other side of it when mirrored.
fn label_for(entry: &Entry, flat: bool, glyphs: &GlyphSet, options: &AssembleOptions) -> String {
    match options.dialect {
        InputDialect::DotSpace if entry.property.is_empty() => dotted(&entry.path),
        InputDialect::DotSpace => entry.property.clone(),
        InputDialect::Path => {
            let mut label = if flat {
                entry.path.clone()
            } else {
                entry.name.clone()
            };
            if entry.is_branch {
                label.push_str(glyphs.branch_suffix());
            }
            if options.show_property && !entry.property.is_empty() {
                label.push_str(&options.property_separator);
                label.push_str(&entry.property);
            }
            label
        }
    }
}

/// Render a zero-padded dot-space path back as `1.2.3`
fn dotted(path: &str) -> String {
    path.split('/')
        .map(|n| {
            let trimmed = n.trim_start_matches('0');
            if trimmed.is_empty() {
                "0"
            } else {
                trimmed
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Join lines for display
pub fn join_lines(lines: &[TreeLine]) -> String {
    lines
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
