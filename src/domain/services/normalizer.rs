//! Path normalization
//!
//! Turns raw items into canonical slash-separated paths. Two dialects are
//! accepted; the dialect is chosen once by the caller and never re-checked
//! later in the pipeline.

use std::collections::HashSet;

use crate::domain::entities::NormalizedItem;
use crate::domain::value_objects::InputDialect;
use crate::error::{ListTreeError, ListTreeResult};

/// Path segment separator
pub const SEPARATOR: char = '/';

/// Default zero-pad width for dot-space segments
pub const DEFAULT_PAD_WIDTH: usize = 3;

/// Default marker that hides the numeric prefix from a dot-space label
pub const DEFAULT_PSEUDO_MARKER: &str = ".pseudo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub dialect: InputDialect,
    /// Minimum width numeric segments are padded to
    pub pad_width: usize,
    pub pseudo_marker: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            dialect: InputDialect::default(),
            pad_width: DEFAULT_PAD_WIDTH,
            pseudo_marker: DEFAULT_PSEUDO_MARKER.to_string(),
        }
    }
}

/// Normalize every raw item
///
/// `labels`, when given, must have one entry per item. In the path dialect
/// the label becomes the item's property; in the dot-space dialect a
/// non-empty label replaces the label derived from the line.
pub fn normalize_items(
    items: &[String],
    labels: Option<&[String]>,
    options: &NormalizeOptions,
) -> ListTreeResult<Vec<NormalizedItem>> {
    if items.is_empty() {
        log::warn!("nonempty list required");
        return Err(ListTreeError::empty_input());
    }

    if let Some(labels) = labels {
        if labels.len() != items.len() {
            log::warn!(
                "label count {} does not match item count {}",
                labels.len(),
                items.len()
            );
            return Err(ListTreeError::InvalidInput {
                reason: format!(
                    "expected {} labels, got {}",
                    items.len(),
                    labels.len()
                ),
            });
        }
    }

    let mut normalized = match options.dialect {
        InputDialect::Path => normalize_paths(items, labels)?,
        InputDialect::DotSpace => normalize_dot_space(items, labels, options)?,
    };

    promote_branches(&mut normalized);
    log::debug!("normalized {} items", normalized.len());
    Ok(normalized)
}

/// Split a path into its non-empty segments
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Canonical form: single leading separator dropped, empty segments removed
pub fn canonical_path(raw: &str) -> String {
    let stripped = raw.strip_prefix(SEPARATOR).unwrap_or(raw);
    segments(stripped).collect::<Vec<_>>().join("/")
}

fn normalize_paths(
    items: &[String],
    labels: Option<&[String]>,
) -> ListTreeResult<Vec<NormalizedItem>> {
    items
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let path = canonical_path(raw);
            if path.is_empty() {
                return Err(ListTreeError::InvalidInput {
                    reason: format!("item {} ('{}') has no path segments", index, raw),
                });
            }
            Ok(NormalizedItem {
                index,
                path,
                is_branch: raw.ends_with(SEPARATOR),
                property: labels
                    .map(|l| l[index].clone())
                    .unwrap_or_default(),
            })
        })
        .collect()
}

/// A dot-space line split into its validated numeric prefix and label
struct DotSpaceLine<'a> {
    numbers: Vec<&'a str>,
    label: String,
}

fn parse_dot_space_line<'a>(
    line: &'a str,
    line_number: usize,
    marker: &str,
) -> ListTreeResult<DotSpaceLine<'a>> {
    let trimmed = line.trim_start();
    let (prefix, text) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    // "1.2." is accepted as "1.2"
    let body = prefix.strip_suffix('.').unwrap_or(prefix);
    let numbers: Vec<&str> = body.split('.').collect();
    let valid = !body.is_empty()
        && numbers
            .iter()
            .all(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()));
    if !valid {
        return Err(ListTreeError::MalformedDotSpacePrefix {
            line: line_number,
            prefix: prefix.to_string(),
        });
    }

    let text = text.trim_start();
    let label = match text.strip_prefix(marker) {
        Some(rest) if !marker.is_empty() && (rest.is_empty() || rest.starts_with(' ')) => {
            rest.trim_start().to_string()
        }
        _ => trimmed.to_string(),
    };

    Ok(DotSpaceLine { numbers, label })
}

fn normalize_dot_space(
    items: &[String],
    labels: Option<&[String]>,
    options: &NormalizeOptions,
) -> ListTreeResult<Vec<NormalizedItem>> {
    let parsed = items
        .iter()
        .enumerate()
        .map(|(index, line)| parse_dot_space_line(line, index + 1, &options.pseudo_marker))
        .collect::<ListTreeResult<Vec<_>>>()?;

    // Widen past the configured width when a segment would not fit,
    // otherwise "1000" would sort before "999".
    let width = parsed
        .iter()
        .flat_map(|p| p.numbers.iter().map(|n| n.len()))
        .max()
        .unwrap_or(0)
        .max(options.pad_width);

    Ok(parsed
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let path = line
                .numbers
                .iter()
                .map(|n| pad_number(n, width))
                .collect::<Vec<_>>()
                .join("/");
            let property = labels
                .map(|l| l[index].as_str())
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .unwrap_or(line.label);
            NormalizedItem {
                index,
                path,
                is_branch: false,
                property,
            }
        })
        .collect())
}

fn pad_number(number: &str, width: usize) -> String {
    format!("{:0>width$}", number, width = width)
}

/// Mark every item that is a strict ancestor of another item, or shares
/// its path with a branch item, as a branch
///
/// This also folds `foo` into the branch `foo/` when both are present.
fn promote_branches(items: &mut [NormalizedItem]) {
    let mut ancestors: HashSet<String> = HashSet::new();
    for item in items.iter() {
        if item.is_branch {
            ancestors.insert(item.path.clone());
        }
        let mut end = 0;
        while let Some(pos) = item.path[end..].find(SEPARATOR) {
            end += pos;
            ancestors.insert(item.path[..end].to_string());
            end += 1;
        }
    }

    for item in items.iter_mut() {
        if !item.is_branch && ancestors.contains(&item.path) {
            item.is_branch = true;
        }
    }
}
