//! Raw item input
//!
//! Items arrive one per line from a file or stdin. Collecting the listing
//! (walking a file system, exporting an outline) happens upstream.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use is_terminal::IsTerminal;

use crate::error::ListTreeResult;

/// Items read from one source, with labels when the source carried them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    pub items: Vec<String>,
    pub labels: Option<Vec<String>>,
}

/// Split content into items, skipping blank lines
///
/// With `tab_labels`, each line is split on its first tab into item and
/// label; lines without a tab get an empty label.
pub fn parse_lines(content: &str, tab_labels: bool) -> ParsedInput {
    let lines = content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    if !tab_labels {
        return ParsedInput {
            items: lines.map(str::to_string).collect(),
            labels: None,
        };
    }

    let (items, labels) = lines
        .map(|line| match line.split_once('\t') {
            Some((item, label)) => (item.to_string(), label.to_string()),
            None => (line.to_string(), String::new()),
        })
        .unzip();

    ParsedInput {
        items,
        labels: Some(labels),
    }
}

/// Read the whole source: a file, or stdin when `path` is `None` or `-`
pub fn read_source(path: Option<&Path>) -> ListTreeResult<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            log::debug!("reading items from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                log::info!("reading items from stdin (end with Ctrl-D)");
            }
            let mut content = String::new();
            stdin.lock().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

/// Read items and, when requested, inline tab labels
pub fn read_items(path: Option<&Path>, tab_labels: bool) -> ListTreeResult<ParsedInput> {
    let content = read_source(path)?;
    Ok(parse_lines(&content, tab_labels))
}

/// Read a label file: one label per line, blank lines kept as empty labels
pub fn read_labels(path: &Path) -> ListTreeResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect())
}
