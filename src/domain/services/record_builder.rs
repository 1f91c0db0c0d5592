//! Record construction
//!
//! Splits each normalized path into parent and name, and assigns levels.

use std::collections::HashSet;

use crate::domain::entities::{NormalizedItem, Record};

use super::normalizer::SEPARATOR;

/// Build one record per normalized item
///
/// With `infer_parents`, every strict ancestor path that no item names is
/// added as a synthetic branch record so each child has a parent row.
/// Levels are shifted so the shallowest record sits at level 1.
pub fn build_records(items: Vec<NormalizedItem>, infer_parents: bool) -> Vec<Record> {
    let mut records: Vec<Record> = items
        .into_iter()
        .map(|item| record_for(Some(item.index), item.path, item.is_branch, item.property))
        .collect();

    if infer_parents {
        let synthetic = missing_parents(&records);
        if !synthetic.is_empty() {
            log::debug!("synthesised {} parent records", synthetic.len());
        }
        records.extend(synthetic);
    }

    normalize_levels(&mut records);
    log::debug!("built {} records", records.len());
    records
}

fn record_for(source: Option<usize>, path: String, is_branch: bool, property: String) -> Record {
    let (parent_path, name) = match path.rsplit_once(SEPARATOR) {
        Some((parent, name)) => (parent.to_string(), name.to_string()),
        None => (String::new(), path.clone()),
    };
    // A branch and its first child differ by exactly one level: the
    // canonical path already carries no trailing separator.
    let level = path.matches(SEPARATOR).count() + 1;

    Record {
        source,
        path,
        is_branch,
        parent_path,
        name,
        level,
        property,
    }
}

fn missing_parents(records: &[Record]) -> Vec<Record> {
    let known: HashSet<&str> = records.iter().map(|r| r.path.as_str()).collect();
    let mut added: HashSet<String> = HashSet::new();
    let mut synthetic = Vec::new();

    for record in records {
        let mut parent = record.parent_path.as_str();
        while !parent.is_empty() && !known.contains(parent) && !added.contains(parent) {
            added.insert(parent.to_string());
            synthetic.push(record_for(None, parent.to_string(), true, String::new()));
            parent = parent.rsplit_once(SEPARATOR).map(|(p, _)| p).unwrap_or("");
        }
    }

    synthetic
}

fn normalize_levels(records: &mut [Record]) {
    let Some(min_level) = records.iter().map(|r| r.level).min() else {
        return;
    };
    if min_level > 1 {
        let shift = min_level - 1;
        for record in records.iter_mut() {
            record.level -= shift;
        }
    }
}
