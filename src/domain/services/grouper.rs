//! Row grouping
//!
//! Collapses records with the same structural key into one entry, sorts the
//! entries by path and links every entry to its parent.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::entities::{Entry, EntryId, Record};
use crate::domain::value_objects::DuplicatePolicy;
use crate::error::{ListTreeError, ListTreeResult};

use super::normalizer::SEPARATOR;

/// Segment-wise path ordering
///
/// Segments compare as plain strings, so numeric ordering relies on the
/// zero-padding applied upstream. A path sorts directly before its
/// descendants, which keeps every subtree contiguous.
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    a.split(SEPARATOR).cmp(b.split(SEPARATOR))
}

struct Group {
    record: Record,
    sources: Vec<usize>,
    properties: Vec<String>,
    provisional: usize,
}

/// Group records into sorted, linked entries
pub fn group_rows(records: Vec<Record>, policy: DuplicatePolicy) -> ListTreeResult<Vec<Entry>> {
    let record_count = records.len();
    let mut index_of: HashMap<(String, bool, String, String, usize), usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for (position, record) in records.into_iter().enumerate() {
        let key = {
            let (path, is_branch, parent, name, level) = record.key();
            (
                path.to_string(),
                is_branch,
                parent.to_string(),
                name.to_string(),
                level,
            )
        };

        match index_of.get(&key).copied() {
            Some(existing) => {
                let group = &mut groups[existing];
                if let (Some(second), Some(&first), DuplicatePolicy::Reject) =
                    (record.source, group.sources.first(), policy)
                {
                    return Err(ListTreeError::DuplicateEntry {
                        path: record.path,
                        first,
                        second,
                    });
                }
                if let Some(source) = record.source {
                    group.sources.push(source);
                }
                group.provisional = group.provisional.max(position);
                group.properties.push(record.property);
            }
            None => {
                index_of.insert(key, groups.len());
                groups.push(Group {
                    sources: record.source.into_iter().collect(),
                    properties: vec![record.property.clone()],
                    provisional: position,
                    record,
                });
            }
        }
    }

    check_unique_paths(&groups)?;

    // Provisional order first (latest member wins, ties by first-seen),
    // then the path sort decides the final row index.
    groups.sort_by_key(|g| g.provisional);
    groups.sort_by(|a, b| compare_paths(&a.record.path, &b.record.path));

    let mut entries: Vec<Entry> = groups
        .into_iter()
        .enumerate()
        .map(|(row_index, group)| {
            let mut sources = group.sources;
            sources.sort_unstable();
            Entry {
                path: group.record.path,
                parent_path: group.record.parent_path,
                name: group.record.name,
                level: group.record.level,
                property: group.properties.concat(),
                row_index,
                is_branch: group.record.is_branch,
                parent: None,
                sources,
            }
        })
        .collect();

    link_parents(&mut entries);

    log::debug!(
        "grouped {} records into {} rows",
        record_count,
        entries.len()
    );
    Ok(entries)
}

/// Every path must belong to exactly one group
fn check_unique_paths(groups: &[Group]) -> ListTreeResult<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(groups.len());
    for group in groups {
        *seen.entry(group.record.path.as_str()).or_default() += 1;
    }
    if seen.len() == groups.len() {
        return Ok(());
    }

    let collided = groups
        .iter()
        .map(|g| g.record.path.as_str())
        .find(|path| seen.get(path).copied().unwrap_or(0) > 1)
        .unwrap_or_default();
    Err(ListTreeError::StructuralCollision {
        path: collided.to_string(),
    })
}

fn link_parents(entries: &mut [Entry]) {
    let by_path: HashMap<String, EntryId> = entries
        .iter()
        .filter(|e| e.is_branch)
        .map(|e| (e.path.clone(), e.id()))
        .collect();

    for entry in entries.iter_mut() {
        if !entry.is_top_level() {
            entry.parent = by_path.get(&entry.parent_path).copied();
        }
    }
}
