//! Keyword filtering over the raw items

use std::collections::BTreeSet;

use crate::domain::entities::{ancestors, Entry};
use crate::domain::value_objects::FilterMode;
use crate::error::{ListTreeError, ListTreeResult};

/// Indexes of the raw items selected by `keywords`
///
/// Matching is a case-sensitive substring test; an item is kept when it
/// contains at least one keyword, so an empty keyword keeps every item.
/// In `Subtree` mode every item that makes up an ancestor entry of a match
/// is kept as well. Indexes are returned in input order.
pub fn filter_items(
    items: &[String],
    entries: &[Entry],
    keywords: &[String],
    mode: FilterMode,
) -> ListTreeResult<Vec<usize>> {
    if keywords.is_empty() {
        return Err(ListTreeError::NoKeywords);
    }

    let matched: BTreeSet<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| keywords.iter().any(|k| item.contains(k.as_str())))
        .map(|(index, _)| index)
        .collect();

    let selected = match mode {
        FilterMode::Simple => matched,
        FilterMode::Subtree => with_ancestors(entries, matched),
    };

    log::debug!("keyword filter kept {} of {} items", selected.len(), items.len());
    Ok(selected.into_iter().collect())
}

fn with_ancestors(entries: &[Entry], matched: BTreeSet<usize>) -> BTreeSet<usize> {
    let mut selected = matched.clone();
    for entry in entries {
        if !entry.sources.iter().any(|s| matched.contains(s)) {
            continue;
        }
        for ancestor in ancestors(entries, entry.id()) {
            selected.extend(ancestor.sources.iter().copied());
        }
    }
    selected
}
