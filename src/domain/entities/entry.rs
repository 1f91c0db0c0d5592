//! Entry arena
//!
//! Entries are the distinct nodes of the rebuilt tree, stored in a flat
//! vector sorted by path. An entry's id is its row index, and every entry
//! holds the id of its parent (if the parent exists as an entry).

use serde::Serialize;

/// Index of an entry in the sorted arena (equal to its row index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub usize);

impl EntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One distinct node after grouping
///
/// Field order is the stable column order of the row table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub path: String,
    #[serde(rename = "parent")]
    pub parent_path: String,
    pub name: String,
    pub level: usize,
    pub property: String,
    pub row_index: usize,
    pub is_branch: bool,
    #[serde(skip)]
    pub parent: Option<EntryId>,
    /// Input positions that collapsed into this entry, ascending
    #[serde(skip)]
    pub sources: Vec<usize>,
}

impl Entry {
    pub fn id(&self) -> EntryId {
        EntryId(self.row_index)
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_path.is_empty()
    }
}

/// Walk from an entry up to the root, nearest ancestor first
pub fn ancestors(entries: &[Entry], id: EntryId) -> impl Iterator<Item = &Entry> + '_ {
    let mut next = entries.get(id.index()).and_then(|e| e.parent);
    std::iter::from_fn(move || {
        let current = entries.get(next?.index())?;
        next = current.parent;
        Some(current)
    })
}
