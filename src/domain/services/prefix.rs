//! Prefix rendering
//!
//! Computes one glyph per level column for every row. A row at level `k`
//! owns column `k - 2` for its own connector; the columns to its left carry
//! the trunks of its ancestors.
//!
//! ```text
//! a/            level 1: no columns
//! ├── b/        level 2: column 0 = mid
//! │   └── x     level 3: column 0 = vertical (under a, b has a sibling), column 1 = end
//! └── c         level 2: column 0 = end
//! ```

use crate::domain::entities::Entry;
use crate::domain::value_objects::Glyph;

/// Glyph columns of every row, indexed by row index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixGrid {
    rows: Vec<Vec<Glyph>>,
}

impl PrefixGrid {
    pub fn row(&self, row_index: usize) -> &[Glyph] {
        self.rows.get(row_index).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Compute the glyph grid for entries sorted by row index
pub fn render_prefixes(entries: &[Entry]) -> PrefixGrid {
    let max_level = entries.iter().map(|e| e.level).max().unwrap_or(1);
    let width = max_level.saturating_sub(1);

    // First pass: indent every column up to and including the row's own
    // connector column.
    let mut rows: Vec<Vec<Glyph>> = entries
        .iter()
        .map(|entry| {
            let mut row = vec![Glyph::Empty; width];
            let depth = entry.level.saturating_sub(1).min(width);
            for glyph in row.iter_mut().take(depth) {
                *glyph = Glyph::Blank;
            }
            row
        })
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];
    for entry in entries {
        if let Some(parent) = entry.parent {
            if let Some(list) = children.get_mut(parent.index()) {
                list.push(entry.row_index);
            }
        }
    }

    for branch in entries.iter().filter(|e| e.is_branch) {
        let run = &children[branch.row_index];
        let (Some(&first), Some(&last)) = (run.first(), run.last()) else {
            continue;
        };
        let column = branch.level - 1;
        if column >= width {
            continue;
        }

        // Rows between the first and last child are all descendants of the
        // branch, so the trunk passes through them.
        for row in rows.iter_mut().take(last + 1).skip(first) {
            row[column] = Glyph::Vertical;
        }
        for &child in run {
            rows[child][column] = Glyph::Mid;
        }
        rows[last][column] = Glyph::End;
    }

    log::debug!("rendered {} prefix rows, {} columns", rows.len(), width);
    PrefixGrid { rows }
}
