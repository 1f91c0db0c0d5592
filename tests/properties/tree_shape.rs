//! Property tests for the shape of built trees.

use std::collections::BTreeSet;

use proptest::prelude::*;

use listtree::{ListTree, RenderOptions};

fn path_item() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9]{1,4}").unwrap();
    (proptest::collection::vec(segment, 1..=4), any::<bool>()).prop_map(|(segments, branch)| {
        let mut path = segments.join("/");
        if branch {
            path.push('/');
        }
        path
    })
}

fn path_list() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(path_item(), 1..=24)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: row indexes are a permutation of 0..N.
    #[test]
    fn property_row_index_is_permutation(items in path_list()) {
        let tree = ListTree::new(items).unwrap();
        let indexes: Vec<usize> = tree.rows().iter().map(|r| r.row_index).collect();
        let expected: Vec<usize> = (0..tree.len()).collect();
        prop_assert_eq!(indexes, expected);
    }

    /// PROPERTY: one rendered line per row, in both orientations.
    #[test]
    fn property_one_line_per_row(items in path_list()) {
        let tree = ListTree::new(items).unwrap();
        for options in [RenderOptions::default(), RenderOptions::mirrored()] {
            prop_assert_eq!(tree.lines(&options).len(), tree.len());
            prop_assert_eq!(tree.render(&options).lines().count(), tree.len());
        }
    }

    /// PROPERTY: rows are unique by path and count the distinct paths.
    #[test]
    fn property_rows_are_distinct_paths(items in path_list()) {
        let distinct: BTreeSet<String> = items
            .iter()
            .map(|i| i.trim_end_matches('/').to_string())
            .collect();
        let tree = ListTree::new(items).unwrap();
        prop_assert_eq!(tree.len(), distinct.len());
    }

    /// PROPERTY: rendering is deterministic.
    #[test]
    fn property_render_idempotent(items in path_list()) {
        let tree = ListTree::new(items.clone()).unwrap();
        let rebuilt = ListTree::new(items).unwrap();
        let options = RenderOptions::default();
        prop_assert_eq!(tree.render(&options), rebuilt.render(&options));
        prop_assert_eq!(tree.render(&options), tree.render(&options));
    }

    /// PROPERTY: mirrored lines all have the same display width.
    #[test]
    fn property_mirrored_lines_flush(items in path_list()) {
        let tree = ListTree::new(items).unwrap();
        let widths: BTreeSet<usize> = tree
            .lines(&RenderOptions::mirrored())
            .iter()
            .map(|l| l.width())
            .collect();
        prop_assert_eq!(widths.len(), 1);
    }

    /// PROPERTY: the shallowest row is at level 1 and no child skips a level.
    #[test]
    fn property_levels_are_normalized(items in path_list()) {
        let tree = ListTree::new(items).unwrap();
        let rows = tree.rows();
        prop_assert_eq!(rows.iter().map(|r| r.level).min(), Some(1));
        for row in rows {
            if let Some(parent) = row.parent {
                prop_assert_eq!(rows[parent.index()].level + 1, row.level);
            }
        }
    }
}
