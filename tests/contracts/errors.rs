//! Error contracts: bad input is reported, never panics.

use listtree::{BuildOptions, DuplicatePolicy, ListTree, ListTreeError};

use crate::common::items;

/// CONTRACT: empty input is InvalidInput, not an empty tree.
#[test]
fn contract_empty_input() {
    let err = ListTree::new(Vec::<String>::new()).unwrap_err();
    assert_eq!(err.to_string(), "invalid input: nonempty list required");
}

/// CONTRACT: non-numeric dot-space prefixes are reported with their line.
#[test]
fn contract_malformed_dot_space_prefix() {
    let err = ListTree::dot_space(items(&["1 ok", "1.x broken"])).unwrap_err();
    match err {
        ListTreeError::MalformedDotSpacePrefix { line, prefix } => {
            assert_eq!(line, 2);
            assert_eq!(prefix, "1.x");
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// CONTRACT: duplicates merge by default and fail under Reject.
#[test]
fn contract_duplicate_policy() {
    let merged = ListTree::new(items(&["a/", "a/b", "a/b"])).unwrap();
    assert_eq!(merged.len(), 2);

    let options = BuildOptions {
        duplicates: DuplicatePolicy::Reject,
        ..BuildOptions::default()
    };
    let err = ListTree::build(items(&["a/", "a/b", "a/b"]), None, options).unwrap_err();
    assert!(matches!(
        err,
        ListTreeError::DuplicateEntry { first: 1, second: 2, .. }
    ));
}

/// CONTRACT: label and item counts must agree.
#[test]
fn contract_label_count_mismatch() {
    let err = ListTree::with_labels(items(&["a", "b"]), items(&["x"])).unwrap_err();
    assert!(matches!(err, ListTreeError::InvalidInput { .. }));
}
