//! Keyword filter contracts.

use listtree::{FilterMode, ListTree, ListTreeError};

use crate::common::items;

/// CONTRACT: simple mode returns exactly the matching raw items.
#[test]
fn contract_keyword_filter() {
    let tree = ListTree::new(items(&["apple", "banana", "grape"])).unwrap();
    let kept = tree.filter(&items(&["an"]), FilterMode::Simple).unwrap();
    assert_eq!(kept, vec!["banana"]);
}

/// CONTRACT: matching is a case-sensitive substring test.
#[test]
fn contract_filter_is_case_sensitive() {
    let tree = ListTree::new(items(&["Apple", "apple"])).unwrap();
    let kept = tree.filter(&items(&["App"]), FilterMode::Simple).unwrap();
    assert_eq!(kept, vec!["Apple"]);
}

/// CONTRACT: subtree mode adds ancestor items in input order.
#[test]
fn contract_subtree_adds_ancestors() {
    let tree = ListTree::new(items(&["src/", "src/bin/", "src/bin/tool.rs", "docs/", "docs/a.md"]))
        .unwrap();
    let kept = tree.filter(&items(&["tool"]), FilterMode::Subtree).unwrap();
    assert_eq!(kept, vec!["src/", "src/bin/", "src/bin/tool.rs"]);

    let sub = tree.subtree(&items(&["tool"])).unwrap();
    assert_eq!(sub.to_string(), "src/\n└── bin/\n    └── tool.rs");
}

/// CONTRACT: an empty keyword set is rejected.
#[test]
fn contract_filter_requires_keywords() {
    let tree = ListTree::new(items(&["a"])).unwrap();
    let err = tree.filter(&[], FilterMode::Simple).unwrap_err();
    assert!(matches!(err, ListTreeError::NoKeywords));
}

/// CONTRACT: an empty-string keyword is a substring of every item.
#[test]
fn contract_empty_keyword_matches_everything() {
    let tree = ListTree::new(items(&["a/", "a/b", "c"])).unwrap();
    let kept = tree.filter(&items(&["", "b"]), FilterMode::Simple).unwrap();
    assert_eq!(kept, vec!["a/", "a/b", "c"]);
}
