//! Dot-space contracts: numbered outlines build the same shape as paths.

use listtree::{BuildOptions, ListTree, RenderOptions};

use crate::common::items;

fn shape(tree: &ListTree) -> Vec<(usize, bool, usize)> {
    tree.rows()
        .iter()
        .map(|r| (r.level, r.is_branch, r.row_index))
        .collect()
}

/// CONTRACT: dot-space and plain-path inputs with the same structure agree.
#[test]
fn contract_dot_space_matches_plain_paths() {
    let dotted = ListTree::dot_space(items(&["1 root", "1.1 child one", "1.2 child two"])).unwrap();
    let plain = ListTree::new(items(&["root/", "root/child one", "root/child two"])).unwrap();

    assert_eq!(shape(&dotted), shape(&plain));

    let options = RenderOptions::default();
    let dotted_prefixes: Vec<String> = dotted.lines(&options).into_iter().map(|l| l.prefix).collect();
    let plain_prefixes: Vec<String> = plain.lines(&options).into_iter().map(|l| l.prefix).collect();
    assert_eq!(dotted_prefixes, plain_prefixes);
}

/// CONTRACT: dot-space rows show their line text.
#[test]
fn contract_dot_space_labels() {
    let tree = ListTree::dot_space(items(&["1 root", "1.1 child one", "1.2 child two"])).unwrap();
    assert_eq!(
        tree.to_string(),
        "1 root\n├── 1.1 child one\n└── 1.2 child two"
    );
}

/// CONTRACT: numeric ordering survives multi-digit segments.
#[test]
fn contract_dot_space_numeric_order() {
    let tree = ListTree::dot_space(items(&["1 top", "1.10 tenth", "1.2 second"])).unwrap();
    assert_eq!(tree.to_string(), "1 top\n├── 1.2 second\n└── 1.10 tenth");
}

/// CONTRACT: the pseudo marker hides the numbering.
#[test]
fn contract_dot_space_pseudo_marker() {
    let tree = ListTree::build(
        items(&["1 .pseudo Overview", "1.1 Details"]),
        None,
        BuildOptions::dot_space(),
    )
    .unwrap();
    assert_eq!(tree.to_string(), "Overview\n└── 1.1 Details");
}
