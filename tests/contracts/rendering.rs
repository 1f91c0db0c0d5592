//! Rendering contracts: glyph layout in both orientations.

use listtree::{Charset, ListTree, RenderOptions};

use crate::common::items;

/// CONTRACT: the canonical flat example renders exactly.
#[test]
fn contract_round_trip_example() {
    let tree = ListTree::new(items(&["a/", "a/b", "a/c", "d"])).unwrap();
    assert_eq!(tree.render(&RenderOptions::default()), "a/\n├── b\n└── c\nd");

    let levels: Vec<usize> = tree.rows().iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![1, 2, 2, 1]);
}

/// CONTRACT: top-level order is by path, not input order.
#[test]
fn contract_rows_sorted_by_path() {
    let tree = ListTree::new(items(&["d", "a/c", "a/", "a/b"])).unwrap();
    assert_eq!(tree.to_string(), "a/\n├── b\n└── c\nd");
}

/// CONTRACT: trunks pass through nested rows of an earlier sibling.
#[test]
fn contract_nested_trunks() {
    let tree = ListTree::new(items(&["a/", "a/b/", "a/b/x", "a/c", "d"])).unwrap();
    insta::assert_snapshot!(tree.render(&RenderOptions::default()), @r"
    a/
    ├── b/
    │   └── x
    └── c
    d
    ");
}

/// CONTRACT: mirrored lines share one width and end at the right margin.
#[test]
fn contract_mirrored_right_justified() {
    let tree = ListTree::new(items(&["a/", "a/b/", "a/b/x", "a/c", "d"])).unwrap();
    let lines = tree.lines(&RenderOptions::mirrored());

    let widths: Vec<usize> = lines.iter().map(|l| l.width()).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);

    let text = tree.render(&RenderOptions::mirrored());
    assert_eq!(
        text,
        "       a:\n   b: ──┤\nx ──┘   │\n    c ──┘\n        d"
    );
}

/// CONTRACT: a single entry has no connector glyphs.
#[test]
fn contract_single_entry_is_bare() {
    let tree = ListTree::new(items(&["only/"])).unwrap();
    assert_eq!(tree.to_string(), "only/");
    let lines = tree.lines(&RenderOptions::default());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].prefix.is_empty());
}

/// CONTRACT: listings without branches print full paths.
#[test]
fn contract_flat_listing_prints_full_paths() {
    let tree = ListTree::new(items(&["b.txt", "a.txt"])).unwrap();
    assert_eq!(tree.to_string(), "a.txt\nb.txt");
}

/// CONTRACT: a branch without children renders with nothing below it.
#[test]
fn contract_empty_branch() {
    let tree = ListTree::new(items(&["a/", "b/", "b/x"])).unwrap();
    assert_eq!(tree.to_string(), "a/\nb/\n└── x");
}

/// CONTRACT: rendering twice is byte-identical.
#[test]
fn contract_render_is_idempotent() {
    let tree = ListTree::new(items(&["src/", "src/lib.rs", "src/main.rs", "Cargo.toml"])).unwrap();
    for options in [RenderOptions::default(), RenderOptions::mirrored()] {
        assert_eq!(tree.render(&options), tree.render(&options));
    }
}

#[test]
fn contract_ascii_glyphs() {
    let tree = ListTree::new(items(&["a/", "a/b/", "a/b/x", "a/c"])).unwrap();
    let options = RenderOptions {
        charset: Charset::Ascii,
        ..RenderOptions::default()
    };
    insta::assert_snapshot!(tree.render(&options), @r"
    a/
    |-- b/
    |   `-- x
    `-- c
    ");
}
