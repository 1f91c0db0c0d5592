//! Property tests: arbitrary input never panics.

use proptest::prelude::*;

use listtree::{BuildOptions, FilterMode, ListTree, RenderOptions};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: building and rendering arbitrary strings never panics.
    #[test]
    fn property_arbitrary_paths_never_panic(
        items in proptest::collection::vec("(?s).{0,32}", 0..16)
    ) {
        if let Ok(tree) = ListTree::new(items) {
            let _ = tree.render(&RenderOptions::default());
            let _ = tree.render(&RenderOptions::mirrored());
        }
    }

    /// PROPERTY: arbitrary dot-space lines either build or report an error.
    #[test]
    fn property_arbitrary_dot_space_never_panics(
        lines in proptest::collection::vec("[0-9.]{0,8}( .{0,12})?", 0..16)
    ) {
        if let Ok(tree) = ListTree::build(lines, None, BuildOptions::dot_space()) {
            let _ = tree.render(&RenderOptions::default());
        }
    }

    /// PROPERTY: the filter only returns items that contain a keyword.
    #[test]
    fn property_filter_results_contain_keyword(
        items in proptest::collection::vec("[a-c/]{1,6}", 1..12),
        keyword in "[a-c]{1,2}"
    ) {
        if let Ok(tree) = ListTree::new(items) {
            let keywords = vec![keyword.clone()];
            let kept = tree.filter(&keywords, FilterMode::Simple).unwrap();
            prop_assert!(kept.iter().all(|item| item.contains(keyword.as_str())));
        }
    }
}
