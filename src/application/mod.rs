//! Application Layer
//!
//! Use cases that orchestrate the domain pipeline.
//!
//! ## Use Cases
//!
//! - `ListTree` - build a tree from raw items, render it, filter it
//! - `BuildOptions` / `RenderOptions` - the knobs, usually produced from `Config`

mod list_tree;

pub use list_tree::{BuildOptions, ListTree, RenderOptions};
