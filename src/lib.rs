//! ListTree - rebuild and draw trees from flat path listings
//!
//! Takes a flat list of slash-separated paths (or numbered outline lines in
//! the dot-space dialect), works out parents, names and depths, and renders
//! the result as box-drawing text in the usual left-anchored orientation or
//! a right-anchored mirrored one.
//!
//! ```
//! use listtree::ListTree;
//!
//! let tree = ListTree::new(["a/", "a/b", "a/c", "d"]).unwrap();
//! assert_eq!(tree.to_string(), "a/\n├── b\n└── c\nd");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildOptions, ListTree, RenderOptions};
pub use config::{ColorMode, Config, ConfigWarning};
pub use domain::entities::{Entry, EntryId};
pub use domain::services::TreeLine;
pub use domain::value_objects::{
    Charset, DuplicatePolicy, FilterMode, Glyph, GlyphSet, InputDialect, Orientation,
};
pub use error::{ListTreeError, ListTreeResult};
