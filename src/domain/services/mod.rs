//! Domain Services
//!
//! The tree pipeline, one pure stage per module:
//!
//! ```text
//! raw items ─> normalizer ─> record_builder ─> grouper ─> prefix ─> assembler ─> lines
//!     └──────> keyword_filter
//! ```

pub mod assembler;
pub mod grouper;
pub mod keyword_filter;
pub mod normalizer;
pub mod prefix;
pub mod record_builder;

pub use assembler::{assemble_lines, join_lines, AssembleOptions, TreeLine};
pub use grouper::{compare_paths, group_rows};
pub use keyword_filter::filter_items;
pub use normalizer::{canonical_path, normalize_items, NormalizeOptions, SEPARATOR};
pub use prefix::{render_prefixes, PrefixGrid};
pub use record_builder::build_records;
