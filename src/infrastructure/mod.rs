//! Infrastructure Layer
//!
//! The I/O edge of the library: reading raw items and labels.

pub mod input;

pub use input::{parse_lines, read_items, read_labels, read_source, ParsedInput};
