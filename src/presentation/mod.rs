//! Presentation Layer
//!
//! Turns built trees into text, NDJSON events and row tables.

pub mod json;
pub mod output;
pub mod terminal;

pub use output::{filter_event, render_text, rows_table, tree_event, OutputFormat};
pub use terminal::{color_enabled, detect_capabilities, TerminalCapabilities};
