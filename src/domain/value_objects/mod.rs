//! Domain Value Objects
//!
//! Closed enumerations chosen once at the boundary (CLI, config) and passed
//! down unchanged, plus the glyph tables used by the renderer.

mod dialect;
mod glyph;
mod orientation;
mod policy;

pub use dialect::InputDialect;
pub use glyph::{Glyph, GlyphSet};
pub use orientation::{Charset, Orientation};
pub use policy::{DuplicatePolicy, FilterMode};
