//! Domain Layer
//!
//! The tree engine - pure transformations without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Records and the entry arena
//! - `value_objects/` - Dialect, orientation, policies, glyphs
//! - `services/` - Pipeline stages (normalize, build, group, prefix, assemble, filter)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Immutable pipeline** - Each stage returns a new value from the previous one
//! 3. **Closed modes** - Dialect and orientation are enums picked at the boundary

pub mod entities;
pub mod services;
pub mod value_objects;
