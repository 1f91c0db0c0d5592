//! Domain Entities
//!
//! - `Record` - one raw item with its structural fields
//! - `Entry` - one distinct tree node, addressed by `EntryId`

mod entry;
mod record;

pub use entry::{ancestors, Entry, EntryId};
pub use record::{NormalizedItem, Record};
