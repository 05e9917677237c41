//! Buffer model types (pure).
//!
//! Entries and the small newtypes used to address them.

pub mod entry;
pub mod types;

pub use entry::Entry;
pub use types::{EntryIndex, LineLocation, ViewportDimensions};
