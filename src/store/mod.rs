//! Bounded entry storage and the line index over it.

pub mod entry_store;
pub mod line_index;

pub use entry_store::EntryStore;
pub use line_index::locate;
