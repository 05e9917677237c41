//! Core buffer newtypes

/// Index of a retained entry, counted from the oldest retained entry. 0-indexed.
///
/// Indices are positional: evicting from the front shifts every survivor down
/// by one, so an `EntryIndex` is only meaningful until the next mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntryIndex(usize);

impl EntryIndex {
    /// Create a new EntryIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the next entry index.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<usize> for EntryIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Viewport dimensions in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportDimensions {
    /// Width in terminal columns.
    pub width: u16,
    /// Height in terminal rows.
    pub height: u16,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where a logical line number lands: which entry, and which of its
/// physical lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLocation {
    /// Entry containing the line.
    pub entry: EntryIndex,
    /// Offset of the line within the entry's physical lines.
    pub sub_line: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_index_round_trips_raw_value() {
        assert_eq!(EntryIndex::new(7).get(), 7);
        assert_eq!(EntryIndex::from(3), EntryIndex::new(3));
    }

    #[test]
    fn entry_index_next_increments() {
        assert_eq!(EntryIndex::new(0).next(), EntryIndex::new(1));
    }

    #[test]
    fn entry_index_orders_by_position() {
        assert!(EntryIndex::new(1) < EntryIndex::new(2));
        assert_eq!(EntryIndex::default(), EntryIndex::new(0));
    }

    #[test]
    fn viewport_dimensions_store_width_and_height() {
        let viewport = ViewportDimensions::new(80, 24);
        assert_eq!(viewport.width, 80);
        assert_eq!(viewport.height, 24);
    }
}
