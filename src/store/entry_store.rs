//! Bounded entry store with lazy renumbering.

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use super::line_index::{self, translated_start};
use crate::model::{Entry, EntryIndex, LineLocation, ViewportDimensions};

#[cfg(test)]
#[path = "entry_store_tests.rs"]
mod tests;

/// Insertion-ordered, bounded collection of wrapped entries.
///
/// Appending is O(1) amortized plus the cost of wrapping the new text.
/// Evicting from the front is O(1): survivors keep their stored start lines
/// and `evicted_lines` grows instead, see [`line_index`].
///
/// # Invariants
/// - `entries.len() <= max_entries` after every `add_line`
/// - `entries[i].start_line() - evicted_lines` is the number of retained
///   physical lines before entry `i`
/// - `total_lines` is the sum of retained line counts
#[derive(Debug, Clone)]
pub struct EntryStore<A> {
    /// Oldest at front, newest at back.
    entries: VecDeque<Entry<A>>,
    total_lines: usize,
    evicted_lines: usize,
    max_entries: usize,
    viewport: Option<ViewportDimensions>,
    reserved_columns: u16,
}

impl<A> EntryStore<A> {
    /// Create an empty store with no entry limit.
    pub fn new() -> Self {
        Self::with_max_entries(usize::MAX)
    }

    /// Create an empty store retaining at most `max_entries` entries.
    ///
    /// A limit of 0 is raised to 1.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            total_lines: 0,
            evicted_lines: 0,
            max_entries: clamp_max_entries(max_entries),
            viewport: None,
            reserved_columns: 0,
        }
    }

    /// Columns held back from the viewport width when wrapping (a right
    /// margin, or room for a scrollbar).
    ///
    /// Changing the value reindexes when a display size is already set.
    pub fn set_reserved_columns(&mut self, columns: u16) {
        if self.reserved_columns != columns {
            self.reserved_columns = columns;
            if self.viewport.is_some() {
                self.reindex();
            }
        }
    }

    /// Columns held back from the viewport width when wrapping.
    pub fn reserved_columns(&self) -> u16 {
        self.reserved_columns
    }

    /// Update the display size.
    ///
    /// Reindexes iff either dimension changed. Returns whether it did.
    pub fn set_display_size(&mut self, width: u16, height: u16) -> bool {
        let viewport = ViewportDimensions::new(width, height);
        if self.viewport == Some(viewport) {
            return false;
        }
        self.viewport = Some(viewport);
        self.reindex();
        true
    }

    /// Current display size, `None` until first set.
    pub fn viewport(&self) -> Option<ViewportDimensions> {
        self.viewport
    }

    /// Width entries are wrapped at: viewport width minus reserved columns,
    /// at least 1. `None` until a display size is set.
    pub fn wrap_width(&self) -> Option<usize> {
        self.viewport.map(|viewport| {
            usize::from(viewport.width.saturating_sub(self.reserved_columns)).max(1)
        })
    }

    /// Change the entry limit. Applies from the next [`add_line`](Self::add_line).
    ///
    /// A limit of 0 is raised to 1.
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = clamp_max_entries(max_entries);
    }

    /// Current entry limit.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Append one logical entry, then evict from the front while over the
    /// entry limit.
    pub fn add_line(&mut self, text: impl Into<String>, attribute: Option<A>) {
        let start_line = self.total_lines + self.evicted_lines;
        let entry = Entry::new(text, attribute, self.wrap_width(), start_line);
        self.total_lines += entry.line_count();
        self.entries.push_back(entry);

        while self.entries.len() > self.max_entries {
            let Some(evicted) = self.entries.pop_front() else {
                break;
            };
            let count = evicted.line_count();
            self.evicted_lines += count;
            self.total_lines -= count;
            trace!(
                lines = count,
                evicted_lines = self.evicted_lines,
                "Evicted oldest entry"
            );
        }
    }

    /// Re-wrap every entry at the current width and renumber from 0.
    ///
    /// Entries already wrapped at the current width are not re-wrapped.
    /// Returns the number of entries whose wrap was recomputed.
    pub fn reindex(&mut self) -> usize {
        let width = self.wrap_width();
        let mut start_line = 0;
        let mut rewrapped = 0;

        for entry in &mut self.entries {
            if entry.rewrap(width) {
                rewrapped += 1;
            }
            entry.set_start_line(start_line);
            start_line += entry.line_count();
        }

        self.evicted_lines = 0;
        self.total_lines = start_line;

        debug!(
            entries = self.entries.len(),
            rewrapped,
            total_lines = self.total_lines,
            wrap_width = ?width,
            "Reindexed entry store"
        );

        rewrapped
    }

    /// Total physical lines across retained entries.
    pub fn line_count(&self) -> usize {
        self.total_lines
    }

    /// Number of retained entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Physical lines removed from the front since the last reindex.
    pub fn evicted_lines(&self) -> usize {
        self.evicted_lines
    }

    /// Retained entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<A>> {
        self.entries.iter()
    }

    /// Retained entries from `index` onward.
    pub fn entries_from(&self, index: EntryIndex) -> impl Iterator<Item = &Entry<A>> {
        let start = index.get().min(self.entries.len());
        self.entries.range(start..)
    }

    /// Retained entry at `index`.
    pub fn get(&self, index: EntryIndex) -> Option<&Entry<A>> {
        self.entries.get(index.get())
    }

    /// Current logical line number of an entry's first physical line.
    pub fn translated_start(&self, entry: &Entry<A>) -> usize {
        translated_start(entry, self.evicted_lines)
    }

    /// Entry containing logical line `line`, `None` if out of range.
    pub fn locate(&self, line: usize) -> Option<EntryIndex> {
        line_index::locate(&self.entries, self.evicted_lines, line)
    }

    /// Entry and sub-line for logical line `line`, `None` if out of range.
    pub fn resolve(&self, line: usize) -> Option<LineLocation> {
        let index = self.locate(line)?;
        let entry = self.get(index)?;
        Some(LineLocation {
            entry: index,
            sub_line: line - self.translated_start(entry),
        })
    }

    /// Physical line at logical line number `line`.
    pub fn line(&self, line: usize) -> Option<&str> {
        let location = self.resolve(line)?;
        self.get(location.entry)?.line(location.sub_line)
    }
}

impl<A> Default for EntryStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_max_entries(max_entries: usize) -> usize {
    if max_entries == 0 {
        warn!("max_entries of 0 requested, retaining at least one entry");
        1
    } else {
        max_entries
    }
}
