//! The embeddable scrollback component.

use crate::config::ResolvedConfig;
use crate::render::{self, Surface};
use crate::store::EntryStore;

/// Scrollback buffer: append entries, resize, draw pages.
///
/// `A` is the caller's attribute type (a curses attribute word, a ratatui
/// `Style`, ...). The buffer never interprets it; it only hands it back to the
/// surface around each entry's lines.
///
/// All operations are synchronous and total. Out-of-range line numbers are
/// clamped, never rejected.
///
/// # Examples
///
/// ```
/// use scrollbuf::ScrollBuffer;
/// use scrollbuf::render::TextSurface;
///
/// let mut buffer: ScrollBuffer<()> = ScrollBuffer::new();
/// buffer.set_display_size(5, 3);
/// buffer.add_line("hello world", None);
/// assert_eq!(buffer.line_count(), 2);
///
/// let mut surface = TextSurface::new(3);
/// buffer.draw_page(&mut surface, 0);
/// assert_eq!(surface.lines(), vec!["hello", "world", ""]);
/// ```
#[derive(Debug, Clone)]
pub struct ScrollBuffer<A> {
    store: EntryStore<A>,
}

impl<A> ScrollBuffer<A> {
    /// Create an empty buffer with no entry limit.
    pub fn new() -> Self {
        Self {
            store: EntryStore::new(),
        }
    }

    /// Create an empty buffer retaining at most `max_entries` entries.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            store: EntryStore::with_max_entries(max_entries),
        }
    }

    /// Create an empty buffer from resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut store = EntryStore::with_max_entries(config.max_entries.unwrap_or(usize::MAX));
        store.set_reserved_columns(config.reserved_columns);
        Self { store }
    }

    /// Update the display size. Re-wraps and renumbers only when a dimension
    /// actually changed; returns whether it did.
    pub fn set_display_size(&mut self, width: u16, height: u16) -> bool {
        self.store.set_display_size(width, height)
    }

    /// Total physical display lines across retained entries.
    pub fn line_count(&self) -> usize {
        self.store.line_count()
    }

    /// Number of retained entries.
    pub fn entry_count(&self) -> usize {
        self.store.entry_count()
    }

    /// Set the entry limit. Takes effect on the next [`add_line`](Self::add_line).
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.store.set_max_entries(max_entries);
    }

    /// Append one logical entry.
    pub fn add_line(&mut self, text: impl Into<String>, attribute: Option<A>) {
        self.store.add_line(text, attribute);
    }

    /// Render up to one viewport of rows, starting at logical line
    /// `line_number`, onto `surface`.
    pub fn draw_page<S>(&self, surface: &mut S, line_number: usize)
    where
        S: Surface<A> + ?Sized,
    {
        render::draw_page(&self.store, surface, line_number);
    }

    /// First line of the page that ends on the last line.
    pub fn last_page_start(&self) -> usize {
        let height = self
            .store
            .viewport()
            .map_or(0, |viewport| usize::from(viewport.height));
        self.line_count().saturating_sub(height)
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &EntryStore<A> {
        &self.store
    }
}

impl<A> Default for ScrollBuffer<A> {
    fn default() -> Self {
        Self::new()
    }
}
