//! Page rendering onto an abstract character surface.
//!
//! The renderer knows nothing about terminals. It drives a [`Surface`], which
//! a host implements over whatever actually paints cells: a ratatui buffer
//! ([`BufferSurface`]), an in-memory grid ([`TextSurface`]), or a curses
//! window.

pub mod buffer_surface;
pub mod text_surface;

pub use buffer_surface::{BufferSurface, PageView};
pub use text_surface::{TextRow, TextSurface};

use crate::store::EntryStore;

/// Something a page can be painted onto.
///
/// Failures belong to the surface: none of these methods report errors back
/// to the renderer.
pub trait Surface<A> {
    /// Blank the whole surface and move the cursor to the first row.
    fn clear(&mut self);

    /// Write `line` at the cursor, then move to the start of the next row.
    fn write_line(&mut self, line: &str);

    /// Start applying `attribute` to subsequent writes.
    fn attribute_on(&mut self, attribute: &A);

    /// Stop applying `attribute`.
    fn attribute_off(&mut self, attribute: &A);
}

/// Paint the page starting at logical line `line_number`.
///
/// The surface is always cleared first. An empty store leaves it blank. Line
/// numbers past the end are clamped to the last line. At most
/// `viewport.height` rows are written (none before a display size is set);
/// fewer when the store runs out of lines. Each styled entry gets exactly
/// one `attribute_on`/`attribute_off` pair around its visible lines.
pub fn draw_page<A, S>(store: &EntryStore<A>, surface: &mut S, line_number: usize)
where
    S: Surface<A> + ?Sized,
{
    surface.clear();

    let total = store.line_count();
    if total == 0 {
        return;
    }

    let line_number = line_number.min(total - 1);
    let Some(location) = store.resolve(line_number) else {
        return;
    };

    let mut remaining = store
        .viewport()
        .map_or(0, |viewport| usize::from(viewport.height));
    let mut sub_line = location.sub_line;

    for entry in store.entries_from(location.entry) {
        if remaining == 0 {
            break;
        }

        if let Some(attribute) = entry.attribute() {
            surface.attribute_on(attribute);
        }

        for line in entry.lines().iter().skip(sub_line).take(remaining) {
            surface.write_line(line);
            remaining -= 1;
        }

        if let Some(attribute) = entry.attribute() {
            surface.attribute_off(attribute);
        }

        sub_line = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call, for asserting exact call sequences.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Clear,
        Line(String),
        On(char),
        Off(char),
    }

    impl Surface<char> for RecordingSurface {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }

        fn write_line(&mut self, line: &str) {
            self.ops.push(Op::Line(line.to_string()));
        }

        fn attribute_on(&mut self, attribute: &char) {
            self.ops.push(Op::On(*attribute));
        }

        fn attribute_off(&mut self, attribute: &char) {
            self.ops.push(Op::Off(*attribute));
        }
    }

    fn line(text: &str) -> Op {
        Op::Line(text.to_string())
    }

    fn store(width: u16, height: u16) -> EntryStore<char> {
        let mut store = EntryStore::new();
        store.set_display_size(width, height);
        store
    }

    #[test]
    fn empty_store_only_clears() {
        let store = store(80, 10);
        let mut surface = RecordingSurface::default();

        draw_page(&store, &mut surface, 0);

        assert_eq!(surface.ops, vec![Op::Clear]);
    }

    #[test]
    fn short_entry_writes_only_its_lines() {
        let mut store = store(80, 10);
        store.add_line("one\ntwo", None);
        let mut surface = RecordingSurface::default();

        draw_page(&store, &mut surface, 0);

        assert_eq!(surface.ops, vec![Op::Clear, line("one"), line("two")]);
    }

    #[test]
    fn page_starts_mid_entry() {
        let mut store = store(5, 10);
        store.add_line("hello world", None);
        store.add_line("next", None);
        let mut surface = RecordingSurface::default();

        draw_page(&store, &mut surface, 1);

        assert_eq!(surface.ops, vec![Op::Clear, line("world"), line("next")]);
    }

    #[test]
    fn page_stops_at_viewport_height() {
        let mut store = store(80, 2);
        for text in ["a", "b", "c", "d"] {
            store.add_line(text, None);
        }
        let mut surface = RecordingSurface::default();

        draw_page(&store, &mut surface, 1);

        assert_eq!(surface.ops, vec![Op::Clear, line("b"), line("c")]);
    }

    #[test]
    fn line_number_past_end_clamps_to_last_line() {
        let mut store = store(80, 5);
        store.add_line("a", None);
        store.add_line("b", None);
        let mut surface = RecordingSurface::default();

        draw_page(&store, &mut surface, 1_000);

        assert_eq!(surface.ops, vec![Op::Clear, line("b")]);
    }

    #[test]
    fn attribute_brackets_each_entry_once() {
        let mut store = store(5, 10);
        store.add_line("hello world", Some('r'));
        store.add_line("plain", None);
        store.add_line("x", Some('g'));
        let mut surface = RecordingSurface::default();

        draw_page(&store, &mut surface, 0);

        assert_eq!(
            surface.ops,
            vec![
                Op::Clear,
                Op::On('r'),
                line("hello"),
                line("world"),
                Op::Off('r'),
                line("plain"),
                Op::On('g'),
                line("x"),
                Op::Off('g'),
            ]
        );
    }

    #[test]
    fn entry_cut_by_viewport_still_closes_its_attribute() {
        let mut store = store(5, 1);
        store.add_line("hello world", Some('r'));
        let mut surface = RecordingSurface::default();

        draw_page(&store, &mut surface, 0);

        assert_eq!(
            surface.ops,
            vec![Op::Clear, Op::On('r'), line("hello"), Op::Off('r')]
        );
    }

    #[test]
    fn unsized_store_draws_no_rows() {
        let mut store: EntryStore<char> = EntryStore::new();
        store.add_line("text", None);
        let mut surface = RecordingSurface::default();

        draw_page(&store, &mut surface, 0);

        assert_eq!(surface.ops, vec![Op::Clear]);
    }

    #[test]
    fn draws_after_eviction_from_current_numbering() {
        let mut store = store(80, 10);
        store.set_max_entries(2);
        for text in ["a", "b", "c"] {
            store.add_line(text, None);
        }
        let mut surface = RecordingSurface::default();

        draw_page(&store, &mut surface, 0);

        assert_eq!(surface.ops, vec![Op::Clear, line("b"), line("c")]);
    }
}
