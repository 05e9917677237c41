//! A single logical entry and its cached wrap.

use crate::wrap::wrap_text;

/// One appended unit of text.
///
/// The raw text is never mutated after construction. The wrapped rendering
/// is cached together with the width it was computed for, so re-wrapping at
/// an unchanged width is free.
///
/// # Invariants
/// - `lines.len() >= 1`
/// - `lines` is the wrap of `text` at `wrap_width`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<A> {
    text: String,
    attribute: Option<A>,
    /// `None` until wrapped to a concrete width; newlines still split lines.
    wrap_width: Option<usize>,
    lines: Vec<String>,
    start_line: usize,
}

impl<A> Entry<A> {
    /// Create an entry wrapped at `wrap_width`, starting at logical line
    /// `start_line`.
    pub fn new(
        text: impl Into<String>,
        attribute: Option<A>,
        wrap_width: Option<usize>,
        start_line: usize,
    ) -> Self {
        let text = text.into();
        let lines = wrap_text(&text, wrap_width);
        Self {
            text,
            attribute,
            wrap_width,
            lines,
            start_line,
        }
    }

    /// Raw text as supplied by the caller.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rendering attribute, `None` for unstyled entries.
    pub fn attribute(&self) -> Option<&A> {
        self.attribute.as_ref()
    }

    /// Width of the cached wrap.
    pub fn wrap_width(&self) -> Option<usize> {
        self.wrap_width
    }

    /// Wrapped physical lines, in display order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Physical line at `index`, if any.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of physical lines. Always >= 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Logical line number of the first physical line, as stored at the last
    /// (re)index. Not adjusted for eviction.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub(crate) fn set_start_line(&mut self, start_line: usize) {
        self.start_line = start_line;
    }

    /// Re-wrap at `width`. Returns `false` without doing any work when the
    /// cached wrap already has that width.
    pub fn rewrap(&mut self, width: Option<usize>) -> bool {
        if self.wrap_width == width {
            return false;
        }
        self.wrap_width = width;
        self.lines = wrap_text(&self.text, width);
        true
    }
}
