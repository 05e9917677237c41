//! In-memory surface: a fixed number of text rows.

use std::fmt;

use super::Surface;

/// One painted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRow<A> {
    /// Text written to the row, empty if untouched.
    pub text: String,
    /// Attributes active when the row was written, outermost first.
    pub attributes: Vec<A>,
}

impl<A> Default for TextRow<A> {
    fn default() -> Self {
        Self {
            text: String::new(),
            attributes: Vec::new(),
        }
    }
}

/// A surface that keeps rows in memory.
///
/// Useful for hosts that do their own painting and for tests. Writes past
/// the last row are dropped.
#[derive(Debug, Clone)]
pub struct TextSurface<A> {
    rows: Vec<TextRow<A>>,
    cursor: usize,
    active: Vec<A>,
}

impl<A> TextSurface<A> {
    /// Create a blank surface of `height` rows.
    pub fn new(height: usize) -> Self {
        Self {
            rows: std::iter::repeat_with(TextRow::default).take(height).collect(),
            cursor: 0,
            active: Vec::new(),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[TextRow<A>] {
        &self.rows
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<&TextRow<A>> {
        self.rows.get(index)
    }

    /// Text of every row, top to bottom.
    pub fn lines(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.text.as_str()).collect()
    }

    /// Row the next `write_line` goes to.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<A: Clone + PartialEq> Surface<A> for TextSurface<A> {
    fn clear(&mut self) {
        self.rows.fill_with(TextRow::default);
        self.cursor = 0;
        self.active.clear();
    }

    fn write_line(&mut self, line: &str) {
        if let Some(row) = self.rows.get_mut(self.cursor) {
            row.text = line.to_string();
            row.attributes = self.active.clone();
        }
        self.cursor = self.cursor.saturating_add(1);
    }

    fn attribute_on(&mut self, attribute: &A) {
        self.active.push(attribute.clone());
    }

    fn attribute_off(&mut self, attribute: &A) {
        if let Some(position) = self.active.iter().rposition(|a| a == attribute) {
            self.active.remove(position);
        }
    }
}

impl<A> fmt::Display for TextSurface<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            f.write_str(&row.text)?;
        }
        Ok(())
    }
}
