//! ratatui adapter: paint pages into a `Buffer`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use super::Surface;
use crate::buffer::ScrollBuffer;

/// A [`Surface`] over a rectangular area of a ratatui [`Buffer`].
///
/// Attributes are ratatui [`Style`]s. Nested attributes are patched over
/// each other in the order they were turned on. Rows beyond the area are
/// dropped, and each row is clipped to the area width.
#[derive(Debug)]
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    row: u16,
    styles: Vec<Style>,
}

impl<'a> BufferSurface<'a> {
    /// Create a surface over `area`, clipped to the buffer's own area.
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(*buf.area());
        Self {
            buf,
            area,
            row: 0,
            styles: Vec::new(),
        }
    }

    /// Area actually painted.
    pub fn area(&self) -> Rect {
        self.area
    }

    fn current_style(&self) -> Style {
        self.styles
            .iter()
            .fold(Style::default(), |acc, style| acc.patch(*style))
    }
}

impl Surface<Style> for BufferSurface<'_> {
    fn clear(&mut self) {
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.reset();
                }
            }
        }
        self.row = 0;
        self.styles.clear();
    }

    fn write_line(&mut self, line: &str) {
        if self.row < self.area.height {
            let style = self.current_style();
            self.buf.set_stringn(
                self.area.x,
                self.area.y + self.row,
                line,
                usize::from(self.area.width),
                style,
            );
        }
        self.row = self.row.saturating_add(1);
    }

    fn attribute_on(&mut self, attribute: &Style) {
        self.styles.push(*attribute);
    }

    fn attribute_off(&mut self, attribute: &Style) {
        if let Some(position) = self.styles.iter().rposition(|s| s == attribute) {
            self.styles.remove(position);
        }
    }
}

/// Widget that draws one page of a [`ScrollBuffer`].
///
/// The page height comes from the buffer's display size, so hosts should
/// keep `set_display_size` in step with the area they render into.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    buffer: &'a ScrollBuffer<Style>,
    top_line: usize,
}

impl<'a> PageView<'a> {
    /// Page of `buffer` starting at logical line `top_line`.
    pub fn new(buffer: &'a ScrollBuffer<Style>, top_line: usize) -> Self {
        Self { buffer, top_line }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut surface = BufferSurface::new(buf, area);
        self.buffer.draw_page(&mut surface, self.top_line);
    }
}
