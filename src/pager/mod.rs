//! Interactive pager over a [`ScrollBuffer`] (impure shell).
//!
//! A small host for the buffer: owns the terminal, maps keys to scroll
//! positions, forwards resizes to `set_display_size`, and paints the current
//! page plus a one-row status line.

use crate::buffer::ScrollBuffer;
use crate::render::PageView;
use crate::source::InputError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during pager operations
#[derive(Debug, Error)]
pub enum PagerError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Rows taken by the status line under the page.
const STATUS_ROWS: u16 = 1;

/// Style attribute for a line of input text.
///
/// Lines mentioning `ERROR` are red, lines mentioning `WARN` yellow, anything
/// else unstyled.
pub fn style_for_line(text: &str) -> Option<Style> {
    if text.contains("ERROR") {
        Some(Style::default().fg(Color::Red))
    } else if text.contains("WARN") {
        Some(Style::default().fg(Color::Yellow))
    } else {
        None
    }
}

/// Pager application
///
/// Generic over backend to support testing with TestBackend
pub struct Pager<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    buffer: ScrollBuffer<Style>,
    /// Logical line shown on the first page row.
    top_line: usize,
    /// Stick to the last page as lines arrive or the terminal resizes.
    follow: bool,
}

impl Pager<CrosstermBackend<Stdout>> {
    /// Create a pager on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen
    ///
    /// # Errors
    ///
    /// Returns `PagerError::Io` if the terminal cannot be configured.
    pub fn new(buffer: ScrollBuffer<Style>, follow: bool) -> Result<Self, PagerError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Self::with_terminal(terminal, buffer, follow)
    }

    /// Run the event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns `PagerError::Io` on terminal read or draw failures.
    pub fn run(&mut self) -> Result<(), PagerError> {
        loop {
            self.draw()?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => {}
            }
        }
    }
}

impl<B> Pager<B>
where
    B: Backend,
{
    /// Create a pager drawing to `terminal`, sized to the terminal's current
    /// dimensions.
    ///
    /// # Errors
    ///
    /// Returns `PagerError::Io` if the terminal size cannot be read.
    pub fn with_terminal(
        terminal: Terminal<B>,
        buffer: ScrollBuffer<Style>,
        follow: bool,
    ) -> Result<Self, PagerError> {
        let size = terminal.size()?;
        let mut pager = Self {
            terminal,
            buffer,
            top_line: 0,
            follow,
        };
        pager.handle_resize(size.width, size.height);
        Ok(pager)
    }

    /// The buffer being paged.
    pub fn buffer(&self) -> &ScrollBuffer<Style> {
        &self.buffer
    }

    /// Logical line at the top of the page.
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    /// Whether the pager sticks to the last page.
    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Append a line of text, styled by [`style_for_line`].
    pub fn push_line(&mut self, text: impl Into<String>) {
        let text = text.into();
        let style = style_for_line(&text);
        self.buffer.add_line(text, style);
        if self.follow {
            self.top_line = self.buffer.last_page_start();
        } else {
            // Eviction can shrink the line count under the current position.
            self.scroll_to(self.top_line);
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let page = self.page_height().max(1);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_down(page),
            KeyCode::PageUp | KeyCode::Char('b') => self.scroll_up(page),
            KeyCode::Home | KeyCode::Char('g') => {
                self.follow = false;
                self.scroll_to(0);
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.follow = true;
                self.scroll_to(self.buffer.last_page_start());
            }
            _ => {}
        }

        false
    }

    /// Apply a new terminal size.
    ///
    /// The entry on the top row stays on the top row across the re-wrap.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);

        let anchor = self.buffer.store().resolve(self.top_line);
        let page_height = height.saturating_sub(STATUS_ROWS);

        if !self.buffer.set_display_size(width, page_height) {
            return;
        }

        if self.follow {
            self.top_line = self.buffer.last_page_start();
            return;
        }

        let store = self.buffer.store();
        let anchored = anchor.and_then(|location| {
            let entry = store.get(location.entry)?;
            let sub_line = location.sub_line.min(entry.line_count() - 1);
            Some(store.translated_start(entry) + sub_line)
        });
        self.scroll_to(anchored.unwrap_or(0));
    }

    /// Render the current frame
    ///
    /// # Errors
    ///
    /// Returns `PagerError::Io` if drawing fails.
    pub fn draw(&mut self) -> Result<(), PagerError> {
        let status = self.status_text();
        let buffer = &self.buffer;
        let top_line = self.top_line;

        self.terminal.draw(|frame| {
            let [page_area, status_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_ROWS)])
                    .areas(frame.area());
            frame.render_widget(PageView::new(buffer, top_line), page_area);
            frame.render_widget(
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::REVERSED)),
                status_area,
            );
        })?;

        Ok(())
    }

    fn page_height(&self) -> usize {
        self.buffer
            .store()
            .viewport()
            .map_or(0, |viewport| usize::from(viewport.height))
    }

    fn scroll_to(&mut self, line: usize) {
        self.top_line = line.min(self.buffer.last_page_start());
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_to(self.top_line.saturating_add(lines));
    }

    fn scroll_up(&mut self, lines: usize) {
        self.follow = false;
        self.scroll_to(self.top_line.saturating_sub(lines));
    }

    fn status_text(&self) -> String {
        let total = self.buffer.line_count();
        let first = if total == 0 { 0 } else { self.top_line + 1 };
        let last = (self.top_line + self.page_height()).min(total);
        format!(
            " {}-{} of {} lines, {} entries{}",
            first,
            last,
            total,
            self.buffer.entry_count(),
            if self.follow { " [follow]" } else { "" }
        )
    }
}

/// Initialize and run the pager over `buffer`.
///
/// Handles terminal setup and always restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
///
/// # Errors
///
/// Returns `PagerError::Io` on terminal failures.
pub fn run(buffer: ScrollBuffer<Style>, follow: bool) -> Result<(), PagerError> {
    let mut pager = Pager::new(buffer, follow)?;

    let result = pager.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), PagerError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "pager_tests.rs"]
mod tests;
