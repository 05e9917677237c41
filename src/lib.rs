//! scrollbuf
//!
//! Bounded scrollback buffer for character-grid terminal UIs.
//!
//! Entries are appended with an opaque attribute, wrapped to the display
//! width, and addressed by global display-line number. Any page can be drawn
//! onto a [`render::Surface`].
//!
//! Pure core: [`wrap`], [`model`], [`store`], [`render`], [`buffer`].
//! Impure shell: [`config`], [`logging`], [`source`], [`pager`].

pub mod buffer;
pub mod config;
pub mod logging;
pub mod model;
pub mod pager;
pub mod render;
pub mod source;
pub mod store;
pub mod wrap;

pub use buffer::ScrollBuffer;
pub use render::Surface;
