//! Output formatters
//!
//! A formatter owns an output stream and renders the document event sequence
//! (title, section, subsection, paragraph) in one concrete text syntax. The
//! emitted byte sequence is part of each formatter's contract: generated
//! documents get diffed, so renderers must be bit-exact.

use std::io;

mod rest;
mod terminal;
mod wiki;

pub use rest::RestFormatter;
pub use terminal::TerminalFormatter;
pub use wiki::WikiFormatter;

/// Capability set shared by all output renderers.
///
/// Writes are ordered and append-only; a formatter assumes exclusive access
/// to its stream for the duration of one document. Stream errors propagate
/// to the caller untouched.
pub trait Formatter {
    /// Render the document title
    fn title(&mut self, name: &str) -> io::Result<()>;

    /// Render a section heading
    fn section(&mut self, name: &str) -> io::Result<()>;

    /// Render a subsection heading
    fn subsection(&mut self, name: &str) -> io::Result<()>;

    /// Render a paragraph of body text
    fn paragraph(&mut self, text: &str) -> io::Result<()>;
}
