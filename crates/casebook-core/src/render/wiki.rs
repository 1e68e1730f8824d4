//! Wiki markup renderer

use std::io::{self, Write};

use super::Formatter;

/// Renders headings as `= name =` wiki markup, one extra `=` per level
pub struct WikiFormatter<W: Write> {
    stream: W,
}

impl<W: Write> WikiFormatter<W> {
    /// Create a formatter writing to `stream`
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    /// Consume the formatter and return the underlying stream
    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl<W: Write> Formatter for WikiFormatter<W> {
    fn title(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.stream, "= {} =\n", name)
    }

    fn section(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.stream)?;
        writeln!(self.stream, "== {} ==\n", name)
    }

    fn subsection(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.stream, "=== {} ===\n", name)
    }

    fn paragraph(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stream, "{}\n", text.trim())
    }
}
