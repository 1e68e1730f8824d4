//! reStructuredText renderer

use std::io::{self, Write};

use super::Formatter;

/// Renders headings as reStructuredText rules: the title over- and
/// under-ruled with `=` plus a table-of-contents directive, sections
/// under-ruled with `=`, subsections with `-`.
pub struct RestFormatter<W: Write> {
    stream: W,
}

impl<W: Write> RestFormatter<W> {
    /// Create a formatter writing to `stream`
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    /// Consume the formatter and return the underlying stream
    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl<W: Write> Formatter for RestFormatter<W> {
    fn title(&mut self, name: &str) -> io::Result<()> {
        let rule = "=".repeat(name.len());
        writeln!(self.stream, "{}", rule)?;
        writeln!(self.stream, "{}", name)?;
        writeln!(self.stream, "{}", rule)?;
        writeln!(self.stream)?;
        writeln!(self.stream, ".. contents::")?;
        writeln!(self.stream)?;
        writeln!(self.stream)
    }

    fn section(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.stream)?;
        writeln!(self.stream, "{}", name)?;
        writeln!(self.stream, "{}", "=".repeat(name.len()))?;
        writeln!(self.stream)
    }

    fn subsection(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.stream, "{}", name)?;
        writeln!(self.stream, "{}", "-".repeat(name.len()))?;
        writeln!(self.stream)
    }

    fn paragraph(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stream, "{}\n", text.trim())
    }
}
