//! ANSI-coloured, indented terminal renderer

use std::io::{self, Write};

use super::Formatter;

/// SGR palette used by the terminal renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Green,
    BrightGreen,
    Yellow,
    BrightYellow,
    BrightWhite,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Green => "32",
            Style::BrightGreen => "32;1",
            Style::Yellow => "33",
            Style::BrightYellow => "33;1",
            Style::BrightWhite => "37;1",
        }
    }
}

/// Renders an indented tree with ANSI colour sequences.
///
/// Headings indent two columns per level. Paragraph text sits two columns
/// under the most recent heading and inherits a dimmer shade of its colour
/// (plain after a subsection).
pub struct TerminalFormatter<W: Write> {
    stream: W,
    last_indent: usize,
}

impl<W: Write> TerminalFormatter<W> {
    /// Create a formatter writing to `stream`
    pub fn new(stream: W) -> Self {
        Self {
            stream,
            last_indent: 0,
        }
    }

    /// Consume the formatter and return the underlying stream
    pub fn into_inner(self) -> W {
        self.stream
    }

    /// Write one line at the given indent, or at the hanging paragraph
    /// indent (last heading + 2) when no indent is pinned. Pinned indents
    /// become the new reference for following paragraphs.
    fn write_line(&mut self, line: &str, indent: Option<usize>, style: Option<Style>) -> io::Result<()> {
        let indent = match indent {
            Some(level) => {
                self.last_indent = level;
                level
            }
            None => self.last_indent + 2,
        };
        let padded = format!("{}{}", " ".repeat(indent), line);
        match style {
            Some(style) => write!(self.stream, "\x1b[{}m{}\x1b[0m", style.code(), padded),
            None => write!(self.stream, "{}", padded),
        }
    }
}

impl<W: Write> Formatter for TerminalFormatter<W> {
    fn title(&mut self, name: &str) -> io::Result<()> {
        self.write_line(&format!("{}\n", name), Some(0), Some(Style::BrightGreen))
    }

    fn section(&mut self, name: &str) -> io::Result<()> {
        self.write_line(&format!("{}\n", name), Some(2), Some(Style::BrightYellow))
    }

    fn subsection(&mut self, name: &str) -> io::Result<()> {
        self.write_line(&format!("{}\n", name), Some(4), Some(Style::BrightWhite))
    }

    fn paragraph(&mut self, text: &str) -> io::Result<()> {
        let style = match self.last_indent {
            0 => Some(Style::Green),
            2 => Some(Style::Yellow),
            _ => None,
        };
        let mut ends_with_newline = false;
        for line in text.trim().split_inclusive('\n') {
            self.write_line(line, None, style)?;
            ends_with_newline = line.ends_with('\n');
        }
        if !ends_with_newline {
            self.write_line("\n", None, style)?;
        }
        Ok(())
    }
}
