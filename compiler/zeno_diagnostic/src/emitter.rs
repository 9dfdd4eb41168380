//! Terminal output.
//!
//! One line per diagnostic:
//!
//! ```text
//! main.zn:1:27: error: undeclared name `x`
//! zeno: error: no input file
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, DiagnosticSink, Level};

/// Name shown for diagnostics that are not tied to a source file.
const PROGRAM_NAME: &str = "zeno";

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const INFO: &str = "\x1b[1;36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes diagnostics as `source:line:column: level: message`.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter {
            writer,
            colors: false,
        }
    }

    /// `is_tty` decides [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let source = if diagnostic.source.is_empty() {
            PROGRAM_NAME
        } else {
            diagnostic.source.as_str()
        };
        self.write_bold(source)?;
        if diagnostic.has_position() {
            self.write_bold(&format!(":{}:{}", diagnostic.line, diagnostic.column))?;
        }
        self.writer.write_all(b": ")?;
        self.write_level(diagnostic.level)?;
        writeln!(self.writer, ": {}", diagnostic.message)
    }

    pub fn emit_all<'d>(
        &mut self,
        diagnostics: impl IntoIterator<Item = &'d Diagnostic>,
    ) -> io::Result<()> {
        for diagnostic in diagnostics {
            self.emit(diagnostic)?;
        }
        self.writer.flush()
    }

    fn write_bold(&mut self, text: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{}{text}{}", colors::BOLD, colors::RESET)
        } else {
            self.writer.write_all(text.as_bytes())
        }
    }

    fn write_level(&mut self, level: Level) -> io::Result<()> {
        if !self.colors {
            return self.writer.write_all(level.as_str().as_bytes());
        }
        let color = match level {
            Level::Error => colors::ERROR,
            Level::Warning => colors::WARNING,
            Level::Info => colors::INFO,
        };
        write!(self.writer, "{color}{level}{}", colors::RESET)
    }
}

/// Reports go straight to the writer; write failures are dropped.
impl<W: Write> DiagnosticSink for TerminalEmitter<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        let _ = self.emit(&diagnostic);
    }
}
