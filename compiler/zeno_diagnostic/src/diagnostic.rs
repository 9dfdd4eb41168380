//! Diagnostic records.

use std::fmt;

use zeno_ir::SourcePos;

/// Severity of a diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which part of the compiler produced a diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Command line handling.
    Driver,
    /// I/O and other environment failures.
    System,
    Tokenize,
    Parse,
    /// Binding and type checking.
    Typecheck,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Driver => "driver",
            Category::System => "system",
            Category::Tokenize => "tokenize",
            Category::Parse => "parse",
            Category::Typecheck => "typecheck",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported condition.
///
/// `line` and `column` are 1-based; a `line` of 0 means the diagnostic has
/// no source position. An empty `source` means it is not tied to a file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub level: Level,
    pub category: Category,
    pub source: String,
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl Diagnostic {
    pub fn new(level: Level, category: Category, message: impl Into<String>) -> Self {
        Diagnostic {
            level,
            category,
            source: String::new(),
            line: 0,
            column: 0,
            message: message.into(),
        }
    }

    pub fn error(category: Category, message: impl Into<String>) -> Self {
        Self::new(Level::Error, category, message)
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Attach a position. [`SourcePos::NONE`] leaves the diagnostic
    /// unpositioned.
    #[must_use]
    pub fn at(mut self, pos: SourcePos) -> Self {
        self.line = pos.line;
        self.column = pos.column;
        self
    }

    pub fn has_position(&self) -> bool {
        self.line != 0
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

#[cfg(test)]
mod tests;
