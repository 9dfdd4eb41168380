//! Line/column source positions.

use std::fmt;

/// A 1-based line/column position in a source file.
///
/// Line `0` means "no position" and is used for diagnostics that are not
/// attached to any location.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    /// No position.
    pub const NONE: SourcePos = SourcePos { line: 0, column: 0 };

    /// The first character of a file.
    pub const START: SourcePos = SourcePos { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        SourcePos { line, column }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
