//! Lexer configuration.

/// Default distance between tab stops.
pub const DEFAULT_TAB_STOP: u32 = 8;

/// Resource limits; exceeding any of them aborts lexing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexLimits {
    pub max_lines: u32,
    /// Characters per line, not counting the line terminator.
    pub max_line_chars: u32,
    /// Characters per file, counting line terminators and a BOM.
    pub max_file_chars: u32,
}

impl Default for LexLimits {
    fn default() -> Self {
        LexLimits {
            max_lines: 1_000_000,
            max_line_chars: 4_096,
            max_file_chars: 1 << 24,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Columns between tab stops; values below 1 are treated as 1.
    pub tab_stop: u32,
    pub limits: LexLimits,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            tab_stop: DEFAULT_TAB_STOP,
            limits: LexLimits::default(),
        }
    }
}

impl LexerConfig {
    #[must_use]
    pub fn with_tab_stop(mut self, tab_stop: u32) -> Self {
        self.tab_stop = tab_stop;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: LexLimits) -> Self {
        self.limits = limits;
        self
    }
}
