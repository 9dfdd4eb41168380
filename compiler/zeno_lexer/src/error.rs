//! Lexer errors.

use thiserror::Error;
use zeno_ir::SourcePos;

/// What went wrong.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    #[error("invalid UTF-8 encoding")]
    BadEncoding,
    /// A well-formed character that cannot start a token.
    #[error("unexpected character U+{0:04X}")]
    UnexpectedCharacter(u32),
    #[error("too many lines in source file")]
    LineLimitExceeded,
    #[error("too many characters in line")]
    ColumnLimitExceeded,
    #[error("too many characters in file")]
    CharacterLimitExceeded,
    #[error("unclosed block comment")]
    UnclosedBlockComment,
    #[error("decimal literal cannot have leading zero")]
    DecimalLeadingZero,
    #[error("invalid integer literal")]
    BadIntLiteral,
}

/// The single fatal error that stopped lexing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub pos: SourcePos,
}

impl LexError {
    #[inline]
    pub fn new(kind: LexErrorKind, pos: SourcePos) -> Self {
        LexError { kind, pos }
    }
}
