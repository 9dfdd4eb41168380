//! Parse errors.

use std::fmt;

use thiserror::Error;
use zeno_ir::{SourcePos, TokenKind};

/// Syntactic category the parser was looking for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxCategory {
    Item,
    Statement,
    Expression,
    Type,
    ParameterList,
    ReturnType,
}

impl SyntaxCategory {
    pub const fn description(self) -> &'static str {
        match self {
            SyntaxCategory::Item => "item",
            SyntaxCategory::Statement => "statement",
            SyntaxCategory::Expression => "expression",
            SyntaxCategory::Type => "type",
            SyntaxCategory::ParameterList => "parameter list",
            SyntaxCategory::ReturnType => "return type",
        }
    }
}

impl fmt::Display for SyntaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A token that does not fit the category expected at its position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("expected {expected}, found {found}")]
pub struct ParseError {
    pub expected: SyntaxCategory,
    pub found: TokenKind,
    pub pos: SourcePos,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// The token stream itself is malformed; no well-formed lexer output
    /// produces this.
    #[error("grammar error: {0}")]
    Grammar(String),
}
