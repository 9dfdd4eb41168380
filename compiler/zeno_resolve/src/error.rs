//! Binding errors.

use thiserror::Error;
use zeno_ir::{Name, SourcePos, StringLookup};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A name with no declaration in any enclosing scope.
    #[error("undefined identifier")]
    UndefinedIdentifier { name: Name, pos: SourcePos },
}

impl ResolveError {
    pub fn pos(&self) -> SourcePos {
        match self {
            ResolveError::UndefinedIdentifier { pos, .. } => *pos,
        }
    }

    /// Message with names spelled out.
    pub fn message(&self, names: &dyn StringLookup) -> String {
        match self {
            ResolveError::UndefinedIdentifier { name, .. } => {
                format!("undefined identifier `{}`", names.lookup(*name))
            }
        }
    }
}
