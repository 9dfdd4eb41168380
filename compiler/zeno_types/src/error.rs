//! Type checking errors.

use thiserror::Error;
use zeno_ir::ast::TypeId;
use zeno_ir::{AstContext, Name, SourcePos};

/// The first failure of a check. Types are carried as live [`TypeId`]s so
/// the renderer can spell either side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("undeclared name")]
    UndeclaredName { name: Name, pos: SourcePos },

    #[error("type mismatch")]
    ExpectedType {
        expected: TypeId,
        actual: TypeId,
        pos: SourcePos,
    },

    #[error("return outside of function")]
    ReturnOutsideFunction { pos: SourcePos },
}

impl TypeError {
    pub fn pos(&self) -> SourcePos {
        match self {
            TypeError::UndeclaredName { pos, .. }
            | TypeError::ExpectedType { pos, .. }
            | TypeError::ReturnOutsideFunction { pos } => *pos,
        }
    }

    /// Message with names and types spelled out.
    pub fn message(&self, ctx: &AstContext) -> String {
        match *self {
            TypeError::UndeclaredName { name, .. } => {
                format!("undeclared name `{}`", ctx.name_text(name))
            }
            TypeError::ExpectedType {
                expected, actual, ..
            } => format!(
                "expected type `{}`, found `{}`",
                ctx.type_name(expected),
                ctx.type_name(actual)
            ),
            TypeError::ReturnOutsideFunction { .. } => self.to_string(),
        }
    }
}
