//! Standard scope shared by the binder and the type checker.

use crate::ast::{Decl, DeclId, DeclKind, SimpleTypeKind};
use crate::{AstContext, Name};

/// One predeclared name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PreludeEntry {
    pub name: Name,
    /// Declaration the binder resolves the name to.
    pub binding: DeclId,
    /// Constant declaration the type checker evaluates the name to.
    pub constant: DeclId,
}

/// Names visible in every program before any user declaration.
#[derive(Clone, Debug, Default)]
pub struct Prelude {
    entries: Vec<PreludeEntry>,
}

impl Prelude {
    /// An empty prelude.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard prelude: `Int32` as a builtin type.
    pub fn standard(ctx: &mut AstContext) -> Self {
        let name = ctx.intern(SimpleTypeKind::Int32.name());
        let binding = ctx.alloc_decl(Decl {
            name,
            kind: DeclKind::BuiltinInt,
        });
        let value = ctx.simple_type_expr(SimpleTypeKind::Int32);
        let ty = ctx.simple_type(SimpleTypeKind::Type);
        let constant = ctx.alloc_decl(Decl {
            name,
            kind: DeclKind::Const { value, ty },
        });
        Prelude {
            entries: vec![PreludeEntry {
                name,
                binding,
                constant,
            }],
        }
    }

    pub fn entries(&self) -> &[PreludeEntry] {
        &self.entries
    }
}
