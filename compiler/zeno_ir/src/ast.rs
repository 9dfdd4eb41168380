//! AST node types.
//!
//! Nodes live in [`AstContext`](crate::AstContext) and refer to each other
//! through typed index handles, never through references. Nodes are
//! immutable once allocated; everything later phases learn about a node
//! (its declaration, referent, evaluated form, type) is kept in side tables
//! on the context.

use std::fmt;

use crate::{IntValue, Name, SourcePos};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub(crate) fn from_index(index: usize) -> Self {
                match u32::try_from(index) {
                    Ok(raw) => $name(raw),
                    Err(_) => panic!(concat!(stringify!($name), " space exhausted")),
                }
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_id!(
    /// Index of an [`Item`].
    ItemId
);
define_id!(
    /// Index of an [`Expr`].
    ExprId
);
define_id!(
    /// Index of a [`Type`].
    TypeId
);
define_id!(
    /// Index of a [`Decl`].
    DeclId
);

/// Zero-argument types. Each has one canonical [`TypeId`] per context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleTypeKind {
    /// Bottom type; the type of `return`.
    Never,
    Void,
    Int32,
    /// The type of types.
    Type,
}

impl SimpleTypeKind {
    pub const ALL: [SimpleTypeKind; 4] = [
        SimpleTypeKind::Never,
        SimpleTypeKind::Void,
        SimpleTypeKind::Int32,
        SimpleTypeKind::Type,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SimpleTypeKind::Never => "Never",
            SimpleTypeKind::Void => "Void",
            SimpleTypeKind::Int32 => "Int32",
            SimpleTypeKind::Type => "Type",
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

/// Top-level item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Function(FunctionItem),
}

/// `def name() -> T { body }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionItem {
    pub name: Name,
    /// Function type expression built from the signature.
    pub ty: ExprId,
    pub body: ExprId,
    pub pos: SourcePos,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: SourcePos,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    IntLiteral(IntValue),
    Return { value: ExprId },
    /// Reference to a named declaration.
    Name(Name),
    SimpleType(SimpleTypeKind),
    /// `() -> return_type` in expression position.
    FunctionType { return_type: ExprId },
}

/// First-class type value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Simple(SimpleTypeKind),
    Function { return_type: TypeId },
}

/// A named binding site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decl {
    pub name: Name,
    pub kind: DeclKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclKind {
    /// The builtin integer type name.
    BuiltinInt,
    /// A compile-time constant with its evaluated value and type.
    Const { value: ExprId, ty: TypeId },
    FunctionItem { item: ItemId },
}
