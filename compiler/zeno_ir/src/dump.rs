//! Textual dumps of tokens and AST nodes.
//!
//! The AST dump is a nested constructor-like listing with two-space
//! indentation. A node whose fields are all scalars prints on one line;
//! any node with a child node prints one field per line:
//!
//! ```text
//! FunctionItem(
//!   name = "f",
//!   type = FunctionTypeExpr(
//!     return_type = NameExpr(name = "Int32"),
//!   ),
//!   body = ReturnExpr(
//!     value = IntLiteralExpr(value = 42),
//!   ),
//! )
//! ```
//!
//! Indentation stops growing after 32 levels.
//!
//! Once the type checker has run, expressions also show their `type`, and
//! expressions with a different constant form are shown in that form.

use std::fmt::Write;

use crate::ast::{ExprId, ExprKind, Item, ItemId, SimpleTypeKind, Type, TypeId};
use crate::token::{TokenList, TokenValue};
use crate::{AstContext, Name};

/// Deepest indentation written; deeper nodes stay at this level so the dump
/// grows linearly with nesting.
const MAX_INDENT: usize = 32;

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level.min(MAX_INDENT) {
        out.push_str("  ");
    }
}

/// Renders straight into `out`. Expression chains are walked with an
/// explicit stack of open nodes so nesting depth never reaches the native
/// stack.
struct AstDumper<'a> {
    ctx: &'a AstContext,
    out: String,
}

/// A multi-line node whose closing lines are still owed.
struct OpenNode {
    indent: usize,
    ty: Option<String>,
}

impl<'a> AstDumper<'a> {
    fn new(ctx: &'a AstContext) -> Self {
        AstDumper {
            ctx,
            out: String::new(),
        }
    }

    fn item(&mut self, id: ItemId) {
        let ctx = self.ctx;
        match ctx.item(id) {
            Item::Function(func) => {
                let name = self.quoted(func.name);
                self.out.push_str("FunctionItem(\n");
                push_indent(&mut self.out, 1);
                let _ = writeln!(self.out, "name = {name},");
                self.field(1, "type", func.ty);
                self.field(1, "body", func.body);
                self.out.push(')');
            }
        }
    }

    fn field(&mut self, indent: usize, name: &str, value: ExprId) {
        push_indent(&mut self.out, indent);
        let _ = write!(self.out, "{name} = ");
        self.expr(value, indent);
        self.out.push_str(",\n");
    }

    fn expr(&mut self, root: ExprId, indent: usize) {
        let ctx = self.ctx;
        let mut open = Vec::new();
        let mut id = root;
        let mut indent = indent;
        loop {
            let shown = match ctx.const_eval_memo(id) {
                Some(Some(evaluated)) => evaluated,
                _ => id,
            };
            let ty = ctx
                .type_memo(shown)
                .or_else(|| ctx.type_memo(id))
                .map(|ty| self.ty(ty));
            let (label, child, scalar) = match &ctx.expr(shown).kind {
                ExprKind::Return { value } => ("ReturnExpr", Some(("value", *value)), None),
                ExprKind::FunctionType { return_type } => {
                    ("FunctionTypeExpr", Some(("return_type", *return_type)), None)
                }
                ExprKind::IntLiteral(value) => {
                    ("IntLiteralExpr", None, Some(("value", value.to_string())))
                }
                ExprKind::Name(name) => ("NameExpr", None, Some(("name", self.quoted(*name)))),
                ExprKind::SimpleType(kind) => (simple_type_expr_label(*kind), None, None),
            };
            match child {
                Some((name, next)) => {
                    let _ = writeln!(self.out, "{label}(");
                    push_indent(&mut self.out, indent + 1);
                    let _ = write!(self.out, "{name} = ");
                    open.push(OpenNode { indent, ty });
                    id = next;
                    indent += 1;
                }
                None => {
                    self.flat(label, scalar, ty);
                    break;
                }
            }
        }
        while let Some(node) = open.pop() {
            self.out.push_str(",\n");
            if let Some(ty) = node.ty {
                push_indent(&mut self.out, node.indent + 1);
                let _ = writeln!(self.out, "type = {ty},");
            }
            push_indent(&mut self.out, node.indent);
            self.out.push(')');
        }
    }

    /// A node with only scalar fields, on one line.
    fn flat(&mut self, label: &str, scalar: Option<(&str, String)>, ty: Option<String>) {
        let _ = write!(self.out, "{label}(");
        let mut fields = scalar.into_iter().chain(ty.map(|ty| ("type", ty)));
        if let Some((name, value)) = fields.next() {
            let _ = write!(self.out, "{name} = {value}");
        }
        for (name, value) in fields {
            let _ = write!(self.out, ", {name} = {value}");
        }
        self.out.push(')');
    }

    fn ty(&self, id: TypeId) -> String {
        let mut depth = 0;
        let mut current = id;
        let kind = loop {
            match self.ctx.ty(current) {
                Type::Simple(kind) => break *kind,
                Type::Function { return_type } => {
                    depth += 1;
                    current = *return_type;
                }
            }
        };
        let mut out = "FunctionType(return_type = ".repeat(depth);
        let _ = write!(out, "{}()", kind.name());
        out.push_str(&")".repeat(depth));
        out
    }

    fn quoted(&self, name: Name) -> String {
        format!("{:?}", self.ctx.name_text(name))
    }
}

fn simple_type_expr_label(kind: SimpleTypeKind) -> &'static str {
    match kind {
        SimpleTypeKind::Never => "NeverExpr",
        SimpleTypeKind::Void => "VoidExpr",
        SimpleTypeKind::Int32 => "Int32Expr",
        SimpleTypeKind::Type => "TypeExpr",
    }
}

/// Dump an item and everything reachable from it.
pub fn dump_item(ctx: &AstContext, item: ItemId) -> String {
    let mut dumper = AstDumper::new(ctx);
    dumper.item(item);
    dumper.out.push('\n');
    dumper.out
}

/// Dump one token per line: position, kind name and payload.
pub fn dump_tokens(ctx: &AstContext, tokens: &TokenList) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = write!(out, "{} {}", token.pos, token.kind.name());
        match token.value {
            TokenValue::None => {}
            TokenValue::Int(value) => {
                let _ = write!(out, " {value}");
            }
            TokenValue::Ident(name) => {
                let _ = write!(out, " {:?}", ctx.name_text(name));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests;
