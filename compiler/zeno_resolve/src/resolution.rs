//! Symbol resolution: bind every name to its declaration.

use tracing::trace;
use zeno_ir::ast::{ExprId, ExprKind, Item, ItemId};
use zeno_ir::AstContext;
use zeno_stack::ensure_sufficient_stack;

use crate::error::ResolveError;
use crate::symbols::SymbolTable;

/// Resolve the names in `item`'s signature and body.
///
/// Opens a scope holding the function's own name, so the function can refer
/// to itself. The scope is closed again on every exit path; the first
/// unresolved name aborts resolution.
///
/// # Panics
///
/// Panics if [`symbol_generation`](crate::symbol_generation) has not run on
/// `item`, or if a name in it was already resolved.
pub fn symbol_resolution(
    ctx: &mut AstContext,
    item: ItemId,
    symbols: &mut SymbolTable,
) -> Result<(), ResolveError> {
    let Item::Function(func) = ctx.item(item);
    let (name, ty, body) = (func.name, func.ty, func.body);
    let Some(decl) = ctx.item_decl(item) else {
        panic!("symbol resolution before generation on {item:?}");
    };

    symbols.push_scope();
    symbols.declare(name, decl);
    let result = resolve_expr(ctx, symbols, ty).and_then(|()| resolve_expr(ctx, symbols, body));
    symbols.pop_scope();
    result
}

fn resolve_expr(
    ctx: &mut AstContext,
    symbols: &SymbolTable,
    expr: ExprId,
) -> Result<(), ResolveError> {
    ensure_sufficient_stack(|| {
        let node = ctx.expr(expr);
        match node.kind {
            ExprKind::Return { value } => resolve_expr(ctx, symbols, value),
            ExprKind::FunctionType { return_type } => resolve_expr(ctx, symbols, return_type),
            ExprKind::Name(name) => {
                let pos = node.pos;
                let decl = symbols
                    .lookup(name)
                    .ok_or(ResolveError::UndefinedIdentifier { name, pos })?;
                trace!(?expr, ?decl, "resolved name");
                ctx.set_referent(expr, decl);
                Ok(())
            }
            ExprKind::IntLiteral(_) | ExprKind::SimpleType(_) => Ok(()),
        }
    })
}
