//! Symbol generation: create the declarations that binding sites introduce.

use tracing::trace;
use zeno_ir::ast::{Decl, DeclKind, ExprId, ExprKind, Item, ItemId};
use zeno_ir::AstContext;
use zeno_stack::ensure_sufficient_stack;

/// Declare `item` and walk its body.
///
/// # Panics
///
/// Panics if the item was already declared.
pub fn symbol_generation(ctx: &mut AstContext, item: ItemId) {
    let Item::Function(func) = ctx.item(item);
    let (name, body) = (func.name, func.body);
    assert!(
        ctx.item_decl(item).is_none(),
        "symbol generation ran twice on {item:?}"
    );
    let decl = ctx.alloc_decl(Decl {
        name,
        kind: DeclKind::FunctionItem { item },
    });
    ctx.set_item_decl(item, decl);
    let visited = generate_expr(ctx, body);
    trace!(?decl, visited, "generated function declaration");
}

/// Walk an expression for nested binding sites; returns the node count.
fn generate_expr(ctx: &mut AstContext, expr: ExprId) -> usize {
    ensure_sufficient_stack(|| match ctx.expr(expr).kind {
        ExprKind::Return { value } => 1 + generate_expr(ctx, value),
        ExprKind::FunctionType { return_type } => 1 + generate_expr(ctx, return_type),
        ExprKind::IntLiteral(_) | ExprKind::Name(_) | ExprKind::SimpleType(_) => 1,
    })
}
