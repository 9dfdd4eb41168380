//! Zeno symbol binder.
//!
//! Two passes over one function item, always in this order:
//!
//! 1. [`symbol_generation`] allocates the declaration the item introduces.
//! 2. [`symbol_resolution`] binds every name expression to a declaration,
//!    recording it as the expression's referent.
//!
//! The standard names come from a [`Prelude`] supplied by the caller.

mod error;
mod generation;
mod resolution;
mod symbols;

pub use error::ResolveError;
pub use generation::symbol_generation;
pub use resolution::symbol_resolution;
pub use symbols::SymbolTable;

use zeno_ir::ast::ItemId;
use zeno_ir::{AstContext, Prelude};

/// Run both binding passes on `item` against `prelude`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn bind_item(ctx: &mut AstContext, item: ItemId, prelude: &Prelude) -> Result<(), ResolveError> {
    symbol_generation(ctx, item);
    let mut symbols = SymbolTable::with_prelude(prelude);
    let result = symbol_resolution(ctx, item, &mut symbols);
    debug_assert_eq!(symbols.depth(), 1);
    result
}
