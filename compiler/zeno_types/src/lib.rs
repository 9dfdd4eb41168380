//! Zeno type checker.
//!
//! [`TypeChecker`] answers three memoized queries over expressions:
//!
//! - [`const_eval`](TypeChecker::const_eval) reduces an expression to its
//!   canonical constant form.
//! - [`as_type`](TypeChecker::as_type) lifts a type-denoting constant to a
//!   first-class [`Type`](zeno_ir::ast::Type).
//! - [`type_expr`](TypeChecker::type_expr) computes an expression's type.
//!
//! [`check_item`] runs a full check of one function item. Checking is
//! fail-fast: the first [`TypeError`] aborts it.

mod checker;
mod error;

pub use checker::TypeChecker;
pub use error::TypeError;

use zeno_ir::ast::ItemId;
use zeno_ir::{AstContext, Prelude};

/// Type check `item` with the constants of `prelude` in scope.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check_item(ctx: &mut AstContext, item: ItemId, prelude: &Prelude) -> Result<(), TypeError> {
    TypeChecker::new(ctx, prelude).check_function(item)
}
