//! Zeno parser: tokens to AST.
//!
//! Builds exactly one function item into an [`AstContext`]. Parsing stops at
//! the first token that does not fit, reporting the syntactic category that
//! was expected there.

mod cursor;
mod error;
mod grammar;

pub use cursor::TokenCursor;
pub use error::{ParseError, ParseFailure, SyntaxCategory};

use tracing::debug;
use zeno_ir::ast::ItemId;
use zeno_ir::{AstContext, TokenList};

/// Parse a whole token stream into its single root item.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(ctx: &mut AstContext, tokens: &TokenList) -> Result<ItemId, ParseFailure> {
    let cursor = TokenCursor::new(tokens)?;
    let result = grammar::Parser::new(cursor, ctx).item();
    if let Err(failure) = &result {
        debug!(%failure, "parse failed");
    }
    result
}
