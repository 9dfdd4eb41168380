//! Zeno lexer: source bytes to tokens.
//!
//! Lexing is fail-fast. The result is either the complete token list,
//! always terminated by an `EndOfFile` token, or the first [`LexError`].
//!
//! # Pipeline
//!
//! ```text
//! SourceBuffer ──▶ Cursor ──▶ Lexer ──▶ TokenList
//!                                 └───▶ StringInterner (identifiers, big literals)
//! ```

mod config;
mod cursor;
mod error;
mod lexer;
mod utf8;

pub use config::{LexLimits, LexerConfig, DEFAULT_TAB_STOP};
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind};

use tracing::debug;
use zeno_ir::{AstContext, SourceBuffer, SourceId, StringInterner, TokenList};

/// Lex `source`, interning identifiers into `interner`.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex(
    source: &SourceBuffer,
    interner: &mut StringInterner,
    config: LexerConfig,
) -> Result<TokenList, LexError> {
    let result = lexer::Lexer::new(source, interner, config).run();
    match &result {
        Ok(tokens) => debug!(tokens = tokens.len(), "lexed"),
        Err(err) => debug!(kind = ?err.kind, pos = %err.pos, "lex error"),
    }
    result
}

/// Lex a source file loaded into `ctx`.
pub fn lex_source(
    ctx: &mut AstContext,
    source: SourceId,
    config: LexerConfig,
) -> Result<TokenList, LexError> {
    let (buffer, interner) = ctx.source_and_interner(source);
    lex(buffer, interner, config)
}

#[cfg(test)]
mod tests;
