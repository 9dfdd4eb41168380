//! Token cursor.

use zeno_ir::{Token, TokenKind, TokenList};

use crate::error::{ParseError, ParseFailure, SyntaxCategory};

/// Position in a token stream that ends with `EndOfFile`.
///
/// The cursor never moves past the final token, so `current()` is always
/// valid.
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Result<Self, ParseFailure> {
        let tokens = tokens.as_slice();
        match tokens.last() {
            Some(last) if last.kind == TokenKind::EndOfFile => Ok(TokenCursor { tokens, pos: 0 }),
            Some(_) => Err(ParseFailure::Grammar(
                "token stream is not terminated by end of file".to_string(),
            )),
            None => Err(ParseFailure::Grammar("empty token stream".to_string())),
        }
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token. Stays put on `EndOfFile`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, or report what `category` needed here.
    pub fn expect(&mut self, kind: TokenKind, category: SyntaxCategory) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(category))
        }
    }

    /// Error for the current token not starting `category`.
    pub fn unexpected(&self, category: SyntaxCategory) -> ParseError {
        let token = self.current();
        ParseError {
            expected: category,
            found: token.kind,
            pos: token.pos,
        }
    }
}
