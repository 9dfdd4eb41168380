//! Grammar productions.
//!
//! ```text
//! item          := 'def' IDENT params '->' type body EOF
//! params        := '(' ')'
//! body          := '{' statement '}'
//! statement     := 'return' expr ';'?
//! expr          := INT | IDENT | function_type
//! type          := IDENT | function_type
//! function_type := '(' ')' '->' type
//! ```

use tracing::trace;
use zeno_ir::ast::{ExprId, ItemId};
use zeno_ir::{AstContext, Name, Token, TokenKind, TokenValue};
use zeno_stack::ensure_sufficient_stack;

use crate::cursor::TokenCursor;
use crate::error::{ParseFailure, SyntaxCategory};

type PResult<T> = Result<T, ParseFailure>;

pub(crate) struct Parser<'a> {
    cursor: TokenCursor<'a>,
    ctx: &'a mut AstContext,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(cursor: TokenCursor<'a>, ctx: &'a mut AstContext) -> Self {
        Parser { cursor, ctx }
    }

    pub(crate) fn item(&mut self) -> PResult<ItemId> {
        let def = self.cursor.expect(TokenKind::Def, SyntaxCategory::Item)?;
        let name = self.identifier(SyntaxCategory::Item)?;
        let params = self.params()?;
        self.cursor.expect(TokenKind::Arrow, SyntaxCategory::ReturnType)?;
        let return_type = self.type_expr()?;
        let ty = self.ctx.function_type_expr(return_type, params.pos);
        let body = self.body()?;
        self.cursor.expect(TokenKind::EndOfFile, SyntaxCategory::Item)?;
        trace!(name = self.ctx.name_text(name), "parsed function item");
        Ok(self.ctx.function_item(name, ty, body, def.pos))
    }

    fn identifier(&mut self, category: SyntaxCategory) -> PResult<Name> {
        let token = self.cursor.expect(TokenKind::Identifier, category)?;
        ident_name(token)
    }

    /// `( )`, returning the opening parenthesis.
    fn params(&mut self) -> PResult<&'a Token> {
        let open = self
            .cursor
            .expect(TokenKind::LeftParen, SyntaxCategory::ParameterList)?;
        self.cursor
            .expect(TokenKind::RightParen, SyntaxCategory::ParameterList)?;
        Ok(open)
    }

    fn body(&mut self) -> PResult<ExprId> {
        self.cursor.expect(TokenKind::LeftBrace, SyntaxCategory::Item)?;
        let statement = self.statement()?;
        self.cursor
            .expect(TokenKind::RightBrace, SyntaxCategory::Statement)?;
        Ok(statement)
    }

    fn statement(&mut self) -> PResult<ExprId> {
        let keyword = self
            .cursor
            .expect(TokenKind::Return, SyntaxCategory::Statement)?;
        let value = self.expr()?;
        self.cursor.eat(TokenKind::Semicolon);
        Ok(self.ctx.return_expr(value, keyword.pos))
    }

    fn expr(&mut self) -> PResult<ExprId> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::IntLiteral => {
                self.cursor.advance();
                match token.value {
                    TokenValue::Int(value) => Ok(self.ctx.int_literal_expr(value, token.pos)),
                    _ => Err(malformed(token)),
                }
            }
            TokenKind::Identifier => {
                let name = self.identifier(SyntaxCategory::Expression)?;
                Ok(self.ctx.name_expr(name, token.pos))
            }
            TokenKind::LeftParen => self.function_type(),
            _ => Err(self.cursor.unexpected(SyntaxCategory::Expression).into()),
        }
    }

    fn type_expr(&mut self) -> PResult<ExprId> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Identifier => {
                let name = self.identifier(SyntaxCategory::Type)?;
                Ok(self.ctx.name_expr(name, token.pos))
            }
            TokenKind::LeftParen => self.function_type(),
            _ => Err(self.cursor.unexpected(SyntaxCategory::Type).into()),
        }
    }

    /// `( ) -> type`
    fn function_type(&mut self) -> PResult<ExprId> {
        ensure_sufficient_stack(|| {
            let open = self.params()?;
            self.cursor
                .expect(TokenKind::Arrow, SyntaxCategory::ReturnType)?;
            let return_type = self.type_expr()?;
            Ok(self.ctx.function_type_expr(return_type, open.pos))
        })
    }
}

fn ident_name(token: &Token) -> PResult<Name> {
    match token.value {
        TokenValue::Ident(name) => Ok(name),
        _ => Err(malformed(token)),
    }
}

fn malformed(token: &Token) -> ParseFailure {
    ParseFailure::Grammar(format!(
        "{} token at {} carries no value",
        token.kind.name(),
        token.pos
    ))
}
