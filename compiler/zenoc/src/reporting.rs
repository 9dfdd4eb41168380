//! Conversion of phase errors into diagnostics.
//!
//! Messages that mention names or types are spelled through the context
//! that owns them.

use zeno_diagnostic::{Category, Diagnostic};
use zeno_ir::{AstContext, SourcePos};
use zeno_lexer::LexError;
use zeno_parse::ParseFailure;
use zeno_resolve::ResolveError;
use zeno_types::TypeError;

pub trait ToDiagnostic {
    /// A diagnostic without a source name; the driver attaches it.
    fn to_diagnostic(&self, ctx: &AstContext) -> Diagnostic;
}

impl ToDiagnostic for LexError {
    fn to_diagnostic(&self, _ctx: &AstContext) -> Diagnostic {
        Diagnostic::error(Category::Tokenize, self.to_string()).at(self.pos)
    }
}

impl ToDiagnostic for ParseFailure {
    fn to_diagnostic(&self, _ctx: &AstContext) -> Diagnostic {
        let pos = match self {
            ParseFailure::Syntax(err) => err.pos,
            ParseFailure::Grammar(_) => SourcePos::NONE,
        };
        Diagnostic::error(Category::Parse, self.to_string()).at(pos)
    }
}

impl ToDiagnostic for ResolveError {
    fn to_diagnostic(&self, ctx: &AstContext) -> Diagnostic {
        Diagnostic::error(Category::Typecheck, self.message(ctx)).at(self.pos())
    }
}

impl ToDiagnostic for TypeError {
    fn to_diagnostic(&self, ctx: &AstContext) -> Diagnostic {
        Diagnostic::error(Category::Typecheck, self.message(ctx)).at(self.pos())
    }
}
