//! Pipeline execution for one source file.

use std::io::{self, Write};

use tracing::debug;
use zeno_diagnostic::{Category, Diagnostic, DiagnosticSink};
use zeno_ir::dump::{dump_item, dump_tokens};
use zeno_ir::ast::ItemId;
use zeno_ir::{AstContext, Prelude, SourceId, TokenList};
use zeno_lexer::{lex_source, LexerConfig};
use zeno_parse::parse;
use zeno_resolve::bind_item;
use zeno_types::check_item;

use crate::options::{Command, Options};
use crate::reporting::ToDiagnostic;

/// What the command's own phase produced.
enum Output {
    Tokens(TokenList),
    Item(ItemId),
}

/// A phase failure, not reported yet.
struct Failure {
    phase: Command,
    diagnostic: Diagnostic,
}

struct Session<'o> {
    options: &'o Options,
    ctx: AstContext,
    source: SourceId,
}

impl<'o> Session<'o> {
    fn new(options: &'o Options, bytes: &[u8]) -> Self {
        let mut ctx = AstContext::new();
        let source = ctx.load_source(&options.input, bytes);
        Session {
            options,
            ctx,
            source,
        }
    }

    fn fail(&self, phase: Command, err: &impl ToDiagnostic) -> Failure {
        Failure {
            phase,
            diagnostic: err.to_diagnostic(&self.ctx),
        }
    }

    /// Run every phase up to the command's own.
    fn run(&mut self) -> Result<Output, Failure> {
        let command = self.options.command;
        let tokens = lex_source(&mut self.ctx, self.source, LexerConfig::default())
            .map_err(|err| self.fail(Command::Tokenize, &err))?;
        if command == Command::Tokenize {
            return Ok(Output::Tokens(tokens));
        }

        let item = parse(&mut self.ctx, &tokens).map_err(|err| self.fail(Command::Parse, &err))?;
        match command {
            Command::Tokenize | Command::Parse => {}
            Command::Bind => {
                let prelude = Prelude::standard(&mut self.ctx);
                bind_item(&mut self.ctx, item, &prelude)
                    .map_err(|err| self.fail(Command::Bind, &err))?;
            }
            Command::Check => {
                let prelude = Prelude::standard(&mut self.ctx);
                check_item(&mut self.ctx, item, &prelude)
                    .map_err(|err| self.fail(Command::Check, &err))?;
            }
        }
        Ok(Output::Item(item))
    }

    fn dump(&self, output: &Output) -> String {
        match output {
            Output::Tokens(tokens) => dump_tokens(&self.ctx, tokens),
            Output::Item(item) => dump_item(&self.ctx, *item),
        }
    }
}

/// Run `options.command` over `bytes`, writing its dump to `out` and
/// reporting failures to `sink`.
///
/// With `expect_failure`, a failure of the command's own phase is the
/// expected outcome and is not reported; failures of earlier phases are.
pub fn execute(
    options: &Options,
    bytes: &[u8],
    out: &mut dyn Write,
    sink: &mut dyn DiagnosticSink,
) -> io::Result<()> {
    let mut session = Session::new(options, bytes);
    let result = session.run();
    let source_name = session.ctx.source_path(session.source).to_string();

    match result {
        Ok(_) if options.expect_failure => {
            sink.report(
                Diagnostic::error(
                    Category::Driver,
                    format!("{} was expected to fail", options.command),
                )
                .with_source(source_name),
            );
        }
        Ok(output) => {
            if !options.quiet {
                out.write_all(session.dump(&output).as_bytes())?;
            }
        }
        Err(failure) if options.expect_failure && failure.phase == options.command => {
            debug!(message = %failure.diagnostic.message, "failed as expected");
        }
        Err(failure) => sink.report(failure.diagnostic.with_source(source_name)),
    }
    Ok(())
}
