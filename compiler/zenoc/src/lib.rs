//! Zeno compiler driver.
//!
//! Runs the front end pipeline over one source file:
//!
//! ```text
//! bytes ──▶ lex ──▶ parse ──┬──▶ bind
//!                           └──▶ check
//! ```
//!
//! Each command stops after its own phase and prints that phase's dump.
//! Phase errors become diagnostics; the exit status is non-zero iff an
//! error diagnostic was reported.

pub mod driver;
pub mod options;
pub mod reporting;

use std::fs;
use std::io::{self, Read, Write};
use std::sync::Once;

use zeno_diagnostic::{
    Category, ColorMode, Diagnostic, DiagnosticQueue, DiagnosticSink, TerminalEmitter,
};
use zeno_ir::STDIN_PATH;

pub use options::{Command, Invocation, Options, UsageError, USAGE};

pub const EXIT_SUCCESS: u8 = 0;
/// An error diagnostic was reported.
pub const EXIT_FAILURE: u8 = 1;
/// The command line could not be parsed.
pub const EXIT_USAGE: u8 = 2;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber when `ZENO_LOG` or `RUST_LOG` is set.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_env("ZENO_LOG").or_else(|_| EnvFilter::try_from_default_env());
        if let Ok(filter) = filter {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Standard streams of one invocation.
pub struct Streams<'a> {
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    pub stderr_is_tty: bool,
}

/// Run the driver on `args` (without the program name) and return the exit
/// status.
pub fn run<S: AsRef<str>>(args: &[S], streams: &mut Streams<'_>) -> u8 {
    let options = match Options::parse(args) {
        Ok(Invocation::Run(options)) => options,
        Ok(Invocation::Help) => {
            let _ = streams.stdout.write_all(USAGE.as_bytes());
            return EXIT_SUCCESS;
        }
        Err(err) => {
            let diagnostic = Diagnostic::error(Category::Driver, err.to_string());
            let _ = TerminalEmitter::new(&mut *streams.stderr).emit(&diagnostic);
            let _ = streams.stderr.write_all(USAGE.as_bytes());
            return EXIT_USAGE;
        }
    };

    let mut queue = DiagnosticQueue::new();
    match read_input(&options.input, streams.stdin) {
        Ok(bytes) => {
            if let Err(err) = driver::execute(&options, &bytes, streams.stdout, &mut queue) {
                queue.report(Diagnostic::error(
                    Category::System,
                    format!("cannot write output: {err}"),
                ));
            }
        }
        Err(err) => queue.report(
            Diagnostic::error(Category::System, format!("cannot read input: {err}"))
                .with_source(display_path(&options.input)),
        ),
    }

    let mut emitter =
        TerminalEmitter::with_color_mode(&mut *streams.stderr, ColorMode::Auto, streams.stderr_is_tty);
    let _ = emitter.emit_all(&queue.flush());
    if queue.has_errors() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

fn read_input(path: &str, stdin: &mut dyn Read) -> io::Result<Vec<u8>> {
    if path == "-" {
        let mut bytes = Vec::new();
        stdin.read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        fs::read(path)
    }
}

fn display_path(path: &str) -> &str {
    if path == "-" {
        STDIN_PATH
    } else {
        path
    }
}
