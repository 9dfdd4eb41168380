//! Zeno compiler CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use zenoc::Streams;

fn main() -> ExitCode {
    zenoc::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let stderr = io::stderr();
    let stderr_is_tty = stderr.is_terminal();
    let code = zenoc::run(
        &args,
        &mut Streams {
            stdin: &mut io::stdin().lock(),
            stdout: &mut io::stdout().lock(),
            stderr: &mut stderr.lock(),
            stderr_is_tty,
        },
    );
    ExitCode::from(code)
}
