//! Command line parsing.

use std::fmt;

use thiserror::Error;

pub const USAGE: &str = "\
Usage: zeno <command> [options] [--] <file>

Commands:
  tokenize    Print the tokens of a source file
  parse       Print the syntax tree of a source file
  bind        Resolve names and print the syntax tree
  check       Type check and print the typed syntax tree

Options:
  --quiet            Do not print output on success
  --expect-failure   Succeed only if the command's own phase fails
  -h, --help         Print this help

Use `-` as the file to read standard input.
";

/// Subcommand. Each one runs the pipeline up to and including its phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Tokenize,
    Parse,
    Bind,
    Check,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokenize" => Some(Command::Tokenize),
            "parse" => Some(Command::Parse),
            "bind" => Some(Command::Bind),
            "check" => Some(Command::Check),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Command::Tokenize => "tokenize",
            Command::Parse => "parse",
            Command::Bind => "bind",
            Command::Check => "check",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    /// Source path, or `-` for standard input.
    pub input: String,
    pub quiet: bool,
    pub expect_failure: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("no command given")]
    NoCommand,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
    #[error("multiple input files")]
    MultipleInputs,
    #[error("no input file")]
    NoInput,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Run(Options),
}

impl Options {
    /// Parse the arguments that follow the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Invocation, UsageError> {
        let mut args = args.iter().map(AsRef::as_ref);
        let command = match args.next() {
            None => return Err(UsageError::NoCommand),
            Some("-h" | "--help") => return Ok(Invocation::Help),
            Some(name) => Command::from_name(name)
                .ok_or_else(|| UsageError::UnknownCommand(name.to_string()))?,
        };

        let mut quiet = false;
        let mut expect_failure = false;
        let mut input: Option<&str> = None;
        let mut flags_done = false;
        for arg in args {
            let is_flag = !flags_done && arg.len() > 1 && arg.starts_with('-');
            if !is_flag {
                if input.replace(arg).is_some() {
                    return Err(UsageError::MultipleInputs);
                }
                continue;
            }
            match arg {
                "--" => flags_done = true,
                "--quiet" => quiet = true,
                "--expect-failure" => expect_failure = true,
                "-h" | "--help" => return Ok(Invocation::Help),
                _ => return Err(UsageError::UnknownFlag(arg.to_string())),
            }
        }

        let input = input.ok_or(UsageError::NoInput)?;
        Ok(Invocation::Run(Options {
            command,
            input: input.to_string(),
            quiet,
            expect_failure,
        }))
    }
}
