//! Diagnostics for the Zeno compiler.
//!
//! Compiler phases return structured errors; the driver turns each one into
//! a [`Diagnostic`] record and reports it to a [`DiagnosticSink`]. Records
//! are rendered for humans by the [`TerminalEmitter`].

mod diagnostic;
mod emitter;
mod queue;

pub use diagnostic::{Category, Diagnostic, Level};
pub use emitter::{ColorMode, TerminalEmitter};
pub use queue::DiagnosticQueue;

/// Receiver of diagnostic records.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}
