//! # CLI Layer
//!
//! One client of the folio API, and the only place that knows about the
//! terminal: argument parsing, stdin sessions, colors, and exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: `run()` and the per-command handlers
//! - `compose`: the line-oriented draft session
//! - `print`: turns `CmdResult`s into text
//! - `logging`: the stderr tracing subscriber

mod commands;
mod compose;
mod logging;
mod print;
mod setup;

pub use commands::run;
