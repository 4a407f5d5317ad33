//! Execution adapter around the embedded Lua engine.
//!
//! The engine itself ([mlua](https://docs.rs/mlua)) is treated as a black
//! box: [`Executor::run`] builds a fresh interpreter, installs the host
//! bindings from [`bindings::HostBindings`], evaluates the submitted source
//! and normalizes the result or failure into display text. Nothing in this
//! crate parses or evaluates the language itself.
//!
//! A new interpreter is built per run, so globals never leak between runs and
//! a replayed prefix (see [`crate::debugger`]) always starts from a clean
//! slate.

pub mod bindings;
pub mod sink;

use mlua::{Lua, LuaOptions, StdLib};
use tracing::debug;

use self::bindings::HostBindings;
use self::sink::OutputSink;

/// Chunk name the engine reports in error locations.
const CHUNK_NAME: &str = "editor";

/// Result of submitting one source buffer to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program ran to completion; `stdout` holds the captured output.
    Success { stdout: String },
    /// Evaluation raised; `error` is the engine's message, one line.
    Failure { error: String },
}

impl RunOutcome {
    /// Text for the output pane: the captured output, or `Error: <message>`.
    pub fn display_text(&self) -> String {
        match self {
            RunOutcome::Success { stdout } => stdout.clone(),
            RunOutcome::Failure { error } => format!("Error: {error}"),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RunOutcome::Failure { .. })
    }
}

/// Submits source text to a fresh embedded interpreter and captures what the
/// program printed.
///
/// The interpreter is loaded with the compute libraries only (math, string,
/// table); the playground offers no file, OS or terminal access beyond the
/// injected `print`.
#[derive(Debug, Default)]
pub struct Executor;

impl Executor {
    pub fn new() -> Self {
        Executor
    }

    /// Evaluate `source`. Every failure the engine raises is caught here and
    /// flattened into [`RunOutcome::Failure`]; this never panics and never
    /// propagates an evaluation error.
    pub fn run(&self, source: &str) -> RunOutcome {
        let sink = OutputSink::new();
        match self.eval(source, &sink) {
            Ok(()) => RunOutcome::Success {
                stdout: sink.contents(),
            },
            Err(err) => {
                let error = failure_message(&err);
                debug!(%error, "evaluation failed");
                RunOutcome::Failure { error }
            }
        }
    }

    fn eval(&self, source: &str, sink: &OutputSink) -> mlua::Result<()> {
        let lua = Lua::new_with(
            StdLib::MATH | StdLib::STRING | StdLib::TABLE,
            LuaOptions::default(),
        )?;
        HostBindings::new(sink.clone()).install(&lua)?;
        lua.load(source).set_name(CHUNK_NAME).exec()
    }
}

/// Flatten an engine error into a single-line message, digging through
/// callback wrappers and dropping tracebacks.
fn failure_message(err: &mlua::Error) -> String {
    match err {
        mlua::Error::SyntaxError { message, .. } => first_line(message),
        mlua::Error::RuntimeError(message) => first_line(message),
        mlua::Error::CallbackError { cause, .. } => failure_message(cause),
        other => first_line(&other.to_string()),
    }
}

fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or_default().trim().to_string()
}
