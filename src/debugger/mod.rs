//! Line-stepping replay debugger.
//!
//! This is not an interpreter-level debugger: the engine exposes no
//! suspend/resume surface, so "step" is approximated by re-submitting the
//! source prefix ending at the current line to a fresh interpreter on every
//! step. Earlier lines run again each time, side effects included.
//!
//! The breakpoint set is owned by the view (gutter clicks mutate it) and is
//! only read here: while it is non-empty, unmarked lines are passed over
//! without executing anything.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::engine::{Executor, RunOutcome};

/// A debug session over a frozen copy of the editor buffer.
#[derive(Debug, Clone)]
pub struct DebugSession {
    lines: Vec<String>,
    cursor: usize,
}

/// What a single step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The prefix ending at `line` (0-based) was executed.
    Executed { line: usize, outcome: RunOutcome },
    /// Breakpoints exist and `line` is not one of them; nothing ran.
    Skipped { line: usize },
    /// The cursor is already past the last line.
    Finished,
}

impl DebugSession {
    pub fn new(source: &str) -> Self {
        DebugSession {
            lines: source.lines().map(str::to_string).collect(),
            cursor: 0,
        }
    }

    /// 0-based index of the next line to consider, or `None` past the end.
    pub fn current_line(&self) -> Option<usize> {
        (self.cursor < self.lines.len()).then_some(self.cursor)
    }

    /// Number of lines already consumed (steps taken).
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    /// Advance one line.
    ///
    /// With a non-empty breakpoint set, lines outside the set are skipped
    /// without execution. Otherwise the whole prefix up to and including the
    /// current line is submitted to `executor` and the outcome returned.
    pub fn step(&mut self, executor: &Executor, breakpoints: &FxHashSet<usize>) -> StepOutcome {
        if self.cursor >= self.lines.len() {
            return StepOutcome::Finished;
        }
        let line = self.cursor;
        self.cursor += 1;
        if !breakpoints.is_empty() && !breakpoints.contains(&line) {
            debug!(line, "step skipped");
            return StepOutcome::Skipped { line };
        }
        let prefix = self.lines[..=line].join("\n");
        debug!(line, prefix_len = prefix.len(), "step replaying prefix");
        let outcome = executor.run(&prefix);
        StepOutcome::Executed { line, outcome }
    }
}
