//! # Introduction
//!
//! luapad is a terminal scratchpad for Lua: an editor pane, an output pane, a
//! snippet library with mock folders, and a line-stepping replay debugger.
//! Execution is delegated entirely to an embedded third-party engine
//! ([mlua](https://docs.rs/mlua)); this crate owns only the state around it.
//!
//! ## Execution flow
//!
//! ```text
//! Editor buffer → Executor (fresh engine per run) → OutputSink → Output pane
//! ```
//!
//! 1. [`engine`] — execution adapter: builds an interpreter per run, installs
//!    the host `print` binding, and normalizes results and failures into
//!    display text.
//! 2. [`workspace`] — in-memory snippet store and folder index; nothing is
//!    persisted across sessions.
//! 3. [`debugger`] — the prefix-replay stepper: each step re-runs the source
//!    up to the current line, honoring the breakpoint set.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod debugger;
pub mod engine;
pub mod logging;
pub mod ui;
pub mod workspace;
