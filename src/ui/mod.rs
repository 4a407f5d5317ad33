//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard/mouse event loop, pane focus,
//!   modal dialogs
//! - **[`editor`]** — the working text buffer behind the editor pane
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (editor, output, library, status bar, modal)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with optional
//! initial buffer text and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod editor;
pub mod panes;
pub mod theme;

pub use app::App;
