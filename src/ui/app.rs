//! Main TUI application state and event routing

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
    backend::Backend,
};
use rustc_hash::FxHashSet;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::debugger::{DebugSession, StepOutcome};
use crate::engine::{Executor, RunOutcome};
use crate::ui::editor::EditorBuffer;
use crate::ui::panes;
use crate::workspace::Workspace;

/// Interval between steps in auto-play mode
const PLAY_INTERVAL: Duration = Duration::from_secs(1);

/// Cursor jump for PageUp/PageDown in the editor
const PAGE_JUMP: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Editor,
    Library,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Library,
            FocusedPane::Library => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Editor,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Output,
            FocusedPane::Library => FocusedPane::Editor,
            FocusedPane::Output => FocusedPane::Library,
        }
    }
}

/// A dialog that consumes all input while it is up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Prompt { kind: PromptKind, input: String },
    Notice { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveSnippet,
    NewFolder,
}

/// One row of the library tree as rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRow {
    Folder {
        name: String,
        open: bool,
        count: usize,
    },
    Snippet {
        name: String,
        indented: bool,
    },
}

/// The main application state
pub struct App {
    /// The working text buffer
    pub editor: EditorBuffer,

    /// Snippets and folders, in memory only
    pub workspace: Workspace,

    /// Execution adapter over the embedded engine
    executor: Executor,

    /// Result of the most recent run or debug step
    pub output: Option<RunOutcome>,

    /// Active debug session, if any
    pub debug: Option<DebugSession>,

    /// 0-based line indexes carrying a breakpoint; read by the debugger
    pub breakpoints: FxHashSet<usize>,

    /// Name of the snippet currently loaded in the editor, if any
    pub open_entry: Option<String>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Active prompt or notice dialog
    pub modal: Option<Modal>,

    /// Status message to display
    pub status_message: String,

    /// Selected row in the library tree
    pub library_cursor: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether debug auto-play mode is active
    pub is_playing: bool,

    /// Last time a play-mode step was taken
    last_play_time: Instant,

    /// Per-pane scroll state
    editor_scroll: usize,
    output_scroll: usize,
    library_scroll: usize,

    /// Editor pane rect from the last render, for gutter clicks
    editor_area: Rect,
}

impl App {
    /// Create a new app, optionally preloading the editor buffer
    pub fn new(initial_text: Option<&str>) -> Self {
        App {
            editor: initial_text.map(EditorBuffer::from_text).unwrap_or_default(),
            workspace: Workspace::new(),
            executor: Executor::new(),
            output: None,
            debug: None,
            breakpoints: FxHashSet::default(),
            open_entry: None,
            focused_pane: FocusedPane::Editor,
            modal: None,
            status_message: String::from("Ready"),
            library_cursor: 0,
            should_quit: false,
            is_playing: false,
            last_play_time: Instant::now(),
            editor_scroll: 0,
            output_scroll: 0,
            library_scroll: 0,
            editor_area: Rect::default(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                self.step_debug();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        // Left column: Editor (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        self.editor_area = left_rows[0];

        let debug_line = self.debug.as_ref().and_then(DebugSession::current_line);
        let modal_up = self.modal.is_some();
        let rows = self.tree_rows();
        self.library_cursor = self.library_cursor.min(rows.len().saturating_sub(1));

        panes::render_editor_pane(
            frame,
            left_rows[0],
            &self.editor,
            &self.breakpoints,
            debug_line,
            self.open_entry.as_deref(),
            self.focused_pane == FocusedPane::Editor && !modal_up,
            &mut self.editor_scroll,
        );

        panes::render_output_pane(
            frame,
            left_rows[1],
            self.output.as_ref(),
            self.focused_pane == FocusedPane::Output && !modal_up,
            &mut self.output_scroll,
        );

        panes::render_library_pane(
            frame,
            columns[1],
            &rows,
            self.library_cursor,
            self.open_entry.as_deref(),
            self.focused_pane == FocusedPane::Library && !modal_up,
            &mut self.library_scroll,
        );

        let debug_progress = self
            .debug
            .as_ref()
            .map(|s| (s.position(), s.total_lines()));
        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            debug_progress,
            self.is_playing,
            self.focused_pane,
            modal_up,
        );

        if let Some(modal) = &self.modal {
            panes::render_modal(frame, size, modal);
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.modal.is_some() {
            self.handle_modal_key(key);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('r') => {
                    self.run_buffer();
                    return;
                }
                KeyCode::Char('s') => {
                    self.open_prompt(PromptKind::SaveSnippet);
                    return;
                }
                KeyCode::Char('n') => {
                    self.open_prompt(PromptKind::NewFolder);
                    return;
                }
                KeyCode::Char('d') => {
                    if self.debug.is_some() {
                        self.stop_debug();
                    } else {
                        self.start_debug();
                    }
                    return;
                }
                KeyCode::Char('b') => {
                    self.toggle_breakpoint(self.editor.cursor_row);
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
                return;
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
                return;
            }
            _ => {}
        }

        // While a session is active the debugger owns the keyboard
        if self.debug.is_some() {
            match key.code {
                KeyCode::Right | KeyCode::Char('s') => {
                    self.is_playing = false;
                    self.step_debug();
                }
                KeyCode::Char(' ') => {
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        // Fire the first step on the next loop pass
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVAL)
                            .unwrap_or_else(Instant::now);
                        self.status_message = String::from("Playing...");
                    } else {
                        self.status_message = String::from("Paused");
                    }
                }
                KeyCode::Esc | KeyCode::Char('x') => self.stop_debug(),
                _ => {}
            }
            return;
        }

        match self.focused_pane {
            FocusedPane::Editor => self.handle_editor_key(key),
            FocusedPane::Library => self.handle_library_key(key),
            FocusedPane::Output => self.handle_output_key(key),
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            KeyCode::PageUp => self.editor.page_up(PAGE_JUMP),
            KeyCode::PageDown => self.editor.page_down(PAGE_JUMP),
            KeyCode::Enter => self.editor.insert_newline(),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Delete => self.editor.delete_forward(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.editor.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_library_key(&mut self, key: KeyEvent) {
        let rows = self.tree_rows();
        match key.code {
            KeyCode::Up => {
                self.library_cursor = self.library_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if !rows.is_empty() {
                    self.library_cursor = (self.library_cursor + 1).min(rows.len() - 1);
                }
            }
            KeyCode::Enter => match rows.get(self.library_cursor) {
                Some(TreeRow::Folder { name, .. }) => {
                    let name = name.clone();
                    self.workspace.folders.toggle(&name);
                }
                Some(TreeRow::Snippet { name, .. }) => {
                    let name = name.clone();
                    self.load_snippet(&name);
                }
                None => {}
            },
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(TreeRow::Snippet { name, .. }) = rows.get(self.library_cursor) {
                    let name = name.clone();
                    self.delete_snippet(&name);
                }
            }
            KeyCode::Char('n') => self.open_prompt(PromptKind::NewFolder),
            KeyCode::Char('r') => self.refresh_library(),
            KeyCode::Char('s') => self.share_selected(),
            _ => {}
        }
    }

    fn handle_output_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.output_scroll = self.output_scroll.saturating_sub(1),
            KeyCode::Down => self.output_scroll = self.output_scroll.saturating_add(1),
            KeyCode::PageUp => self.output_scroll = self.output_scroll.saturating_sub(PAGE_JUMP),
            KeyCode::PageDown => self.output_scroll = self.output_scroll.saturating_add(PAGE_JUMP),
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        match modal {
            Modal::Notice { .. } => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.modal = None;
                }
            }
            Modal::Prompt { kind, input } => match key.code {
                KeyCode::Esc => {
                    self.modal = None;
                    self.status_message = String::from("Cancelled");
                }
                KeyCode::Enter => {
                    let kind = *kind;
                    let input = input.clone();
                    self.modal = None;
                    match kind {
                        PromptKind::SaveSnippet => self.save_buffer_as(&input),
                        PromptKind::NewFolder => self.create_folder(&input),
                    }
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    input.push(c);
                }
                _ => {}
            },
        }
    }

    /// Handle mouse events: a left click on the editor gutter toggles the
    /// clicked line's breakpoint
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.modal.is_some() {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let area = self.editor_area;
            let in_gutter = mouse.column > area.x
                && mouse.column <= area.x + panes::GUTTER_WIDTH
                && mouse.row > area.y
                && mouse.row + 1 < area.y + area.height;
            if in_gutter {
                let line = self.editor_scroll + (mouse.row - area.y - 1) as usize;
                if line < self.editor.line_count() {
                    self.toggle_breakpoint(line);
                }
            }
        }
    }

    /// Run the editor buffer through the execution adapter
    pub fn run_buffer(&mut self) {
        let source = self.editor.text();
        debug!(len = source.len(), "running buffer");
        let outcome = self.executor.run(&source);
        self.status_message = if outcome.is_failure() {
            String::from("Run failed")
        } else {
            String::from("Run complete")
        };
        self.output = Some(outcome);
        self.output_scroll = 0;
    }

    /// Save the buffer under `path` (`name` or `folder/name`)
    pub fn save_buffer_as(&mut self, path: &str) {
        let path = path.trim();
        let (folder, name) = match path.split_once('/') {
            Some((folder, name)) => (Some(folder.trim()), name.trim()),
            None => (None, path),
        };
        match self
            .workspace
            .save_snippet(name, &self.editor.text(), folder)
        {
            Ok(()) => {
                self.open_entry = Some(name.to_string());
                self.status_message = format!("Saved '{name}'");
                info!(name, folder, "snippet saved");
            }
            Err(err) => self.notice(err.to_string()),
        }
    }

    /// Copy a snippet's content into the editor buffer
    pub fn load_snippet(&mut self, name: &str) {
        let Some(content) = self
            .workspace
            .snippets
            .get(name)
            .map(|s| s.content.clone())
        else {
            return;
        };
        self.editor.set_text(&content);
        self.open_entry = Some(name.to_string());
        self.breakpoints.clear();
        self.status_message = format!("Loaded '{name}'");
        info!(name, "snippet loaded");
    }

    /// Delete every snippet named `name`; clears the open-entry indicator if
    /// it pointed at the deleted name
    pub fn delete_snippet(&mut self, name: &str) {
        let removed = self.workspace.snippets.delete(name);
        if removed > 0 {
            if self.open_entry.as_deref() == Some(name) {
                self.open_entry = None;
            }
            self.status_message = format!("Deleted '{name}'");
            info!(name, removed, "snippet deleted");
        }
        let len = self.tree_rows().len();
        self.library_cursor = self.library_cursor.min(len.saturating_sub(1));
    }

    /// Create a folder, surfacing validation failures as a notice
    pub fn create_folder(&mut self, name: &str) {
        match self.workspace.create_folder(name) {
            Ok(()) => {
                self.status_message = format!("Created folder '{}'", name.trim());
                info!(name, "folder created");
            }
            Err(err) => self.notice(err.to_string()),
        }
    }

    /// Placeholder: refresh performs no functional read
    pub fn refresh_library(&mut self) {
        self.notice("Refresh is not implemented.");
    }

    /// Placeholder: share performs no functional write
    pub fn share_selected(&mut self) {
        self.notice("Sharing is not implemented.");
    }

    /// Start a debug session over the current buffer
    pub fn start_debug(&mut self) {
        let session = DebugSession::new(&self.editor.text());
        self.status_message = format!("Debugging {} line(s)", session.total_lines());
        info!(lines = session.total_lines(), "debug session started");
        self.debug = Some(session);
        self.is_playing = false;
    }

    /// Take one debug step; ends the session once the cursor passes the last
    /// line
    pub fn step_debug(&mut self) {
        let Some(session) = self.debug.as_mut() else {
            return;
        };
        match session.step(&self.executor, &self.breakpoints) {
            StepOutcome::Executed { line, outcome } => {
                self.status_message = format!("Executed through line {}", line + 1);
                self.output = Some(outcome);
                self.output_scroll = usize::MAX; // clamp to bottom on render
            }
            StepOutcome::Skipped { line } => {
                self.status_message = format!("Skipped line {} (no breakpoint)", line + 1);
            }
            StepOutcome::Finished => {}
        }
        if self.debug.as_ref().is_some_and(DebugSession::is_finished) {
            self.debug = None;
            self.is_playing = false;
            self.status_message = String::from("Debug session finished");
            info!("debug session finished");
        }
    }

    /// Stop the active debug session, discarding its state
    pub fn stop_debug(&mut self) {
        if self.debug.take().is_some() {
            self.is_playing = false;
            self.status_message = String::from("Debug stopped");
            info!("debug session stopped");
        }
    }

    /// Toggle a line's membership in the breakpoint set
    pub fn toggle_breakpoint(&mut self, line: usize) {
        if self.breakpoints.insert(line) {
            self.status_message = format!("Breakpoint set at line {}", line + 1);
        } else {
            self.breakpoints.remove(&line);
            self.status_message = format!("Breakpoint cleared at line {}", line + 1);
        }
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        self.modal = Some(Modal::Prompt {
            kind,
            input: String::new(),
        });
    }

    fn notice(&mut self, message: impl Into<String>) {
        self.modal = Some(Modal::Notice {
            message: message.into(),
        });
    }

    /// Flatten the workspace into the library tree: folders first (with their
    /// snippets when open), then root snippets
    pub fn tree_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for folder in self.workspace.folders.iter() {
            let count = self.workspace.snippets.in_folder(Some(&folder.name)).count();
            rows.push(TreeRow::Folder {
                name: folder.name.clone(),
                open: folder.open,
                count,
            });
            if folder.open {
                for snippet in self.workspace.snippets.in_folder(Some(&folder.name)) {
                    rows.push(TreeRow::Snippet {
                        name: snippet.name.clone(),
                        indented: true,
                    });
                }
            }
        }
        for snippet in self.workspace.snippets.in_folder(None) {
            rows.push(TreeRow::Snippet {
                name: snippet.name.clone(),
                indented: false,
            });
        }
        rows
    }
}
