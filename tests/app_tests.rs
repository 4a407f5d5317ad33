// Integration tests for the app-level routing: run, save/load/delete,
// folders, debugging, notices

use luapad::engine::RunOutcome;
use luapad::ui::app::{App, Modal, TreeRow};

#[test]
fn run_buffer_captures_output() {
    let mut app = App::new(Some("print('hi')"));
    app.run_buffer();

    assert_eq!(
        app.output,
        Some(RunOutcome::Success {
            stdout: String::from("hi\n"),
        })
    );
}

#[test]
fn run_buffer_surfaces_errors_as_display_text() {
    let mut app = App::new(Some("error('boom')"));
    app.run_buffer();

    let outcome = app.output.as_ref().expect("no outcome recorded");
    assert!(outcome.is_failure());
    assert!(outcome.display_text().starts_with("Error: "));
}

#[test]
fn save_then_load_restores_the_buffer() {
    let mut app = App::new(Some("print(1)"));
    app.save_buffer_as("a.lua");
    assert_eq!(app.open_entry.as_deref(), Some("a.lua"));

    app.editor.set_text("something else");
    app.load_snippet("a.lua");

    assert_eq!(app.editor.text(), "print(1)");
    assert_eq!(app.open_entry.as_deref(), Some("a.lua"));
}

#[test]
fn deleting_the_open_snippet_clears_the_indicator() {
    let mut app = App::new(Some("print(1)"));
    app.save_buffer_as("a.lua");
    assert_eq!(app.open_entry.as_deref(), Some("a.lua"));

    app.delete_snippet("a.lua");

    assert_eq!(app.open_entry, None);
    assert!(app.workspace.snippets.is_empty());
}

#[test]
fn deleting_another_snippet_keeps_the_indicator() {
    let mut app = App::new(Some("print(1)"));
    app.save_buffer_as("a.lua");
    app.save_buffer_as("b.lua");

    app.delete_snippet("a.lua");

    assert_eq!(app.open_entry.as_deref(), Some("b.lua"));
}

#[test]
fn empty_save_name_raises_a_notice_and_saves_nothing() {
    let mut app = App::new(Some("print(1)"));
    app.save_buffer_as("   ");

    assert!(matches!(app.modal, Some(Modal::Notice { .. })));
    assert!(app.workspace.snippets.is_empty());
    assert_eq!(app.open_entry, None);
}

#[test]
fn saving_into_a_folder_uses_the_path_prefix() {
    let mut app = App::new(Some("print(1)"));
    app.create_folder("utils");
    app.save_buffer_as("utils/a.lua");

    assert_eq!(app.workspace.snippets.in_folder(Some("utils")).count(), 1);
    assert_eq!(app.open_entry.as_deref(), Some("a.lua"));
}

#[test]
fn saving_into_an_unknown_folder_raises_a_notice() {
    let mut app = App::new(Some("print(1)"));
    app.save_buffer_as("nope/a.lua");

    assert!(matches!(app.modal, Some(Modal::Notice { .. })));
    assert!(app.workspace.snippets.is_empty());
}

#[test]
fn duplicate_folder_raises_a_notice_and_leaves_the_set() {
    let mut app = App::new(None);
    app.create_folder("utils");
    app.create_folder("utils");

    assert!(matches!(app.modal, Some(Modal::Notice { .. })));
    assert_eq!(app.workspace.folders.len(), 1);
}

#[test]
fn tree_rows_list_folders_then_root_snippets() {
    let mut app = App::new(Some("print(1)"));
    app.create_folder("utils");
    app.save_buffer_as("utils/a.lua");
    app.save_buffer_as("root.lua");

    let rows = app.tree_rows();
    assert_eq!(rows.len(), 3);
    assert!(matches!(
        &rows[0],
        TreeRow::Folder { name, open: true, count: 1 } if name == "utils"
    ));
    assert!(matches!(
        &rows[1],
        TreeRow::Snippet { name, indented: true } if name == "a.lua"
    ));
    assert!(matches!(
        &rows[2],
        TreeRow::Snippet { name, indented: false } if name == "root.lua"
    ));
}

#[test]
fn closed_folders_hide_their_snippets() {
    let mut app = App::new(Some("print(1)"));
    app.create_folder("utils");
    app.save_buffer_as("utils/a.lua");
    app.workspace.folders.toggle("utils");

    let rows = app.tree_rows();
    assert_eq!(rows.len(), 1);
    assert!(matches!(&rows[0], TreeRow::Folder { open: false, .. }));
}

#[test]
fn debug_steps_drive_the_output_pane() {
    let mut app = App::new(Some("print(1)\nprint(2)"));
    app.start_debug();
    assert!(app.debug.is_some());

    app.step_debug();
    assert_eq!(
        app.output,
        Some(RunOutcome::Success {
            stdout: String::from("1\n"),
        })
    );

    // The final step replays the full prefix and ends the session.
    app.step_debug();
    assert_eq!(
        app.output,
        Some(RunOutcome::Success {
            stdout: String::from("1\n2\n"),
        })
    );
    assert!(app.debug.is_none());
    assert_eq!(app.status_message, "Debug session finished");
}

#[test]
fn stopping_a_session_discards_its_state() {
    let mut app = App::new(Some("print(1)\nprint(2)"));
    app.start_debug();
    app.step_debug();
    app.stop_debug();

    assert!(app.debug.is_none());
    assert!(!app.is_playing);
}

#[test]
fn breakpoints_toggle_membership() {
    let mut app = App::new(Some("print(1)\nprint(2)"));
    app.toggle_breakpoint(1);
    assert!(app.breakpoints.contains(&1));

    app.toggle_breakpoint(1);
    assert!(app.breakpoints.is_empty());
}

#[test]
fn debug_honors_breakpoints_set_through_the_app() {
    let mut app = App::new(Some("print(1)\nprint(2)"));
    app.toggle_breakpoint(1);
    app.start_debug();

    // Line 1 has no breakpoint: skipped, output untouched.
    app.step_debug();
    assert_eq!(app.output, None);

    app.step_debug();
    assert_eq!(
        app.output,
        Some(RunOutcome::Success {
            stdout: String::from("1\n2\n"),
        })
    );
}

#[test]
fn refresh_and_share_are_placeholders() {
    let mut app = App::new(None);

    app.refresh_library();
    assert!(matches!(app.modal, Some(Modal::Notice { .. })));

    app.modal = None;
    app.share_selected();
    assert!(matches!(app.modal, Some(Modal::Notice { .. })));
}

#[test]
fn loading_a_snippet_clears_stale_breakpoints() {
    let mut app = App::new(Some("print(1)\nprint(2)"));
    app.toggle_breakpoint(1);
    app.save_buffer_as("a.lua");

    app.load_snippet("a.lua");
    assert!(app.breakpoints.is_empty());
}
