// Integration tests for the snippet store and folder index

use luapad::workspace::{Workspace, WorkspaceError};

#[test]
fn save_then_lookup_restores_content() {
    let mut workspace = Workspace::new();
    workspace
        .save_snippet("a.lua", "print(1)", None)
        .expect("save failed");

    let snippet = workspace.snippets.get("a.lua").expect("snippet missing");
    assert_eq!(snippet.content, "print(1)");
    assert_eq!(snippet.folder, None);
}

#[test]
fn duplicate_snippet_names_append_and_delete_removes_all() {
    let mut workspace = Workspace::new();
    workspace
        .save_snippet("a.lua", "print(1)", None)
        .expect("save failed");
    workspace
        .save_snippet("a.lua", "print(2)", None)
        .expect("save failed");

    // No duplicate-name guard on save: both entries exist.
    assert_eq!(workspace.snippets.len(), 2);
    // Lookup returns the first entry.
    assert_eq!(
        workspace.snippets.get("a.lua").map(|s| s.content.as_str()),
        Some("print(1)")
    );

    assert_eq!(workspace.snippets.delete("a.lua"), 2);
    assert!(workspace.snippets.is_empty());
}

#[test]
fn deleting_a_missing_name_removes_nothing() {
    let mut workspace = Workspace::new();
    workspace
        .save_snippet("a.lua", "print(1)", None)
        .expect("save failed");

    assert_eq!(workspace.snippets.delete("b.lua"), 0);
    assert_eq!(workspace.snippets.len(), 1);
}

#[test]
fn empty_snippet_name_is_rejected() {
    let mut workspace = Workspace::new();
    let result = workspace.save_snippet("   ", "print(1)", None);

    assert_eq!(result, Err(WorkspaceError::EmptyName));
    assert!(workspace.snippets.is_empty());
}

#[test]
fn saving_into_an_unknown_folder_is_rejected() {
    let mut workspace = Workspace::new();
    let result = workspace.save_snippet("a.lua", "print(1)", Some("utils"));

    assert_eq!(
        result,
        Err(WorkspaceError::UnknownFolder(String::from("utils")))
    );
    assert!(workspace.snippets.is_empty());
}

#[test]
fn saving_into_an_existing_folder_groups_by_reference() {
    let mut workspace = Workspace::new();
    workspace.create_folder("utils").expect("create failed");
    workspace
        .save_snippet("a.lua", "print(1)", Some("utils"))
        .expect("save failed");
    workspace
        .save_snippet("b.lua", "print(2)", None)
        .expect("save failed");

    assert_eq!(workspace.snippets.in_folder(Some("utils")).count(), 1);
    assert_eq!(workspace.snippets.in_folder(None).count(), 1);
}

#[test]
fn duplicate_folder_is_rejected_and_set_unchanged() {
    let mut workspace = Workspace::new();
    workspace.create_folder("utils").expect("create failed");
    let result = workspace.create_folder("utils");

    assert_eq!(
        result,
        Err(WorkspaceError::DuplicateFolder(String::from("utils")))
    );
    assert_eq!(workspace.folders.len(), 1);
}

#[test]
fn empty_folder_name_is_rejected() {
    let mut workspace = Workspace::new();
    let result = workspace.create_folder("  ");

    assert_eq!(result, Err(WorkspaceError::EmptyName));
    assert!(workspace.folders.is_empty());
}

#[test]
fn toggle_flips_the_open_flag() {
    let mut workspace = Workspace::new();
    workspace.create_folder("utils").expect("create failed");

    // New folders start open.
    assert!(workspace.folders.get("utils").expect("folder missing").open);

    assert!(workspace.folders.toggle("utils"));
    assert!(!workspace.folders.get("utils").expect("folder missing").open);

    assert!(workspace.folders.toggle("utils"));
    assert!(workspace.folders.get("utils").expect("folder missing").open);
}

#[test]
fn toggling_a_missing_folder_reports_false() {
    let mut workspace = Workspace::new();
    assert!(!workspace.folders.toggle("nope"));
}

#[test]
fn folder_names_are_trimmed_before_the_uniqueness_check() {
    let mut workspace = Workspace::new();
    workspace.create_folder(" utils ").expect("create failed");
    let result = workspace.create_folder("utils");

    assert_eq!(
        result,
        Err(WorkspaceError::DuplicateFolder(String::from("utils")))
    );
}
