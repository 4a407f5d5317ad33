//! In-memory workspace: the snippet store and the folder index.
//!
//! Everything here is scoped to a single application session. Collections are
//! initialized empty on launch and nothing is persisted.

pub mod folder;
pub mod snippet;

use thiserror::Error;

pub use folder::{Folder, FolderIndex};
pub use snippet::{Snippet, SnippetStore};

/// Validation failures surfaced to the user as blocking notices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("a folder named '{0}' already exists")]
    DuplicateFolder(String),

    #[error("no folder named '{0}'")]
    UnknownFolder(String),
}

/// Facade owning both collections; user-facing validation happens here.
#[derive(Debug, Default)]
pub struct Workspace {
    pub snippets: SnippetStore,
    pub folders: FolderIndex,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `content` under `name`, optionally into an existing folder.
    ///
    /// Duplicate snippet names append a second entry; only empty names and
    /// unknown folders are rejected.
    pub fn save_snippet(
        &mut self,
        name: &str,
        content: &str,
        folder: Option<&str>,
    ) -> Result<(), WorkspaceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkspaceError::EmptyName);
        }
        if let Some(folder) = folder {
            if !self.folders.contains(folder) {
                return Err(WorkspaceError::UnknownFolder(folder.to_string()));
            }
        }
        self.snippets.save(name, content, folder);
        Ok(())
    }

    /// Create a folder; duplicates are rejected and the set is unchanged.
    pub fn create_folder(&mut self, name: &str) -> Result<(), WorkspaceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkspaceError::EmptyName);
        }
        self.folders.create(name)
    }
}
