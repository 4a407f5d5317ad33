//! Presentational folder grouping over the snippet store.

use crate::workspace::WorkspaceError;

/// A folder with an open/closed visibility flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub open: bool,
}

/// Ordered set of folders with globally unique names.
///
/// Folders group snippets for display only; they carry no content of their
/// own and there is no delete operation.
#[derive(Debug, Default)]
pub struct FolderIndex {
    folders: Vec<Folder>,
}

impl FolderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a folder. A duplicate name is rejected and the set is left
    /// unchanged. New folders start open.
    pub fn create(&mut self, name: &str) -> Result<(), WorkspaceError> {
        if self.contains(name) {
            return Err(WorkspaceError::DuplicateFolder(name.to_string()));
        }
        self.folders.push(Folder {
            name: name.to_string(),
            open: true,
        });
        Ok(())
    }

    /// Flip a folder's open flag; returns false if no such folder exists.
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.folders.iter_mut().find(|f| f.name == name) {
            Some(folder) => {
                folder.open = !folder.open;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.folders.iter().any(|f| f.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Folder> {
        self.folders.iter()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
