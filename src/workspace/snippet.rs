//! Saved snippets.

/// A named unit of saved source text with an optional folder association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub name: String,
    pub content: String,
    pub folder: Option<String>,
}

/// Flat, ordered, in-memory snippet collection.
///
/// Names are not unique: saving under an existing name appends a second
/// entry, and [`SnippetStore::delete`] removes every entry carrying the name.
/// All operations are synchronous and O(n) over the list.
#[derive(Debug, Default)]
pub struct SnippetStore {
    snippets: Vec<Snippet>,
}

impl SnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snippet. No duplicate-name check.
    pub fn save(&mut self, name: &str, content: &str, folder: Option<&str>) {
        self.snippets.push(Snippet {
            name: name.to_string(),
            content: content.to_string(),
            folder: folder.map(str::to_string),
        });
    }

    /// Remove every snippet named `name`; returns how many were removed.
    pub fn delete(&mut self, name: &str) -> usize {
        let before = self.snippets.len();
        self.snippets.retain(|s| s.name != name);
        before - self.snippets.len()
    }

    /// First snippet named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.name == name)
    }

    /// Snippets whose folder reference equals `folder` (`None` = root).
    pub fn in_folder<'a>(&'a self, folder: Option<&'a str>) -> impl Iterator<Item = &'a Snippet> {
        self.snippets
            .iter()
            .filter(move |s| s.folder.as_deref() == folder)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter()
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}
