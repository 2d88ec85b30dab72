//! Content entries handed over by the content loader.

use serde::{Deserialize, Serialize};

use crate::{
    locale::{self, Locale},
    path,
};

/// A blog entry as seen by the URL helpers.
///
/// Implemented by whatever the content loader produces; only the
/// identifier and the optional source path are needed.
pub trait ContentEntry {
    /// Content identifier, e.g. `zh/my-post`.
    fn id(&self) -> &str;

    /// Source path relative to the project root, e.g.
    /// `src/data/blog/zh/tutorials/my-post.md`.
    fn file_path(&self) -> Option<&str> {
        None
    }

    /// Locale resolved from the identifier.
    fn locale(&self) -> Locale {
        locale::resolve_locale(self.id())
    }

    /// Identifier without its locale segment.
    fn slug(&self) -> &str {
        locale::resolve_slug(self.id())
    }

    /// Canonical post URL, including nested category directories.
    fn url(&self) -> String {
        path::build_path(self.id(), self.file_path(), true)
    }
}

/// Plain content entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogEntry {
    /// Content identifier.
    pub id: String,

    /// Source file path, when known.
    #[serde(default)]
    pub file_path: Option<String>,
}

impl BlogEntry {
    /// Create an entry without a source path.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_path: None,
        }
    }

    /// Attach the source file path.
    #[must_use]
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }
}

impl ContentEntry for BlogEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }
}
