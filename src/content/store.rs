//! Content store - a directory of markdown files addressed by slug

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::ContentError;

/// Backing store for post content.
///
/// The store only knows about identifiers and raw text; front-matter and
/// markdown semantics live upstream. Keeping this surface small lets an
/// alternative backend (key-value store, object store) slot in without
/// touching the repository or resolver.
pub trait ContentStore {
    /// All post identifiers, in a deterministic order for a given store state.
    fn list_ids(&self) -> Result<Vec<String>, ContentError>;

    /// Raw file content for an identifier, `None` when no entry matches.
    fn read(&self, id: &str) -> Result<Option<String>, ContentError>;
}

/// Directory-backed store: one flat directory of `.md` files, the file stem
/// is the post identifier.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the store directory, yielding markdown files sorted by file name.
    fn entries(&self) -> Result<Vec<PathBuf>, ContentError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                ContentError::read(
                    path,
                    e.into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("walk failed")),
                )
            })?;

            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }
}

impl ContentStore for DirStore {
    fn list_ids(&self) -> Result<Vec<String>, ContentError> {
        Ok(self
            .entries()?
            .iter()
            .filter_map(|p| file_stem(p))
            .collect())
    }

    fn read(&self, id: &str) -> Result<Option<String>, ContentError> {
        for path in self.entries()? {
            if file_stem(&path).as_deref() == Some(id) {
                let content =
                    fs::read_to_string(&path).map_err(|e| ContentError::read(&path, e))?;
                return Ok(Some(content));
            }
        }
        Ok(None)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_list_ids_sorted_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2024-05-28-beta.md"), "b").unwrap();
        fs::write(dir.path().join("2024-06-01-alpha.md"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let store = DirStore::new(dir.path());
        let ids = store.list_ids().unwrap();
        assert_eq!(ids, vec!["2024-05-28-beta", "2024-06-01-alpha"]);
    }

    #[test]
    fn test_read_by_id() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hello.md"), "content").unwrap();

        let store = DirStore::new(dir.path());
        assert_eq!(store.read("hello").unwrap(), Some("content".to_string()));
        assert_eq!(store.read("missing").unwrap(), None);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let store = DirStore::new("/nonexistent/posts/dir");
        let err = store.list_ids().unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }
}
