//! Content pipeline error taxonomy

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the content store, repository and resolver.
///
/// A missing post is not an error; lookups return `Ok(None)` so callers can
/// tell a dead link apart from broken content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The store directory or a matched file could not be read.
    #[error("cannot read content at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A post file has malformed or incomplete front-matter.
    #[error("malformed front-matter in post `{id}`: {reason}")]
    Parse { id: String, reason: String },
}

impl ContentError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(id: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            id: id.into(),
            reason: reason.to_string(),
        }
    }
}
