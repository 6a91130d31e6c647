//! Post resolver - single-post lookup over a content store

use super::{ContentError, ContentStore, FrontMatter, PostBody};

/// Resolves one post by its identifier, independently of bulk listing.
///
/// The id derivation rule is the store's (filename stem), so a slug that
/// appears in a listing always resolves here.
pub struct PostResolver<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> PostResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Look up a post by exact, case-sensitive id.
    ///
    /// `Ok(None)` is the normal outcome for an unknown slug (bad URL,
    /// deleted post). Malformed front-matter on a matched file is an error,
    /// so callers can render "broken content" rather than "not found".
    pub fn get_post(&self, id: &str) -> Result<Option<PostBody>, ContentError> {
        let Some(content) = self.store.read(id)? else {
            return Ok(None);
        };

        let (fm, body) =
            FrontMatter::parse(&content).map_err(|e| ContentError::parse(id, e))?;
        let post = PostBody::from_parts(id, fm, body).map_err(|e| ContentError::parse(id, e))?;

        Ok(Some(post))
    }
}
