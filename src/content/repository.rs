//! Post repository - bulk listing over a content store

use std::collections::HashSet;

use super::{ContentError, ContentStore, FrontMatter, PostSummary};

/// Loads post summaries from a content store.
pub struct PostRepository<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> PostRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load all posts, sorted by date descending (newest first).
    ///
    /// One broken post must not take down the whole index: a file with
    /// malformed front-matter is skipped with a warning. A store that cannot
    /// be listed at all is a configuration problem and propagates.
    pub fn list_posts(&self) -> Result<Vec<PostSummary>, ContentError> {
        let mut posts = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for id in self.store.list_ids()? {
            if !seen.insert(id.clone()) {
                tracing::warn!("duplicate post id `{}`, keeping the first file", id);
                continue;
            }

            let Some(content) = self.store.read(&id)? else {
                tracing::warn!("post `{}` disappeared between listing and read", id);
                continue;
            };

            match load_summary(&id, &content) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("skipping post: {}", e);
                }
            }
        }

        // Stable sort: posts sharing a date keep store enumeration order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }
}

fn load_summary(id: &str, content: &str) -> Result<PostSummary, ContentError> {
    let (fm, _body) = FrontMatter::parse(content).map_err(|e| ContentError::parse(id, e))?;
    PostSummary::from_parts(id, &fm).map_err(|e| ContentError::parse(id, e))
}

/// Case-insensitive substring filter over title and description.
pub fn search<'a>(posts: &'a [PostSummary], query: &str) -> Vec<&'a PostSummary> {
    let query = query.to_lowercase();
    posts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&query)
                || p.desc
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        })
        .collect()
}

/// One page of a listing. `page` is 1-based; out-of-range pages are empty.
pub fn paginate<T>(posts: &[T], page: usize, per_page: usize) -> &[T] {
    if per_page == 0 {
        return &[];
    }
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= posts.len() {
        return &[];
    }
    let end = (start + per_page).min(posts.len());
    &posts[start..end]
}

#[cfg(test)]
mod tests {
    use super::super::DirStore;
    use super::*;
    use std::fs;

    fn write_post(dir: &std::path::Path, name: &str, title: &str, date: &str) {
        let content = format!(
            "---\ntitle: \"{}\"\ndate: {}\ndesc: \"About {}\"\n---\n\n# {}\n\nBody.\n",
            title, date, title, title
        );
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_list_posts_sorted_by_date_descending() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "2024-05-20-third.md", "Third", "2024-05-20");
        write_post(dir.path(), "2024-06-01-first.md", "First", "2024-06-01");
        write_post(dir.path(), "2024-05-10-fourth.md", "Fourth", "2024-05-10");
        write_post(dir.path(), "2024-05-28-second.md", "Second", "2024-05-28");

        let repo = PostRepository::new(DirStore::new(dir.path()));
        let posts = repo.list_posts().unwrap();

        let dates: Vec<String> = posts.iter().map(|p| p.date.to_string()).collect();
        assert_eq!(
            dates,
            vec!["2024-06-01", "2024-05-28", "2024-05-20", "2024-05-10"]
        );
    }

    #[test]
    fn test_date_ties_keep_store_order() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "b-second.md", "B", "2024-06-01");
        write_post(dir.path(), "a-first.md", "A", "2024-06-01");
        write_post(dir.path(), "c-third.md", "C", "2024-06-01");

        let repo = PostRepository::new(DirStore::new(dir.path()));
        let posts = repo.list_posts().unwrap();

        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a-first", "b-second", "c-third"]);
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "same-slug.md", "From md", "2024-06-01");
        write_post(dir.path(), "same-slug.markdown", "From markdown", "2024-05-01");

        let repo = PostRepository::new(DirStore::new(dir.path()));
        let posts = repo.list_posts().unwrap();

        assert_eq!(posts.len(), 1);
        // `.markdown` sorts before `.md`, so that file wins deterministically
        assert_eq!(posts[0].title, "From markdown");
    }

    #[test]
    fn test_malformed_post_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "good.md", "Good", "2024-06-01");
        fs::write(dir.path().join("bad.md"), "no front matter at all").unwrap();

        let repo = PostRepository::new(DirStore::new(dir.path()));
        let posts = repo.list_posts().unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "good");
    }

    #[test]
    fn test_missing_store_propagates() {
        let repo = PostRepository::new(DirStore::new("/nonexistent/posts"));
        assert!(matches!(
            repo.list_posts(),
            Err(ContentError::Read { .. })
        ));
    }

    #[test]
    fn test_search_matches_title_and_desc() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "rust-intro.md", "Learning Rust", "2024-06-01");
        write_post(dir.path(), "coffee.md", "Coffee Notes", "2024-05-01");

        let repo = PostRepository::new(DirStore::new(dir.path()));
        let posts = repo.list_posts().unwrap();

        let hits = search(&posts, "RUST");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "rust-intro");

        // matches the generated description "About Coffee Notes"
        let hits = search(&posts, "about coffee");
        assert_eq!(hits.len(), 1);

        assert!(search(&posts, "nothing here").is_empty());
    }

    #[test]
    fn test_paginate_bounds() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "one.md", "One", "2024-06-03");
        write_post(dir.path(), "two.md", "Two", "2024-06-02");
        write_post(dir.path(), "three.md", "Three", "2024-06-01");

        let repo = PostRepository::new(DirStore::new(dir.path()));
        let posts = repo.list_posts().unwrap();

        assert_eq!(paginate(&posts, 1, 2).len(), 2);
        assert_eq!(paginate(&posts, 2, 2).len(), 1);
        assert!(paginate(&posts, 3, 2).is_empty());
        assert!(paginate(&posts, 1, 0).is_empty());
    }
}
