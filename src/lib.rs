//! inkpost: a markdown content engine for personal blogs
//!
//! This crate implements the content pipeline behind a blog site: a
//! directory of front-matter markdown files becomes sorted post listings,
//! rendered detail pages with heading outlines, and prev/next navigation.
//! Page presentation is left to the consumer.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use content::{
    adjacent, build_outline, remove_first_h1, DirStore, MarkdownRenderer, PostBody,
    PostRepository, PostResolver, PostSummary, TocEntry,
};

/// The main site handle: configuration plus content directories.
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding post files
    pub posts_dir: PathBuf,
}

impl Site {
    /// Create a site handle from a directory, reading `_config.yml` when
    /// present and falling back to defaults otherwise.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.source_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    pub fn repository(&self) -> PostRepository<DirStore> {
        PostRepository::new(DirStore::new(&self.posts_dir))
    }

    pub fn resolver(&self) -> PostResolver<DirStore> {
        PostResolver::new(DirStore::new(&self.posts_dir))
    }

    pub fn renderer(&self) -> MarkdownRenderer {
        MarkdownRenderer::with_theme(&self.config.highlight_theme)
    }

    /// All posts, newest first.
    pub fn posts(&self) -> Result<Vec<PostSummary>> {
        Ok(self.repository().list_posts()?)
    }

    /// Assemble everything a detail page needs for one post: the body with
    /// its redundant leading title stripped, rendered HTML, the heading
    /// outline, and the neighboring posts in the date-sorted sequence.
    ///
    /// `Ok(None)` means no post has this id.
    pub fn post_page(&self, id: &str) -> Result<Option<PostPage>> {
        let Some(body) = self.resolver().get_post(id)? else {
            return Ok(None);
        };

        let markdown = remove_first_h1(&body.raw);
        let outline = build_outline(&markdown);
        let html = self.renderer().render(&markdown)?;

        let posts = self.posts()?;
        let nav = adjacent(&posts, id);
        let previous = nav.previous.cloned();
        let next = nav.next.cloned();

        Ok(Some(PostPage {
            body,
            html,
            outline,
            previous,
            next,
        }))
    }
}

/// The fully assembled product for a post detail page.
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub body: PostBody,
    pub html: String,
    pub outline: Vec<TocEntry>,
    pub previous: Option<PostSummary>,
    pub next: Option<PostSummary>,
}
