//! Post models and adjacency

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use super::FrontMatter;

/// Listing-level view of a post: identifier plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    /// Stable slug, derived from the source filename stem
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date, the listing sort key
    pub date: NaiveDate,

    /// Short description; consumers fall back to the title when absent
    pub desc: Option<String>,

    /// Post tags
    pub tags: Vec<String>,

    /// Post author
    pub author: Option<String>,
}

impl PostSummary {
    /// Build a summary from a derived id and parsed front-matter.
    ///
    /// `title` and a parseable `date` are required; their absence is a
    /// front-matter defect, not a missing post.
    pub fn from_parts(id: &str, fm: &FrontMatter) -> Result<Self> {
        let title = fm
            .title
            .clone()
            .ok_or_else(|| anyhow!("missing `title`"))?;
        let date = fm
            .parse_date()
            .ok_or_else(|| anyhow!("missing or unparseable `date`"))?;

        Ok(Self {
            id: id.to_string(),
            title,
            date,
            desc: fm.desc.clone(),
            tags: fm.tags.clone(),
            author: fm.author.clone(),
        })
    }
}

/// Full view of a single post: metadata plus the markdown body with the
/// front-matter header stripped.
#[derive(Debug, Clone, Serialize)]
pub struct PostBody {
    pub summary: PostSummary,

    /// Raw markdown body
    pub raw: String,

    /// Unrecognized front-matter keys, passed through untouched
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl PostBody {
    pub fn from_parts(id: &str, fm: FrontMatter, body: &str) -> Result<Self> {
        let summary = PostSummary::from_parts(id, &fm)?;
        Ok(Self {
            summary,
            raw: body.to_string(),
            extra: fm.extra,
        })
    }
}

/// Neighbors of a post within a date-sorted sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacent<'a> {
    /// The next more recent post
    pub previous: Option<&'a PostSummary>,

    /// The next older post
    pub next: Option<&'a PostSummary>,
}

/// Locate the neighbors of `id` in a list already sorted newest-first.
///
/// Total: an id not present in the list yields neither neighbor.
pub fn adjacent<'a>(posts: &'a [PostSummary], id: &str) -> Adjacent<'a> {
    let Some(pos) = posts.iter().position(|p| p.id == id) else {
        return Adjacent::default();
    };

    Adjacent {
        previous: pos.checked_sub(1).map(|i| &posts[i]),
        next: posts.get(pos + 1),
    }
}
