//! List posts

use anyhow::Result;

use crate::content::{paginate, search, PostSummary};
use crate::helpers::date::format_date;
use crate::Site;

/// List posts newest-first, optionally filtered by a substring query and
/// cut down to one page.
pub fn run(site: &Site, filter: Option<&str>, page: Option<usize>, json: bool) -> Result<()> {
    let posts = site.posts()?;

    let filtered: Vec<&PostSummary> = match filter {
        Some(query) => search(&posts, query),
        None => posts.iter().collect(),
    };

    let shown: &[&PostSummary] = match page {
        Some(page) => paginate(&filtered, page, site.config.per_page),
        None => &filtered,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    println!("Posts ({}):", shown.len());
    for post in shown {
        println!(
            "  {} - {} [{}]",
            format_date(&post.date, &site.config.date_format),
            post.title,
            post.id
        );
    }

    Ok(())
}
