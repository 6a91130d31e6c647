//! Show a single rendered post

use anyhow::Result;

use crate::helpers::date::format_date;
use crate::Site;

/// Print one post the way a detail page consumes it: metadata, outline,
/// rendered HTML and the neighboring posts.
///
/// An unknown id is a normal outcome, reported as a message rather than an
/// error; broken content still surfaces as an error.
pub fn run(site: &Site, id: &str, json: bool) -> Result<()> {
    let Some(page) = site.post_page(id)? else {
        println!("Post not found: {}", id);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    let summary = &page.body.summary;
    let desc = summary.desc.as_deref().unwrap_or(&summary.title);

    println!("{}", summary.title);
    println!(
        "{} - {}",
        format_date(&summary.date, &site.config.date_format),
        desc
    );

    if !page.outline.is_empty() {
        println!("\nOutline:");
        for entry in &page.outline {
            let indent = "  ".repeat(entry.level.saturating_sub(1) as usize);
            println!("  {}{} [#{}]", indent, entry.title, entry.id);
        }
    }

    println!("\n{}", page.html);

    if let Some(previous) = &page.previous {
        println!("Previous: {} [{}]", previous.title, previous.id);
    }
    if let Some(next) = &page.next {
        println!("Next: {} [{}]", next.title, next.id);
    }

    Ok(())
}
