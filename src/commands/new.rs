//! Create a new post file

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Scaffold a new post: front-matter filled from the arguments and site
/// config, followed by a title heading and a placeholder body.
pub fn create_post(site: &Site, title: &str, desc: &str, tags: &[String]) -> Result<PathBuf> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);

    let filename = site
        .config
        .new_post_name
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string())
        .replace(":title", &slug);

    fs::create_dir_all(&site.posts_dir)?;
    let file_path = site.posts_dir.join(&filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let tags_list = tags
        .iter()
        .map(|tag| format!("\"{}\"", tag.trim()))
        .collect::<Vec<_>>()
        .join(", ");

    let content = format!(
        r#"---
title: "{title}"
date: {date}
desc: "{desc}"
tags: [{tags_list}]
author: "{author}"
---

# {title}

Start writing your post here...

## Section heading

Content...

"#,
        date = now.format("%Y-%m-%d"),
        author = site.config.author,
    );

    fs::write(&file_path, content)?;

    Ok(file_path)
}

/// Run the new command
pub fn run(site: &Site, title: &str, desc: &str, tags: &[String]) -> Result<()> {
    let path = create_post(site, title, desc, tags)?;
    println!("Created: {:?}", path);
    Ok(())
}
