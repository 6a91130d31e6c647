//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,

    // Directory holding post files
    pub source_dir: String,

    // Writing
    pub new_post_name: String,

    // Display
    pub date_format: String,
    pub per_page: usize,
    pub highlight_theme: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: "Joey".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),

            source_dir: "content/posts".to_string(),

            new_post_name: ":year-:month-:day-:title.md".to_string(),

            date_format: "YYYY-MM-DD".to_string(),
            per_page: 10,
            highlight_theme: "base16-ocean.dark".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
