//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ResolveError;
use crate::helpers::BaseUrl;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub default_title: String,
    pub title_template: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub language: String,
    pub locale: String,

    // URL
    pub url: String,

    // Directory
    pub public_dir: String,

    // Publisher
    pub logo: String,
    pub og_image: String,
    pub placeholder_image: String,
    pub twitter_creator: String,
    pub area_served: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Insertech".to_string(),
            default_title: "Insertech - Software Engineering & Digital Media Agency".to_string(),
            title_template: "%s | Insertech - Software Engineering & Digital Media Agency"
                .to_string(),
            description: "Leading software engineering and digital media agency specializing \
                          in web development, mobile apps, ERP solutions, and Odoo integration \
                          for businesses in the Middle East."
                .to_string(),
            keywords: [
                "software engineering",
                "web development",
                "digital media",
                "ERP",
                "Odoo",
                "mobile app development",
                "Middle East software agency",
                "Qatar software company",
                "Lebanon software company",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            author: "Insertech Team".to_string(),
            language: "en".to_string(),
            locale: "en_US".to_string(),

            url: "https://insertech.io".to_string(),

            public_dir: "public".to_string(),

            logo: "/logo.png".to_string(),
            og_image: "/og-image.jpg".to_string(),
            placeholder_image: "/placeholder.svg".to_string(),
            twitter_creator: "@insertech".to_string(),
            area_served: vec![
                "Qatar".to_string(),
                "Lebanon".to_string(),
                "Middle East".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    ///
    /// A malformed `url` is a configuration error and fails the load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.base_url()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// The validated site base URL
    pub fn base_url(&self) -> Result<BaseUrl, ResolveError> {
        BaseUrl::parse(&self.url)
    }

    /// Full page title, e.g. "Blog | Insertech - Software Engineering & ..."
    pub fn page_title(&self, title: &str) -> String {
        if title.is_empty() {
            self.default_title.clone()
        } else {
            self.title_template.replace("%s", title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Insertech");
        assert_eq!(config.base_url().unwrap().as_str(), "https://insertech.io");
        assert_eq!(config.area_served.len(), 3);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Staging
url: https://staging.insertech.io/
placeholder_image: /img/missing.png
theme: vexo
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Staging");
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "https://staging.insertech.io"
        );
        assert_eq!(config.placeholder_image, "/img/missing.png");
        assert_eq!(config.logo, "/logo.png");
    }

    #[test]
    fn test_load_rejects_bad_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "url: not a url\n").unwrap();
        assert!(SiteConfig::load(&path).is_err());

        fs::write(&path, "url: https://insertech.io/site\n").unwrap();
        assert!(SiteConfig::load(&path).is_err());
    }

    #[test]
    fn test_page_title() {
        let config = SiteConfig::default();
        assert_eq!(
            config.page_title("Blog"),
            "Blog | Insertech - Software Engineering & Digital Media Agency"
        );
        assert_eq!(config.page_title(""), config.default_title);
    }
}
