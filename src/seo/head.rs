//! Everything rendered into a page's `<head>`

use serde::Serialize;
use serde_json::Value;

use super::metadata::{NotFoundMetadata, OgImage, OgType, OpenGraph, ResolvedMetadata, TwitterCard};
use super::pages::StaticPage;
use crate::config::SiteConfig;
use crate::helpers::{json_ld_script, BaseUrl};

/// Head tags for one rendered page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageHead {
    /// Full document title, site suffix included
    pub title: String,
    pub description: String,
    /// Comma-joined keywords
    pub keywords: String,
    pub canonical_url: Option<String>,
    pub robots: Option<String>,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<TwitterCard>,
    /// Serialized JSON-LD objects, one per `<script>` element
    pub json_ld: Vec<String>,
}

impl PageHead {
    /// Head for a resolved blog post or service
    pub fn for_record(config: &SiteConfig, metadata: &ResolvedMetadata) -> serde_json::Result<Self> {
        let keywords = if metadata.keywords.is_empty() {
            config.keywords.join(", ")
        } else {
            metadata.keywords.join(", ")
        };

        Ok(Self {
            title: config.page_title(&metadata.title),
            description: metadata.description.clone(),
            keywords,
            canonical_url: Some(metadata.canonical_url.clone()),
            robots: None,
            open_graph: Some(metadata.open_graph.clone()),
            twitter: Some(metadata.twitter.clone()),
            json_ld: scripts(&metadata.json_ld()?)?,
        })
    }

    /// Head for a top-level page
    pub fn for_static_page(
        config: &SiteConfig,
        base: &BaseUrl,
        page: StaticPage,
    ) -> serde_json::Result<Self> {
        let canonical_url = base.url_for(page.path());
        let og_title = page.og_title(config);
        let og_description = page.og_description(config);
        let image = base.url_for(&config.og_image);

        Ok(Self {
            title: config.page_title(page.title()),
            description: page.description().to_string(),
            keywords: config.keywords.join(", "),
            canonical_url: Some(canonical_url.clone()),
            robots: None,
            open_graph: Some(OpenGraph {
                title: og_title.clone(),
                description: og_description.clone(),
                url: canonical_url,
                og_type: OgType::Website,
                published_time: None,
                modified_time: None,
                authors: Vec::new(),
                images: vec![OgImage {
                    url: image.clone(),
                    width: 1200,
                    height: 630,
                    alt: config.default_title.clone(),
                }],
            }),
            twitter: Some(TwitterCard {
                card: "summary_large_image",
                title: og_title,
                description: og_description,
                images: vec![image],
            }),
            json_ld: scripts(&page.json_ld(base, config))?,
        })
    }

    /// Head for the not-found page; no canonical URL and no structured data
    pub fn not_found(config: &SiteConfig, metadata: Option<&NotFoundMetadata>) -> Self {
        let (title, robots) = match metadata {
            Some(metadata) => (metadata.title, metadata.robots),
            None => ("Page Not Found", "noindex"),
        };

        Self {
            title: config.page_title(title),
            description: "The page you are looking for might have been removed, had its name \
                          changed, or is temporarily unavailable."
                .to_string(),
            keywords: String::new(),
            canonical_url: None,
            robots: Some(robots.to_string()),
            open_graph: None,
            twitter: None,
            json_ld: Vec::new(),
        }
    }

    /// Append a site-wide schema object
    pub fn push_json_ld(&mut self, value: &Value) -> serde_json::Result<()> {
        self.json_ld.push(json_ld_script(value)?);
        Ok(())
    }
}

fn scripts(values: &[Value]) -> serde_json::Result<Vec<String>> {
    values.iter().map(json_ld_script).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Catalog, Domain};
    use crate::seo::{derive_metadata, not_found_metadata};

    #[test]
    fn test_record_head() {
        let config = SiteConfig::default();
        let record = Catalog::builtin()
            .get(Domain::Service, "shopify")
            .unwrap()
            .clone();
        let metadata = derive_metadata(&record, Domain::Service, &config.url).unwrap();
        let head = PageHead::for_record(&config, &metadata).unwrap();

        assert_eq!(
            head.title,
            "Shopify Development | Insertech - Software Engineering & Digital Media Agency"
        );
        assert_eq!(
            head.canonical_url.as_deref(),
            Some("https://insertech.io/services/shopify")
        );
        assert_eq!(head.json_ld.len(), 3);
        assert!(head.json_ld[0].contains(r#""@type":"Service""#));
        assert!(head.json_ld[2].contains(r#""@type":"FAQPage""#));
    }

    #[test]
    fn test_static_head() {
        let config = SiteConfig::default();
        let base = config.base_url().unwrap();
        let head = PageHead::for_static_page(&config, &base, StaticPage::Contact).unwrap();

        assert_eq!(
            head.canonical_url.as_deref(),
            Some("https://insertech.io/contact")
        );
        assert_eq!(head.json_ld.len(), 2);
        let og = head.open_graph.unwrap();
        assert_eq!(og.images[0].url, "https://insertech.io/og-image.jpg");

        let home = PageHead::for_static_page(&config, &base, StaticPage::Home).unwrap();
        assert_eq!(home.canonical_url.as_deref(), Some("https://insertech.io"));
    }

    #[test]
    fn test_not_found_head_has_no_structured_data() {
        let config = SiteConfig::default();
        let metadata = not_found_metadata(Domain::Blog);
        let head = PageHead::not_found(&config, Some(&metadata));

        assert!(head.title.starts_with("Post Not Found | "));
        assert_eq!(head.robots.as_deref(), Some("noindex"));
        assert!(head.canonical_url.is_none());
        assert!(head.json_ld.is_empty());
    }
}
