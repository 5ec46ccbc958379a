//! Sitemap generation.
//!
//! Lists the top-level pages followed by every blog post and service, in the
//! resolver's display order.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://insertech.io</loc>
//!     <lastmod>2025-04-25T10:00:00Z</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::content::{ContentRecord, Domain};
use crate::helpers::{date_xml, escape_xml};
use crate::resolver::Resolver;
use crate::seo::StaticPage;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

fn static_policy(page: StaticPage) -> (ChangeFrequency, f32) {
    match page {
        StaticPage::Home => (ChangeFrequency::Weekly, 1.0),
        StaticPage::About => (ChangeFrequency::Monthly, 0.8),
        StaticPage::Services => (ChangeFrequency::Monthly, 0.8),
        StaticPage::Blog => (ChangeFrequency::Weekly, 0.8),
        StaticPage::Contact => (ChangeFrequency::Yearly, 0.7),
    }
}

fn record_priority(domain: Domain) -> f32 {
    match domain {
        Domain::Blog => 0.6,
        Domain::Service => 0.7,
    }
}

/// Posts report their modification time; other pages report `now`
fn last_modified(record: &ContentRecord, now: DateTime<Utc>) -> DateTime<Utc> {
    match record {
        ContentRecord::Blog(post) => post.modified_at,
        ContentRecord::Service(_) => now,
    }
}

impl Sitemap {
    /// Build the sitemap for every page the resolver knows about
    pub fn build(resolver: &Resolver, now: DateTime<Utc>) -> Self {
        let deriver = resolver.deriver();
        let base = deriver.base_url();

        let mut entries: Vec<SitemapEntry> = StaticPage::ALL
            .iter()
            .map(|&page| {
                let (change_frequency, priority) = static_policy(page);
                SitemapEntry {
                    url: base.url_for(page.path()),
                    last_modified: now,
                    change_frequency,
                    priority,
                }
            })
            .collect();

        for domain in Domain::ALL {
            entries.extend(resolver.list_all(domain).map(|record| SitemapEntry {
                url: deriver.canonical_url(domain, record.slug()),
                last_modified: last_modified(record, now),
                change_frequency: ChangeFrequency::Monthly,
                priority: record_priority(domain),
            }));
        }

        tracing::debug!("Sitemap built with {} entries", entries.len());
        Self { entries }
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in &self.entries {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.url));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&date_xml(&entry.last_modified));
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(entry.change_frequency.as_str());
            xml.push_str("</changefreq>\n");
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}
