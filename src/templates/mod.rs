//! Built-in site templates using the Tera template engine
//!
//! Every template is embedded in the binary. Autoescaping is off so URLs and
//! pre-rendered post bodies pass through untouched; text that lands in markup
//! goes through the `escape_attr` filter instead.

mod pages;

pub use pages::{RenderedPage, SiteRenderer};

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::content::Faq;
use crate::helpers::escape_xml;
use crate::seo::Office;

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("page.html", include_str!("site/page.html")),
            ("post.html", include_str!("site/post.html")),
            ("service.html", include_str!("site/service.html")),
            ("not_found.html", include_str!("site/not_found.html")),
            // Partials
            ("partials/head.html", include_str!("site/partials/head.html")),
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
            (
                "partials/breadcrumb.html",
                include_str!("site/partials/breadcrumb.html"),
            ),
        ])?;

        tera.register_filter("escape_attr", escape_attr_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape text for element content and attribute values
fn escape_attr_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("escape_attr", "value", String, value);
    Ok(tera::Value::String(escape_xml(&s).into_owned()))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 160,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteView {
    pub name: String,
    pub author: String,
    pub language: String,
    pub locale: String,
    pub twitter_creator: String,
    pub year: i32,
    pub nav: Vec<NavItem>,
    /// Footer links, one per service
    pub services: Vec<NavItem>,
    pub offices: Vec<Office>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrumbView {
    pub section_path: String,
    pub section_label: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub path: String,
    pub image: String,
    pub image_alt: String,
    pub category: String,
    pub title: String,
    pub summary: String,
    pub meta: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub heading: String,
    pub lead: String,
    pub cards: Vec<CardView>,
    pub offices: Vec<Office>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub title: String,
    pub category: String,
    pub published_at: String,
    /// Human date, e.g. "April 25, 2025"
    pub date: String,
    pub read_time: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub image: String,
    pub image_alt: String,
    /// Pre-rendered HTML
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabView {
    pub label: String,
    pub path: String,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceView {
    pub title: String,
    pub full_description: String,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    pub faqs: Vec<Faq>,
    pub image: String,
    pub image_alt: String,
    pub siblings: Vec<TabView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(
        f: fn(&tera::Value, &HashMap<String, tera::Value>) -> tera::Result<tera::Value>,
        value: &str,
        args: &[(&str, tera::Value)],
    ) -> String {
        let args = args
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        f(&tera::Value::String(value.to_string()), &args)
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            filter(escape_attr_filter, r#"ERP & CRM "Odoo" <b>"#, &[]),
            "ERP &amp; CRM &quot;Odoo&quot; &lt;b&gt;"
        );
        assert_eq!(filter(escape_attr_filter, "/blog/seo", &[]), "/blog/seo");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(filter(truncate_chars_filter, "short", &[]), "short");
        assert_eq!(
            filter(
                truncate_chars_filter,
                "Native apps feel faster",
                &[("length", tera::Value::from(11))]
            ),
            "Native apps..."
        );
    }

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }
}
