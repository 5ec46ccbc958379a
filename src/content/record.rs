//! Blog post and service records

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Domain;

/// An image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    /// Site-relative path, e.g. `/blog/odoo-erp.png`
    pub path: String,
    /// Alternative text
    pub alt: String,
}

impl Media {
    pub fn new(path: &str, alt: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            alt: alt.into(),
        }
    }
}

/// Blog post author
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    /// Avatar image path; authors without one get an initials badge
    pub avatar: Option<String>,
}

/// A question and its answer, shown on service pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    /// URL slug, unique within the blog
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary for listings and meta descriptions
    pub excerpt: String,

    /// Rendered HTML body
    pub body: String,

    /// Display category
    pub category: String,

    /// Post author
    pub author: Author,

    /// Featured images, primary first
    pub media: Vec<Media>,

    /// Publication timestamp
    pub published_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,

    /// SEO keywords
    pub keywords: Vec<String>,

    /// Estimated reading time in minutes
    pub read_time_minutes: u32,
}

/// Icon shown next to a service in navigation
///
/// Each variant maps to exactly one icon name, so adding a service icon is a
/// compile error until every match handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceIcon {
    Globe,
    Smartphone,
    Code,
    Database,
    BarChart,
    ShoppingBag,
    Video,
}

impl ServiceIcon {
    /// Icon name in the site's icon set
    pub fn name(self) -> &'static str {
        match self {
            ServiceIcon::Globe => "globe",
            ServiceIcon::Smartphone => "smartphone",
            ServiceIcon::Code => "code",
            ServiceIcon::Database => "database",
            ServiceIcon::BarChart => "bar-chart-3",
            ServiceIcon::ShoppingBag => "shopping-bag",
            ServiceIcon::Video => "video",
        }
    }
}

/// A service offered by the agency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    /// URL slug, unique among services
    pub slug: String,

    /// Service title
    pub title: String,

    /// One-sentence description used for meta tags
    pub description: String,

    /// Long description used on the page and in structured data
    pub full_description: String,

    /// Display category
    pub category: String,

    /// Navigation icon
    pub icon: ServiceIcon,

    /// Service images, primary first
    pub media: Vec<Media>,

    /// Key features, in display order
    pub features: Vec<String>,

    /// Technologies used to deliver the service
    pub technologies: Vec<String>,

    /// Frequently asked questions, in display order
    pub faqs: Vec<Faq>,
}

/// A record from either content domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentRecord {
    Blog(BlogPost),
    Service(Service),
}

impl ContentRecord {
    pub fn domain(&self) -> Domain {
        match self {
            ContentRecord::Blog(_) => Domain::Blog,
            ContentRecord::Service(_) => Domain::Service,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            ContentRecord::Blog(post) => &post.slug,
            ContentRecord::Service(service) => &service.slug,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentRecord::Blog(post) => &post.title,
            ContentRecord::Service(service) => &service.title,
        }
    }

    /// Short text for listings and meta descriptions
    pub fn summary(&self) -> &str {
        match self {
            ContentRecord::Blog(post) => &post.excerpt,
            ContentRecord::Service(service) => &service.description,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            ContentRecord::Blog(post) => &post.category,
            ContentRecord::Service(service) => &service.category,
        }
    }

    pub fn media(&self) -> &[Media] {
        match self {
            ContentRecord::Blog(post) => &post.media,
            ContentRecord::Service(service) => &service.media,
        }
    }

    /// The primary image, if the record has any
    pub fn primary_media(&self) -> Option<&Media> {
        self.media().first()
    }

    pub fn as_blog(&self) -> Option<&BlogPost> {
        match self {
            ContentRecord::Blog(post) => Some(post),
            ContentRecord::Service(_) => None,
        }
    }

    pub fn as_service(&self) -> Option<&Service> {
        match self {
            ContentRecord::Service(service) => Some(service),
            ContentRecord::Blog(_) => None,
        }
    }
}

impl From<BlogPost> for ContentRecord {
    fn from(post: BlogPost) -> Self {
        ContentRecord::Blog(post)
    }
}

impl From<Service> for ContentRecord {
    fn from(service: Service) -> Self {
        ContentRecord::Service(service)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_common_accessors() {
        let record = ContentRecord::from(blog_post("hello"));
        assert_eq!(record.domain(), Domain::Blog);
        assert_eq!(record.slug(), "hello");
        assert_eq!(record.summary(), "An excerpt");
        assert_eq!(record.primary_media().unwrap().path, "/blog/test.png");
        assert!(record.as_service().is_none());

        let record = ContentRecord::from(service("web"));
        assert_eq!(record.domain(), Domain::Service);
        assert_eq!(record.summary(), "Short description");
        assert!(record.as_blog().is_none());
    }

    #[test]
    fn test_primary_media_absent() {
        let mut post = blog_post("bare");
        post.media.clear();
        assert!(ContentRecord::from(post).primary_media().is_none());
    }

    #[test]
    fn test_service_icon_names() {
        assert_eq!(ServiceIcon::BarChart.name(), "bar-chart-3");
        assert_eq!(ServiceIcon::ShoppingBag.name(), "shopping-bag");
    }
}
