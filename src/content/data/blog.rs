//! Blog posts, in listing order

use super::{strings, timestamp};
use crate::content::{Author, BlogPost, Media};
use crate::error::ResolveError;

fn author(name: &str, avatar: Option<&str>) -> Author {
    Author {
        name: name.to_string(),
        avatar: avatar.map(str::to_string),
    }
}

fn featured_image(path: &str, title: &str) -> Vec<Media> {
    vec![Media::new(
        path,
        format!("{} - Insertech blog post featured image", title),
    )]
}

pub fn blog_posts() -> Result<Vec<BlogPost>, ResolveError> {
    let seo_title = "The Importance of SEO in Digital Marketing Strategy";
    let trends_title = "The Future of Web Development: Trends to Watch in 2025";
    let odoo_title = "How Odoo ERP Can Transform Your Business Operations";
    let mobile_title = "Mobile App Development: Native vs. Cross-Platform in 2025";

    Ok(vec![
        BlogPost {
            slug: "seo-importance-digital-marketing".to_string(),
            title: seo_title.to_string(),
            excerpt: "Learn why SEO is crucial for your business success and how to implement \
                      effective SEO strategies to improve your online visibility and drive \
                      organic traffic."
                .to_string(),
            body: include_str!("posts/seo-importance-digital-marketing.html").to_string(),
            category: "Digital Marketing".to_string(),
            author: author("Sarah Miller", Some("/blog/authors/sarah.png")),
            media: featured_image("/blog/seo-importance.png", seo_title),
            published_at: timestamp("2025-04-25T10:00:00Z")?,
            modified_at: timestamp("2025-04-25T10:00:00Z")?,
            keywords: strings(&[
                "SEO",
                "digital marketing",
                "search engine optimization",
                "online visibility",
                "organic traffic",
            ]),
            read_time_minutes: 10,
        },
        BlogPost {
            slug: "future-web-development-trends-2025".to_string(),
            title: trends_title.to_string(),
            excerpt: "Explore the emerging technologies and methodologies that will shape the \
                      future of web development in the coming years."
                .to_string(),
            body: include_str!("posts/future-web-development-trends-2025.html").to_string(),
            category: "Web Development".to_string(),
            author: author("Alex Johnson", Some("/blog/authors/alex.png")),
            media: featured_image("/blog/web-dev-trends.png", trends_title),
            published_at: timestamp("2025-04-15T10:00:00Z")?,
            modified_at: timestamp("2025-04-15T10:00:00Z")?,
            keywords: strings(&[
                "web development",
                "WebAssembly",
                "AI development",
                "edge computing",
                "future trends",
            ]),
            read_time_minutes: 6,
        },
        BlogPost {
            slug: "odoo-erp-transform-business-operations".to_string(),
            title: odoo_title.to_string(),
            excerpt: "Discover how implementing Odoo ERP can streamline your business \
                      processes, increase efficiency, and drive growth."
                .to_string(),
            body: include_str!("posts/odoo-erp-transform-business-operations.html").to_string(),
            category: "ERP Solutions".to_string(),
            author: author("Sarah Miller", None),
            media: featured_image("/blog/odoo-erp.png", odoo_title),
            published_at: timestamp("2025-04-08T10:00:00Z")?,
            modified_at: timestamp("2025-04-08T10:00:00Z")?,
            keywords: strings(&[
                "Odoo ERP",
                "business operations",
                "process automation",
                "business efficiency",
                "ERP implementation",
            ]),
            read_time_minutes: 5,
        },
        BlogPost {
            slug: "native-vs-cross-platform-mobile-development".to_string(),
            title: mobile_title.to_string(),
            excerpt: "A comprehensive comparison of native and cross-platform mobile app \
                      development approaches for modern businesses."
                .to_string(),
            body: include_str!("posts/native-vs-cross-platform-mobile-development.html")
                .to_string(),
            category: "Mobile Development".to_string(),
            author: author("Michael Chen", Some("/blog/authors/michael.png")),
            media: featured_image("/blog/mobile-app-dev.png", mobile_title),
            published_at: timestamp("2025-03-28T10:00:00Z")?,
            modified_at: timestamp("2025-03-28T10:00:00Z")?,
            keywords: strings(&[
                "mobile app development",
                "native apps",
                "cross-platform development",
                "React Native",
                "Flutter",
            ]),
            read_time_minutes: 8,
        },
    ])
}
