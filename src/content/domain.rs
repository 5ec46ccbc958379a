//! Content domains and their URL layout

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A content category with its own table and URL prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Blog,
    Service,
}

impl Domain {
    /// Every domain, in sitemap order
    pub const ALL: [Domain; 2] = [Domain::Blog, Domain::Service];

    /// URL path segment under the site root
    pub fn path_segment(self) -> &'static str {
        match self {
            Domain::Blog => "blog",
            Domain::Service => "services",
        }
    }

    /// Label of the domain index page, used as the middle breadcrumb
    pub fn index_label(self) -> &'static str {
        match self {
            Domain::Blog => "Blog",
            Domain::Service => "Services",
        }
    }

    /// Title shown when a slug does not resolve
    pub fn not_found_title(self) -> &'static str {
        match self {
            Domain::Blog => "Post Not Found",
            Domain::Service => "Service Not Found",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Blog => f.write_str("blog"),
            Domain::Service => f.write_str("service"),
        }
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog" | "post" | "posts" => Ok(Domain::Blog),
            "service" | "services" => Ok(Domain::Service),
            other => Err(format!(
                "Unknown domain: {}. Available: blog, service",
                other
            )),
        }
    }
}
