//! Built-in site content

mod blog;
mod services;

use chrono::{DateTime, Utc};

use crate::error::ResolveError;

pub use blog::blog_posts;
pub use services::services;

fn timestamp(raw: &str) -> Result<DateTime<Utc>, ResolveError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| ResolveError::invalid(format!("bad timestamp {:?}: {}", raw, e)))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
