//! URL helper functions

use std::fmt;

use crate::error::ResolveError;

/// A validated absolute site URL with no trailing slash
///
/// The site is served from the host root, so page links are root-relative
/// and a base with a path component is rejected.
/// Canonical URLs are built by plain concatenation onto this value, so the
/// same base and slug always produce the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Parse and validate a base URL
    ///
    /// # Examples
    /// ```ignore
    /// BaseUrl::parse("https://insertech.io/")?.as_str() // -> "https://insertech.io"
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        if raw.trim() != raw {
            return Err(ResolveError::invalid(format!(
                "base URL {:?} has surrounding whitespace",
                raw
            )));
        }

        let parsed = ::url::Url::parse(raw)
            .map_err(|e| ResolveError::invalid(format!("base URL {:?}: {}", raw, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ResolveError::invalid(format!(
                "base URL scheme '{}' not supported, must be http or https",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(ResolveError::invalid(format!(
                "base URL {:?} has no host",
                raw
            )));
        }
        if parsed.path() != "/" {
            return Err(ResolveError::invalid(format!(
                "base URL {:?} must point at the site root, found path {:?}",
                raw,
                parsed.path()
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ResolveError::invalid(format!(
                "base URL {:?} must not carry a query string or fragment",
                raw
            )));
        }

        Ok(Self(raw.trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL of a site path
    ///
    /// # Examples
    /// ```ignore
    /// base.url_for("/blog/odoo-erp.png") // -> "https://insertech.io/blog/odoo-erp.png"
    /// base.url_for("") // -> "https://insertech.io"
    /// ```
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.0.clone()
        } else {
            format!("{}/{}", self.0, path)
        }
    }

    /// URL of a domain index page, e.g. `https://insertech.io/blog`
    pub fn section_url(&self, segment: &str) -> String {
        format!("{}/{}", self.0, segment)
    }

    /// URL of a record page: base, segment, and slug joined verbatim
    pub fn record_url(&self, segment: &str, slug: &str) -> String {
        format!("{}/{}/{}", self.0, segment, slug)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Site-relative link to a path, always starting with `/`
pub fn url_for(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}
