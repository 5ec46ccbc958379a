//! Error taxonomy for content resolution

use thiserror::Error;

use crate::content::Domain;

/// Errors produced while resolving content and deriving metadata
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The slug does not name any record in the domain.
    ///
    /// This is an expected outcome: the page layer answers it with the
    /// generic not-found page.
    #[error("no {domain} record with slug {slug:?}")]
    NotFound { domain: Domain, slug: String },

    /// A caller-side bug: malformed base URL, a record handed over with the
    /// wrong domain, or an inconsistent content table.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ResolveError {
    pub fn not_found(domain: Domain, slug: &str) -> Self {
        Self::NotFound {
            domain,
            slug: slug.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether this error is the recoverable not-found outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
