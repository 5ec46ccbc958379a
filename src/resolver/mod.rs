//! Content resolver
//!
//! Maps a `(domain, slug)` pair to a record and derives its page metadata.
//! The resolver only reads an immutable [`Catalog`], so it can be shared
//! across threads and called concurrently without locking.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::{Catalog, ContentRecord, Domain};
use crate::error::ResolveError;
use crate::seo::{MetadataDeriver, ResolvedMetadata};

/// A found record together with its derived metadata
#[derive(Debug, Clone)]
pub struct ResolvedPage<'a> {
    pub record: &'a ContentRecord,
    pub metadata: ResolvedMetadata,
}

/// Resolves slugs against a content catalog
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Arc<Catalog>,
    deriver: MetadataDeriver,
}

impl Resolver {
    pub fn new(catalog: Arc<Catalog>, deriver: MetadataDeriver) -> Self {
        Self { catalog, deriver }
    }

    /// Resolver over the built-in content for a configured site
    pub fn from_config(config: &SiteConfig) -> Result<Self, ResolveError> {
        Ok(Self::new(
            Catalog::builtin(),
            MetadataDeriver::from_config(config)?,
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn deriver(&self) -> &MetadataDeriver {
        &self.deriver
    }

    /// Exact, case-sensitive lookup; the slug is used verbatim
    pub fn find_by_slug(&self, domain: Domain, slug: &str) -> Result<&ContentRecord, ResolveError> {
        self.catalog
            .get(domain, slug)
            .ok_or_else(|| ResolveError::not_found(domain, slug))
    }

    /// All records of a domain in display order
    pub fn list_all(&self, domain: Domain) -> impl Iterator<Item = &ContentRecord> + '_ {
        self.catalog.records(domain)
    }

    /// Derive metadata for an already resolved record
    pub fn derive_metadata(
        &self,
        record: &ContentRecord,
        domain: Domain,
    ) -> Result<ResolvedMetadata, ResolveError> {
        self.deriver.derive(record, domain)
    }

    /// Look up a slug and derive its metadata in one step
    pub fn resolve(&self, domain: Domain, slug: &str) -> Result<ResolvedPage<'_>, ResolveError> {
        let record = self.find_by_slug(domain, slug)?;
        let metadata = self.deriver.derive(record, domain)?;
        Ok(ResolvedPage { record, metadata })
    }
}
