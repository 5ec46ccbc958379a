//! Immutable content tables
//!
//! A [`Catalog`] holds one slug-keyed table per domain. Tables keep insertion
//! order, which is the display order for listings and the sitemap. Catalogs
//! are validated once at construction and never mutated afterwards; a reload
//! builds a new catalog and swaps the whole `Arc`.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use std::sync::Arc;

use super::{data, BlogPost, ContentRecord, Domain, Service};
use crate::error::ResolveError;

lazy_static! {
    static ref BUILTIN: Arc<Catalog> = Arc::new(
        Catalog::from_builtin()
            .unwrap_or_else(|e| panic!("built-in content table is invalid: {}", e))
    );
}

/// Slug-keyed content tables for every domain
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    blog: IndexMap<String, ContentRecord>,
    services: IndexMap<String, ContentRecord>,
}

impl Catalog {
    /// The content compiled into the binary
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    /// Build a catalog from records, rejecting duplicate or non-URL-safe slugs
    pub fn new(posts: Vec<BlogPost>, services: Vec<Service>) -> Result<Self, ResolveError> {
        let mut catalog = Self::default();
        for post in posts {
            catalog.insert(post.into())?;
        }
        for service in services {
            catalog.insert(service.into())?;
        }

        tracing::debug!(
            "Catalog loaded: {} posts, {} services",
            catalog.blog.len(),
            catalog.services.len()
        );
        Ok(catalog)
    }

    fn from_builtin() -> Result<Self, ResolveError> {
        Self::new(data::blog_posts()?, data::services())
    }

    fn insert(&mut self, record: ContentRecord) -> Result<(), ResolveError> {
        let slug = record.slug().to_string();
        let domain = record.domain();

        if slug.is_empty() || slug::slugify(&slug) != slug {
            return Err(ResolveError::invalid(format!(
                "{} slug {:?} is not URL-safe",
                domain, slug
            )));
        }

        let table = self.table_mut(domain);
        if table.contains_key(&slug) {
            return Err(ResolveError::invalid(format!(
                "duplicate {} slug {:?}",
                domain, slug
            )));
        }
        table.insert(slug, record);
        Ok(())
    }

    fn table_mut(&mut self, domain: Domain) -> &mut IndexMap<String, ContentRecord> {
        match domain {
            Domain::Blog => &mut self.blog,
            Domain::Service => &mut self.services,
        }
    }

    fn table(&self, domain: Domain) -> &IndexMap<String, ContentRecord> {
        match domain {
            Domain::Blog => &self.blog,
            Domain::Service => &self.services,
        }
    }

    /// Exact, case-sensitive slug lookup
    pub fn get(&self, domain: Domain, slug: &str) -> Option<&ContentRecord> {
        self.table(domain).get(slug)
    }

    /// Records of a domain in display order
    pub fn records(&self, domain: Domain) -> impl Iterator<Item = &ContentRecord> + '_ {
        self.table(domain).values()
    }

    pub fn len(&self, domain: Domain) -> usize {
        self.table(domain).len()
    }

    pub fn is_empty(&self) -> bool {
        self.blog.is_empty() && self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::record::fixtures::{blog_post, service};

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(Domain::Blog), 4);
        assert_eq!(catalog.len(Domain::Service), 7);
    }

    #[test]
    fn test_builtin_display_order() {
        let catalog = Catalog::builtin();
        let posts: Vec<_> = catalog.records(Domain::Blog).map(|r| r.slug()).collect();
        assert_eq!(
            posts,
            vec![
                "seo-importance-digital-marketing",
                "future-web-development-trends-2025",
                "odoo-erp-transform-business-operations",
                "native-vs-cross-platform-mobile-development",
            ]
        );

        let services: Vec<_> = catalog
            .records(Domain::Service)
            .map(|r| r.slug())
            .collect();
        assert_eq!(services.first(), Some(&"web-development"));
        assert_eq!(services.last(), Some(&"video-production"));
    }

    #[test]
    fn test_builtin_services_have_faqs() {
        let catalog = Catalog::builtin();
        for record in catalog.records(Domain::Service) {
            let service = record.as_service().unwrap();
            assert_eq!(service.faqs.len(), 3, "{}", service.slug);
        }
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = Catalog::new(vec![blog_post("same"), blog_post("same")], Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ResolveError::invalid("duplicate blog slug \"same\"")
        );
    }

    #[test]
    fn test_same_slug_in_different_domains() {
        let catalog = Catalog::new(vec![blog_post("shared")], vec![service("shared")]).unwrap();
        assert_eq!(catalog.get(Domain::Blog, "shared").unwrap().domain(), Domain::Blog);
        assert_eq!(
            catalog.get(Domain::Service, "shared").unwrap().domain(),
            Domain::Service
        );
    }

    #[test]
    fn test_unsafe_slug_rejected() {
        assert!(Catalog::new(vec![blog_post("Has Spaces")], Vec::new()).is_err());
        assert!(Catalog::new(vec![blog_post("")], Vec::new()).is_err());
        assert!(Catalog::new(Vec::new(), vec![service("UPPER")]).is_err());
    }
}
