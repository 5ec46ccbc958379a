//! Show the resolved metadata for one slug

use anyhow::Result;

use crate::content::Domain;
use crate::error::ResolveError;
use crate::seo::not_found_metadata;
use crate::Site;

/// Print a record's metadata as JSON
///
/// An unknown slug prints the not-found metadata instead and is not an error.
pub fn run(site: &Site, domain: &str, slug: &str) -> Result<()> {
    let domain: Domain = domain.parse().map_err(anyhow::Error::msg)?;
    println!("{}", render(site, domain, slug)?);
    Ok(())
}

fn render(site: &Site, domain: Domain, slug: &str) -> Result<String> {
    match site.resolver.resolve(domain, slug) {
        Ok(page) => Ok(serde_json::to_string_pretty(&page.metadata)?),
        Err(e @ ResolveError::NotFound { .. }) => {
            tracing::warn!("{}", e);
            Ok(serde_json::to_string_pretty(&not_found_metadata(domain))?)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[test]
    fn test_show_service() {
        let (_dir, site) = site();
        let json: serde_json::Value =
            serde_json::from_str(&render(&site, Domain::Service, "shopify").unwrap()).unwrap();

        assert_eq!(json["canonical_url"], "https://insertech.io/services/shopify");
        assert_eq!(json["open_graph"]["og_type"], "website");
        assert_eq!(json["structured_data"]["entity"]["@type"], "Service");
    }

    #[test]
    fn test_show_unknown_slug() {
        let (_dir, site) = site();
        let json: serde_json::Value =
            serde_json::from_str(&render(&site, Domain::Blog, "missing").unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "title": "Post Not Found", "robots": "noindex" })
        );
    }
}
