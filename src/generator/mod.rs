//! Generator module - writes the static site using the built-in templates

mod sitemap;

pub use sitemap::{ChangeFrequency, Sitemap, SitemapEntry};

use anyhow::{Context as _, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::Domain;
use crate::seo::StaticPage;
use crate::templates::{RenderedPage, SiteRenderer};
use crate::Site;

/// Static site generator
pub struct Generator {
    public_dir: PathBuf,
    renderer: SiteRenderer,
}

impl Generator {
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            public_dir: site.public_dir.clone(),
            renderer: site.renderer()?,
        })
    }

    /// Generate the entire site, returning the number of files written
    pub fn generate(&self) -> Result<usize> {
        fs::create_dir_all(&self.public_dir)?;

        let mut written = 0;
        written += self.generate_static_pages()?;
        written += self.generate_record_pages()?;

        let not_found = self.renderer.render_not_found(None)?;
        self.write(&self.public_dir.join("404.html"), &not_found)?;
        written += 1;

        self.generate_sitemap()?;
        written += 1;

        Ok(written)
    }

    fn generate_static_pages(&self) -> Result<usize> {
        for page in StaticPage::ALL {
            let html = self.renderer.render_static(page)?;
            self.write(&self.page_path(page.path()), &html)?;
        }
        tracing::info!("Generated {} static pages", StaticPage::ALL.len());
        Ok(StaticPage::ALL.len())
    }

    fn generate_record_pages(&self) -> Result<usize> {
        let resolver = self.renderer.resolver();
        let mut count = 0;

        for domain in Domain::ALL {
            for record in resolver.list_all(domain) {
                let html = match self.renderer.render_record(domain, record.slug())? {
                    RenderedPage::Found(html) => html,
                    RenderedPage::NotFound(_) => {
                        anyhow::bail!("listed {} record {:?} did not resolve", domain, record.slug())
                    }
                };
                let path = self.page_path(&format!("{}/{}", domain.path_segment(), record.slug()));
                self.write(&path, &html)?;
                count += 1;
            }
            tracing::info!(
                "Generated {} {} pages",
                resolver.catalog().len(domain),
                domain
            );
        }

        Ok(count)
    }

    fn generate_sitemap(&self) -> Result<()> {
        let sitemap = Sitemap::build(self.renderer.resolver(), Utc::now());
        self.write(&self.public_dir.join("sitemap.xml"), &sitemap.to_xml())?;
        tracing::info!("Generated sitemap.xml ({} urls)", sitemap.entries.len());
        Ok(())
    }

    /// `public/<path>/index.html`; the empty path is the site root
    fn page_path(&self, path: &str) -> PathBuf {
        let path = path.trim_matches('/');
        if path.is_empty() {
            self.public_dir.join("index.html")
        } else {
            self.public_dir.join(path).join("index.html")
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
        fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
        tracing::debug!("Generated: {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn generate() -> (TempDir, usize) {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let written = Generator::new(&site).unwrap().generate().unwrap();
        (dir, written)
    }

    #[test]
    fn test_generate_writes_every_page() {
        let (dir, written) = generate();
        let public = dir.path().join("public");

        assert_eq!(written, 5 + 4 + 7 + 2);
        for path in [
            "index.html",
            "about/index.html",
            "services/index.html",
            "blog/index.html",
            "contact/index.html",
            "blog/future-web-development-trends-2025/index.html",
            "services/video-production/index.html",
            "404.html",
            "sitemap.xml",
        ] {
            assert!(public.join(path).is_file(), "missing {}", path);
        }
    }

    #[test]
    fn test_generated_post_has_head_tags() {
        let (dir, _) = generate();
        let html = fs::read_to_string(
            dir.path()
                .join("public/blog/native-vs-cross-platform-mobile-development/index.html"),
        )
        .unwrap();

        assert!(html.contains(
            r#"<link rel="canonical" href="https://insertech.io/blog/native-vs-cross-platform-mobile-development">"#
        ));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert_eq!(html.matches("application/ld+json").count(), 3);
    }

    #[test]
    fn test_generated_sitemap_uses_configured_url() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "url: https://staging.insertech.io/\npublic_dir: dist\n",
        )
        .unwrap();
        let site = Site::new(dir.path()).unwrap();
        Generator::new(&site).unwrap().generate().unwrap();

        let xml = fs::read_to_string(dir.path().join("dist/sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://staging.insertech.io/blog</loc>"));
        assert!(!xml.contains("https://insertech.io"));
    }
}
