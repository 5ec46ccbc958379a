//! insertech-site: content resolver and static site generator for the
//! Insertech agency website
//!
//! Blog posts and services live in an immutable in-memory catalog. The
//! [`resolver`] maps `(domain, slug)` pairs to records, [`seo`] derives the
//! page metadata and JSON-LD for them, and the [`generator`] and [`server`]
//! render the result with the embedded Tera templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod resolver;
pub mod seo;
pub mod server;
pub mod templates;

pub use error::ResolveError;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Resolver over the built-in content
    pub resolver: resolver::Resolver,
}

impl Site {
    /// Open a site, reading `_config.yml` from the directory when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);
        let resolver = resolver::Resolver::from_config(&config)?;

        Ok(Self {
            config,
            base_dir,
            public_dir,
            resolver,
        })
    }

    /// A page renderer for this site
    pub fn renderer(&self) -> Result<templates::SiteRenderer> {
        templates::SiteRenderer::new(self.config.clone(), self.resolver.clone())
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
