//! Print the sitemap

use anyhow::Result;
use chrono::Utc;

use crate::generator::Sitemap;
use crate::Site;

pub fn run(site: &Site) -> Result<()> {
    let sitemap = Sitemap::build(&site.resolver, Utc::now());
    print!("{}", sitemap.to_xml());
    Ok(())
}
