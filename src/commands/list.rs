//! List site content

use anyhow::Result;
use std::fmt::{self, Write as _};

use crate::content::{ContentRecord, Domain};
use crate::helpers::read_time;
use crate::Site;

/// List the records of one domain in display order
pub fn run(site: &Site, domain: &str) -> Result<()> {
    let domain: Domain = domain.parse().map_err(anyhow::Error::msg)?;
    print!("{}", render(site, domain)?);
    Ok(())
}

fn render(site: &Site, domain: Domain) -> Result<String, fmt::Error> {
    let resolver = &site.resolver;
    let mut out = String::new();

    let heading = domain.index_label();
    writeln!(out, "{} ({}):", heading, resolver.catalog().len(domain))?;
    for record in resolver.list_all(domain) {
        match record {
            ContentRecord::Blog(post) => writeln!(
                out,
                "  {} - {} [{}, {}]",
                post.published_at.format("%Y-%m-%d"),
                post.title,
                post.slug,
                read_time(post.read_time_minutes)
            )?,
            ContentRecord::Service(service) => writeln!(
                out,
                "  {} [{}, {}]",
                service.title, service.slug, service.category
            )?,
        }
    }

    Ok(out)
}
