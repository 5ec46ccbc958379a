//! Full-page rendering on top of the resolver

use anyhow::Result;
use chrono::{Datelike, Utc};
use serde_json::Value;
use tera::Context;

use super::{
    CardView, CrumbView, NavItem, PageView, PostView, ServiceView, SiteView, TabView,
    TemplateRenderer,
};
use crate::config::SiteConfig;
use crate::content::{BlogPost, ContentRecord, Domain, Media, Service};
use crate::error::ResolveError;
use crate::helpers::{full_date, read_time, url_for};
use crate::resolver::Resolver;
use crate::seo::{not_found_metadata, organization_schema, PageHead, StaticPage, OFFICES};

/// Outcome of rendering a record route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedPage {
    Found(String),
    /// The slug is unknown; carries the rendered not-found page
    NotFound(String),
}

impl RenderedPage {
    pub fn is_found(&self) -> bool {
        matches!(self, RenderedPage::Found(_))
    }

    pub fn into_html(self) -> String {
        match self {
            RenderedPage::Found(html) | RenderedPage::NotFound(html) => html,
        }
    }
}

/// Renders every page of the site
pub struct SiteRenderer {
    config: SiteConfig,
    resolver: Resolver,
    templates: TemplateRenderer,
    site: SiteView,
    organization: Value,
}

impl SiteRenderer {
    pub fn new(config: SiteConfig, resolver: Resolver) -> Result<Self> {
        let templates = TemplateRenderer::new()?;
        let organization = organization_schema(
            resolver.deriver().base_url(),
            &config,
            resolver.list_all(Domain::Service),
        );
        let site = site_view(&config, &resolver);

        Ok(Self {
            config,
            resolver,
            templates,
            site,
            organization,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    fn context(&self, head: &PageHead) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site);
        context.insert("head", head);
        context
    }

    /// Render one of the top-level pages
    pub fn render_static(&self, page: StaticPage) -> Result<String> {
        let mut head =
            PageHead::for_static_page(&self.config, self.resolver.deriver().base_url(), page)?;
        head.push_json_ld(&self.organization)?;

        let cards = match page {
            StaticPage::Home | StaticPage::Services => self.cards(Domain::Service),
            StaticPage::Blog => self.cards(Domain::Blog),
            StaticPage::About | StaticPage::Contact => Vec::new(),
        };
        let offices = match page {
            StaticPage::Contact => OFFICES.to_vec(),
            _ => Vec::new(),
        };
        let heading = match page {
            StaticPage::Home => self.config.default_title.clone(),
            _ => page.title().to_string(),
        };

        let view = PageView {
            heading,
            lead: page.description().to_string(),
            cards,
            offices,
        };

        let mut context = self.context(&head);
        context.insert("page", &view);
        self.templates.render("page.html", &context)
    }

    /// Render a blog post or service page
    ///
    /// An unknown slug is not an error: it yields the not-found page. Any
    /// other resolution failure is propagated.
    pub fn render_record(&self, domain: Domain, slug: &str) -> Result<RenderedPage> {
        let resolved = match self.resolver.resolve(domain, slug) {
            Ok(resolved) => resolved,
            Err(ResolveError::NotFound { .. }) => {
                tracing::debug!("No {} record for slug {:?}", domain, slug);
                return Ok(RenderedPage::NotFound(self.render_not_found(Some(domain))?));
            }
            Err(e) => return Err(e.into()),
        };

        let mut head = PageHead::for_record(&self.config, &resolved.metadata)?;
        head.push_json_ld(&self.organization)?;

        let mut context = self.context(&head);
        context.insert(
            "crumb",
            &CrumbView {
                section_path: domain.path_segment().to_string(),
                section_label: domain.index_label().to_string(),
                title: resolved.record.title().to_string(),
            },
        );

        let html = match resolved.record {
            ContentRecord::Blog(post) => {
                context.insert("post", &self.post_view(post));
                self.templates.render("post.html", &context)?
            }
            ContentRecord::Service(service) => {
                context.insert("service", &self.service_view(service));
                self.templates.render("service.html", &context)?
            }
        };
        Ok(RenderedPage::Found(html))
    }

    /// The generic not-found page, titled for the domain when one is known
    pub fn render_not_found(&self, domain: Option<Domain>) -> Result<String> {
        let metadata = domain.map(not_found_metadata);
        let head = PageHead::not_found(&self.config, metadata.as_ref());
        self.templates.render("not_found.html", &self.context(&head))
    }

    /// Site-relative image path and alt text, falling back to the placeholder
    fn image_for(&self, media: Option<&Media>, title: &str) -> (String, String) {
        match media {
            Some(media) => (media.path.clone(), media.alt.clone()),
            None => (self.config.placeholder_image.clone(), title.to_string()),
        }
    }

    fn cards(&self, domain: Domain) -> Vec<CardView> {
        self.resolver
            .list_all(domain)
            .map(|record| {
                let (image, image_alt) = self.image_for(record.primary_media(), record.title());
                let meta = record.as_blog().map(|post| {
                    format!(
                        "{} · {}",
                        full_date(&post.published_at),
                        read_time(post.read_time_minutes)
                    )
                });
                CardView {
                    path: url_for(&format!("{}/{}", domain.path_segment(), record.slug())),
                    image,
                    image_alt,
                    category: record.category().to_string(),
                    title: record.title().to_string(),
                    summary: record.summary().to_string(),
                    meta,
                }
            })
            .collect()
    }

    fn post_view(&self, post: &BlogPost) -> PostView {
        let (image, image_alt) = self.image_for(post.media.first(), &post.title);
        PostView {
            title: post.title.clone(),
            category: post.category.clone(),
            published_at: post.published_at.to_rfc3339(),
            date: full_date(&post.published_at),
            read_time: read_time(post.read_time_minutes),
            author_name: post.author.name.clone(),
            author_avatar: post.author.avatar.clone(),
            image,
            image_alt,
            body: post.body.clone(),
        }
    }

    fn service_view(&self, service: &Service) -> ServiceView {
        let (image, image_alt) = self.image_for(service.media.first(), &service.title);

        let siblings = self
            .resolver
            .list_all(Domain::Service)
            .filter_map(ContentRecord::as_service)
            .map(|sibling| TabView {
                label: sibling.title.clone(),
                path: url_for(&format!(
                    "{}/{}",
                    Domain::Service.path_segment(),
                    sibling.slug
                )),
                icon: sibling.icon.name(),
                active: sibling.slug == service.slug,
            })
            .collect();

        ServiceView {
            title: service.title.clone(),
            full_description: service.full_description.clone(),
            features: service.features.clone(),
            technologies: service.technologies.clone(),
            faqs: service.faqs.clone(),
            image,
            image_alt,
            siblings,
        }
    }
}

fn site_view(config: &SiteConfig, resolver: &Resolver) -> SiteView {
    let nav = StaticPage::ALL
        .iter()
        .map(|page| NavItem {
            label: page.title().to_string(),
            path: url_for(page.path()),
        })
        .collect();

    let services = resolver
        .list_all(Domain::Service)
        .map(|record| NavItem {
            label: record.title().to_string(),
            path: url_for(&format!(
                "{}/{}",
                Domain::Service.path_segment(),
                record.slug()
            )),
        })
        .collect();

    SiteView {
        name: config.title.clone(),
        author: config.author.clone(),
        language: config.language.clone(),
        locale: config.locale.clone(),
        twitter_creator: config.twitter_creator.clone(),
        year: Utc::now().year(),
        nav,
        services,
        offices: OFFICES.to_vec(),
    }
}
