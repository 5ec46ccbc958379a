//! Page metadata derived from a content record
//!
//! [`derive_metadata`] turns a resolved record into everything the page head
//! needs: title, description, canonical URL, Open Graph and Twitter card
//! values, and the JSON-LD objects. Derivation is pure; the same record,
//! domain, and base URL always give an identical [`ResolvedMetadata`].

use serde::Serialize;

use super::schema::{
    Answer, BlogPosting, BreadcrumbList, EntitySchema, FaqPage, ImageObject, Offer, Organization,
    Person, Question, ServiceSchema, StructuredData, WebPage, SCHEMA_CONTEXT,
};
use crate::config::SiteConfig;
use crate::content::{BlogPost, ContentRecord, Domain, Service};
use crate::error::ResolveError;
use crate::helpers::{date_xml, BaseUrl};

const TWITTER_CARD: &str = "summary_large_image";
const IN_STOCK: &str = "https://schema.org/InStock";

/// Who publishes the content, as it appears in structured data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publisher {
    pub name: String,
    /// Site-relative logo path
    pub logo: String,
    pub area_served: Vec<String>,
    /// Image used when a record has no media
    pub placeholder_image: String,
}

impl Default for Publisher {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl Publisher {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            name: config.title.clone(),
            logo: config.logo.clone(),
            area_served: config.area_served.clone(),
            placeholder_image: config.placeholder_image.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    Article,
    Website,
}

impl OgType {
    pub fn as_str(self) -> &'static str {
        match self {
            OgType::Article => "article",
            OgType::Website => "website",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// Open Graph tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub og_type: OgType,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub authors: Vec<String>,
    pub images: Vec<OgImage>,
}

/// Twitter card tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Metadata for one record page; recomputed on every resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMetadata {
    /// Record title, without the site-name suffix
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub structured_data: StructuredData,
}

impl ResolvedMetadata {
    /// The three-level breadcrumb schema
    pub fn breadcrumb(&self) -> &BreadcrumbList {
        &self.structured_data.breadcrumb
    }

    /// Every JSON-LD object in emission order
    pub fn json_ld(&self) -> serde_json::Result<Vec<serde_json::Value>> {
        self.structured_data.to_values()
    }
}

/// Metadata for a slug that did not resolve
///
/// Carries a title and a `noindex` directive but never any structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundMetadata {
    pub title: &'static str,
    pub robots: &'static str,
}

pub fn not_found_metadata(domain: Domain) -> NotFoundMetadata {
    NotFoundMetadata {
        title: domain.not_found_title(),
        robots: "noindex",
    }
}

/// Derive metadata for a record published by the default publisher
pub fn derive_metadata(
    record: &ContentRecord,
    domain: Domain,
    base_url: &str,
) -> Result<ResolvedMetadata, ResolveError> {
    MetadataDeriver::new(base_url, Publisher::default())?.derive(record, domain)
}

/// Derives record metadata for one site
#[derive(Debug, Clone)]
pub struct MetadataDeriver {
    base: BaseUrl,
    publisher: Publisher,
}

impl MetadataDeriver {
    pub fn new(base_url: &str, publisher: Publisher) -> Result<Self, ResolveError> {
        Ok(Self {
            base: BaseUrl::parse(base_url)?,
            publisher,
        })
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self, ResolveError> {
        Self::new(&config.url, Publisher::from_config(config))
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base
    }

    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// Canonical URL: base, domain segment, and slug, with no trailing slash
    pub fn canonical_url(&self, domain: Domain, slug: &str) -> String {
        self.base.record_url(domain.path_segment(), slug)
    }

    pub fn derive(
        &self,
        record: &ContentRecord,
        domain: Domain,
    ) -> Result<ResolvedMetadata, ResolveError> {
        if record.domain() != domain {
            return Err(ResolveError::invalid(format!(
                "{} record {:?} passed as {}",
                record.domain(),
                record.slug(),
                domain
            )));
        }
        for (field, value) in [
            ("slug", record.slug()),
            ("title", record.title()),
            ("description", record.summary()),
        ] {
            if value.is_empty() {
                return Err(ResolveError::invalid(format!(
                    "{} record {:?} has an empty {}",
                    domain,
                    record.slug(),
                    field
                )));
            }
        }

        let canonical_url = self.canonical_url(domain, record.slug());
        let image_url = self.image_url(record);
        let breadcrumb = self.breadcrumb(domain, record.title(), &canonical_url);

        let metadata = match record {
            ContentRecord::Blog(post) => {
                self.blog_metadata(post, canonical_url, image_url, breadcrumb)
            }
            ContentRecord::Service(service) => {
                self.service_metadata(service, canonical_url, image_url, breadcrumb)
            }
        };

        tracing::debug!("Derived metadata for {} {:?}", domain, record.slug());
        Ok(metadata)
    }

    /// Absolute URL of the primary image, or of the placeholder when the
    /// record has no media
    fn image_url(&self, record: &ContentRecord) -> String {
        match record.primary_media() {
            Some(media) => self.base.url_for(&media.path),
            None => self.base.url_for(&self.publisher.placeholder_image),
        }
    }

    fn breadcrumb(&self, domain: Domain, title: &str, canonical_url: &str) -> BreadcrumbList {
        BreadcrumbList::new([
            ("Home".to_string(), self.base.url_for("")),
            (
                domain.index_label().to_string(),
                self.base.section_url(domain.path_segment()),
            ),
            (title.to_string(), canonical_url.to_string()),
        ])
    }

    fn organization(&self) -> Organization {
        Organization {
            kind: "Organization",
            name: self.publisher.name.clone(),
            url: None,
            logo: None,
        }
    }

    fn blog_metadata(
        &self,
        post: &BlogPost,
        canonical_url: String,
        image_url: String,
        breadcrumb: BreadcrumbList,
    ) -> ResolvedMetadata {
        let published = date_xml(&post.published_at);
        let modified = date_xml(&post.modified_at);
        let social_title = format!("{} | {} Blog", post.title, self.publisher.name);

        let entity = EntitySchema::BlogPosting(BlogPosting {
            context: SCHEMA_CONTEXT,
            kind: "BlogPosting",
            headline: post.title.clone(),
            description: post.excerpt.clone(),
            image: image_url.clone(),
            date_published: published.clone(),
            date_modified: modified.clone(),
            author: Person::new(&post.author.name),
            publisher: Organization {
                logo: Some(ImageObject {
                    kind: "ImageObject",
                    url: self.base.url_for(&self.publisher.logo),
                }),
                ..self.organization()
            },
            main_entity_of_page: WebPage {
                kind: "WebPage",
                id: canonical_url.clone(),
            },
            keywords: post.keywords.join(", "),
        });

        ResolvedMetadata {
            title: post.title.clone(),
            description: post.excerpt.clone(),
            keywords: post.keywords.clone(),
            open_graph: OpenGraph {
                title: social_title.clone(),
                description: post.excerpt.clone(),
                url: canonical_url.clone(),
                og_type: OgType::Article,
                published_time: Some(published),
                modified_time: Some(modified),
                authors: vec![post.author.name.clone()],
                images: vec![OgImage {
                    url: image_url.clone(),
                    width: 1200,
                    height: 630,
                    alt: post.title.clone(),
                }],
            },
            twitter: TwitterCard {
                card: TWITTER_CARD,
                title: social_title,
                description: post.excerpt.clone(),
                images: vec![image_url],
            },
            canonical_url,
            structured_data: StructuredData {
                entity,
                breadcrumb,
                faq: None,
            },
        }
    }

    fn service_metadata(
        &self,
        service: &Service,
        canonical_url: String,
        image_url: String,
        breadcrumb: BreadcrumbList,
    ) -> ResolvedMetadata {
        let social_title = format!("{} | {}", service.title, self.publisher.name);

        let entity = EntitySchema::Service(ServiceSchema {
            context: SCHEMA_CONTEXT,
            kind: "Service",
            name: service.title.clone(),
            service_type: service.title.clone(),
            provider: Organization {
                url: Some(self.base.url_for("")),
                ..self.organization()
            },
            description: service.full_description.clone(),
            area_served: self.publisher.area_served.clone(),
            offers: Offer {
                kind: "Offer",
                availability: IN_STOCK.to_string(),
                url: canonical_url.clone(),
            },
            image: image_url.clone(),
        });

        ResolvedMetadata {
            title: service.title.clone(),
            description: service.description.clone(),
            keywords: Vec::new(),
            open_graph: OpenGraph {
                title: social_title.clone(),
                description: service.description.clone(),
                url: canonical_url.clone(),
                og_type: OgType::Website,
                published_time: None,
                modified_time: None,
                authors: Vec::new(),
                images: vec![OgImage {
                    url: image_url.clone(),
                    width: 800,
                    height: 600,
                    alt: service.title.clone(),
                }],
            },
            twitter: TwitterCard {
                card: TWITTER_CARD,
                title: social_title,
                description: service.description.clone(),
                images: vec![image_url],
            },
            canonical_url,
            structured_data: StructuredData {
                entity,
                breadcrumb,
                faq: faq_page(service),
            },
        }
    }
}

/// FAQ schema preserving question order; absent when there are no FAQs
fn faq_page(service: &Service) -> Option<FaqPage> {
    if service.faqs.is_empty() {
        return None;
    }

    Some(FaqPage {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity: service
            .faqs
            .iter()
            .map(|faq| Question {
                kind: "Question",
                name: faq.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer",
                    text: faq.answer.clone(),
                },
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::record::fixtures::{blog_post, service};
    use crate::content::{Catalog, Faq};
    use serde_json::json;

    const BASE: &str = "https://insertech.io";

    fn builtin(domain: Domain, slug: &str) -> ContentRecord {
        Catalog::builtin().get(domain, slug).unwrap().clone()
    }

    #[test]
    fn test_blog_metadata_matches_example() {
        let record = builtin(Domain::Blog, "seo-importance-digital-marketing");
        let metadata = derive_metadata(&record, Domain::Blog, BASE).unwrap();

        assert_eq!(
            metadata.title,
            "The Importance of SEO in Digital Marketing Strategy"
        );
        assert_eq!(
            metadata.canonical_url,
            "https://insertech.io/blog/seo-importance-digital-marketing"
        );

        let entity = serde_json::to_value(&metadata.structured_data.entity).unwrap();
        assert_eq!(entity["@type"], "BlogPosting");
        assert_eq!(entity["headline"], metadata.title.as_str());
        assert_eq!(entity["datePublished"], "2025-04-25T10:00:00Z");
        assert_eq!(entity["dateModified"], "2025-04-25T10:00:00Z");
        assert_eq!(entity["author"]["name"], "Sarah Miller");
        assert_eq!(entity["publisher"]["name"], "Insertech");
        assert_eq!(
            entity["publisher"]["logo"]["url"],
            "https://insertech.io/logo.png"
        );
        assert_eq!(
            entity["mainEntityOfPage"]["@id"],
            "https://insertech.io/blog/seo-importance-digital-marketing"
        );
        assert_eq!(
            entity["keywords"],
            "SEO, digital marketing, search engine optimization, online visibility, organic traffic"
        );
        assert_eq!(
            entity["image"],
            "https://insertech.io/blog/seo-importance.png"
        );
        assert!(metadata.structured_data.faq.is_none());
    }

    #[test]
    fn test_blog_social_tags() {
        let record = builtin(Domain::Blog, "odoo-erp-transform-business-operations");
        let metadata = derive_metadata(&record, Domain::Blog, BASE).unwrap();

        let og = &metadata.open_graph;
        assert_eq!(
            og.title,
            "How Odoo ERP Can Transform Your Business Operations | Insertech Blog"
        );
        assert_eq!(og.og_type, OgType::Article);
        assert_eq!(og.url, metadata.canonical_url);
        assert_eq!(og.authors, vec!["Sarah Miller".to_string()]);
        assert_eq!(og.images[0].url, "https://insertech.io/blog/odoo-erp.png");
        assert_eq!((og.images[0].width, og.images[0].height), (1200, 630));

        assert_eq!(metadata.twitter.card, "summary_large_image");
        assert_eq!(metadata.twitter.title, og.title);
        assert_eq!(metadata.twitter.images, vec![og.images[0].url.clone()]);
    }

    #[test]
    fn test_service_metadata() {
        let record = builtin(Domain::Service, "erp-systems");
        let metadata = derive_metadata(&record, Domain::Service, BASE).unwrap();

        assert_eq!(
            metadata.canonical_url,
            "https://insertech.io/services/erp-systems"
        );
        assert_eq!(metadata.open_graph.title, "ERP Systems & Odoo | Insertech");
        assert_eq!(metadata.open_graph.og_type, OgType::Website);

        let entity = serde_json::to_value(&metadata.structured_data.entity).unwrap();
        assert_eq!(
            entity,
            json!({
                "@context": "https://schema.org",
                "@type": "Service",
                "name": "ERP Systems & Odoo",
                "serviceType": "ERP Systems & Odoo",
                "provider": {
                    "@type": "Organization",
                    "name": "Insertech",
                    "url": "https://insertech.io"
                },
                "description": record.as_service().unwrap().full_description,
                "areaServed": ["Qatar", "Lebanon", "Middle East"],
                "offers": {
                    "@type": "Offer",
                    "availability": "https://schema.org/InStock",
                    "url": "https://insertech.io/services/erp-systems"
                },
                "image": "https://insertech.io/services/erp-systems-detailed.png"
            })
        );
    }

    #[test]
    fn test_breadcrumb_shape() {
        for domain in Domain::ALL {
            for record in Catalog::builtin().records(domain) {
                let metadata = derive_metadata(record, domain, BASE).unwrap();
                let items = &metadata.breadcrumb().item_list_element;
                let positions: Vec<u32> = items.iter().map(|item| item.position).collect();
                assert_eq!(positions, vec![1, 2, 3]);
                assert_eq!(items[0].item, "https://insertech.io");
                assert_eq!(items[1].name, domain.index_label());
                assert_eq!(items[2].name, record.title());
                assert_eq!(items[2].item, metadata.canonical_url);
            }
        }
    }

    #[test]
    fn test_canonical_url_for_every_record() {
        let catalog = Catalog::builtin();
        for domain in Domain::ALL {
            assert!(catalog.len(domain) > 0);
            for base in [BASE, "https://insertech.io/"] {
                for record in catalog.records(domain) {
                    let metadata = derive_metadata(record, domain, base).unwrap();
                    let expected =
                        format!("{}/{}/{}", BASE, domain.path_segment(), record.slug());

                    assert_eq!(metadata.canonical_url, expected);
                    assert!(!metadata.canonical_url.ends_with('/'));
                    assert!(!metadata.canonical_url.contains('?'));
                    assert_eq!(metadata.open_graph.url, expected);
                }
            }
        }
    }

    #[test]
    fn test_faq_order_preserved() {
        let mut service = service("faq-test");
        service.faqs = vec![
            Faq::new("q1", "a1"),
            Faq::new("q2", "a2"),
            Faq::new("q3", "a3"),
        ];
        let record = ContentRecord::from(service);
        let metadata = derive_metadata(&record, Domain::Service, BASE).unwrap();

        let faq = metadata.structured_data.faq.as_ref().unwrap();
        assert_eq!(faq.kind, "FAQPage");
        let pairs: Vec<_> = faq
            .main_entity
            .iter()
            .map(|q| (q.name.as_str(), q.accepted_answer.text.as_str()))
            .collect();
        assert_eq!(pairs, vec![("q1", "a1"), ("q2", "a2"), ("q3", "a3")]);
        assert_eq!(metadata.json_ld().unwrap().len(), 3);
    }

    #[test]
    fn test_no_faq_schema_without_faqs() {
        let record = ContentRecord::from(service("plain"));
        let metadata = derive_metadata(&record, Domain::Service, BASE).unwrap();
        assert!(metadata.structured_data.faq.is_none());
        assert_eq!(metadata.json_ld().unwrap().len(), 2);
    }

    #[test]
    fn test_placeholder_image_when_media_missing() {
        let mut post = blog_post("no-image");
        post.media.clear();
        let record = ContentRecord::from(post);
        let metadata = derive_metadata(&record, Domain::Blog, BASE).unwrap();

        let expected = "https://insertech.io/placeholder.svg";
        assert_eq!(metadata.open_graph.images[0].url, expected);
        assert_eq!(metadata.twitter.images, vec![expected.to_string()]);
        let entity = serde_json::to_value(&metadata.structured_data.entity).unwrap();
        assert_eq!(entity["image"], expected);
    }

    #[test]
    fn test_derive_is_idempotent() {
        let record = builtin(Domain::Service, "web-development");
        let first = derive_metadata(&record, Domain::Service, BASE).unwrap();
        let second = derive_metadata(&record, Domain::Service, BASE).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_trailing_slash_base_is_normalized() {
        let record = builtin(Domain::Blog, "future-web-development-trends-2025");
        let metadata = derive_metadata(&record, Domain::Blog, "https://insertech.io/").unwrap();
        assert_eq!(
            metadata.canonical_url,
            "https://insertech.io/blog/future-web-development-trends-2025"
        );
    }

    #[test]
    fn test_invalid_arguments() {
        let record = builtin(Domain::Blog, "seo-importance-digital-marketing");

        let err = derive_metadata(&record, Domain::Blog, "insertech.io").unwrap_err();
        assert!(matches!(err, ResolveError::InvalidArgument(_)));

        let err = derive_metadata(&record, Domain::Service, BASE).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidArgument(_)));

        let mut post = blog_post("untitled");
        post.title.clear();
        let err = derive_metadata(&post.into(), Domain::Blog, BASE).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidArgument(_)));
    }

    #[test]
    fn test_custom_publisher() {
        let publisher = Publisher {
            name: "Acme".to_string(),
            logo: "/brand.svg".to_string(),
            area_served: vec!["Mars".to_string()],
            placeholder_image: "/none.png".to_string(),
        };
        let deriver = MetadataDeriver::new("http://localhost:4000", publisher).unwrap();
        let record = ContentRecord::from(service("rockets"));
        let metadata = deriver.derive(&record, Domain::Service).unwrap();

        assert_eq!(metadata.open_graph.title, "Service rockets | Acme");
        let entity = serde_json::to_value(&metadata.structured_data.entity).unwrap();
        assert_eq!(entity["areaServed"], json!(["Mars"]));
        assert_eq!(entity["provider"]["url"], "http://localhost:4000");
    }

    #[test]
    fn test_not_found_metadata() {
        let metadata = not_found_metadata(Domain::Service);
        assert_eq!(metadata.title, "Service Not Found");
        assert_eq!(metadata.robots, "noindex");
    }
}
