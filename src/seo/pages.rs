//! Top-level pages and site-wide structured data

use serde::Serialize;
use serde_json::{json, Value};

use super::schema::SCHEMA_CONTEXT;
use crate::config::SiteConfig;
use crate::content::{ContentRecord, Domain};
use crate::helpers::BaseUrl;

/// A page that is not backed by a content record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticPage {
    Home,
    About,
    Services,
    Blog,
    Contact,
}

impl StaticPage {
    /// Every static page, in sitemap order
    pub const ALL: [StaticPage; 5] = [
        StaticPage::Home,
        StaticPage::About,
        StaticPage::Services,
        StaticPage::Blog,
        StaticPage::Contact,
    ];

    /// Site-relative path without leading slash; empty for the home page
    pub fn path(self) -> &'static str {
        match self {
            StaticPage::Home => "",
            StaticPage::About => "about",
            StaticPage::Services => "services",
            StaticPage::Blog => "blog",
            StaticPage::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StaticPage::Home => "Home",
            StaticPage::About => "About Us",
            StaticPage::Services => "Our Services & Technologies",
            StaticPage::Blog => "Blog",
            StaticPage::Contact => "Contact Us",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StaticPage::Home => {
                "Insertech - Leading software engineering agency specializing in web \
                 development, mobile apps, ERP solutions, and digital media for businesses \
                 in the Middle East."
            }
            StaticPage::About => {
                "Learn about Insertech - our story, values, and approach to digital solutions"
            }
            StaticPage::Services => {
                "Explore our comprehensive range of digital services and technologies \
                 including web development, mobile apps, ERP solutions, and more"
            }
            StaticPage::Blog => {
                "Stay updated with our latest articles, news, and industry insights"
            }
            StaticPage::Contact => {
                "Get in touch with our team at Insertech to discuss your project requirements \
                 or learn more about our software engineering and digital media services in \
                 Qatar and Lebanon."
            }
        }
    }

    /// Open Graph title; the home page uses the site's default title
    pub fn og_title(self, config: &SiteConfig) -> String {
        match self {
            StaticPage::Home => config.default_title.clone(),
            StaticPage::About => {
                "About Insertech - Software Engineering & Digital Media Agency".to_string()
            }
            StaticPage::Services => config.page_title("Services & Technologies"),
            StaticPage::Blog => config.page_title("Blog"),
            StaticPage::Contact => config.page_title("Contact Us"),
        }
    }

    pub fn og_description(self, config: &SiteConfig) -> String {
        match self {
            StaticPage::Home => config.description.clone(),
            StaticPage::About => "Learn about our team, our values, and our approach to \
                                  creating exceptional digital experiences"
                .to_string(),
            StaticPage::Services => "Discover our full range of digital services and \
                                     technologies designed to help your business thrive in \
                                     the digital age"
                .to_string(),
            StaticPage::Blog => "Read our latest articles on web development, mobile apps, \
                                 digital trends, and more"
                .to_string(),
            StaticPage::Contact => "Reach out to discuss your project requirements or learn \
                                    more about our services in Qatar, Lebanon, and across the \
                                    Middle East."
                .to_string(),
        }
    }

    /// Page-specific JSON-LD objects
    pub fn json_ld(self, base: &BaseUrl, config: &SiteConfig) -> Vec<Value> {
        match self {
            StaticPage::Contact => OFFICES
                .iter()
                .map(|office| office.local_business(base, config))
                .collect(),
            StaticPage::Home | StaticPage::About | StaticPage::Services | StaticPage::Blog => {
                Vec::new()
            }
        }
    }
}

/// A physical office
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Office {
    pub name: &'static str,
    pub telephone: &'static str,
    pub street: &'static str,
    pub locality: &'static str,
    pub region: &'static str,
    pub country: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub open_days: &'static [&'static str],
}

pub const OFFICES: [Office; 2] = [
    Office {
        name: "Qatar Office",
        telephone: "+97474716942",
        street: "UDC tower, 28th floor, Pearl",
        locality: "Doha",
        region: "Qatar",
        country: "QA",
        latitude: 25.3548,
        longitude: 51.1839,
        open_days: &["Monday", "Tuesday", "Wednesday", "Thursday", "Sunday"],
    },
    Office {
        name: "Lebanon Office",
        telephone: "+9613513968",
        street: "Ghobeiry Center, 7th floor, Mesharafiye",
        locality: "Beirut",
        region: "Lebanon",
        country: "LB",
        latitude: 33.8938,
        longitude: 35.5018,
        open_days: &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
    },
];

impl Office {
    fn address(&self) -> Value {
        json!({
            "@type": "PostalAddress",
            "streetAddress": self.street,
            "addressLocality": self.locality,
            "addressRegion": self.region,
            "addressCountry": self.country,
        })
    }

    /// `LocalBusiness` schema for the contact page
    pub fn local_business(&self, base: &BaseUrl, config: &SiteConfig) -> Value {
        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "LocalBusiness",
            "name": format!("{} - {}", config.title, self.name),
            "image": base.url_for(&config.logo),
            "url": base.url_for(""),
            "telephone": self.telephone,
            "address": self.address(),
            "geo": {
                "@type": "GeoCoordinates",
                "latitude": self.latitude,
                "longitude": self.longitude,
            },
            "openingHoursSpecification": [{
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": self.open_days,
                "opens": "09:00",
                "closes": "18:00",
            }],
            "sameAs": same_as(),
        })
    }
}

fn same_as() -> Vec<&'static str> {
    vec![
        "https://www.facebook.com/insertech",
        "https://www.twitter.com/insertech",
        "https://www.linkedin.com/company/insertech",
        "https://g.page/insertech",
    ]
}

/// Site-wide `Organization` schema, with an offer catalog built from the
/// services table
pub fn organization_schema<'a, I>(base: &BaseUrl, config: &SiteConfig, services: I) -> Value
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    let offers: Vec<Value> = services
        .into_iter()
        .map(|service| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": service.title(),
                    "url": base.record_url(Domain::Service.path_segment(), service.slug()),
                }
            })
        })
        .collect();

    let contact_points: Vec<Value> = OFFICES
        .iter()
        .map(|office| {
            json!({
                "@type": "ContactPoint",
                "telephone": office.telephone,
                "contactType": "customer service",
                "areaServed": office.region,
                "availableLanguage": ["English", "Arabic"],
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": config.title,
        "url": base.url_for(""),
        "logo": base.url_for(&config.logo),
        "description": config.description,
        "address": OFFICES.iter().map(Office::address).collect::<Vec<_>>(),
        "contactPoint": contact_points,
        "sameAs": same_as(),
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": "Software Development Services",
            "itemListElement": offers,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    fn base() -> BaseUrl {
        BaseUrl::parse("https://insertech.io").unwrap()
    }

    #[test]
    fn test_static_paths() {
        let paths: Vec<_> = StaticPage::ALL.iter().map(|p| p.path()).collect();
        assert_eq!(paths, vec!["", "about", "services", "blog", "contact"]);
    }

    #[test]
    fn test_og_titles() {
        let config = SiteConfig::default();
        assert_eq!(
            StaticPage::Blog.og_title(&config),
            "Blog | Insertech - Software Engineering & Digital Media Agency"
        );
        assert_eq!(StaticPage::Home.og_title(&config), config.default_title);
    }

    #[test]
    fn test_contact_local_businesses() {
        let config = SiteConfig::default();
        let schemas = StaticPage::Contact.json_ld(&base(), &config);
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas[0]["@type"], "LocalBusiness");
        assert_eq!(schemas[0]["name"], "Insertech - Qatar Office");
        assert_eq!(schemas[1]["address"]["addressCountry"], "LB");
        assert!(StaticPage::About.json_ld(&base(), &config).is_empty());
    }

    #[test]
    fn test_organization_offer_catalog() {
        let config = SiteConfig::default();
        let catalog = Catalog::builtin();
        let org = organization_schema(&base(), &config, catalog.records(Domain::Service));

        let offers = org["hasOfferCatalog"]["itemListElement"].as_array().unwrap();
        assert_eq!(offers.len(), 7);
        assert_eq!(
            offers[0]["itemOffered"]["url"],
            "https://insertech.io/services/web-development"
        );
        assert_eq!(org["logo"], "https://insertech.io/logo.png");
    }
}
