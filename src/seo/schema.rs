//! schema.org JSON-LD objects
//!
//! Every object is a plain struct, so a schema is either fully populated or
//! not emitted at all. Field order follows declaration order in the output.

use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

impl Person {
    pub fn new(name: &str) -> Self {
        Self {
            kind: "Person",
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

/// A publishing or providing organization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPosting {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub image: String,
    pub date_published: String,
    pub date_modified: String,
    pub author: Person,
    pub publisher: Organization,
    pub main_entity_of_page: WebPage,
    /// Comma-joined keywords
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub availability: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub service_type: String,
    pub provider: Organization,
    pub description: String,
    pub area_served: Vec<String>,
    pub offers: Offer,
    pub image: String,
}

/// The schema describing the record itself
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntitySchema {
    BlogPosting(BlogPosting),
    Service(ServiceSchema),
}

impl EntitySchema {
    /// The schema.org type name
    pub fn type_name(&self) -> &'static str {
        match self {
            EntitySchema::BlogPosting(schema) => schema.kind,
            EntitySchema::Service(schema) => schema.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: u32,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

impl BreadcrumbList {
    /// Build a breadcrumb trail; positions are numbered from 1 in order
    pub fn new<I>(crumbs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let item_list_element = crumbs
            .into_iter()
            .zip(1..)
            .map(|((name, item), position)| ListItem {
                kind: "ListItem",
                position,
                name,
                item,
            })
            .collect();

        Self {
            context: SCHEMA_CONTEXT,
            kind: "BreadcrumbList",
            item_list_element,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub main_entity: Vec<Question>,
}

/// All JSON-LD objects derived for one record page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredData {
    pub entity: EntitySchema,
    pub breadcrumb: BreadcrumbList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<FaqPage>,
}

impl StructuredData {
    /// Every object in emission order: entity, breadcrumb, then FAQ
    pub fn to_values(&self) -> serde_json::Result<Vec<serde_json::Value>> {
        let mut values = vec![
            serde_json::to_value(&self.entity)?,
            serde_json::to_value(&self.breadcrumb)?,
        ];
        if let Some(faq) = &self.faq {
            values.push(serde_json::to_value(faq)?);
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_breadcrumb_positions() {
        let breadcrumb = BreadcrumbList::new(vec![
            ("Home".to_string(), "https://a.io".to_string()),
            ("Blog".to_string(), "https://a.io/blog".to_string()),
            ("Post".to_string(), "https://a.io/blog/post".to_string()),
        ]);
        let positions: Vec<u32> = breadcrumb
            .item_list_element
            .iter()
            .map(|item| item.position)
            .collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_breadcrumb_serialization() {
        let breadcrumb = BreadcrumbList::new(vec![("Home".to_string(), "https://a.io".to_string())]);
        assert_eq!(
            serde_json::to_value(&breadcrumb).unwrap(),
            json!({
                "@context": "https://schema.org",
                "@type": "BreadcrumbList",
                "itemListElement": [
                    { "@type": "ListItem", "position": 1, "name": "Home", "item": "https://a.io" }
                ]
            })
        );
    }

    #[test]
    fn test_organization_skips_absent_fields() {
        let org = Organization {
            kind: "Organization",
            name: "Insertech".to_string(),
            url: None,
            logo: None,
        };
        assert_eq!(
            serde_json::to_value(&org).unwrap(),
            json!({ "@type": "Organization", "name": "Insertech" })
        );
    }
}
