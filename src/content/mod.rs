//! Content module - domains, records, and the static content tables

mod catalog;
mod data;
mod domain;
pub(crate) mod record;

pub use catalog::Catalog;
pub use domain::Domain;
pub use record::{Author, BlogPost, ContentRecord, Faq, Media, Service, ServiceIcon};
