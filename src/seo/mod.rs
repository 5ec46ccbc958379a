//! SEO metadata and structured data
//!
//! Record pages get their metadata from [`derive_metadata`]; top-level pages
//! and the not-found page are described by [`StaticPage`] and
//! [`not_found_metadata`]. [`PageHead`] collects whichever applies into the
//! values the templates render.

mod head;
mod metadata;
mod pages;
pub mod schema;

pub use head::PageHead;
pub use metadata::{
    derive_metadata, not_found_metadata, MetadataDeriver, NotFoundMetadata, OgImage, OgType,
    OpenGraph, Publisher, ResolvedMetadata, TwitterCard,
};
pub use pages::{organization_schema, Office, StaticPage, OFFICES};
