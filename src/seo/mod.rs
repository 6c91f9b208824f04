//! Page metadata: canonical and alternate URLs, Open Graph, Twitter Card
//! and JSON-LD structured data.
//!
//! The entry point is [`MetadataAssembler::assemble`], a pure function of
//! a [`SiteContext`](crate::core::SiteContext) and a [`PageMeta`].

mod assemble;
mod jsonld;
mod meta;
mod og;
mod record;
mod schema;

pub use assemble::{MetadataAssembler, assemble};
pub use jsonld::{PageFacts, article, web_page};
pub use meta::{ContentKind, PageMeta};
pub use og::{ArticleTags, OgType, OpenGraph, TwitterCard};
pub use record::{Alternate, MetadataRecord, Robots};
pub use schema::SchemaLocalizer;
