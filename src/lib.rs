//! Locale-aware canonical URLs and page metadata.
//!
//! Turns an internal page path plus a target locale into canonical and
//! alternate URLs, rewrites same-origin URLs inside structured data, and
//! assembles one [`MetadataRecord`](seo::MetadataRecord) per page.
//!
//! ```
//! use hreflang::core::SiteContext;
//! use hreflang::seo::{PageMeta, assemble};
//!
//! let ctx = SiteContext::default();
//! let record = assemble(&ctx, &PageMeta::new("Guide X", "/en/guides/foo"));
//! assert_eq!(record.canonical_url, "https://example.com/en/guides/foo");
//! assert_eq!(record.alternate("es"), Some("https://example.com/guides/foo"));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
pub mod logger;
pub mod render;
pub mod seo;
pub mod utils;
