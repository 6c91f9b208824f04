//! Content generators.
//!
//! - **Sitemap**: localized `sitemap.xml` with `hreflang` alternates

pub mod sitemap;

pub use sitemap::build_sitemap;
