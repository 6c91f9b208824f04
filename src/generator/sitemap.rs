//! Localized sitemap generation.
//!
//! One `<url>` per (page, locale) pair, each listing every locale's
//! alternate plus `x-default`.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://example.com/en/guides</loc>
//!     <xhtml:link rel="alternate" hreflang="es" href="https://example.com/guides"/>
//!     <xhtml:link rel="alternate" hreflang="en" href="https://example.com/en/guides"/>
//!     <xhtml:link rel="alternate" hreflang="x-default" href="https://example.com/guides"/>
//!   </url>
//! </urlset>
//! ```

use std::collections::HashSet;

use crate::core::SiteContext;
use crate::debug;
use crate::seo::{Alternate, MetadataAssembler};
use crate::utils::html::escape_attr;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    alternates: Vec<Alternate>,
}

/// Build sitemap XML for the given page paths.
///
/// Paths may carry any locale prefix; pages sharing a logical path are
/// listed once per locale. Excluded paths (assets, API routes, files)
/// are skipped.
pub fn build_sitemap<S: AsRef<str>>(ctx: &SiteContext, paths: &[S]) -> String {
    Sitemap::build(ctx, paths).into_xml()
}

impl Sitemap {
    fn build<S: AsRef<str>>(ctx: &SiteContext, paths: &[S]) -> Self {
        let assembler = MetadataAssembler::new(ctx);
        let localizer = ctx.paths();
        let mut seen: HashSet<String> = HashSet::new();
        let mut urls = Vec::new();

        for path in paths.iter().map(|p| p.as_ref().trim()) {
            if path.is_empty() {
                continue;
            }
            let logical = assembler.logical_path(path);
            if localizer.is_excluded(&logical) {
                debug!("sitemap"; "skipping excluded path `{}`", path);
                continue;
            }
            if !seen.insert(logical.clone()) {
                continue;
            }

            let mut alternates = assembler.alternates(&logical);
            alternates.push(Alternate {
                hreflang: "x-default".into(),
                href: assembler.url_for(&logical, ctx.x_default_locale()),
            });
            for locale in ctx.locales() {
                urls.push(UrlEntry {
                    loc: assembler.url_for(&logical, locale),
                    alternates: alternates.clone(),
                });
            }
        }

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\" xmlns:xhtml=\"");
        xml.push_str(XHTML_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_attr(&entry.loc));
            xml.push_str("</loc>\n");
            for alt in &entry.alternates {
                xml.push_str("    <xhtml:link rel=\"alternate\" hreflang=\"");
                xml.push_str(&escape_attr(&alt.hreflang));
                xml.push_str("\" href=\"");
                xml.push_str(&escape_attr(&alt.href));
                xml.push_str("\"/>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}
