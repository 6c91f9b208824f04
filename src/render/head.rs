//! `<head>` tag rendering for a [`MetadataRecord`].
//!
//! Writes into a `String` only; injecting it into a document is left to
//! the caller.

use std::fmt::Write;

use crate::seo::MetadataRecord;
use crate::utils::html::{escape, escape_attr, escape_script};

/// Render head tags, one per line.
///
/// Order: title, description, robots, keywords, canonical, alternates,
/// `x-default`, Open Graph, Twitter Card, JSON-LD.
pub fn render_head(record: &MetadataRecord) -> String {
    let mut out = String::with_capacity(2048);

    // Writing to a String never fails
    let _ = writeln!(out, "<title>{}</title>", escape(&record.full_title));
    meta_name(&mut out, "description", &record.description);
    meta_name(&mut out, "robots", record.robots_directive.as_str());
    if !record.keywords.is_empty() {
        meta_name(&mut out, "keywords", &record.keywords.join(", "));
    }

    let _ = writeln!(
        out,
        r#"<link rel="canonical" href="{}">"#,
        escape_attr(&record.canonical_url)
    );
    for alt in &record.alternate_urls_by_locale {
        alternate(&mut out, &alt.hreflang, &alt.href);
    }
    alternate(&mut out, "x-default", &record.x_default_url);

    for (property, content) in record.open_graph.properties() {
        let _ = writeln!(
            out,
            r#"<meta property="{property}" content="{}">"#,
            escape_attr(content)
        );
    }
    for (name, content) in record.twitter.names() {
        meta_name(&mut out, name, content);
    }

    for data in &record.structured_data_list {
        let json = serde_json::to_string(data).unwrap_or_default();
        let _ = writeln!(
            out,
            r#"<script type="application/ld+json">{}</script>"#,
            escape_script(&json)
        );
    }
    out
}

/// Render a minimal document: `<html lang>` around the head tags.
pub fn render_document(record: &MetadataRecord) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n{}</head>\n</html>\n",
        escape_attr(&record.lang),
        render_head(record)
    )
}

fn meta_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta name="{name}" content="{}">"#,
        escape_attr(content)
    );
}

fn alternate(out: &mut String, hreflang: &str, href: &str) {
    let _ = writeln!(
        out,
        r#"<link rel="alternate" hreflang="{}" href="{}">"#,
        escape_attr(hreflang),
        escape_attr(href)
    );
}
