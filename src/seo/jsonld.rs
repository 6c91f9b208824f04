//! Default JSON-LD structured data.

use serde_json::{Value, json};

use crate::core::{Locale, SiteContext};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Page fields the builders need, already resolved to absolute URLs.
#[derive(Debug, Clone, Copy)]
pub struct PageFacts<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub url: &'a str,
    pub image_url: &'a str,
    pub locale: &'a Locale,
    /// Absolute URL of the site root for `locale`.
    pub home_url: &'a str,
    pub keywords: &'a [String],
}

/// `WebPage` record with its parent `WebSite`.
pub fn web_page(ctx: &SiteContext, page: &PageFacts<'_>) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebPage",
        "name": page.title,
        "description": page.description,
        "url": page.url,
        "inLanguage": page.locale.code,
        "isPartOf": {
            "@type": "WebSite",
            "name": ctx.name,
            "url": page.home_url,
        },
    })
}

/// `Article` record with publisher.
///
/// `dateModified` falls back to `datePublished`.
pub fn article(
    ctx: &SiteContext,
    page: &PageFacts<'_>,
    published: &str,
    modified: Option<&str>,
) -> Value {
    let mut value = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": page.title,
        "description": page.description,
        "url": page.url,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": page.url,
        },
        "image": [page.image_url],
        "inLanguage": page.locale.code,
        "datePublished": published,
        "dateModified": modified.unwrap_or(published),
        "publisher": publisher(ctx),
    });

    if !page.keywords.is_empty()
        && let Some(map) = value.as_object_mut()
    {
        map.insert("keywords".into(), Value::from(page.keywords.join(", ")));
    }
    value
}

fn publisher(ctx: &SiteContext) -> Value {
    let org = &ctx.organization;
    json!({
        "@type": "Organization",
        "name": org.name,
        "url": org.url,
        "logo": {
            "@type": "ImageObject",
            "url": org.logo_url,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_facts<R>(keywords: &[String], f: impl FnOnce(&SiteContext, &PageFacts<'_>) -> R) -> R {
        let ctx = SiteContext::default();
        let facts = PageFacts {
            title: "Guide X",
            description: "About X",
            url: "https://example.com/en/guides/x",
            image_url: "https://example.com/og-default.jpg",
            locale: ctx.locales().get("en"),
            home_url: "https://example.com/en",
            keywords,
        };
        f(&ctx, &facts)
    }

    #[test]
    fn test_web_page() {
        with_facts(&[], |ctx, facts| {
            let value = web_page(ctx, facts);
            assert_eq!(value["@type"], "WebPage");
            assert_eq!(value["inLanguage"], "en");
            assert_eq!(value["isPartOf"]["url"], "https://example.com/en");
        });
    }

    #[test]
    fn test_article_date_modified_fallback() {
        with_facts(&[], |ctx, facts| {
            let value = article(ctx, facts, "2024-06-15T00:00:00Z", None);
            assert_eq!(value["dateModified"], value["datePublished"]);
            assert!(value.get("keywords").is_none());

            let value = article(ctx, facts, "2024-06-15T00:00:00Z", Some("2024-07-01T00:00:00Z"));
            assert_eq!(value["dateModified"], "2024-07-01T00:00:00Z");
        });
    }

    #[test]
    fn test_article_publisher() {
        let keywords = vec!["rust".to_string(), "seo".to_string()];
        with_facts(&keywords, |ctx, facts| {
            let value = article(ctx, facts, "2024-06-15T00:00:00Z", None);
            assert_eq!(
                value["publisher"],
                json!({
                    "@type": "Organization",
                    "name": "Example",
                    "url": "https://example.com",
                    "logo": {"@type": "ImageObject", "url": "https://example.com/logo.png"}
                })
            );
            assert_eq!(value["keywords"], "rust, seo");
        });
    }
}
