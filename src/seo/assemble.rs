//! Page metadata assembly.
//!
//! Composes locale resolution, path localization, URL canonicalization and
//! structured-data localization into one [`MetadataRecord`] per page.
//!
//! ```text
//! PageMeta ─┬─► locale ─► canonical path ─► canonicalUrl
//!           │                 └──────────► one alternate per locale + x-default
//!           ├─► OG / Twitter fields
//!           └─► default JSON-LD + page JSON-LD (localized)
//! ```

use std::borrow::Cow;

use crate::core::{LinkKind, Locale, SiteContext, encode_path, is_absolute_url, split_suffix};
use crate::utils::date::normalize_timestamp;

use super::jsonld::{self, PageFacts};
use super::meta::{ContentKind, PageMeta};
use super::og::{ArticleTags, OgType, OpenGraph, TwitterCard};
use super::record::{Alternate, MetadataRecord, Robots};
use super::schema::SchemaLocalizer;

/// Builds metadata records against one site context.
#[derive(Debug, Clone, Copy)]
pub struct MetadataAssembler<'a> {
    ctx: &'a SiteContext,
}

impl<'a> MetadataAssembler<'a> {
    pub fn new(ctx: &'a SiteContext) -> Self {
        Self { ctx }
    }

    /// Active locale: the explicit code if given (unknown codes normalize to
    /// the default), otherwise the one resolved from the path.
    pub fn locale_for(&self, page: &PageMeta) -> &'a Locale {
        match page.locale.as_deref() {
            Some(code) => self.ctx.locales().get(code),
            None => {
                let path = normalize_page_path(&page.path);
                self.ctx.paths().resolve(split_suffix(&path).0)
            }
        }
    }

    /// Locale-neutral pathname of a page path: query and fragment dropped,
    /// locale prefixes stripped.
    pub fn logical_path(&self, path: &str) -> String {
        let path = normalize_page_path(path);
        let (pathname, _) = split_suffix(&path);
        self.ctx.paths().strip_locale(pathname).to_string()
    }

    /// Absolute URL of `path` in `locale`, with the pathname percent-encoded.
    pub fn url_for(&self, path: &str, locale: &Locale) -> String {
        let localized = self.ctx.paths().localize(path, locale);
        if is_absolute_url(&localized) {
            return localized.into_owned();
        }
        let (pathname, suffix) = split_suffix(&localized);
        self.ctx
            .origin
            .to_absolute(&format!("{}{suffix}", encode_path(pathname)))
    }

    /// One alternate per supported locale, in configured order.
    pub fn alternates(&self, path: &str) -> Vec<Alternate> {
        let logical = self.logical_path(path);
        self.ctx
            .locales()
            .iter()
            .map(|locale| Alternate {
                hreflang: locale.code.clone(),
                href: self.url_for(&logical, locale),
            })
            .collect()
    }

    /// Assemble the full record for one page. Never fails.
    pub fn assemble(&self, page: &PageMeta) -> MetadataRecord {
        let ctx = self.ctx;
        let locale = self.locale_for(page);
        let logical = self.logical_path(&page.path);

        let canonical_url = self.url_for(&logical, locale);
        let alternates = self.alternates(&logical);
        let x_default_url = self.url_for(&logical, ctx.x_default_locale());
        let home_url = self.url_for("/", locale);

        let full_title = self.full_title(&page.title);
        let description = page
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&ctx.description)
            .to_string();
        let image_url = ctx
            .origin
            .to_absolute(page.image.as_deref().unwrap_or(&ctx.default_image));

        let published = page.published.as_deref().map(normalize_timestamp);
        let modified = page.modified.as_deref().map(normalize_timestamp);

        let facts = PageFacts {
            title: match page.title.trim() {
                "" => &full_title,
                title => title,
            },
            description: &description,
            url: &canonical_url,
            image_url: &image_url,
            locale,
            home_url: &home_url,
            keywords: &page.keywords,
        };
        let default_data = match (page.kind, published.as_deref()) {
            (ContentKind::Article, Some(published)) => {
                jsonld::article(ctx, &facts, published, modified.as_deref())
            }
            (ContentKind::Article, None) => {
                crate::debug!("meta"; "article `{}` has no publish date, using WebPage data", logical);
                jsonld::web_page(ctx, &facts)
            }
            (ContentKind::Generic, _) => jsonld::web_page(ctx, &facts),
        };

        let localizer = SchemaLocalizer::new(ctx, locale);
        let mut structured_data_list = Vec::with_capacity(1 + page.structured_data.len());
        structured_data_list.push(default_data);
        structured_data_list.extend(
            page.structured_data
                .iter()
                .map(|value| localizer.localize_value(value)),
        );

        let open_graph = OpenGraph {
            og_type: match page.kind {
                ContentKind::Generic => OgType::Website,
                ContentKind::Article => OgType::Article,
            },
            title: full_title.clone(),
            description: description.clone(),
            url: canonical_url.clone(),
            image: image_url.clone(),
            site_name: ctx.name.clone(),
            locale: locale.og_locale.clone(),
            locale_alternate: ctx
                .locales()
                .iter()
                .filter(|l| l.code != locale.code)
                .map(|l| l.og_locale.clone())
                .collect(),
            article: (page.kind == ContentKind::Article).then(|| {
                // Modified time only accompanies a known publish time
                let modified_time = published.as_ref().and(modified.clone().or_else(|| published.clone()));
                ArticleTags {
                    published_time: published.clone(),
                    modified_time,
                    tags: page.keywords.clone(),
                }
            }),
        };

        let twitter = TwitterCard {
            card: TwitterCard::SUMMARY_LARGE_IMAGE,
            title: full_title.clone(),
            description: description.clone(),
            image: image_url.clone(),
            site: ctx.twitter_site.clone(),
        };

        MetadataRecord {
            lang: locale.code.clone(),
            full_title,
            description,
            canonical_url,
            alternate_urls_by_locale: alternates,
            x_default_url,
            image_url,
            robots_directive: Robots::from_noindex(page.noindex),
            keywords: page.keywords.clone(),
            open_graph,
            twitter,
            structured_data_list,
        }
    }

    /// `"{title}{separator}{site name}"`, or the site name alone.
    pub fn full_title(&self, title: &str) -> String {
        let title = title.trim();
        if title.is_empty() {
            self.ctx.name.clone()
        } else {
            format!("{title}{}{}", self.ctx.title_separator, self.ctx.name)
        }
    }
}

/// Assemble a record with a one-off assembler.
pub fn assemble(ctx: &SiteContext, page: &PageMeta) -> MetadataRecord {
    MetadataAssembler::new(ctx).assemble(page)
}

/// Site-root form of a page path: empty becomes `/`, relative gets a
/// leading `/`. Other kinds pass through.
fn normalize_page_path(path: &str) -> Cow<'_, str> {
    let path = path.trim();
    match LinkKind::parse(path) {
        LinkKind::Empty => Cow::Borrowed("/"),
        LinkKind::Relative(rel) => Cow::Owned(format!("/{}", rel.trim_start_matches("./"))),
        _ => Cow::Borrowed(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_end_to_end_secondary() {
        let ctx = SiteContext::default();
        let page = PageMeta::new("Guide X", "/guides/foo").with_locale("en");
        let record = assemble(&ctx, &page);

        assert_eq!(record.full_title, "Guide X | Example");
        assert_eq!(record.canonical_url, "https://example.com/en/guides/foo");
        assert_eq!(record.alternate("es"), Some("https://example.com/guides/foo"));
        assert_eq!(record.alternate("en"), Some(record.canonical_url.as_str()));
        assert_eq!(record.x_default_url, "https://example.com/guides/foo");
        assert_eq!(record.lang, "en");
        assert_eq!(record.robots_directive, Robots::Index);
    }

    #[test]
    fn test_locale_resolved_from_path() {
        let ctx = SiteContext::default();
        let record = assemble(&ctx, &PageMeta::new("Guide X", "/en/guides/foo?ref=nav"));
        assert_eq!(record.lang, "en");
        assert_eq!(record.canonical_url, "https://example.com/en/guides/foo");
        assert_eq!(record.open_graph.locale, "en_US");
        assert_eq!(record.open_graph.locale_alternate, vec!["es_ES".to_string()]);
    }

    #[test]
    fn test_alternates_cover_every_locale() {
        let ctx = SiteContext::default();
        let assembler = MetadataAssembler::new(&ctx);
        let alternates = assembler.alternates("/en/");
        assert_eq!(
            alternates,
            vec![
                Alternate {
                    hreflang: "es".into(),
                    href: "https://example.com/".into()
                },
                Alternate {
                    hreflang: "en".into(),
                    href: "https://example.com/en".into()
                },
            ]
        );
    }

    #[test]
    fn test_defaults_and_noindex() {
        let ctx = SiteContext::default();
        let page = PageMeta {
            noindex: true,
            ..PageMeta::new("", "")
        };
        let record = assemble(&ctx, &page);
        assert_eq!(record.full_title, "Example");
        assert_eq!(record.canonical_url, "https://example.com/");
        assert_eq!(record.image_url, "https://example.com/og-default.jpg");
        assert_eq!(record.robots_directive, Robots::NoIndex);
        assert_eq!(record.twitter.card, "summary_large_image");
    }

    #[test]
    fn test_article_structured_data() {
        let ctx = SiteContext::default();
        let page = PageMeta::new("Guide X", "/guides/foo").article("2024-06-15");
        let record = assemble(&ctx, &page);
        let data = &record.structured_data_list[0];
        assert_eq!(data["@type"], "Article");
        assert_eq!(data["datePublished"], "2024-06-15T00:00:00Z");
        assert_eq!(data["dateModified"], data["datePublished"]);

        let article = record.open_graph.article.unwrap();
        assert_eq!(article.modified_time, article.published_time);
    }

    #[test]
    fn test_article_without_date_uses_web_page() {
        let ctx = SiteContext::default();
        let page = PageMeta {
            kind: ContentKind::Article,
            ..PageMeta::new("Guide X", "/guides/foo")
        };
        let record = assemble(&ctx, &page);
        assert_eq!(record.structured_data_list[0]["@type"], "WebPage");
        assert_eq!(record.open_graph.og_type, OgType::Article);
        let article = record.open_graph.article.unwrap();
        assert!(article.published_time.is_none());
        assert!(article.modified_time.is_none());
    }

    #[test]
    fn test_page_structured_data_localized() {
        let ctx = SiteContext::default();
        let page = PageMeta::new("Guide X", "/en/guides/foo").with_structured_data(json!({
            "@type": "HowTo",
            "url": "https://example.com/guides/foo",
            "image": "https://example.com/images/x.png"
        }));
        let record = assemble(&ctx, &page);
        assert_eq!(record.structured_data_list.len(), 2);
        assert_eq!(
            record.structured_data_list[1],
            json!({
                "@type": "HowTo",
                "url": "https://example.com/en/guides/foo",
                "image": "https://example.com/images/x.png"
            })
        );
    }

    #[test]
    fn test_unknown_locale_normalizes_to_default() {
        let ctx = SiteContext::default();
        let record = assemble(&ctx, &PageMeta::new("X", "/en/x").with_locale("fr"));
        assert_eq!(record.lang, "es");
        assert_eq!(record.canonical_url, "https://example.com/x");
    }

    #[test]
    fn test_urls_are_percent_encoded() {
        let ctx = SiteContext::default();
        let record = assemble(&ctx, &PageMeta::new("Guías", "/en/guías?q=año#top"));
        assert_eq!(record.canonical_url, "https://example.com/en/gu%C3%ADas");
        assert_eq!(record.alternate("es"), Some("https://example.com/gu%C3%ADas"));
        assert_eq!(record.open_graph.url, record.canonical_url);
        assert_eq!(record.structured_data_list[0]["url"], "https://example.com/en/gu%C3%ADas");
        assert_eq!(
            MetadataAssembler::new(&ctx).url_for("/año?q=ñ", ctx.locales().get("en")),
            "https://example.com/en/a%C3%B1o?q=ñ"
        );
    }

    #[test]
    fn test_blank_title_uses_site_name() {
        let ctx = SiteContext::default();
        let record = assemble(&ctx, &PageMeta::new("   ", "/x"));
        assert_eq!(record.full_title, "Example");
        assert_eq!(record.structured_data_list[0]["name"], "Example");

        let record = assemble(&ctx, &PageMeta::new("  Guide  ", "/x"));
        assert_eq!(record.structured_data_list[0]["name"], "Guide");
    }

    #[test]
    fn test_normalize_page_path() {
        assert_eq!(normalize_page_path(""), "/");
        assert_eq!(normalize_page_path("guides/x"), "/guides/x");
        assert_eq!(normalize_page_path("./guides"), "/guides");
        assert_eq!(normalize_page_path("/guides"), "/guides");
    }
}
