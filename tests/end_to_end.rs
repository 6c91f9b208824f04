use hreflang::config::SiteConfig;
use hreflang::core::SiteContext;
use hreflang::generator::build_sitemap;
use hreflang::render::render_head;
use hreflang::seo::{MetadataAssembler, PageMeta, Robots};
use serde_json::json;

const CONFIG: &str = r#"
[site.info]
name = "Example Guides"
description = "Guides about everything"
url = "https://example.com/"

[site.seo]
twitter_site = "@example"

[site.organization]
name = "Example Inc."

[[i18n.locales]]
code = "es"
prefix = "/es"
og_locale = "es_ES"
default = true

[[i18n.locales]]
code = "en"
prefix = "/en"
og_locale = "en_US"
"#;

fn context() -> SiteContext {
    let config = SiteConfig::from_str(CONFIG).unwrap();
    SiteContext::from_config(&config).unwrap()
}

#[test]
fn secondary_locale_page() {
    let ctx = context();
    let page = PageMeta::new("Guide X", "/guides/foo").with_locale("en");
    let record = MetadataAssembler::new(&ctx).assemble(&page);

    assert_eq!(record.full_title, "Guide X | Example Guides");
    assert_eq!(record.canonical_url, "https://example.com/en/guides/foo");
    assert_eq!(record.alternate("es"), Some("https://example.com/guides/foo"));
    assert_eq!(record.alternate("en"), Some(record.canonical_url.as_str()));
    assert_eq!(record.x_default_url, "https://example.com/guides/foo");
    assert_eq!(record.description, "Guides about everything");
    assert_eq!(record.robots_directive, Robots::Index);
    assert_eq!(record.twitter.site.as_deref(), Some("@example"));
}

#[test]
fn article_with_page_schema() {
    let ctx = context();
    let page = PageMeta {
        keywords: vec!["guides".into()],
        modified: None,
        ..PageMeta::new("Guide X", "/en/guides/foo").article("2024-06-15")
    }
    .with_structured_data(json!({
        "@type": "BreadcrumbList",
        "itemListElement": [
            {"@type": "ListItem", "position": 1, "item": "https://example.com/"},
            {"@type": "ListItem", "position": 2, "item": "https://example.com/guides/foo"},
            {"@type": "ListItem", "position": 3, "item": "https://cdn.example.net/guides/foo"}
        ]
    }));

    let record = MetadataAssembler::new(&ctx).assemble(&page);
    let article = &record.structured_data_list[0];
    assert_eq!(article["@type"], "Article");
    assert_eq!(article["dateModified"], article["datePublished"]);
    assert_eq!(article["publisher"]["name"], "Example Inc.");
    assert_eq!(article["publisher"]["logo"]["url"], "https://example.com/logo.png");

    let items = &record.structured_data_list[1]["itemListElement"];
    assert_eq!(items[0]["item"], "https://example.com/en");
    assert_eq!(items[1]["item"], "https://example.com/en/guides/foo");
    assert_eq!(items[2]["item"], "https://cdn.example.net/guides/foo");
}

#[test]
fn rendered_head_and_sitemap_agree() {
    let ctx = context();
    for path in ["/en/guides/foo", "/en/guías/año nuevo"] {
        let record = MetadataAssembler::new(&ctx).assemble(
            &PageMeta::new("Guide X", path).with_structured_data(json!({
                "@type": "HowTo",
                "url": format!("https://example.com{}", path.trim_start_matches("/en")),
            })),
        );
        let head = render_head(&record);
        let sitemap = build_sitemap(&ctx, &[path]);

        for alt in &record.alternate_urls_by_locale {
            assert!(head.contains(&format!(
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                alt.hreflang, alt.href
            )));
            assert!(sitemap.contains(&format!("<loc>{}</loc>", alt.href)), "{}", alt.href);
        }
        assert_eq!(record.structured_data_list[1]["url"], record.canonical_url.as_str());
    }
}

#[test]
fn site_url_override_changes_origin() {
    let mut config = SiteConfig::from_str(CONFIG).unwrap();
    config.apply_site_url_override(Some("http://localhost:3000".into()));
    let ctx = SiteContext::from_config(&config).unwrap();

    let record = MetadataAssembler::new(&ctx).assemble(&PageMeta::new("X", "/en"));
    assert_eq!(record.canonical_url, "http://localhost:3000/en");
    assert_eq!(record.image_url, "http://localhost:3000/og-default.jpg");
}
