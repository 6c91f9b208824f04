use hreflang::core::{SiteContext, split_suffix, to_absolute};
use hreflang::seo::SchemaLocalizer;
use proptest::prelude::*;
use serde_json::Value;

/// Site-root paths, optionally locale-prefixed, with an optional suffix.
fn route() -> impl Strategy<Value = String> {
    (
        prop::option::of(prop_oneof![Just("/en"), Just("/es")]),
        prop::collection::vec("[a-z0-9-]{1,8}", 0..4),
        prop::bool::ANY,
        prop::option::of(prop_oneof![Just("?page=2"), Just("#faq"), Just("?a=/en/#x")]),
    )
        .prop_map(|(prefix, segments, trailing, suffix)| {
            let mut path = prefix.unwrap_or_default().to_string();
            for segment in &segments {
                path.push('/');
                path.push_str(segment);
            }
            if path.is_empty() || trailing {
                path.push('/');
            }
            path.push_str(suffix.unwrap_or_default());
            path
        })
}

proptest! {
    #[test]
    fn localize_is_idempotent(path in route()) {
        let ctx = SiteContext::default();
        let paths = ctx.paths();
        for locale in ctx.locales() {
            let once = paths.localize(&path, locale).into_owned();
            prop_assert_eq!(paths.localize(&once, locale), once.as_str());
        }
    }

    #[test]
    fn strip_round_trips(path in route()) {
        let ctx = SiteContext::default();
        let paths = ctx.paths();
        let (pathname, _) = split_suffix(&path);
        for locale in ctx.locales() {
            let localized = paths.localize(&path, locale);
            let (localized_pathname, _) = split_suffix(&localized);
            prop_assert_eq!(
                paths.strip_locale(localized_pathname),
                paths.strip_locale(pathname)
            );
        }
    }

    #[test]
    fn localized_path_resolves_to_its_locale(path in route()) {
        let ctx = SiteContext::default();
        let paths = ctx.paths();
        prop_assume!(!paths.is_excluded(&path));
        for locale in ctx.locales() {
            let localized = paths.localize(&path, locale);
            let (pathname, _) = split_suffix(&localized);
            prop_assert_eq!(&paths.resolve(pathname).code, &locale.code);
        }
    }

    #[test]
    fn localize_keeps_suffix(path in route()) {
        let ctx = SiteContext::default();
        let (_, suffix) = split_suffix(&path);
        for locale in ctx.locales() {
            let localized = ctx.paths().localize(&path, locale);
            prop_assert!(localized.ends_with(suffix));
        }
    }

    #[test]
    fn excluded_paths_pass_through(name in "[a-z]{1,8}", ext in "(png|svg|js|css|pdf)") {
        let ctx = SiteContext::default();
        for path in [format!("/assets/{name}.{ext}"), format!("/api/{name}"), format!("/{name}.{ext}")] {
            for locale in ctx.locales() {
                prop_assert_eq!(ctx.paths().localize(&path, locale), path.as_str());
            }
        }
    }

    #[test]
    fn absolute_urls_are_never_prefixed(host in "[a-z]{1,10}", path in route()) {
        let url = format!("https://{host}.test{path}");
        prop_assert_eq!(to_absolute(&url, "https://example.com"), url.clone());
        let ctx = SiteContext::default();
        for locale in ctx.locales() {
            prop_assert_eq!(ctx.paths().localize(&url, locale), url.as_str());
        }
    }

    #[test]
    fn schema_localization_preserves_shape(paths in prop::collection::vec(route(), 0..6)) {
        let ctx = SiteContext::default();
        let input = Value::Array(
            paths
                .iter()
                .map(|p| Value::String(format!("https://example.com{p}")))
                .collect(),
        );
        for locale in ctx.locales() {
            let output = SchemaLocalizer::new(&ctx, locale).localize_value(&input);
            let items = output.as_array().unwrap();
            prop_assert_eq!(items.len(), paths.len());
            prop_assert!(items.iter().all(|v| v.as_str().is_some_and(|s| s.starts_with("https://example.com"))));
        }
    }
}
