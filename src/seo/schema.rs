//! Locale rewriting of same-origin URLs inside structured data.
//!
//! Walks a JSON tree without mutating it. Only strings that parse as
//! absolute URLs on the site origin, with a localizable path, are
//! rewritten; every other value is copied as-is.

use std::borrow::Cow;

use serde_json::{Map, Value};
use url::Url;

use crate::core::{Locale, PathLocalizer, SiteContext, SiteOrigin, is_absolute_url};

/// Rewrites embedded site URLs for one locale.
#[derive(Debug, Clone, Copy)]
pub struct SchemaLocalizer<'a> {
    origin: &'a SiteOrigin,
    paths: PathLocalizer<'a>,
    locale: &'a Locale,
}

impl<'a> SchemaLocalizer<'a> {
    pub fn new(ctx: &'a SiteContext, locale: &'a Locale) -> Self {
        Self {
            origin: &ctx.origin,
            paths: ctx.paths(),
            locale,
        }
    }

    /// Return a copy of `value` with same-origin URLs localized.
    ///
    /// Order and length of arrays and key order of objects are preserved.
    pub fn localize_value(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.localize_url(s).into_owned()),
            Value::Array(items) => {
                Value::Array(items.iter().map(|v| self.localize_value(v)).collect())
            }
            Value::Object(map) => Value::Object(self.localize_map(map)),
            Value::Number(_) | Value::Bool(_) | Value::Null => value.clone(),
        }
    }

    fn localize_map(&self, map: &Map<String, Value>) -> Map<String, Value> {
        map.iter()
            .map(|(key, value)| (key.clone(), self.localize_value(value)))
            .collect()
    }

    /// Localize a single string if it is a same-origin, non-excluded URL.
    ///
    /// Unparsable strings, other origins and excluded paths come back
    /// borrowed and untouched.
    pub fn localize_url<'s>(&self, value: &'s str) -> Cow<'s, str> {
        if !is_absolute_url(value) {
            return Cow::Borrowed(value);
        }
        let Ok(mut url) = Url::parse(value) else {
            return Cow::Borrowed(value);
        };
        if !self.origin.matches(&url) || self.paths.is_excluded(url.path()) {
            return Cow::Borrowed(value);
        }

        let localized = self.paths.localize(url.path(), self.locale).into_owned();
        if localized == url.path() {
            return Cow::Borrowed(value);
        }
        url.set_path(&localized);
        Cow::Owned(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn localize(value: Value, code: &str) -> Value {
        let ctx = SiteContext::default();
        let locale = ctx.locales().get(code);
        SchemaLocalizer::new(&ctx, locale).localize_value(&value)
    }

    #[test]
    fn test_localization_scope() {
        let out = localize(
            json!({
                "a": "https://example.com/guides/x",
                "b": "https://example.com/assets/y.png",
                "c": "https://external.com/z"
            }),
            "en",
        );
        assert_eq!(
            out,
            json!({
                "a": "https://example.com/en/guides/x",
                "b": "https://example.com/assets/y.png",
                "c": "https://external.com/z"
            })
        );
    }

    #[test]
    fn test_nested_arrays_and_scalars() {
        let out = localize(
            json!({
                "@type": "BreadcrumbList",
                "itemListElement": [
                    {"position": 1, "item": "https://example.com/"},
                    {"position": 2, "item": "https://example.com/guides?x=1#top"},
                    {"flag": true, "none": null}
                ]
            }),
            "en",
        );
        assert_eq!(out["itemListElement"][0]["item"], "https://example.com/en");
        assert_eq!(
            out["itemListElement"][1]["item"],
            "https://example.com/en/guides?x=1#top"
        );
        assert_eq!(out["itemListElement"][0]["position"], 1);
        assert_eq!(out["itemListElement"][2], json!({"flag": true, "none": null}));
    }

    #[test]
    fn test_default_locale_strips_prefix() {
        let out = localize(json!(["https://example.com/en/guides/x"]), "es");
        assert_eq!(out, json!(["https://example.com/guides/x"]));
    }

    #[test]
    fn test_key_order_preserved() {
        let out = localize(json!({"z": 1, "a": "https://example.com/x", "m": 2}), "en");
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_non_urls_untouched() {
        for s in [
            "Guide X",
            "/guides/x",
            "mailto:hi@example.com",
            "https://",
            "http://[::1",
            "https://example.com:8443/guides",
            "http://example.com/guides",
        ] {
            assert_eq!(localize(json!(s), "en"), json!(s), "{s}");
        }
    }

    #[test]
    fn test_localize_url_borrows_when_unchanged() {
        let ctx = SiteContext::default();
        let localizer = SchemaLocalizer::new(&ctx, ctx.locales().get("en"));
        assert!(matches!(
            localizer.localize_url("https://example.com/en/guides"),
            Cow::Borrowed(_)
        ));
        assert!(matches!(localizer.localize_url("text"), Cow::Borrowed(_)));
    }
}
