//! Site origin and absolute URL resolution.
//!
//! - `SiteOrigin`: scheme + host (+ port), resolved once from config
//! - `to_absolute()`: join an origin and a path without double-prefixing
//! - `encode_path()`: percent-encode a decoded path for XML/HTML output

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, LazyLock};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use regex::Regex;
use serde::Serialize;
use url::Url;

/// Origin used when the configured site URL is missing or unparsable.
pub const FALLBACK_ORIGIN: &str = "https://example.com";

/// Characters encoded in a URL path; same set `url::Url` applies, so
/// paths built here and paths reserialized by `Url` spell alike.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Check if a value is an absolute URL (a scheme followed by `://`).
///
/// # Examples
/// ```
/// use hreflang::core::is_absolute_url;
/// assert!(is_absolute_url("https://example.com/x"));
/// assert!(is_absolute_url("ftp://files.example.com"));
/// assert!(!is_absolute_url("mailto:user@example.com"));
/// assert!(!is_absolute_url("/guides/foo"));
/// ```
#[inline]
pub fn is_absolute_url(value: &str) -> bool {
    static RE_ABSOLUTE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap());
    RE_ABSOLUTE.is_match(value)
}

/// Resolve the origin (scheme + host + port) of a configured site URL.
///
/// Total: empty input, unparsable input and URLs without a host all
/// return `fallback`.
///
/// # Examples
/// ```
/// use hreflang::core::resolve_site_origin;
/// let fallback = "https://fallback.test";
/// assert_eq!(resolve_site_origin("https://example.com/blog/", fallback), "https://example.com");
/// assert_eq!(resolve_site_origin("http://localhost:8080", fallback), "http://localhost:8080");
/// assert_eq!(resolve_site_origin("not a url", fallback), fallback);
/// assert_eq!(resolve_site_origin("", fallback), fallback);
/// ```
pub fn resolve_site_origin(configured: &str, fallback: &str) -> String {
    let configured = configured.trim();
    if configured.is_empty() {
        return fallback.to_string();
    }

    match Url::parse(configured) {
        Ok(parsed) => {
            let origin = parsed.origin();
            if origin.is_tuple() {
                origin.ascii_serialization()
            } else {
                fallback.to_string()
            }
        }
        Err(_) => fallback.to_string(),
    }
}

/// Resolve `value` against `origin`.
///
/// Absolute URLs (any scheme) come back unchanged; anything else is
/// appended to the origin, with a leading `/` inserted when missing.
///
/// # Examples
/// ```
/// use hreflang::core::to_absolute;
/// assert_eq!(to_absolute("/guides/foo", "https://example.com"), "https://example.com/guides/foo");
/// assert_eq!(to_absolute("guides/foo", "https://example.com"), "https://example.com/guides/foo");
/// assert_eq!(to_absolute("https://other.com/x", "https://example.com"), "https://other.com/x");
/// ```
pub fn to_absolute(value: &str, origin: &str) -> String {
    if is_absolute_url(value) {
        return value.to_string();
    }

    let origin = origin.trim_end_matches('/');
    if value.starts_with('/') {
        format!("{origin}{value}")
    } else {
        format!("{origin}/{value}")
    }
}

/// Percent-encode a path for output, keeping `/` and existing `%XX` escapes.
///
/// Returns the input unchanged when nothing needs encoding.
pub fn encode_path(path: &str) -> Cow<'_, str> {
    utf8_percent_encode(path, PATH).into()
}

/// Canonical scheme + host (+ port) of the site.
///
/// Invariants:
/// - Never ends with `/`
/// - Never carries a path, query or fragment
/// - Immutable once resolved; cloned cheaply (`Arc<str>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteOrigin(Arc<str>);

impl SiteOrigin {
    /// Resolve from an optional configured value, falling back when it is
    /// missing or unparsable.
    pub fn resolve(configured: Option<&str>, fallback: &str) -> Self {
        let resolved = resolve_site_origin(configured.unwrap_or_default(), fallback);
        if configured.is_some_and(|c| resolved != c.trim().trim_end_matches('/')) {
            crate::debug!("origin"; "using `{}` for configured site url `{}`", resolved, configured.unwrap_or_default());
        }
        Self(Arc::from(resolved.trim_end_matches('/')))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a parsed URL lives on this origin.
    pub fn matches(&self, url: &Url) -> bool {
        let origin = url.origin();
        origin.is_tuple() && origin.ascii_serialization() == *self.0
    }

    /// Resolve a path (or URL) against this origin. See [`to_absolute`].
    #[inline]
    pub fn to_absolute(&self, value: &str) -> String {
        to_absolute(value, &self.0)
    }
}

impl Default for SiteOrigin {
    fn default() -> Self {
        Self(Arc::from(FALLBACK_ORIGIN))
    }
}

impl fmt::Display for SiteOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SiteOrigin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for SiteOrigin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}
