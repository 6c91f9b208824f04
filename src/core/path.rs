//! Locale prefix stripping and application for internal routes.
//!
//! `PathLocalizer` is the single place that adds or removes locale prefixes.
//! Both operations are total: anything that is not an internal route
//! (external URLs, `mailto:`, fragments, static assets, API routes) passes
//! through unchanged.
//!
//! | input            | `localize(_, en)` | `localize(_, es)` |
//! |------------------|-------------------|-------------------|
//! | `/`              | `/en`             | `/`               |
//! | `/guides/foo?x`  | `/en/guides/foo?x`| `/guides/foo?x`   |
//! | `/en/guides/foo` | `/en/guides/foo`  | `/guides/foo`     |
//! | `/assets/a.png`  | `/assets/a.png`   | `/assets/a.png`   |

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::link::{LinkKind, split_suffix};
use super::locale::{Locale, Locales};

/// Route patterns that are never locale-prefixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusions {
    asset_prefixes: Vec<String>,
    api_prefixes: Vec<String>,
    root_files: Vec<String>,
}

impl Exclusions {
    pub fn new(asset_prefixes: Vec<String>, api_prefixes: Vec<String>, root_files: Vec<String>) -> Self {
        Self {
            asset_prefixes,
            api_prefixes,
            root_files,
        }
    }

    /// Check whether a pathname (no query/fragment) is excluded.
    pub fn is_excluded(&self, pathname: &str) -> bool {
        self.root_files.iter().any(|file| file == pathname)
            || self
                .asset_prefixes
                .iter()
                .chain(&self.api_prefixes)
                .any(|prefix| under_prefix(pathname, prefix))
            || has_file_extension(pathname)
    }
}

impl Default for Exclusions {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            asset_prefixes: owned(&["/assets/", "/_next/", "/static/", "/images/", "/fonts/"]),
            api_prefixes: owned(&["/api/"]),
            root_files: owned(&[
                "/robots.txt",
                "/sitemap.xml",
                "/favicon.ico",
                "/manifest.webmanifest",
            ]),
        }
    }
}

/// `/api/` matches `/api`, `/api/` and `/api/x`; `/api` matches the same.
#[inline]
fn under_prefix(pathname: &str, prefix: &str) -> bool {
    let dir = prefix.trim_end_matches('/');
    if dir.is_empty() {
        return false;
    }
    pathname
        .strip_prefix(dir)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Last path segment ends in `.ext` (1-8 alphanumerics).
#[inline]
fn has_file_extension(pathname: &str) -> bool {
    static RE_EXT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[^/]\.[A-Za-z0-9]{1,8}$").unwrap());
    let last = pathname.rsplit('/').next().unwrap_or(pathname);
    RE_EXT.is_match(last)
}

/// Strips and applies locale prefixes.
///
/// Borrowed from a `SiteContext`; cheap to create per call.
#[derive(Debug, Clone, Copy)]
pub struct PathLocalizer<'a> {
    locales: &'a Locales,
    exclusions: &'a Exclusions,
}

impl<'a> PathLocalizer<'a> {
    pub fn new(locales: &'a Locales, exclusions: &'a Exclusions) -> Self {
        Self {
            locales,
            exclusions,
        }
    }

    #[inline]
    pub fn locales(&self) -> &'a Locales {
        self.locales
    }

    /// Derive the active locale from a request pathname.
    #[inline]
    pub fn resolve(&self, pathname: &str) -> &'a Locale {
        self.locales.resolve(pathname)
    }

    /// Remove locale prefixes from a pathname.
    ///
    /// Prefixes are stripped repeatedly (`/en/es/x` → `/x`) so the result
    /// never carries a locale prefix. The default locale's alias prefix is
    /// stripped too. A fully stripped pathname becomes `/`.
    pub fn strip_locale<'p>(&self, pathname: &'p str) -> &'p str {
        let mut current = pathname;
        while let Some((_, rest)) = self.locales.match_any_prefix(current) {
            current = rest;
            if rest.is_empty() {
                return "/";
            }
        }
        current
    }

    /// Check whether a path (possibly with query/fragment) is never localized.
    pub fn is_excluded(&self, path: &str) -> bool {
        if !LinkKind::parse(path).is_route() {
            return true;
        }
        let (pathname, _) = split_suffix(path);
        self.exclusions.is_excluded(pathname)
            || self.exclusions.is_excluded(self.strip_locale(pathname))
    }

    /// Rewrite an internal path for `locale`.
    ///
    /// Query string and fragment are preserved. Non-route links and
    /// excluded paths come back unchanged (borrowed).
    pub fn localize<'p>(&self, path: &'p str, locale: &Locale) -> Cow<'p, str> {
        if self.is_excluded(path) {
            return Cow::Borrowed(path);
        }

        let (pathname, suffix) = split_suffix(path);
        let canonical = self.strip_locale(pathname);

        let localized = match locale.root() {
            None => Cow::Borrowed(canonical),
            Some(root) if canonical == "/" => Cow::Borrowed(root),
            Some(root) => Cow::Owned(format!("{root}{canonical}")),
        };

        if localized == pathname {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(format!("{localized}{suffix}"))
        }
    }

    /// Rewrite an internal path for a locale code (unknown codes use the default).
    pub fn localize_code<'p>(&self, path: &'p str, code: &str) -> Cow<'p, str> {
        self.localize(path, self.locales.get(code))
    }
}
