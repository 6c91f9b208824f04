//! Link classification utilities.

use super::url::is_absolute_url;

/// Schemes that never denote a navigable page on this site.
const NON_NAVIGABLE_SCHEMES: [&str; 4] = ["mailto:", "tel:", "javascript:", "data:"];

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Empty string.
    Empty,
    /// Absolute URL with `scheme://` (same-origin or not).
    Absolute(&'a str),
    /// `mailto:`, `tel:` and similar non-page links.
    NonNavigable(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /posts/hello).
    SiteRoot(&'a str),
    /// Anything else (./image.png, ../other, image.png).
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if link.is_empty() {
            Self::Empty
        } else if is_absolute_url(link) {
            Self::Absolute(link)
        } else if is_non_navigable(link) {
            Self::NonNavigable(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::Relative(link)
        }
    }

    /// Only site-root paths are internal routes that may be localized.
    #[inline]
    pub fn is_route(&self) -> bool {
        matches!(self, Self::SiteRoot(_))
    }
}

/// Check for a `mailto:`/`tel:`-style scheme (case-insensitive).
#[inline]
fn is_non_navigable(link: &str) -> bool {
    NON_NAVIGABLE_SCHEMES.iter().any(|scheme| {
        link.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}

/// Split a path into pathname and suffix at the first `?` or `#`.
///
/// The suffix keeps its leading `?`/`#`; it is empty when neither occurs.
///
/// # Examples
/// ```
/// use hreflang::core::split_suffix;
/// assert_eq!(split_suffix("/about?x=1#team"), ("/about", "?x=1#team"));
/// assert_eq!(split_suffix("/about#a?b"), ("/about", "#a?b"));
/// assert_eq!(split_suffix("/about"), ("/about", ""));
/// ```
#[inline]
pub fn split_suffix(path: &str) -> (&str, &str) {
    match path.find(['?', '#']) {
        Some(idx) => path.split_at(idx),
        None => (path, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute() {
        assert!(matches!(
            LinkKind::parse("https://example.com"),
            LinkKind::Absolute("https://example.com")
        ));
        assert!(matches!(
            LinkKind::parse("http://example.com/en/x"),
            LinkKind::Absolute(_)
        ));
    }

    #[test]
    fn test_parse_non_navigable() {
        assert!(matches!(
            LinkKind::parse("mailto:user@example.com"),
            LinkKind::NonNavigable("mailto:user@example.com")
        ));
        assert!(matches!(
            LinkKind::parse("tel:+1234567890"),
            LinkKind::NonNavigable(_)
        ));
        assert!(matches!(
            LinkKind::parse("MAILTO:user@example.com"),
            LinkKind::NonNavigable(_)
        ));
    }

    #[test]
    fn test_parse_fragment() {
        assert!(matches!(
            LinkKind::parse("#section"),
            LinkKind::Fragment("section")
        ));
        // Empty fragment
        assert!(matches!(LinkKind::parse("#"), LinkKind::Fragment("")));
    }

    #[test]
    fn test_parse_site_root() {
        assert!(matches!(
            LinkKind::parse("/about"),
            LinkKind::SiteRoot("/about")
        ));
        // With fragment
        assert!(matches!(
            LinkKind::parse("/about#team"),
            LinkKind::SiteRoot("/about#team")
        ));
    }

    #[test]
    fn test_parse_relative_and_empty() {
        assert!(matches!(
            LinkKind::parse("./image.png"),
            LinkKind::Relative("./image.png")
        ));
        assert!(matches!(
            LinkKind::parse("guides/foo"),
            LinkKind::Relative(_)
        ));
        assert!(matches!(LinkKind::parse(""), LinkKind::Empty));
    }

    #[test]
    fn test_is_route() {
        assert!(LinkKind::parse("/guides").is_route());
        assert!(!LinkKind::parse("https://example.com/guides").is_route());
        assert!(!LinkKind::parse("#top").is_route());
        assert!(!LinkKind::parse("tel:1").is_route());
        assert!(!LinkKind::parse("").is_route());
    }

    #[test]
    fn test_split_suffix() {
        assert_eq!(split_suffix("/a?b=1"), ("/a", "?b=1"));
        assert_eq!(split_suffix("/a#frag"), ("/a", "#frag"));
        assert_eq!(split_suffix("/a?b#c"), ("/a", "?b#c"));
        assert_eq!(split_suffix("/a#c?b"), ("/a", "#c?b"));
        assert_eq!(split_suffix("?q"), ("", "?q"));
        assert_eq!(split_suffix(""), ("", ""));
    }
}
