//! `[site.info]` configuration.
//!
//! Contains basic site information: name, description and the public URL
//! the site origin is resolved from.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site identity used in titles, Open Graph and structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site name, appended to every page title.
    pub name: String,

    /// Fallback description for pages without one.
    pub description: String,

    /// Public site URL; only its origin is used (e.g., "https://example.com").
    /// Overridden by the `SITE_URL` environment variable.
    pub url: Option<String>,
}

/// Field paths of [`SiteInfoConfig`].
pub struct SiteInfoFields {
    pub name: FieldPath,
    pub description: FieldPath,
    pub url: FieldPath,
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        name: FieldPath::new("site.info.name"),
        description: FieldPath::new("site.info.description"),
        url: FieldPath::new("site.info.url"),
    };
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: "Example".into(),
            description: String::new(),
            url: None,
        }
    }
}

impl SiteInfoConfig {
    /// Validate site identity.
    ///
    /// # Checks
    /// - `name` must not be empty
    /// - `url` should be an http(s) URL with a host; anything else only
    ///   warns, since the fallback origin applies
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "site name is empty",
                "set a name, e.g.: name = \"My Site\"",
            );
        }

        let Some(url_str) = self.url.as_deref().filter(|u| !u.trim().is_empty()) else {
            return;
        };

        // URL format check using url crate for strict validation
        match url::Url::parse(url_str.trim()) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.warn(
                        Self::FIELDS.url,
                        format!("scheme '{}' is not http or https", parsed.scheme()),
                    );
                } else if parsed.host_str().is_none() {
                    diag.warn(Self::FIELDS.url, "URL has no host, using fallback origin");
                } else if parsed.path() != "/" {
                    diag.warn(
                        Self::FIELDS.url,
                        format!("path `{}` is ignored, only the origin is used", parsed.path()),
                    );
                }
            }
            Err(e) => {
                diag.warn(
                    Self::FIELDS.url,
                    format!(
                        "invalid URL ({e}), using fallback origin {}",
                        crate::core::FALLBACK_ORIGIN
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(url: Option<&str>) -> ConfigDiagnostics {
        let info = SiteInfoConfig {
            url: url.map(str::to_string),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        diag
    }

    #[test]
    fn test_valid_url_is_silent() {
        let diag = check(Some("https://example.com"));
        assert!(diag.warnings().is_empty());
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_missing_url_is_silent() {
        assert!(check(None).warnings().is_empty());
        assert!(check(Some("  ")).warnings().is_empty());
    }

    #[test]
    fn test_invalid_url_only_warns() {
        for url in ["example.com", "ftp://example.com", "https://example.com/blog"] {
            let diag = check(Some(url));
            assert_eq!(diag.warnings().len(), 1, "{url}");
            assert!(!diag.has_errors(), "{url}");
        }
    }

    #[test]
    fn test_empty_name_is_error() {
        let info = SiteInfoConfig {
            name: " ".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
