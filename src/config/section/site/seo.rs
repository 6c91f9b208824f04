//! `[site.seo]` configuration.
//!
//! Presentation defaults applied to every page's metadata record.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Title, image and social defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Joins page title and site name: `"{title}{separator}{name}"`.
    pub title_separator: String,

    /// Image used when a page has none (path or absolute URL).
    pub default_image: String,

    /// Twitter handle for `twitter:site` (e.g., "@example").
    pub twitter_site: Option<String>,
}

/// Field paths of [`SeoConfig`].
pub struct SeoFields {
    pub title_separator: FieldPath,
    pub default_image: FieldPath,
    pub twitter_site: FieldPath,
}

impl SeoConfig {
    pub const FIELDS: SeoFields = SeoFields {
        title_separator: FieldPath::new("site.seo.title_separator"),
        default_image: FieldPath::new("site.seo.default_image"),
        twitter_site: FieldPath::new("site.seo.twitter_site"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default_image.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.default_image,
                "default image is empty",
                "set a path, e.g.: default_image = \"/og-default.jpg\"",
            );
        }

        if let Some(handle) = &self.twitter_site
            && !handle.starts_with('@')
        {
            diag.warn(
                Self::FIELDS.twitter_site,
                format!("twitter handle `{handle}` does not start with `@`"),
            );
        }

        if self.title_separator.is_empty() {
            diag.warn(
                Self::FIELDS.title_separator,
                "empty separator glues page title and site name together",
            );
        }
    }
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            title_separator: " | ".into(),
            default_image: "/og-default.jpg".into(),
            twitter_site: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let seo = SeoConfig::default();
        assert_eq!(seo.title_separator, " | ");
        assert_eq!(seo.default_image, "/og-default.jpg");
        assert!(seo.twitter_site.is_none());
    }

    #[test]
    fn test_twitter_handle_warning() {
        let seo = SeoConfig {
            twitter_site: Some("example".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        seo.validate(&mut diag);
        assert_eq!(diag.warnings().len(), 1);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_empty_default_image_is_error() {
        let seo = SeoConfig {
            default_image: String::new(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        seo.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
