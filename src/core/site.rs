//! Resolved, immutable site context.
//!
//! Built once from [`SiteConfig`] at startup and passed by reference into
//! every transformation. Nothing here changes after construction.

use crate::config::{ConfigError, SiteConfig};

use super::locale::{Locale, Locales};
use super::path::{Exclusions, PathLocalizer};
use super::url::{FALLBACK_ORIGIN, SiteOrigin};

/// Publisher identity used in article structured data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    /// Absolute logo URL.
    pub logo_url: String,
    /// Absolute homepage URL.
    pub url: String,
}

/// Everything a metadata transformation needs besides the page itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    pub origin: SiteOrigin,
    pub name: String,
    /// Fallback page description.
    pub description: String,
    pub title_separator: String,
    /// Default image path or absolute URL.
    pub default_image: String,
    pub twitter_site: Option<String>,
    pub organization: Organization,
    locales: Locales,
    x_default: String,
    exclusions: Exclusions,
}

impl SiteContext {
    /// Build a context with default presentation settings.
    pub fn new(origin: SiteOrigin, locales: Locales, exclusions: Exclusions) -> Self {
        let organization = Organization {
            name: "Example".into(),
            logo_url: origin.to_absolute("/logo.png"),
            url: origin.as_str().to_string(),
        };
        Self {
            x_default: locales.default_locale().code.clone(),
            name: organization.name.clone(),
            description: String::new(),
            title_separator: " | ".into(),
            default_image: "/og-default.jpg".into(),
            twitter_site: None,
            organization,
            origin,
            locales,
            exclusions,
        }
    }

    /// Validate `config` and resolve it into a context.
    ///
    /// The site origin is resolved here, once; an unusable url falls back
    /// to [`FALLBACK_ORIGIN`].
    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::from_validated(config)
    }

    /// Resolve `config` without running (or printing) validation again.
    ///
    /// For callers that already hold its diagnostics.
    pub(crate) fn from_validated(config: &SiteConfig) -> Result<Self, ConfigError> {
        let locales = config
            .i18n
            .to_locales()
            .map_err(|err| ConfigError::Validation(err.to_string()))?;
        let x_default = config.i18n.x_default_code(&locales).to_string();

        let info = &config.site.info;
        let seo = &config.site.seo;
        let org = &config.site.organization;

        let origin = SiteOrigin::resolve(info.url.as_deref(), FALLBACK_ORIGIN);
        let organization = Organization {
            name: org.name.clone().unwrap_or_else(|| info.name.clone()),
            logo_url: origin.to_absolute(&org.logo),
            url: org
                .url
                .as_deref()
                .map_or_else(|| origin.as_str().to_string(), |url| origin.to_absolute(url)),
        };

        Ok(Self {
            name: info.name.clone(),
            description: info.description.clone(),
            title_separator: seo.title_separator.clone(),
            default_image: seo.default_image.clone(),
            twitter_site: seo.twitter_site.clone(),
            organization,
            locales,
            x_default,
            exclusions: config.routing.to_exclusions(),
            origin,
        })
    }

    /// Replace the origin (and the organization URLs derived from it).
    pub fn with_origin(mut self, origin: SiteOrigin) -> Self {
        let rebase = |url: &str| match url.strip_prefix(self.origin.as_str()) {
            Some("") => origin.as_str().to_string(),
            Some(path) if path.starts_with('/') => origin.to_absolute(path),
            _ => url.to_string(),
        };
        self.organization.logo_url = rebase(&self.organization.logo_url);
        self.organization.url = rebase(&self.organization.url);
        self.origin = origin;
        self
    }

    #[inline]
    pub fn locales(&self) -> &Locales {
        &self.locales
    }

    #[inline]
    pub fn exclusions(&self) -> &Exclusions {
        &self.exclusions
    }

    /// Locale the language-neutral `x-default` alternate points to.
    pub fn x_default_locale(&self) -> &Locale {
        self.locales.get(&self.x_default)
    }

    /// Path localizer over this site's locales and exclusions.
    #[inline]
    pub fn paths(&self) -> PathLocalizer<'_> {
        PathLocalizer::new(&self.locales, &self.exclusions)
    }
}

impl Default for SiteContext {
    /// Built-in locales and exclusions on the fallback origin.
    fn default() -> Self {
        Self::new(SiteOrigin::default(), Locales::default(), Exclusions::default())
    }
}
