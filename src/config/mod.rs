//! Site configuration management for `hreflang.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site/      # [site.info], [site.seo], [site.organization]
//! │   ├── i18n       # [i18n]
//! │   └── routing    # [routing]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The loaded [`SiteConfig`] is raw user input. It is resolved once into an
//! immutable [`SiteContext`](crate::core::SiteContext) that every
//! transformation takes by reference.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    I18nConfig, LocaleConfig, OrganizationConfig, RoutingConfig, SeoConfig, SiteInfoConfig,
    SiteSectionConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "hreflang.toml";

/// Environment variable overriding `[site.info].url`.
pub const SITE_URL_ENV: &str = "SITE_URL";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing hreflang.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path to the loaded config file; empty for built-in defaults (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity, SEO defaults and publisher
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Supported locales
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Routes that are never localized
    #[serde(default)]
    pub routing: RoutingConfig,
}

impl SiteConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// A missing file is not an error: built-in defaults apply.
    /// `SITE_URL` overrides the configured site url.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(config_name, &cwd) {
            Some(path) => Self::from_path(&path)?,
            None => {
                debug!("config"; "{} not found, using built-in defaults", config_name.display());
                Self::default()
            }
        };

        config.apply_site_url_override(std::env::var(SITE_URL_ENV).ok());
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Replace `[site.info].url` when an override is present and non-empty.
    pub fn apply_site_url_override(&mut self, site_url: Option<String>) {
        if let Some(url) = site_url.filter(|u| !u.trim().is_empty()) {
            debug!("config"; "{} overrides site url with `{}`", SITE_URL_ENV, url);
            self.site.info.url = Some(url);
        }
    }

    /// Whether values came from a file rather than built-in defaults.
    pub fn is_loaded_from_file(&self) -> bool {
        !self.config_path.as_os_str().is_empty()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section's checks, collecting errors and warnings.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.i18n.validate(&mut diag);
        self.routing.validate(&mut diag);
        diag
    }

    /// Validate configuration.
    ///
    /// Prints warnings and returns all collected errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\nname = \"Guides\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert!(!config.is_loaded_from_file());
        assert_eq!(config.site.seo.title_separator, " | ");
        assert_eq!(config.i18n.locales.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let config = test_parse_config(
            r#"
            [site.info]
            name = "Guides"
            url = "https://guides.example.org/"

            [site.seo]
            title_separator = " - "
            twitter_site = "@guides"

            [site.organization]
            name = "Guides Inc."

            [i18n]
            x_default = "en"

            [[i18n.locales]]
            code = "en"
            prefix = "/en"
            default = true

            [[i18n.locales]]
            code = "de"
            prefix = "/de"
            og_locale = "de_DE"

            [routing]
            api_prefixes = ["/api/", "/rpc/"]
            "#,
        );
        assert_eq!(config.site.info.name, "Guides");
        assert_eq!(config.site.seo.default_image, "/og-default.jpg");
        assert_eq!(config.i18n.x_default.as_deref(), Some("en"));
        assert_eq!(config.routing.api_prefixes.len(), 2);
        assert!(config.diagnostics().is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site.info]\nname = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.info.name, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site.info]\nname = \"Test\"\n[site.seo]\ntwitter_site = \"@t\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_site_url_override() {
        let mut config = SiteConfig::default();
        config.apply_site_url_override(Some("https://env.example.com".into()));
        assert_eq!(config.site.info.url.as_deref(), Some("https://env.example.com"));

        config.apply_site_url_override(Some("  ".into()));
        config.apply_site_url_override(None);
        assert_eq!(config.site.info.url.as_deref(), Some("https://env.example.com"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            r#"
            [site.info]
            name = ""

            [[i18n.locales]]
            code = "en"

            [routing]
            root_files = ["robots.txt"]
            "#,
        );
        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 3);
    }
}
