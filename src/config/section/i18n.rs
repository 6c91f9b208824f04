//! `[i18n]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! x_default = "es"
//!
//! [[i18n.locales]]
//! code = "es"
//! prefix = "/es"      # optional alias for the default locale
//! og_locale = "es_ES"
//! default = true
//!
//! [[i18n.locales]]
//! code = "en"
//! prefix = "/en"
//! og_locale = "en_US"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::{Locale, LocaleError, Locales};
use serde::{Deserialize, Serialize};

/// One `[[i18n.locales]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Language code (e.g., "en").
    pub code: String,

    /// Root segment (e.g., "/en"). Required unless `default = true`.
    #[serde(default)]
    pub prefix: Option<String>,

    /// Open Graph locale; derived from `code` when unset ("pt-BR" → "pt_BR").
    #[serde(default)]
    pub og_locale: Option<String>,

    /// Serve this locale without a prefix.
    #[serde(default)]
    pub default: bool,
}

impl LocaleConfig {
    fn to_locale(&self) -> Locale {
        let og_locale = self
            .og_locale
            .clone()
            .unwrap_or_else(|| self.code.replace('-', "_"));
        let locale = Locale::new(self.code.trim(), self.prefix.as_deref(), og_locale);
        if self.default {
            locale.as_default()
        } else {
            locale
        }
    }
}

/// Supported locales and the `x-default` alternate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub locales: Vec<LocaleConfig>,

    /// Locale whose URL is emitted as `x-default`; the default locale when unset.
    pub x_default: Option<String>,
}

/// Field paths of [`I18nConfig`].
pub struct I18nFields {
    pub locales: FieldPath,
    pub x_default: FieldPath,
}

impl I18nConfig {
    pub const FIELDS: I18nFields = I18nFields {
        locales: FieldPath::new("i18n.locales"),
        x_default: FieldPath::new("i18n.x_default"),
    };

    /// Build the validated locale registry.
    pub fn to_locales(&self) -> Result<Locales, LocaleError> {
        Locales::new(self.locales.iter().map(LocaleConfig::to_locale).collect())
    }

    /// Code of the locale used for `x-default`.
    pub fn x_default_code<'a>(&'a self, locales: &'a Locales) -> &'a str {
        self.x_default
            .as_deref()
            .map(str::trim)
            .unwrap_or(&locales.default_locale().code)
    }

    /// Validate locale registry and `x_default`.
    ///
    /// # Checks
    /// - locales form a valid registry (see [`Locales::new`])
    /// - `x_default` names a configured locale
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let locales = match self.to_locales() {
            Ok(locales) => locales,
            Err(err) => {
                diag.error_with_hint(Self::FIELDS.locales, err.to_string(), locale_hint(&err));
                return;
            }
        };

        if let Some(code) = self.x_default.as_deref().map(str::trim)
            && locales.find(code).is_none()
        {
            let known: Vec<&str> = locales.iter().map(|l| l.code.as_str()).collect();
            diag.error_with_hint(
                Self::FIELDS.x_default,
                format!("x_default `{code}` is not a configured locale"),
                format!("use one of: {}", known.join(", ")),
            );
        }
    }
}

fn locale_hint(err: &LocaleError) -> &'static str {
    match err {
        LocaleError::Empty => "add at least one [[i18n.locales]] entry",
        LocaleError::EmptyCode => "set a language code, e.g.: code = \"en\"",
        LocaleError::DefaultCount(_) => "mark exactly one locale with default = true",
        LocaleError::DuplicateCode(_) => "each locale code may appear only once",
        LocaleError::MissingPrefix(_) => "add a prefix, e.g.: prefix = \"/en\"",
        LocaleError::InvalidPrefix { .. } => "a prefix is a single segment, e.g.: \"/en\"",
        LocaleError::DuplicatePrefix(_) => "give every locale its own prefix",
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        let locales = Locales::default()
            .iter()
            .map(|l| LocaleConfig {
                code: l.code.clone(),
                prefix: l.prefix.clone(),
                og_locale: Some(l.og_locale.clone()),
                default: l.is_default,
            })
            .collect();
        Self {
            locales,
            x_default: None,
        }
    }
}
