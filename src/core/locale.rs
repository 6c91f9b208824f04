//! Supported locales and locale resolution from request paths.
//!
//! Exactly one locale is the default: it is served without a path prefix.
//! Every other (secondary) locale owns a single root segment such as `/en`.
//! The default locale may declare a prefix too; it then only acts as an
//! alias that gets stripped, never one that gets produced.

use serde::Serialize;
use thiserror::Error;

/// Locale registry construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("no locales configured")]
    Empty,

    #[error("locale code is empty")]
    EmptyCode,

    #[error("expected exactly one default locale, found {0}")]
    DefaultCount(usize),

    #[error("locale `{0}` is configured more than once")]
    DuplicateCode(String),

    #[error("secondary locale `{0}` has no prefix")]
    MissingPrefix(String),

    #[error("locale `{code}` has invalid prefix `{prefix}`")]
    InvalidPrefix { code: String, prefix: String },

    #[error("prefix `{0}` is used by more than one locale")]
    DuplicatePrefix(String),
}

/// A supported content locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locale {
    /// Language code used for `hreflang` and `<html lang>` (e.g. `en`, `es`).
    pub code: String,
    /// Root segment (e.g. `/en`). Required for secondary locales.
    pub prefix: Option<String>,
    /// Open Graph locale (e.g. `en_US`).
    pub og_locale: String,
    /// Whether this is the default (unprefixed) locale.
    pub is_default: bool,
}

impl Locale {
    pub fn new(code: impl Into<String>, prefix: Option<&str>, og_locale: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            prefix: prefix.map(str::to_string),
            og_locale: og_locale.into(),
            is_default: false,
        }
    }

    /// Mark as the default locale.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Root segment this locale produces, `None` for the default locale.
    #[inline]
    pub fn root(&self) -> Option<&str> {
        if self.is_default {
            None
        } else {
            self.prefix.as_deref()
        }
    }

    /// Check whether `pathname` lives under this locale's prefix
    /// (the prefix itself, or the prefix followed by `/`).
    ///
    /// Returns the remainder after the prefix (`""` or `/…`).
    #[inline]
    pub fn match_prefix<'p>(&self, pathname: &'p str) -> Option<&'p str> {
        let prefix = self.prefix.as_deref()?;
        let rest = pathname.strip_prefix(prefix)?;
        (rest.is_empty() || rest.starts_with('/')).then_some(rest)
    }
}

/// Validated, ordered set of supported locales.
///
/// Invariants:
/// - Non-empty, exactly one default locale
/// - No empty codes
/// - Codes and prefixes unique
/// - Every secondary locale has a prefix
/// - Prefixes are a single segment: `/` + non-empty, no further `/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locales {
    locales: Vec<Locale>,
    #[serde(skip)]
    default_index: usize,
}

impl Locales {
    pub fn new(locales: Vec<Locale>) -> Result<Self, LocaleError> {
        if locales.is_empty() {
            return Err(LocaleError::Empty);
        }

        let defaults: Vec<usize> = locales
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_default)
            .map(|(i, _)| i)
            .collect();
        let [default_index] = defaults[..] else {
            return Err(LocaleError::DefaultCount(defaults.len()));
        };

        for (i, locale) in locales.iter().enumerate() {
            if locale.code.trim().is_empty() {
                return Err(LocaleError::EmptyCode);
            }
            if locales[..i].iter().any(|l| l.code == locale.code) {
                return Err(LocaleError::DuplicateCode(locale.code.clone()));
            }

            match locale.prefix.as_deref() {
                None if !locale.is_default => {
                    return Err(LocaleError::MissingPrefix(locale.code.clone()));
                }
                None => {}
                Some(prefix) => {
                    if !is_valid_prefix(prefix) {
                        return Err(LocaleError::InvalidPrefix {
                            code: locale.code.clone(),
                            prefix: prefix.to_string(),
                        });
                    }
                    if locales[..i]
                        .iter()
                        .any(|l| l.prefix.as_deref() == Some(prefix))
                    {
                        return Err(LocaleError::DuplicatePrefix(prefix.to_string()));
                    }
                }
            }
        }

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// The default (unprefixed) locale.
    #[inline]
    pub fn default_locale(&self) -> &Locale {
        &self.locales[self.default_index]
    }

    /// Look up a locale by code.
    pub fn find(&self, code: &str) -> Option<&Locale> {
        self.locales.iter().find(|l| l.code == code)
    }

    /// Look up a locale by code, normalizing unknown codes to the default.
    pub fn get(&self, code: &str) -> &Locale {
        self.find(code).unwrap_or_else(|| {
            crate::debug!("locale"; "unknown locale `{}`, using `{}`", code, self.default_locale().code);
            self.default_locale()
        })
    }

    /// All locales in configured order.
    pub fn iter(&self) -> std::slice::Iter<'_, Locale> {
        self.locales.iter()
    }

    /// Secondary (prefixed) locales in configured order.
    pub fn secondary(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter().filter(|l| !l.is_default)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Derive the active locale from a request pathname.
    ///
    /// Matches each secondary prefix exactly or followed by `/`; the first
    /// match wins. Anything else resolves to the default locale.
    ///
    /// `/en` → en, `/en/guides` → en, `/english` → default, `/` → default
    pub fn resolve(&self, pathname: &str) -> &Locale {
        self.secondary()
            .find(|l| l.match_prefix(pathname).is_some())
            .unwrap_or_else(|| self.default_locale())
    }

    /// Find the locale whose prefix (including a default-locale alias)
    /// `pathname` starts with, with the remainder after it.
    pub fn match_any_prefix<'p>(&self, pathname: &'p str) -> Option<(&Locale, &'p str)> {
        self.locales
            .iter()
            .find_map(|l| l.match_prefix(pathname).map(|rest| (l, rest)))
    }
}

impl Default for Locales {
    /// Spanish as the default locale (with `/es` alias), English under `/en`.
    fn default() -> Self {
        Self {
            locales: vec![
                Locale::new("es", Some("/es"), "es_ES").as_default(),
                Locale::new("en", Some("/en"), "en_US"),
            ],
            default_index: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Locales {
    type Item = &'a Locale;
    type IntoIter = std::slice::Iter<'a, Locale>;

    fn into_iter(self) -> Self::IntoIter {
        self.locales.iter()
    }
}

/// A prefix is `/` followed by one non-empty segment.
fn is_valid_prefix(prefix: &str) -> bool {
    prefix
        .strip_prefix('/')
        .is_some_and(|seg| !seg.is_empty() && !seg.contains(['/', '?', '#']))
}
