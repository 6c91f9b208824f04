//! Per-page metadata input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Deserialize keywords, treating `null` as empty vec
fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Which default structured data a page gets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// `WebPage` structured data, `og:type = website`.
    #[default]
    Generic,
    /// `Article` structured data, `og:type = article`.
    Article,
}

/// Raw metadata fields supplied by the page.
///
/// # Fields
///
/// | Field             | Type          | Description                              |
/// |-------------------|---------------|------------------------------------------|
/// | `title`           | `String`      | Page title (site name appended)          |
/// | `description`     | `String`      | Falls back to the site description       |
/// | `path`            | `String`      | Current request path, any locale         |
/// | `locale`          | `String`      | Active locale; resolved from `path` if unset |
/// | `image`           | `String`      | Path or URL; site default image if unset |
/// | `keywords`        | `Vec<String>` | Keywords / article tags                  |
/// | `kind`            | `ContentKind` | `generic` or `article`                   |
/// | `noindex`         | `bool`        | Block indexing and following             |
/// | `structured-data` | `Vec<Value>`  | Page-authored JSON-LD trees              |
/// | `published`       | `String`      | Article publication time                 |
/// | `modified`        | `String`      | Article modification time                |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub path: String,
    pub locale: Option<String>,
    pub image: Option<String>,
    #[serde(deserialize_with = "deserialize_keywords")]
    pub keywords: Vec<String>,
    pub kind: ContentKind,
    pub noindex: bool,
    pub structured_data: Vec<Value>,
    pub published: Option<String>,
    pub modified: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Mark as an article published at `published`.
    pub fn article(mut self, published: impl Into<String>) -> Self {
        self.kind = ContentKind::Article;
        self.published = Some(published.into());
        self
    }

    pub fn with_locale(mut self, code: impl Into<String>) -> Self {
        self.locale = Some(code.into());
        self
    }

    pub fn with_structured_data(mut self, value: Value) -> Self {
        self.structured_data.push(value);
        self
    }
}
