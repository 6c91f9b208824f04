//! The assembled per-page metadata record.

use serde::Serialize;
use serde_json::Value;

use super::og::{OpenGraph, TwitterCard};

/// One `hreflang` alternate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

/// Robots meta directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Robots {
    #[default]
    #[serde(rename = "index, follow")]
    Index,
    #[serde(rename = "noindex, nofollow")]
    NoIndex,
}

impl Robots {
    pub fn from_noindex(noindex: bool) -> Self {
        if noindex { Self::NoIndex } else { Self::Index }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index, follow",
            Self::NoIndex => "noindex, nofollow",
        }
    }
}

/// Everything the head renderer needs for one page.
///
/// Immutable once assembled; serializes with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    /// `<html lang>` value.
    pub lang: String,
    pub full_title: String,
    pub description: String,
    pub canonical_url: String,
    /// One entry per supported locale, in configured order.
    pub alternate_urls_by_locale: Vec<Alternate>,
    /// Language-neutral alternate.
    pub x_default_url: String,
    pub image_url: String,
    pub robots_directive: Robots,
    pub keywords: Vec<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    /// Default structured data first, then page-authored entries.
    pub structured_data_list: Vec<Value>,
}

impl MetadataRecord {
    /// Alternate URL for a locale code.
    pub fn alternate(&self, code: &str) -> Option<&str> {
        self.alternate_urls_by_locale
            .iter()
            .find(|alt| alt.hreflang == code)
            .map(|alt| alt.href.as_str())
    }
}
