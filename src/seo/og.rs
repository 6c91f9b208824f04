//! Open Graph and Twitter Card fields.

use serde::Serialize;

/// `og:type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    Website,
    Article,
}

impl OgType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// `article:*` properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    pub tags: Vec<String>,
}

/// Open Graph properties of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: OgType,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub site_name: String,
    pub locale: String,
    pub locale_alternate: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleTags>,
}

impl OpenGraph {
    /// `(property, content)` pairs in emission order.
    pub fn properties(&self) -> Vec<(&'static str, &str)> {
        let mut props = vec![
            ("og:type", self.og_type.as_str()),
            ("og:title", self.title.as_str()),
            ("og:description", self.description.as_str()),
            ("og:url", self.url.as_str()),
            ("og:image", self.image.as_str()),
            ("og:site_name", self.site_name.as_str()),
            ("og:locale", self.locale.as_str()),
        ];
        props.extend(
            self.locale_alternate
                .iter()
                .map(|l| ("og:locale:alternate", l.as_str())),
        );

        if let Some(article) = &self.article {
            if let Some(time) = &article.published_time {
                props.push(("article:published_time", time.as_str()));
            }
            if let Some(time) = &article.modified_time {
                props.push(("article:modified_time", time.as_str()));
            }
            props.extend(article.tags.iter().map(|t| ("article:tag", t.as_str())));
        }
        props
    }
}

/// Twitter Card fields of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

impl TwitterCard {
    pub const SUMMARY_LARGE_IMAGE: &'static str = "summary_large_image";

    /// `(name, content)` pairs in emission order.
    pub fn names(&self) -> Vec<(&'static str, &str)> {
        let mut names = vec![
            ("twitter:card", self.card),
            ("twitter:title", self.title.as_str()),
            ("twitter:description", self.description.as_str()),
            ("twitter:image", self.image.as_str()),
        ];
        if let Some(site) = &self.site {
            names.push(("twitter:site", site.as_str()));
        }
        names
    }
}
