//! `[site.organization]` configuration.

use serde::{Deserialize, Serialize};

/// Publisher organization referenced from structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Organization name; falls back to the site name when unset.
    pub name: Option<String>,

    /// Logo path or absolute URL.
    pub logo: String,

    /// Organization homepage; falls back to the site origin when unset.
    pub url: Option<String>,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: None,
            logo: "/logo.png".into(),
            url: None,
        }
    }
}
