//! `[routing]` section configuration.
//!
//! Paths matching these lists are never locale-prefixed.
//!
//! # Example
//!
//! ```toml
//! [routing]
//! asset_prefixes = ["/assets/", "/_next/"]
//! api_prefixes = ["/api/"]
//! root_files = ["/robots.txt", "/sitemap.xml"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::Exclusions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Static asset directories.
    pub asset_prefixes: Vec<String>,

    /// API route directories.
    pub api_prefixes: Vec<String>,

    /// Exact root-level files.
    pub root_files: Vec<String>,
}

/// Field paths of [`RoutingConfig`].
pub struct RoutingFields {
    pub asset_prefixes: FieldPath,
    pub api_prefixes: FieldPath,
    pub root_files: FieldPath,
}

impl RoutingConfig {
    pub const FIELDS: RoutingFields = RoutingFields {
        asset_prefixes: FieldPath::new("routing.asset_prefixes"),
        api_prefixes: FieldPath::new("routing.api_prefixes"),
        root_files: FieldPath::new("routing.root_files"),
    };

    pub fn to_exclusions(&self) -> Exclusions {
        Exclusions::new(
            self.asset_prefixes.clone(),
            self.api_prefixes.clone(),
            self.root_files.clone(),
        )
    }

    /// Every entry must be a site-root path other than `/`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let lists = [
            (Self::FIELDS.asset_prefixes, &self.asset_prefixes),
            (Self::FIELDS.api_prefixes, &self.api_prefixes),
            (Self::FIELDS.root_files, &self.root_files),
        ];
        for (field, entries) in lists {
            for entry in entries {
                if !entry.starts_with('/') {
                    diag.error_with_hint(
                        field,
                        format!("`{entry}` is not a site-root path"),
                        format!("use \"/{}\"", entry.trim_start_matches("./")),
                    );
                } else if entry.trim_end_matches('/').is_empty() {
                    diag.error(field, "`/` would exclude every route");
                }
            }
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            asset_prefixes: owned(&["/assets/", "/_next/", "/static/", "/images/", "/fonts/"]),
            api_prefixes: owned(&["/api/"]),
            root_files: owned(&[
                "/robots.txt",
                "/sitemap.xml",
                "/favicon.ico",
                "/manifest.webmanifest",
            ]),
        }
    }
}
