//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! name = "Example Guides"
//! description = "Guides about everything"
//! url = "https://example.com"
//!
//! [site.seo]
//! title_separator = " | "
//! default_image = "/og-default.jpg"
//! twitter_site = "@example"
//!
//! [site.organization]
//! name = "Example Inc."
//! logo = "/logo.png"
//! ```

mod info;
mod organization;
mod seo;

pub use info::SiteInfoConfig;
pub use organization::OrganizationConfig;
pub use seo::SeoConfig;

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Site section configuration: identity, SEO defaults and publisher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site identity (name, description, url).
    pub info: SiteInfoConfig,

    /// Title separator, default image, twitter handle.
    pub seo: SeoConfig,

    /// Publisher organization for structured data.
    pub organization: OrganizationConfig,
}

impl SiteSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.info.validate(diag);
        self.seo.validate(diag);
    }
}
