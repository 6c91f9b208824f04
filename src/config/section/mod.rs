//! Configuration section definitions.
//!
//! Each module corresponds to a section in `hreflang.toml`:
//!
//! | Module    | TOML Section  | Purpose                                  |
//! |-----------|---------------|------------------------------------------|
//! | `site`    | `[site]`      | Site identity, SEO defaults, publisher   |
//! | `i18n`    | `[i18n]`      | Supported locales and `x-default`        |
//! | `routing` | `[routing]`   | Paths that are never locale-prefixed     |

mod i18n;
mod routing;
pub mod site;

pub use i18n::{I18nConfig, LocaleConfig};
pub use routing::RoutingConfig;
pub use site::{OrganizationConfig, SeoConfig, SiteInfoConfig, SiteSectionConfig};
