//! Core types - locale-aware URL canonicalization.
//!
//! | Module   | Purpose                                            |
//! |----------|----------------------------------------------------|
//! | `locale` | Locale registry, locale resolution from paths      |
//! | `link`   | Link classification, query/fragment splitting      |
//! | `path`   | Locale prefix stripping/application, exclusions    |
//! | `url`    | Site origin, absolute URL resolution               |
//! | `site`   | Immutable resolved site context                    |

mod link;
mod locale;
mod path;
mod site;
mod url;

pub use link::{LinkKind, split_suffix};
pub use locale::{Locale, LocaleError, Locales};
pub use path::{Exclusions, PathLocalizer};
pub use site::{Organization, SiteContext};
pub use url::{
    FALLBACK_ORIGIN, SiteOrigin, encode_path, is_absolute_url, resolve_site_origin, to_absolute,
};
