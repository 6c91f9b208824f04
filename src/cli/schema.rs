//! `schema` command.

use std::path::Path;

use anyhow::Result;

use crate::cli::common::{read_json, to_json};
use crate::core::SiteContext;
use crate::seo::SchemaLocalizer;

/// Localize every same-origin URL in a JSON file and print the result.
///
/// A missing or unknown locale code uses the default locale.
pub fn run_schema(file: &Path, locale: Option<&str>, pretty: bool, ctx: &SiteContext) -> Result<()> {
    let value = read_json(file)?;
    let locale = match locale {
        Some(code) => ctx.locales().get(code),
        None => ctx.locales().default_locale(),
    };
    let localized = SchemaLocalizer::new(ctx, locale).localize_value(&value);
    println!("{}", to_json(&localized, pretty)?);
    Ok(())
}
