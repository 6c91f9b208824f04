//! `localize` command.

use anyhow::Result;

use crate::core::SiteContext;

/// Print the localized path for one locale, or `code<TAB>path` per locale.
///
/// An unknown locale code uses the default locale.
pub fn run_localize(path: &str, locale: Option<&str>, ctx: &SiteContext) -> Result<()> {
    for line in localize_lines(path, locale, ctx) {
        println!("{line}");
    }
    Ok(())
}

fn localize_lines(path: &str, locale: Option<&str>, ctx: &SiteContext) -> Vec<String> {
    let paths = ctx.paths();
    match locale {
        Some(code) => vec![paths.localize(path, ctx.locales().get(code)).into_owned()],
        None => ctx
            .locales()
            .iter()
            .map(|locale| format!("{}\t{}", locale.code, paths.localize(path, locale)))
            .collect(),
    }
}
