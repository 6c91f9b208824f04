//! `sitemap` command.

use anyhow::Result;

use crate::cli::common::expand_stdin;
use crate::core::SiteContext;
use crate::generator::build_sitemap;
use crate::log;

/// Print the localized sitemap for the given paths (`-` reads stdin).
pub fn run_sitemap(args: &[String], ctx: &SiteContext) -> Result<()> {
    let paths = expand_stdin(args)?;
    if paths.is_empty() {
        log!("sitemap"; "no paths given");
    }
    print!("{}", build_sitemap(ctx, &paths));
    Ok(())
}
