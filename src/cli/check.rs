//! `check` command.

use anyhow::{Result, bail};

use crate::config::{ConfigError, SiteConfig};
use crate::core::SiteContext;
use crate::log;

/// Validate configuration and print the resolved site.
pub fn run_check(config: &SiteConfig) -> Result<()> {
    let diag = config.diagnostics();
    diag.print_warnings();
    if diag.has_errors() {
        bail!(ConfigError::Diagnostics(diag));
    }

    let ctx = SiteContext::from_validated(config)?;
    for line in summary(config, &ctx) {
        log!("check"; "{}", line);
    }
    Ok(())
}

fn summary(config: &SiteConfig, ctx: &SiteContext) -> Vec<String> {
    let source = if config.is_loaded_from_file() {
        config.config_path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    let locales: Vec<String> = ctx
        .locales()
        .iter()
        .map(|l| match l.root() {
            Some(root) => format!("{} ({root})", l.code),
            None => format!("{} (default)", l.code),
        })
        .collect();

    vec![
        format!("config: {source}"),
        format!("origin: {}", ctx.origin),
        format!("locales: {}", locales.join(", ")),
        format!("x-default: {}", ctx.x_default_locale().code),
    ]
}
