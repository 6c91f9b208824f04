//! hreflang - locale-aware canonical URLs and page metadata.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use hreflang::{
    cli::{self, Cli, Commands},
    config::SiteConfig,
    core::SiteContext,
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config)?;
    if matches!(cli.command, Commands::Check) {
        return cli::check::run_check(&config);
    }

    // Resolved once; every command borrows it
    let ctx = SiteContext::from_config(&config)?;

    match &cli.command {
        Commands::Meta { args } => cli::meta::run_meta(args, &ctx),
        Commands::Localize { path, locale } => {
            cli::localize::run_localize(path, locale.as_deref(), &ctx)
        }
        Commands::Alternates { path, pretty } => cli::meta::run_alternates(path, *pretty, &ctx),
        Commands::Schema {
            file,
            locale,
            pretty,
        } => cli::schema::run_schema(file, locale.as_deref(), *pretty, &ctx),
        Commands::Sitemap { paths } => cli::sitemap::run_sitemap(paths, &ctx),
        Commands::Check => cli::check::run_check(&config),
    }
}
