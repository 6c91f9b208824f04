//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Locale-aware canonical URLs and page metadata
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: hreflang.toml)
    #[arg(short = 'C', long, global = true, default_value = "hreflang.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Assemble the metadata record for a page
    #[command(visible_alias = "m")]
    Meta {
        #[command(flatten)]
        args: MetaArgs,
    },

    /// Print the localized form of a path
    #[command(visible_alias = "l")]
    Localize {
        /// Path to localize (e.g., /guides/foo?x=1)
        path: String,

        /// Target locale code; all locales when omitted
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Print canonical and alternate URLs of a path as JSON
    #[command(visible_alias = "a")]
    Alternates {
        /// Request path; its locale prefix selects the canonical locale
        path: String,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Localize same-origin URLs inside a JSON-LD file
    Schema {
        /// JSON file with structured data
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Target locale code (default locale when omitted)
        #[arg(short, long)]
        locale: Option<String>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print a localized sitemap for the given paths
    Sitemap {
        /// Page paths. Use `-` to read paths from stdin (one per line).
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<String>,
    },

    /// Validate the configuration and print the resolved site
    #[command(visible_alias = "c")]
    Check,
}

/// Output format of the `meta` command.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetaFormat {
    /// Metadata record as JSON
    #[default]
    Json,
    /// `<head>` tags
    Html,
    /// Minimal HTML document with `<html lang>`
    Document,
}

/// Meta command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct MetaArgs {
    /// Current request path (any locale)
    pub path: String,

    /// Page title (site name is appended)
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Page description (site description when omitted)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Locale code; resolved from PATH when omitted
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Image path or URL (site default image when omitted)
    #[arg(short, long)]
    pub image: Option<String>,

    /// Keywords (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Emit article metadata
    #[arg(short, long)]
    pub article: bool,

    /// Article publication time (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub published: Option<String>,

    /// Article modification time
    #[arg(long)]
    pub modified: Option<String>,

    /// Block indexing and link following
    #[arg(long)]
    pub noindex: bool,

    /// JSON file with page-authored structured data (repeatable)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub schema: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: MetaFormat,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
