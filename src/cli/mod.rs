//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod localize;
pub mod meta;
pub mod schema;
pub mod sitemap;

pub use args::{Cli, Commands, MetaArgs, MetaFormat};
