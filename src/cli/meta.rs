//! `meta` and `alternates` commands.

use anyhow::Result;
use serde_json::json;

use crate::cli::common::{read_json, to_json};
use crate::cli::{MetaArgs, MetaFormat};
use crate::core::SiteContext;
use crate::render::{render_document, render_head};
use crate::seo::{ContentKind, MetadataAssembler, MetadataRecord, PageMeta};

/// Assemble and print the metadata record for one page.
pub fn run_meta(args: &MetaArgs, ctx: &SiteContext) -> Result<()> {
    let record = build_record(args, ctx)?;
    println!("{}", format_record(&record, args.format, args.pretty)?);
    Ok(())
}

fn build_record(args: &MetaArgs, ctx: &SiteContext) -> Result<MetadataRecord> {
    let structured_data = args
        .schema
        .iter()
        .map(|path| read_json(path))
        .collect::<Result<Vec<_>>>()?;

    let page = PageMeta {
        title: args.title.clone(),
        description: args.description.clone(),
        path: args.path.clone(),
        locale: args.locale.clone(),
        image: args.image.clone(),
        keywords: args
            .keywords
            .iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect(),
        kind: if args.article || args.published.is_some() {
            ContentKind::Article
        } else {
            ContentKind::Generic
        },
        noindex: args.noindex,
        structured_data,
        published: args.published.clone(),
        modified: args.modified.clone(),
    };

    Ok(MetadataAssembler::new(ctx).assemble(&page))
}

fn format_record(record: &MetadataRecord, format: MetaFormat, pretty: bool) -> Result<String> {
    Ok(match format {
        MetaFormat::Json => to_json(record, pretty)?,
        MetaFormat::Html => render_head(record).trim_end().to_string(),
        MetaFormat::Document => render_document(record).trim_end().to_string(),
    })
}

/// Print canonical, alternate and `x-default` URLs of a path.
pub fn run_alternates(path: &str, pretty: bool, ctx: &SiteContext) -> Result<()> {
    println!("{}", to_json(&alternates_json(path, ctx), pretty)?);
    Ok(())
}

fn alternates_json(path: &str, ctx: &SiteContext) -> serde_json::Value {
    let record = MetadataAssembler::new(ctx).assemble(&PageMeta::new("", path));
    json!({
        "lang": record.lang,
        "canonicalUrl": record.canonical_url,
        "alternateUrlsByLocale": record.alternate_urls_by_locale,
        "xDefaultUrl": record.x_default_url,
    })
}
