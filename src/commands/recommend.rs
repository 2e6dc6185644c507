//! `tagmatch recommend` command - items similar to a named item
//!
//! An unknown item or a catalog with a single entry is not an error: the
//! command reports that no recommendations are available and exits 0.

use std::time::Instant;

use tagmatch_core::catalog::Catalog;
use tagmatch_core::config::{truncate, Config};
use tagmatch_core::error::Result;
use tagmatch_core::records;
use tagmatch_core::similarity::{clamp_count, ScoredItem, SimilarityEngine};
use tracing::debug;

use crate::cli::{Cli, OutputFormat};

const EMPTY_MESSAGE: &str = "No recommendations available.";

/// Execute the recommend command
pub fn execute(
    cli: &Cli,
    config: &Config,
    catalog: &Catalog,
    item: &str,
    count: Option<i64>,
) -> Result<()> {
    let start = Instant::now();

    let top_n = count
        .map(clamp_count)
        .unwrap_or(config.recommend.default_count);

    let engine = SimilarityEngine::new(catalog, config.vectorizer);
    let results = engine.recommend_scored(item, top_n);

    debug!(item, top_n, result_count = results.len(), elapsed = ?start.elapsed(), "recommend");

    match cli.format {
        OutputFormat::Human => output_human(cli, config, &results),
        OutputFormat::Json => output_json(item, &results)?,
        OutputFormat::Records => output_records(item, &results),
    }

    Ok(())
}

fn output_human(cli: &Cli, config: &Config, results: &[ScoredItem]) {
    if results.is_empty() {
        if !cli.quiet {
            println!("{}", EMPTY_MESSAGE);
        }
        return;
    }

    for (rank, result) in results.iter().enumerate() {
        let brand = if result.item.brand.is_empty() {
            String::new()
        } else {
            format!(" [{}]", result.item.brand)
        };
        println!(
            "{:>3}. {}{} ({:.3})",
            rank + 1,
            truncate(&result.item.name, config.display.name_width),
            brand,
            result.score
        );
    }
}

fn output_json(item: &str, results: &[ScoredItem]) -> Result<()> {
    let mut output = serde_json::json!({
        "item": item,
        "count": results.len(),
        "results": results,
    });
    if results.is_empty() {
        if let Some(obj) = output.as_object_mut() {
            obj.insert("message".to_string(), serde_json::json!(EMPTY_MESSAGE));
        }
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(item: &str, results: &[ScoredItem]) {
    println!(
        "{}",
        records::header(
            "recommend",
            &[
                ("item", format!("\"{}\"", records::escape_field(item))),
                ("results", results.len().to_string()),
            ],
        )
    );
    for (rank, result) in results.iter().enumerate() {
        println!(
            "{}",
            records::item_line(rank + 1, &result.item, Some(result.score))
        );
    }
}
