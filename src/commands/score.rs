//! `tagmatch score` command - similarity between two named items

use tagmatch_core::catalog::Catalog;
use tagmatch_core::config::Config;
use tagmatch_core::error::{Result, TagmatchError};
use tagmatch_core::records::{escape_field, header};
use tagmatch_core::similarity::SimilarityEngine;

use crate::cli::{Cli, OutputFormat};

/// Execute the score command
pub fn execute(
    cli: &Cli,
    config: &Config,
    catalog: &Catalog,
    first: &str,
    second: &str,
) -> Result<()> {
    // Unlike recommend, naming an absent item here is a caller mistake
    for name in [first, second] {
        if catalog.position(name).is_none() {
            return Err(TagmatchError::not_found("item", name));
        }
    }

    let engine = SimilarityEngine::new(catalog, config.vectorizer);
    let score = engine
        .score(first, second)
        .ok_or_else(|| TagmatchError::Other("weight matrix is missing a catalog row".into()))?;

    match cli.format {
        OutputFormat::Human => println!("{:.4}", score),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "first": first,
                "second": second,
                "score": score,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "score",
                    &[
                        ("first", format!("\"{}\"", escape_field(first))),
                        ("second", format!("\"{}\"", escape_field(second))),
                        ("score", format!("{:.4}", score)),
                    ],
                )
            );
        }
    }

    Ok(())
}
