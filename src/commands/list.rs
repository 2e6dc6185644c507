//! `tagmatch list` command - first items of the catalog

use tagmatch_core::catalog::{Catalog, ItemSummary};
use tagmatch_core::config::{truncate, Config};
use tagmatch_core::error::Result;
use tagmatch_core::records::{header, item_line};

use crate::cli::{Cli, OutputFormat};

/// Execute the list command
pub fn execute(cli: &Cli, config: &Config, catalog: &Catalog, limit: usize) -> Result<()> {
    let items: Vec<ItemSummary> = catalog
        .items()
        .iter()
        .take(limit)
        .map(|item| item.summary())
        .collect();

    match cli.format {
        OutputFormat::Human => {
            if items.is_empty() {
                if !cli.quiet {
                    println!("Catalog is empty");
                }
                return Ok(());
            }
            for item in &items {
                println!("{}", truncate(&item.name, config.display.name_width));
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "total": catalog.len(),
                "items": items,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "list",
                    &[
                        ("total", catalog.len().to_string()),
                        ("shown", items.len().to_string()),
                    ],
                )
            );
            for (rank, item) in items.iter().enumerate() {
                println!("{}", item_line(rank + 1, item, None));
            }
        }
    }

    Ok(())
}
