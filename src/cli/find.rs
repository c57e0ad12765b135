//! Relevance-scored search command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::services::catalog::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use crate::services::{ElementCatalog, SearchField};

/// Search elements by symbol, name, Persian name or category, ranked
#[derive(Debug, Clone, Args)]
pub struct FindArgs {
    /// Query (at least two characters)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,

    /// Comma-separated fields: symbol, name, fa_name, category
    #[arg(long, default_value = "symbol,name,fa_name")]
    pub fields: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FindResult<'a> {
    atomic_number: u32,
    symbol: &'a str,
    name: &'a str,
    category: &'a str,
    relevance_score: u32,
}

impl FindArgs {
    /// Execute the find command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        if !(1..=MAX_SEARCH_LIMIT).contains(&self.limit) {
            return Err(CliError::validation(format!(
                "--limit must be between 1 and {MAX_SEARCH_LIMIT}"
            )));
        }

        let dataset = ctx.load()?;
        let catalog = ElementCatalog::new(&dataset.elements);
        let fields = SearchField::parse_list(&self.fields);
        let hits = catalog.search(&self.query, &fields, self.limit);

        if self.json {
            let results: Vec<FindResult> = hits
                .iter()
                .map(|hit| FindResult {
                    atomic_number: hit.element.atomic_number,
                    symbol: &hit.element.symbol,
                    name: hit.element.display_name(ctx.language),
                    category: &hit.element.category,
                    relevance_score: hit.score,
                })
                .collect();
            return print_json(&results);
        }

        if hits.is_empty() {
            println!("No results for '{}'", self.query);
            return Ok(());
        }
        for hit in hits {
            println!(
                "{:>4}  {:>3}  {:<3} {}",
                hit.score,
                hit.element.atomic_number,
                hit.element.symbol,
                hit.element.display_name(ctx.language)
            );
        }
        Ok(())
    }
}
