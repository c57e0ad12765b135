//! Alias prefix search command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::cli::table::render_text;
use crate::search::SearchIndex;
use crate::table::{Surfaces, TableBuilder};

/// Filter the table by alias prefix (names, Persian names, numbers)
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Query; matched as a prefix of any alias
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Print the filtered table instead of a list
    #[arg(long, conflicts_with = "json")]
    pub table: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    count: usize,
    symbols: Vec<&'a str>,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let dataset = ctx.load()?;
        let mut builder = TableBuilder::new(Surfaces::attached(), None);
        builder
            .try_build(&dataset.elements)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let index = SearchIndex::init(&dataset.aliases, builder.cells())
            .ok_or_else(|| CliError::validation("Search is unavailable: no elements rendered"))?;
        let count = index.apply(&self.query, builder.cells_mut());

        if self.table {
            print!("{}", render_text(&builder));
            return Ok(());
        }

        let matched: Vec<_> = builder.cells().iter().filter(|c| c.is_matched()).collect();

        if self.json {
            return print_json(&SearchOutput {
                query: &self.query,
                count,
                symbols: matched.iter().map(|c| c.symbol()).collect(),
            });
        }

        if matched.is_empty() {
            println!("No elements match '{}'", self.query);
            return Ok(());
        }
        for cell in matched {
            println!(
                "{:>3}  {:<3} {}",
                cell.atomic_number(),
                cell.symbol(),
                cell.element().display_name(ctx.language)
            );
        }
        Ok(())
    }
}
