//! Periodic table printout.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::table::{Placement, RenderedCell, Surfaces, TableBuilder};

/// Print the periodic table
#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    /// Output cells as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CellOutput<'a> {
    symbol: &'a str,
    atomic_number: u32,
    category: &'a str,
    placement: Placement,
}

impl TableArgs {
    /// Execute the table command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let dataset = ctx.load()?;
        let mut builder = TableBuilder::new(Surfaces::attached(), None);
        builder
            .try_build(&dataset.elements)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            let cells: Vec<CellOutput> = builder
                .cells()
                .iter()
                .map(|cell| CellOutput {
                    symbol: cell.symbol(),
                    atomic_number: cell.atomic_number(),
                    category: cell.category(),
                    placement: cell.placement(),
                })
                .collect();
            print_json(&cells)
        } else {
            print!("{}", render_text(&builder));
            Ok(())
        }
    }
}

/// Plain-text grid: one line per period, then one line per series row.
///
/// Unmatched cells are shown as `·`.
#[must_use]
pub fn render_text(builder: &TableBuilder) -> String {
    let label = |cell: &RenderedCell| {
        if cell.is_matched() {
            format!("{:<3}", cell.symbol())
        } else {
            format!("{:<3}", "·")
        }
    };

    let mut out = String::new();
    for row in 1..=7 {
        let line: String = (1..=18)
            .map(|column| builder.cell_at(row, column).map_or_else(|| "   ".to_string(), label))
            .collect::<Vec<_>>()
            .join(" ");
        let line = line.trim_end();
        if !line.is_empty() {
            out.push_str(line);
            out.push('\n');
        }
    }

    for (series, cells) in builder.series_rows() {
        out.push('\n');
        let line: Vec<String> = cells.into_iter().map(label).collect();
        out.push_str(&format!("{:<12} {}\n", series.label(), line.join(" ").trim_end()));
    }
    out
}
