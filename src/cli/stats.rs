//! Statistics command.

use clap::Args;

use crate::cli::common::{print_json, CliContext, CliResult};
use crate::services::Statistics;

/// Show element counts per category, period and phase
#[derive(Debug, Clone, Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let dataset = ctx.load()?;
        let stats = Statistics::collect(&dataset.elements);

        if self.json {
            return print_json(&stats);
        }

        println!("Total elements: {}", stats.total_elements);
        println!();
        println!("By category:");
        for (category, count) in &stats.categories {
            println!("  {category:<24} {count:>3}");
        }
        println!();
        println!("By period:");
        for (period, count) in &stats.periods {
            println!("  {period:<24} {count:>3}");
        }
        println!();
        println!("By phase:");
        for (phase, count) in &stats.phases {
            println!("  {phase:<24} {count:>3}");
        }
        Ok(())
    }
}
