//! CLI command handlers.
//!
//! Headless, scriptable access to the periodic table for shells and CI.

pub mod common;
pub mod compare;
pub mod config;
pub mod find;
pub mod search;
pub mod show;
pub mod stats;
pub mod table;

use clap::Subcommand;

// Re-export types used by main.rs and tests
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use compare::CompareArgs;
pub use config::ConfigArgs;
pub use find::FindArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
pub use stats::StatsArgs;
pub use table::TableArgs;

/// All subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the periodic table
    Table(TableArgs),
    /// Filter the table by alias prefix
    Search(SearchArgs),
    /// Ranked search over symbols, names and categories
    Find(FindArgs),
    /// Show one element
    Show(ShowArgs),
    /// Compare two elements
    Compare(CompareArgs),
    /// Element counts
    Stats(StatsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    /// Runs the subcommand.
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match self {
            Self::Table(args) => args.execute(ctx),
            Self::Search(args) => args.execute(ctx),
            Self::Find(args) => args.execute(ctx),
            Self::Show(args) => args.execute(ctx),
            Self::Compare(args) => args.execute(ctx),
            Self::Stats(args) => args.execute(ctx),
            Self::Config(args) => args.execute(),
        }
    }
}
