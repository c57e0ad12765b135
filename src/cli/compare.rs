//! Two-element comparison command.

use clap::Args;
use serde_json::Value;

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::services::{compare, ElementCatalog};

/// Compare two elements property by property
#[derive(Debug, Clone, Args)]
pub struct CompareArgs {
    /// First element (atomic number, symbol or name)
    #[arg(value_name = "A")]
    pub first: String,

    /// Second element
    #[arg(value_name = "B")]
    pub second: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let dataset = ctx.load()?;
        let catalog = ElementCatalog::new(&dataset.elements);

        let find = |id: &str| {
            catalog
                .find(id)
                .ok_or_else(|| CliError::validation(format!("Element {id} not found")))
        };
        let a = find(&self.first)?;
        let b = find(&self.second)?;
        let comparison = compare(a, b);

        if self.json {
            return print_json(&comparison);
        }

        println!("{} vs {}", a.symbol, b.symbol);
        println!();
        println!("Differences:");
        for diff in &comparison.differences {
            println!(
                "  {:<18} {:<20} {}",
                diff.property,
                plain(&diff.element1),
                plain(&diff.element2)
            );
        }
        println!();
        println!("Similarities:");
        for same in &comparison.similarities {
            println!("  {:<18} {}", same.property, plain(&same.value));
        }
        Ok(())
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
