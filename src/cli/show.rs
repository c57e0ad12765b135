//! Element detail command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::data::Element;
use crate::services::catalog::DEFAULT_SIMILAR_LIMIT;
use crate::services::ElementCatalog;

/// Show one element by atomic number, symbol or name
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Atomic number, symbol or English name
    #[arg(value_name = "ID")]
    pub identifier: String,

    /// Also list similar elements
    #[arg(long)]
    pub similar: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    element: &'a Element,
    #[serde(skip_serializing_if = "Option::is_none")]
    similar_elements: Option<Vec<&'a str>>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let dataset = ctx.load()?;
        let catalog = ElementCatalog::new(&dataset.elements);
        let element = catalog
            .find(&self.identifier)
            .ok_or_else(|| CliError::validation(format!("Element {} not found", self.identifier)))?;

        let similar = self.similar.then(|| catalog.similar(element, DEFAULT_SIMILAR_LIMIT));

        if self.json {
            return print_json(&ShowOutput {
                element,
                similar_elements: similar
                    .as_ref()
                    .map(|list| list.iter().map(|e| e.symbol.as_str()).collect()),
            });
        }

        println!(
            "{} ({}) #{}",
            element.display_name(ctx.language),
            element.symbol,
            element.atomic_number
        );
        println!("  Category:      {}", element.category);
        println!("  Atomic mass:   {}", element.mass_label());
        println!(
            "  Period/Group:  {} / {}",
            element.period,
            element.group.map_or_else(|| "-".to_string(), |g| g.to_string())
        );
        println!("  Phase:         {}", element.phase);
        println!(
            "  p/n/e:         {} / {} / {}",
            element.protons, element.neutrons, element.electrons
        );
        println!("  Shells:        {}", element.shell_label());
        if !element.discovered_by.is_empty() {
            println!(
                "  Discovered:    {} ({})",
                element.discovered_by, element.discovery_year
            );
        }
        if !element.uses.is_empty() {
            println!("  Uses:");
            for usage in &element.uses {
                println!("    - {usage}");
            }
        }
        if let Some(similar) = similar {
            let symbols: Vec<&str> = similar.iter().map(|e| e.symbol.as_str()).collect();
            println!("  Similar:       {}", symbols.join(", "));
        }
        Ok(())
    }
}
