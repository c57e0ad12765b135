//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set a configuration value
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set a configuration value
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Dotted key, e.g. `ui.language` or `server.port`
    #[arg(value_name = "KEY")]
    key: String,

    /// New value; an empty string clears optional paths
    #[arg(value_name = "VALUE")]
    value: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load().unwrap_or_default();

        config
            .set_value(&self.key, &self.value)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Mendeleev Configuration");
    println!("=======================");
    println!();

    println!("Paths:");
    match &config.paths.data_dir {
        Some(dir) => println!("  Data Directory: {}", dir.display()),
        None => println!("  Data Directory: (embedded data)"),
    }
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode);
    println!("  Language: {}", config.ui.language);
    println!("  Help On Startup: {}", config.ui.show_help_on_startup);
    println!();

    println!("Server:");
    println!("  Address: {}:{}", config.server.host, config.server.port);
    println!("  CORS: {}", if config.server.cors_enabled { "enabled" } else { "disabled" });
    if let Some(dir) = &config.server.static_dir {
        println!("  Static Files: {}", dir.display());
    }
    println!();
}
