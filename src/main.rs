//! Mendeleev - Terminal periodic table explorer
//!
//! Without a subcommand this starts the interactive table; subcommands give
//! scriptable access to the same data.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use mendeleev::cli::{CliContext, Command};
use mendeleev::config::{Config, Language};
use mendeleev::constants::{APP_BINARY_NAME, LOG_FILE_NAME};
use mendeleev::data::DataSource;
use mendeleev::{logging, tui};

/// Mendeleev - Terminal periodic table explorer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing elements.json and aliases.json
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Language for element names (en, fa)
    #[arg(long, global = true, value_name = "LANG")]
    lang: Option<Language>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        logging::init_stderr(cli.verbose);
        let ctx = CliContext::resolve(cli.data_dir.clone(), cli.lang);
        if let Err(e) = command.execute(&ctx) {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        return Ok(());
    }

    run_interactive(&cli)
}

fn run_interactive(cli: &Cli) -> Result<()> {
    match Config::config_dir() {
        Ok(dir) => {
            if let Err(e) = logging::init_file(&dir.join(LOG_FILE_NAME), cli.verbose) {
                eprintln!("Warning: logging disabled: {e:#}");
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable config: {e:#}");
        eprintln!("Warning: {e:#}");
        eprintln!("Run '{APP_BINARY_NAME} config show' to inspect the configuration.");
        Config::default()
    });
    let language = cli.lang.unwrap_or(config.ui.language);
    let source = DataSource::from_option(cli.data_dir.clone().or_else(|| config.paths.data_dir.clone()));

    let mut state = tui::AppState::new(config, language, source.load());

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result
}
