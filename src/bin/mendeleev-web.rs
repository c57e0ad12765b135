//! Mendeleev Web Server Binary
//!
//! Serves the periodic table data as a JSON API.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (127.0.0.1:3001, embedded data)
//! mendeleev-web
//!
//! # Custom data directory and port
//! mendeleev-web --data-dir ./data --port 8080
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use mendeleev::config::Config;
use mendeleev::data::DataSource;
use mendeleev::{logging, web};

/// Mendeleev Web Server - JSON API for the periodic table
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on [default: server.port from config, 3001]
    #[arg(short, long, env = "MENDELEEV_PORT")]
    port: Option<u16>,

    /// Host to bind to [default: server.host from config, 127.0.0.1]
    #[arg(long, env = "MENDELEEV_HOST")]
    host: Option<String>,

    /// Directory containing elements.json and aliases.json
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory of static files served for unknown paths
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_stdout(args.verbose);

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable config: {e:#}");
        Config::default()
    });

    let mut server = config.server.clone();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    if args.static_dir.is_some() {
        server.static_dir = args.static_dir;
    }

    let source = DataSource::from_option(args.data_dir.or(config.paths.data_dir));
    let data = source
        .load()
        .with_context(|| format!("Failed to load element data from {source}"))?;
    info!("Loaded {} elements from {}", data.elements.len(), source);

    let addr: SocketAddr = format!("{}:{}", server.host, server.port)
        .parse()
        .context("Invalid listen address")?;

    web::run_server(data, server, addr).await
}
