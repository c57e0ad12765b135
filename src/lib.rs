//! Mendeleev Library
//!
//! An interactive periodic table: element data loading, the table
//! builder that lays elements out on the main grid and the f-block series
//! rows, and alias-based prefix search over the rendered cells. The
//! terminal UI, the command-line subcommands and the optional HTTP API are
//! built on top of these.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod data;
pub mod logging;
pub mod search;
pub mod services;
pub mod table;
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
