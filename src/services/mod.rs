//! Service layer for read-only element queries.
//!
//! Shared by the CLI subcommands, the TUI detail panel and the web API.

pub mod catalog;
pub mod compare;
pub mod stats;

// Re-export commonly used types and functions
pub use catalog::{
    ElementCatalog, ListQuery, Page, PageMetadata, ScoredElement, SearchField, SortField,
    SortOrder,
};
pub use compare::{compare, Comparison};
pub use stats::Statistics;
