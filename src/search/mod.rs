//! Alias prefix search over rendered cells.
//!
//! A cell matches a query when any alias of its symbol, normalized, starts
//! with the normalized query. Unmatched cells stay in the table; only their
//! visibility flag changes.

mod normalize;

pub use normalize::normalize;

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::data::AliasTable;
use crate::table::RenderedCell;

/// Whether any alias starts with the already-normalized query.
///
/// Aliases are expected to be normalized too. An empty query matches
/// everything; no aliases never match a non-empty query.
#[must_use]
pub fn prefix_matches<S: AsRef<str>>(query: &str, aliases: &[S]) -> bool {
    query.is_empty() || aliases.iter().any(|a| a.as_ref().starts_with(query))
}

/// Normalized aliases for every rendered symbol.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    aliases: HashMap<String, Vec<String>>,
}

impl SearchIndex {
    /// Builds an index for the symbols present in `cells`.
    ///
    /// Returns `None`, after logging, when there are no cells.
    #[must_use]
    pub fn init(aliases: &AliasTable, cells: &[RenderedCell]) -> Option<Self> {
        if cells.is_empty() {
            warn!("Search disabled: no rendered cells");
            return None;
        }

        let aliases: HashMap<String, Vec<String>> = cells
            .iter()
            .map(|cell| {
                let normalized = aliases
                    .get(cell.symbol())
                    .iter()
                    .map(|a| normalize(a))
                    .filter(|a| !a.is_empty())
                    .collect();
                (cell.symbol().to_string(), normalized)
            })
            .collect();

        debug!(symbols = aliases.len(), "Search index ready");
        Some(Self { aliases })
    }

    /// Normalized aliases of a symbol.
    #[must_use]
    pub fn aliases(&self, symbol: &str) -> &[String] {
        self.aliases.get(symbol).map_or(&[], Vec::as_slice)
    }

    /// Whether `symbol` matches a raw query.
    #[must_use]
    pub fn matches(&self, query: &str, symbol: &str) -> bool {
        prefix_matches(&normalize(query), self.aliases(symbol))
    }

    /// Re-evaluates every cell against `query` and returns the match count.
    ///
    /// An empty query (after normalization) marks every cell matched.
    pub fn apply(&self, query: &str, cells: &mut [RenderedCell]) -> usize {
        let query = normalize(query);
        let mut matched = 0;
        for cell in cells.iter_mut() {
            let is_match = prefix_matches(&query, self.aliases(cell.symbol()));
            cell.set_matched(is_match);
            matched += usize::from(is_match);
        }
        debug!(query = %query, matched, total = cells.len(), "Search applied");
        matched
    }

    /// Symbols matching `query`, in the order of `symbols`.
    pub fn matching_symbols<'a, I>(&self, query: &str, symbols: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = normalize(query);
        symbols
            .into_iter()
            .filter(|symbol| prefix_matches(&query, self.aliases(symbol)))
            .collect()
    }
}
