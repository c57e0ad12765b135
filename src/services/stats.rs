//! Aggregate counts over the element set.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::data::ElementSet;

/// Counts per category, period and phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of elements
    pub total_elements: usize,
    /// Elements per category tag
    pub categories: BTreeMap<String, usize>,
    /// Elements per period; every period 1-7 is present
    pub periods: BTreeMap<u8, usize>,
    /// Elements per phase
    pub phases: BTreeMap<String, usize>,
}

impl Statistics {
    /// Counts the element set.
    #[must_use]
    pub fn collect(elements: &ElementSet) -> Self {
        let mut categories = BTreeMap::new();
        let mut periods: BTreeMap<u8, usize> = (1..=7).map(|p| (p, 0)).collect();
        let mut phases = BTreeMap::new();

        for element in elements {
            *categories.entry(or_unknown(&element.category)).or_insert(0) += 1;
            *periods.entry(element.period).or_insert(0) += 1;
            *phases.entry(or_unknown(&element.phase)).or_insert(0) += 1;
        }

        Self {
            total_elements: elements.len(),
            categories,
            periods,
            phases,
        }
    }
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        "Unknown".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSource;

    #[test]
    fn test_counts_embedded_set() {
        let set = DataSource::Embedded.load().unwrap().elements;
        let stats = Statistics::collect(&set);

        assert_eq!(stats.total_elements, 118);
        assert_eq!(stats.periods.len(), 7);
        assert_eq!(stats.periods[&1], 2);
        assert_eq!(stats.periods.values().sum::<usize>(), 118);
        assert_eq!(stats.categories["noble-gas"], 7);
        assert_eq!(stats.phases["liquid"], 2);
    }

    #[test]
    fn test_missing_category_counts_as_unknown() {
        let set = ElementSet::from_json(r#"{"X": {"atomicNumber": 1, "period": 1}}"#, "t").unwrap();
        let stats = Statistics::collect(&set);
        assert_eq!(stats.categories["Unknown"], 1);
        assert_eq!(stats.periods[&7], 0);
    }
}
