//! Property-by-property comparison of two elements.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::data::Element;

/// Properties compared, in output order.
pub const COMPARED_PROPERTIES: &[&str] = &[
    "atomic_number",
    "symbol",
    "name",
    "fa_name",
    "atomic_mass",
    "category",
    "period",
    "group",
    "phase",
    "electronegativity",
    "atomic_radius",
    "density",
];

/// A property both elements share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Similarity {
    /// Property name
    pub property: &'static str,
    /// Shared value
    pub value: Value,
}

/// A property on which the elements differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Difference {
    /// Property name
    pub property: &'static str,
    /// Value for the first element
    pub element1: Value,
    /// Value for the second element
    pub element2: Value,
}

/// Result of [`compare`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Compared properties of both elements
    pub elements: [Map<String, Value>; 2],
    /// Properties that differ
    pub differences: Vec<Difference>,
    /// Properties with the same known value
    pub similarities: Vec<Similarity>,
}

fn property(element: &Element, name: &str) -> Value {
    match name {
        "atomic_number" => element.atomic_number.into(),
        "symbol" => element.symbol.clone().into(),
        "name" => element.name.clone().into(),
        "fa_name" => element.fa_name.clone().into(),
        "atomic_mass" => element.atomic_mass.into(),
        "category" => element.category.clone().into(),
        "period" => element.period.into(),
        "group" => element.group.into(),
        "phase" => element.phase.clone().into(),
        "electronegativity" => element.electronegativity.into(),
        "atomic_radius" => element.atomic_radius.into(),
        "density" => element.density.into(),
        _ => Value::Null,
    }
}

fn properties(element: &Element) -> Map<String, Value> {
    COMPARED_PROPERTIES
        .iter()
        .map(|&name| (name.to_string(), property(element, name)))
        .collect()
}

/// Compares two elements.
///
/// A property unknown for both elements is neither similar nor different.
#[must_use]
pub fn compare(a: &Element, b: &Element) -> Comparison {
    let mut differences = Vec::new();
    let mut similarities = Vec::new();

    for &name in COMPARED_PROPERTIES {
        let left = property(a, name);
        let right = property(b, name);
        if left == right {
            if !left.is_null() {
                similarities.push(Similarity {
                    property: name,
                    value: left,
                });
            }
        } else {
            differences.push(Difference {
                property: name,
                element1: left,
                element2: right,
            });
        }
    }

    Comparison {
        elements: [properties(a), properties(b)],
        differences,
        similarities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn element(value: Value) -> Element {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_same_period_and_phase_are_similar() {
        let na = element(json!({"atomicNumber": 11, "symbol": "Na", "period": 3, "group": 1,
            "phase": "solid", "category": "alkali-metal"}));
        let cl = element(json!({"atomicNumber": 17, "symbol": "Cl", "period": 3, "group": 17,
            "phase": "gas", "category": "halogen"}));

        let result = compare(&na, &cl);
        let similar: Vec<&str> = result.similarities.iter().map(|s| s.property).collect();
        assert!(similar.contains(&"period"));

        let phase = result
            .differences
            .iter()
            .find(|d| d.property == "phase")
            .unwrap();
        assert_eq!(phase.element1, json!("solid"));
        assert_eq!(phase.element2, json!("gas"));
    }

    #[test]
    fn test_both_unknown_is_neither() {
        let a = element(json!({"atomicNumber": 1, "symbol": "H", "period": 1}));
        let b = element(json!({"atomicNumber": 2, "symbol": "He", "period": 1}));

        let result = compare(&a, &b);
        assert!(!result.similarities.iter().any(|s| s.property == "density"));
        assert!(!result.differences.iter().any(|d| d.property == "density"));
        assert_eq!(result.elements[0]["symbol"], json!("H"));
    }
}
