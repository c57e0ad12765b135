//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::Path;

use mendeleev::data::{AliasTable, Element, ElementSet, ALIASES_FILE, ELEMENTS_FILE};
use serde_json::json;
use tempfile::TempDir;

/// A small element set covering both grid and series placements.
///
/// Map form, keyed by symbol, with some symbols omitted from the records.
pub const SAMPLE_ELEMENTS: &str = r#"{
    "Ce": { "atomicNumber": 58, "name": "Cerium", "category": "lanthanide", "period": 6, "group": null },
    "H":  { "atomicNumber": 1,  "name": "Hydrogen", "faName": "هیدروژن", "category": "nonmetal", "period": 1, "group": 1, "electronsPerShell": [1] },
    "Li": { "atomicNumber": 3,  "name": "Lithium", "category": "alkali-metal", "period": 2, "group": 1, "electronsPerShell": [2, 1] },
    "He": { "atomicNumber": 2,  "name": "Helium", "category": "noble-gas", "period": 1, "group": 18, "electronsPerShell": [2] },
    "La": { "atomicNumber": 57, "name": "Lanthanum", "category": "lanthanide", "period": 6, "group": null },
    "N":  { "atomicNumber": 7,  "name": "Nitrogen", "category": "nonmetal", "period": 2, "group": 15 },
    "Ac": { "atomicNumber": 89, "name": "Actinium", "category": "actinide", "period": 7, "group": null },
    "Fe": { "atomicNumber": 26, "name": "Iron", "category": "transition-metal", "period": 4, "group": 8 }
}"#;

/// Aliases for [`SAMPLE_ELEMENTS`].
pub const SAMPLE_ALIASES: &str = r#"{
    "H":  ["Hydrogen", "هیدروژن"],
    "He": ["Helium", "هلیم", "He", "2"],
    "Li": ["7"],
    "N":  ["Nitrogen", "N", "7"],
    "Fe": ["Iron", "Ferrum", "Fe", "26"],
    "La": ["Lanthanum", "57"],
    "Ce": ["Cerium", "58"],
    "Ac": ["Actinium", "89"]
}"#;

/// Parsed [`SAMPLE_ELEMENTS`].
pub fn sample_elements() -> ElementSet {
    ElementSet::from_json(SAMPLE_ELEMENTS, ELEMENTS_FILE).expect("sample elements parse")
}

/// Parsed [`SAMPLE_ALIASES`].
pub fn sample_aliases() -> AliasTable {
    AliasTable::from_json(SAMPLE_ALIASES, ALIASES_FILE).expect("sample aliases parse")
}

/// Builds a single element record.
pub fn element(symbol: &str, atomic_number: u32, period: u8, group: Option<u8>) -> Element {
    serde_json::from_value(json!({
        "atomicNumber": atomic_number,
        "symbol": symbol,
        "name": symbol,
        "period": period,
        "group": group,
    }))
    .expect("element fixture")
}

/// Writes the given data files into a fresh temporary directory.
///
/// `None` leaves the file out.
pub fn data_dir(elements: Option<&str>, aliases: Option<&str>) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    if let Some(elements) = elements {
        write(dir.path(), ELEMENTS_FILE, elements);
    }
    if let Some(aliases) = aliases {
        write(dir.path(), ALIASES_FILE, aliases);
    }
    dir
}

/// Data directory holding the sample set.
pub fn sample_data_dir() -> TempDir {
    data_dir(Some(SAMPLE_ELEMENTS), Some(SAMPLE_ALIASES))
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write data file");
}
