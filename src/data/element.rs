//! Chemical element record.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::OnceLock;

use crate::config::Language;

/// First and last atomic number of the lanthanide series.
pub const LANTHANIDES: std::ops::RangeInclusive<u32> = 57..=71;

/// First and last atomic number of the actinide series.
pub const ACTINIDES: std::ops::RangeInclusive<u32> = 89..=103;

/// A single chemical element as read from `elements.json`.
///
/// Field names follow the camelCase spelling of the data files; the
/// snake_case spelling used by older exports is accepted as an alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Number of protons; unique across the set and the rendering sort key
    #[serde(alias = "atomic_number")]
    pub atomic_number: u32,
    /// Chemical symbol (e.g., "Fe"). Filled from the map key when omitted.
    #[serde(default)]
    pub symbol: String,
    /// English display name
    #[serde(default)]
    pub name: String,
    /// Persian display name
    #[serde(default, alias = "fa_name")]
    pub fa_name: String,
    /// Relative atomic mass; `None` when the source value could not be parsed
    #[serde(
        default,
        alias = "atomic_mass",
        deserialize_with = "deserialize_atomic_mass"
    )]
    pub atomic_mass: Option<f64>,
    /// Category tag used for colour coding (e.g., "noble-gas")
    #[serde(default)]
    pub category: String,
    /// Period (row), 1-7
    pub period: u8,
    /// Group (column), 1-18; absent for f-block elements
    #[serde(default, alias = "group_number")]
    pub group: Option<u8>,
    /// Phase at standard conditions
    #[serde(default)]
    pub phase: String,
    /// Proton count
    #[serde(default)]
    pub protons: u32,
    /// Neutron count of the most common isotope
    #[serde(default)]
    pub neutrons: u32,
    /// Electron count of the neutral atom
    #[serde(default)]
    pub electrons: u32,
    /// Electrons in each shell, in the order given by the data file
    #[serde(default, alias = "electrons_per_shell")]
    pub electrons_per_shell: Vec<u32>,
    /// Discovery attribution
    #[serde(default, alias = "discovered_by")]
    pub discovered_by: String,
    /// Discovery year (free text, may be "Ancient")
    #[serde(default, alias = "discovery_year")]
    pub discovery_year: String,
    /// Usage descriptions
    #[serde(default)]
    pub uses: Vec<String>,
    /// Density in g/cm³
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    /// Melting point in K
    #[serde(
        default,
        alias = "melting_point",
        skip_serializing_if = "Option::is_none"
    )]
    pub melting_point: Option<f64>,
    /// Boiling point in K
    #[serde(
        default,
        alias = "boiling_point",
        skip_serializing_if = "Option::is_none"
    )]
    pub boiling_point: Option<f64>,
    /// Pauling electronegativity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electronegativity: Option<f64>,
    /// Atomic radius in pm
    #[serde(
        default,
        alias = "atomic_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub atomic_radius: Option<f64>,
}

/// Which f-block series an element belongs to, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    /// Atomic numbers 57-71
    Lanthanide,
    /// Atomic numbers 89-103
    Actinide,
}

impl Series {
    /// Classifies an atomic number into a series.
    #[must_use]
    pub fn of(atomic_number: u32) -> Option<Self> {
        if LANTHANIDES.contains(&atomic_number) {
            Some(Self::Lanthanide)
        } else if ACTINIDES.contains(&atomic_number) {
            Some(Self::Actinide)
        } else {
            None
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lanthanide => "Lanthanides",
            Self::Actinide => "Actinides",
        }
    }
}

impl Element {
    /// Returns the f-block series of this element.
    #[must_use]
    pub fn series(&self) -> Option<Series> {
        Series::of(self.atomic_number)
    }

    /// Display name in the requested language.
    ///
    /// Falls back to the English name when no Persian name is present.
    #[must_use]
    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::Fa if !self.fa_name.is_empty() => &self.fa_name,
            _ => &self.name,
        }
    }

    /// Atomic mass formatted for display, "?" when unknown.
    #[must_use]
    pub fn mass_label(&self) -> String {
        self.atomic_mass
            .map_or_else(|| "?".to_string(), |m| format!("{m:.3}"))
    }

    /// Electron configuration by shell, e.g. "2, 8, 1".
    #[must_use]
    pub fn shell_label(&self) -> String {
        self.electrons_per_shell
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parses an atomic mass given as text.
///
/// Uncertainty suffixes such as `"1.00794(7)"` and the bracket notation
/// for unstable elements (`"[98]"`) are stripped first.
#[must_use]
pub fn parse_atomic_mass(raw: &str) -> Option<f64> {
    static UNCERTAINTY: OnceLock<Regex> = OnceLock::new();
    let re = UNCERTAINTY.get_or_init(|| Regex::new(r"\(.*\)").expect("valid regex"));

    let cleaned = re.replace_all(raw, "");
    let cleaned = cleaned.trim().trim_start_matches('[').trim_end_matches(']');
    cleaned.trim().parse::<f64>().ok()
}

fn deserialize_atomic_mass<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawMass {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<RawMass>::deserialize(deserializer)? {
        Some(RawMass::Number(n)) => Some(n),
        Some(RawMass::Text(s)) => parse_atomic_mass(&s),
        None => None,
    })
}
