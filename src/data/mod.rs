//! Element and alias data.
//!
//! The data set is loaded once at startup, either from a directory holding
//! `elements.json` and `aliases.json` or from the copy embedded in the
//! binary, and is immutable afterwards.

pub mod element;
pub mod error;

pub use element::{parse_atomic_mass, Element, Series, ACTINIDES, LANTHANIDES};
pub use error::DataError;

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the element records inside a data directory.
pub const ELEMENTS_FILE: &str = "elements.json";

/// File name of the alias table inside a data directory.
pub const ALIASES_FILE: &str = "aliases.json";

const EMBEDDED_ELEMENTS: &str = include_str!("elements.json");
const EMBEDDED_ALIASES: &str = include_str!("aliases.json");

/// Shape of `elements.json`: a symbol-keyed map or a plain list.
#[derive(Deserialize)]
#[serde(untagged)]
enum ElementsFile {
    Map(BTreeMap<String, Element>),
    List(Vec<Element>),
}

/// Immutable set of elements with symbol and atomic-number lookup.
#[derive(Debug, Clone, Default)]
pub struct ElementSet {
    elements: Vec<Element>,
    by_symbol: HashMap<String, usize>,
    by_number: HashMap<u32, usize>,
}

impl ElementSet {
    /// Builds a set, checking the data invariants.
    ///
    /// The input order is preserved for iteration; consumers that need
    /// table order sort by atomic number themselves.
    pub fn new(elements: Vec<Element>) -> Result<Self, DataError> {
        let mut by_symbol = HashMap::with_capacity(elements.len());
        let mut by_number: HashMap<u32, usize> = HashMap::with_capacity(elements.len());

        for (idx, element) in elements.iter().enumerate() {
            if !(1..=7).contains(&element.period) {
                return Err(DataError::InvalidPeriod {
                    symbol: element.symbol.clone(),
                    period: element.period,
                });
            }
            if let Some(group) = element.group {
                if !(1..=18).contains(&group) {
                    return Err(DataError::InvalidGroup {
                        symbol: element.symbol.clone(),
                        group,
                    });
                }
            }
            if let Some(&prev) = by_number.get(&element.atomic_number) {
                return Err(DataError::DuplicateAtomicNumber {
                    atomic_number: element.atomic_number,
                    first: elements[prev].symbol.clone(),
                    second: element.symbol.clone(),
                });
            }
            by_number.insert(element.atomic_number, idx);
            by_symbol.insert(element.symbol.to_lowercase(), idx);
        }

        Ok(Self {
            elements,
            by_symbol,
            by_number,
        })
    }

    /// Parses the contents of an elements file.
    pub fn from_json(json: &str, file: &str) -> Result<Self, DataError> {
        let parsed: ElementsFile = serde_json::from_str(json).map_err(|source| DataError::Parse {
            file: file.to_string(),
            source,
        })?;

        let elements: Vec<Element> = match parsed {
            ElementsFile::Map(map) => map
                .into_iter()
                .map(|(key, mut element)| {
                    if element.symbol.is_empty() {
                        element.symbol = key;
                    }
                    element
                })
                .collect(),
            ElementsFile::List(list) => list,
        };

        if elements.is_empty() {
            return Err(DataError::Empty {
                file: file.to_string(),
            });
        }

        Self::new(elements)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the set holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates elements in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Looks up an element by symbol, ignoring case.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Element> {
        self.by_symbol
            .get(&symbol.to_lowercase())
            .map(|&idx| &self.elements[idx])
    }

    /// Looks up an element by atomic number.
    #[must_use]
    pub fn by_atomic_number(&self, atomic_number: u32) -> Option<&Element> {
        self.by_number
            .get(&atomic_number)
            .map(|&idx| &self.elements[idx])
    }

    /// Elements sorted ascending by atomic number.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Element> {
        let mut sorted: Vec<&Element> = self.elements.iter().collect();
        sorted.sort_by_key(|e| e.atomic_number);
        sorted
    }
}

impl<'a> IntoIterator for &'a ElementSet {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Symbol → alternate search strings (names, translations, synonyms).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: HashMap<String, Vec<String>>,
}

impl AliasTable {
    /// Creates a table from a symbol-keyed map.
    #[must_use]
    pub fn new(aliases: HashMap<String, Vec<String>>) -> Self {
        Self { aliases }
    }

    /// Parses the contents of an aliases file.
    pub fn from_json(json: &str, file: &str) -> Result<Self, DataError> {
        let aliases: HashMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(|source| DataError::Parse {
                file: file.to_string(),
                source,
            })?;
        Ok(Self { aliases })
    }

    /// Aliases for a symbol; empty when the symbol has none.
    #[must_use]
    pub fn get(&self, symbol: &str) -> &[String] {
        self.aliases.get(symbol).map_or(&[], Vec::as_slice)
    }

    /// Number of symbols with aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if no symbol has aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<S: Into<String>, A: Into<String>> FromIterator<(S, Vec<A>)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (S, Vec<A>)>>(iter: I) -> Self {
        Self {
            aliases: iter
                .into_iter()
                .map(|(symbol, list)| (symbol.into(), list.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }
}

/// Both startup data files, loaded together.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Element records
    pub elements: ElementSet,
    /// Search aliases
    pub aliases: AliasTable,
}

/// Where the startup data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The data set compiled into the binary
    Embedded,
    /// A directory containing `elements.json` and `aliases.json`
    Directory(PathBuf),
}

impl DataSource {
    /// Picks a directory source when one is given, the embedded set otherwise.
    #[must_use]
    pub fn from_option(dir: Option<PathBuf>) -> Self {
        dir.map_or(Self::Embedded, Self::Directory)
    }

    /// Loads both data files. Either failing fails the whole load.
    pub fn load(&self) -> Result<Dataset, DataError> {
        let dataset = match self {
            Self::Embedded => Dataset {
                elements: ElementSet::from_json(EMBEDDED_ELEMENTS, "embedded elements.json")?,
                aliases: AliasTable::from_json(EMBEDDED_ALIASES, "embedded aliases.json")?,
            },
            Self::Directory(dir) => {
                let elements_json = read_data_file(&dir.join(ELEMENTS_FILE))?;
                let aliases_json = read_data_file(&dir.join(ALIASES_FILE))?;
                Dataset {
                    elements: ElementSet::from_json(&elements_json, ELEMENTS_FILE)?,
                    aliases: AliasTable::from_json(&aliases_json, ALIASES_FILE)?,
                }
            }
        };

        info!(
            elements = dataset.elements.len(),
            aliases = dataset.aliases.len(),
            source = %self,
            "Loaded periodic table data"
        );
        Ok(dataset)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

fn read_data_file(path: &Path) -> Result<String, DataError> {
    debug!("Reading {}", path.display());
    if !path.exists() {
        return Err(DataError::NotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })
}
