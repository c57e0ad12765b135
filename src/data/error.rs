//! Startup data errors.

use std::path::PathBuf;

use crate::config::Language;

/// Failure to load the element or alias data at startup.
///
/// Any of these aborts startup: the table is never built from a partial
/// data set.
#[derive(Debug)]
pub enum DataError {
    /// A data file does not exist
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },
    /// A data file exists but could not be read
    Read {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// A data file is not valid JSON for its schema
    Parse {
        /// Name of the file (or "embedded ..." for the built-in set)
        file: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },
    /// The elements file contains no elements
    Empty {
        /// Name of the file
        file: String,
    },
    /// Two records share an atomic number
    DuplicateAtomicNumber {
        /// The shared atomic number
        atomic_number: u32,
        /// Symbol of the first record
        first: String,
        /// Symbol of the second record
        second: String,
    },
    /// A record has a period outside 1-7
    InvalidPeriod {
        /// Element symbol
        symbol: String,
        /// Offending period
        period: u8,
    },
    /// A record has a group outside 1-18
    InvalidGroup {
        /// Element symbol
        symbol: String,
        /// Offending group
        group: u8,
    },
}

impl DataError {
    /// The single user-facing message shown in place of the table.
    #[must_use]
    pub const fn localized_message(&self, language: Language) -> &'static str {
        match language {
            Language::En => "Failed to load periodic table data. Please try again later.",
            Language::Fa => "خطا در بارگذاری اطلاعات جدول تناوبی. لطفاً بعداً دوباره تلاش کنید.",
        }
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "Data file not found: {}", path.display()),
            Self::Read { path, source } => {
                write!(f, "Failed to read data file {}: {source}", path.display())
            }
            Self::Parse { file, source } => write!(f, "Failed to parse {file}: {source}"),
            Self::Empty { file } => write!(f, "{file} contains no elements"),
            Self::DuplicateAtomicNumber {
                atomic_number,
                first,
                second,
            } => write!(
                f,
                "Atomic number {atomic_number} is used by both {first} and {second}"
            ),
            Self::InvalidPeriod { symbol, period } => {
                write!(f, "{symbol}: period {period} is outside 1-7")
            }
            Self::InvalidGroup { symbol, group } => {
                write!(f, "{symbol}: group {group} is outside 1-18")
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
