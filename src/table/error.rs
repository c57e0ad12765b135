//! Table building errors.

/// Conditions reported while building or activating the table.
///
/// None of these is fatal: [`TableBuilder::build`](super::TableBuilder::build)
/// and [`TableBuilder::activate`](super::TableBuilder::activate) log them and
/// degrade instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A render surface is not attached
    MissingSurface {
        /// Surface identifier
        surface: &'static str,
    },
    /// No detail view was supplied at construction
    MissingDetailView,
    /// The element list was empty
    EmptyInput,
    /// No rendered cell has this symbol
    UnknownCell {
        /// Symbol that was requested
        symbol: String,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSurface { surface } => {
                write!(f, "Render surface '{surface}' is not attached")
            }
            Self::MissingDetailView => write!(f, "No detail view is registered"),
            Self::EmptyInput => write!(f, "No elements to render"),
            Self::UnknownCell { symbol } => write!(f, "No rendered cell for symbol '{symbol}'"),
        }
    }
}

impl std::error::Error for TableError {}
