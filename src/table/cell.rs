//! Rendered element cells and their placement.

use serde::Serialize;

use crate::data::{Element, Series};

/// Where a cell sits in the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "surface", rename_all = "snake_case")]
pub enum Placement {
    /// Main grid position: `row` is the period, `column` the group
    Grid {
        /// Period, 1-7
        row: u8,
        /// Group, 1-18
        column: u8,
    },
    /// Position inside a lanthanide or actinide row
    Series {
        /// Which row
        series: Series,
        /// Zero-based position from the left
        index: usize,
    },
}

impl Placement {
    /// Returns the grid coordinates for main-grid cells.
    #[must_use]
    pub const fn grid(self) -> Option<(u8, u8)> {
        match self {
            Self::Grid { row, column } => Some((row, column)),
            Self::Series { .. } => None,
        }
    }
}

/// One element rendered into the table.
///
/// Symbol and atomic number identify the cell. The visibility flag is the
/// only state that changes after the table is built, and only the search
/// index changes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCell {
    element: Element,
    placement: Placement,
    matched: bool,
}

impl RenderedCell {
    pub(crate) fn new(element: Element, placement: Placement) -> Self {
        Self {
            element,
            placement,
            matched: true,
        }
    }

    /// The full element record behind this cell.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Chemical symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.element.symbol
    }

    /// Atomic number.
    #[must_use]
    pub const fn atomic_number(&self) -> u32 {
        self.element.atomic_number
    }

    /// Category tag used for colour coding.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.element.category
    }

    /// Position in the table.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Whether the cell matches the current search query.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn set_matched(&mut self, matched: bool) {
        self.matched = matched;
    }
}
