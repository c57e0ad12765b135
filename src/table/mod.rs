//! Periodic table layout.
//!
//! [`TableBuilder`] turns an element set into positioned [`RenderedCell`]s.
//! Main-group and transition elements go to the main grid surface at
//! (period, group). Lanthanides and actinides go to the series surface, one
//! row per series, left to right by atomic number.
//!
//! Surfaces are identified by [`MAIN_SURFACE`] and [`SERIES_SURFACE`]. A
//! builder without one of them attached logs the problem and renders
//! nothing; it never panics.

mod cell;
mod detail;
mod error;

pub use cell::{Placement, RenderedCell};
pub use detail::DetailView;
pub use error::TableError;

use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::data::{Element, Series};

/// Identifier of the main grid surface.
pub const MAIN_SURFACE: &str = "periodic-table";

/// Identifier of the lanthanide/actinide surface.
pub const SERIES_SURFACE: &str = "series-table";

/// The main grid: (period, group) → cell indices.
///
/// Elements sharing a slot are all kept, in atomic number order; the first
/// is the one drawn.
#[derive(Debug, Clone, Default)]
pub struct GridSurface {
    slots: BTreeMap<(u8, u8), Vec<usize>>,
}

impl GridSurface {
    /// Number of cells on the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Returns true if nothing is rendered on the grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// One lanthanide or actinide row.
#[derive(Debug, Clone)]
pub struct SeriesRow {
    series: Series,
    cells: Vec<usize>,
}

impl SeriesRow {
    /// Which series this row shows.
    #[must_use]
    pub const fn series(&self) -> Series {
        self.series
    }

    /// Number of cells in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for attached rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The series surface. Holds only non-empty rows.
#[derive(Debug, Clone, Default)]
pub struct SeriesSurface {
    rows: Vec<SeriesRow>,
}

impl SeriesSurface {
    /// Attached rows, lanthanides first.
    #[must_use]
    pub fn rows(&self) -> &[SeriesRow] {
        &self.rows
    }
}

/// The render targets a [`TableBuilder`] populates.
#[derive(Debug, Clone, Default)]
pub struct Surfaces {
    /// Main grid, [`MAIN_SURFACE`]
    pub main: Option<GridSurface>,
    /// Series rows, [`SERIES_SURFACE`]
    pub series: Option<SeriesSurface>,
}

impl Surfaces {
    /// Both surfaces attached and empty.
    #[must_use]
    pub fn attached() -> Self {
        Self {
            main: Some(GridSurface::default()),
            series: Some(SeriesSurface::default()),
        }
    }
}

/// Builds and owns the rendered table.
pub struct TableBuilder {
    surfaces: Surfaces,
    detail_view: Option<Box<dyn DetailView>>,
    cells: Vec<RenderedCell>,
}

impl std::fmt::Debug for TableBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableBuilder")
            .field("surfaces", &self.surfaces)
            .field("detail_view", &self.detail_view.is_some())
            .field("cells", &self.cells.len())
            .finish()
    }
}

impl TableBuilder {
    /// Creates a builder rendering into `surfaces`.
    ///
    /// `detail_view` receives the element of every activated cell.
    #[must_use]
    pub fn new(surfaces: Surfaces, detail_view: Option<Box<dyn DetailView>>) -> Self {
        Self {
            surfaces,
            detail_view,
            cells: Vec::new(),
        }
    }

    /// Creates a builder with both surfaces attached and the given detail view.
    #[must_use]
    pub fn with_detail_view(detail_view: impl DetailView + 'static) -> Self {
        Self::new(Surfaces::attached(), Some(Box::new(detail_view)))
    }

    /// Renders `elements` and returns the cells, ascending by atomic number.
    ///
    /// On a missing surface or empty input this logs a warning, leaves any
    /// previous render untouched, and returns an empty slice.
    pub fn build<'a, I>(&mut self, elements: I) -> &[RenderedCell]
    where
        I: IntoIterator<Item = &'a Element>,
    {
        if let Err(e) = self.render(elements) {
            warn!("Table not built: {e}");
            return &[];
        }
        &self.cells
    }

    /// Like [`build`](Self::build) but reports why nothing was rendered.
    pub fn try_build<'a, I>(&mut self, elements: I) -> Result<&[RenderedCell], TableError>
    where
        I: IntoIterator<Item = &'a Element>,
    {
        self.render(elements)?;
        Ok(&self.cells)
    }

    fn render<'a, I>(&mut self, elements: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = &'a Element>,
    {
        let grid = self.surfaces.main.as_mut().ok_or(TableError::MissingSurface {
            surface: MAIN_SURFACE,
        })?;
        let series = self.surfaces.series.as_mut().ok_or(TableError::MissingSurface {
            surface: SERIES_SURFACE,
        })?;

        let mut sorted: Vec<&Element> = elements.into_iter().collect();
        if sorted.is_empty() {
            return Err(TableError::EmptyInput);
        }
        sorted.sort_by_key(|e| e.atomic_number);

        self.cells.clear();
        grid.slots.clear();
        series.rows.clear();

        let mut lanthanides = Vec::new();
        let mut actinides = Vec::new();

        for element in sorted {
            let idx = self.cells.len();
            let placement = match element.series() {
                Some(Series::Lanthanide) => {
                    lanthanides.push(idx);
                    Placement::Series {
                        series: Series::Lanthanide,
                        index: lanthanides.len() - 1,
                    }
                }
                Some(Series::Actinide) => {
                    actinides.push(idx);
                    Placement::Series {
                        series: Series::Actinide,
                        index: actinides.len() - 1,
                    }
                }
                None => {
                    let Some(group) = element.group else {
                        debug!(symbol = %element.symbol, "No group, skipping");
                        continue;
                    };
                    let slot = grid.slots.entry((element.period, group)).or_default();
                    if !slot.is_empty() {
                        debug!(
                            symbol = %element.symbol,
                            period = element.period,
                            group,
                            "Grid slot shared"
                        );
                    }
                    slot.push(idx);
                    Placement::Grid {
                        row: element.period,
                        column: group,
                    }
                }
            };
            self.cells.push(RenderedCell::new(element.clone(), placement));
        }

        for (kind, cells) in [
            (Series::Lanthanide, lanthanides),
            (Series::Actinide, actinides),
        ] {
            if !cells.is_empty() {
                series.rows.push(SeriesRow {
                    series: kind,
                    cells,
                });
            }
        }

        info!(
            cells = self.cells.len(),
            grid = grid.len(),
            series_rows = series.rows.len(),
            "Built periodic table"
        );
        Ok(())
    }

    /// All rendered cells, ascending by atomic number.
    #[must_use]
    pub fn cells(&self) -> &[RenderedCell] {
        &self.cells
    }

    /// Mutable access for the search index.
    pub fn cells_mut(&mut self) -> &mut [RenderedCell] {
        &mut self.cells
    }

    /// Finds a cell by symbol, ignoring case.
    #[must_use]
    pub fn cell(&self, symbol: &str) -> Option<&RenderedCell> {
        self.cells
            .iter()
            .find(|c| c.symbol().eq_ignore_ascii_case(symbol))
    }

    /// Cell at a main grid position; the lowest atomic number when shared.
    #[must_use]
    pub fn cell_at(&self, row: u8, column: u8) -> Option<&RenderedCell> {
        let grid = self.surfaces.main.as_ref()?;
        let idx = *grid.slots.get(&(row, column))?.first()?;
        Some(&self.cells[idx])
    }

    /// Cell at `index` in the `row`-th attached series row.
    #[must_use]
    pub fn series_cell(&self, row: usize, index: usize) -> Option<&RenderedCell> {
        let surface = self.surfaces.series.as_ref()?;
        let idx = *surface.rows.get(row)?.cells.get(index)?;
        Some(&self.cells[idx])
    }

    /// Attached series rows with their cells, left to right.
    #[must_use]
    pub fn series_rows(&self) -> Vec<(Series, Vec<&RenderedCell>)> {
        self.surfaces
            .series
            .as_ref()
            .map(|surface| {
                surface
                    .rows
                    .iter()
                    .map(|row| {
                        (
                            row.series,
                            row.cells.iter().map(|&idx| &self.cells[idx]).collect(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The render surfaces.
    #[must_use]
    pub const fn surfaces(&self) -> &Surfaces {
        &self.surfaces
    }

    /// Hands the element behind `symbol` to the detail view.
    ///
    /// Returns false, after logging, when there is no such cell or no
    /// detail view.
    pub fn activate(&self, symbol: &str) -> bool {
        match self.try_activate(symbol) {
            Ok(()) => true,
            Err(e) => {
                warn!("Activation ignored: {e}");
                false
            }
        }
    }

    /// Like [`activate`](Self::activate) but reports the failure.
    pub fn try_activate(&self, symbol: &str) -> Result<(), TableError> {
        let cell = self.cell(symbol).ok_or_else(|| TableError::UnknownCell {
            symbol: symbol.to_string(),
        })?;
        let view = self
            .detail_view
            .as_ref()
            .ok_or(TableError::MissingDetailView)?;
        debug!(symbol = cell.symbol(), "Showing element details");
        view.show(cell.element());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn element(symbol: &str, atomic_number: u32, period: u8, group: Option<u8>) -> Element {
        serde_json::from_value(serde_json::json!({
            "atomicNumber": atomic_number,
            "symbol": symbol,
            "period": period,
            "group": group,
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_series_surface_renders_nothing() {
        let mut builder = TableBuilder::new(
            Surfaces {
                main: Some(GridSurface::default()),
                series: None,
            },
            None,
        );
        let elements = vec![element("H", 1, 1, Some(1))];

        assert!(builder.build(&elements).is_empty());
        assert_eq!(
            builder.try_build(&elements).unwrap_err(),
            TableError::MissingSurface {
                surface: SERIES_SURFACE
            }
        );
    }

    #[test]
    fn test_empty_input_keeps_previous_render() {
        let mut builder = TableBuilder::new(Surfaces::attached(), None);
        builder.build(&[element("H", 1, 1, Some(1))]);

        let none: Vec<Element> = Vec::new();
        assert_eq!(builder.try_build(&none).unwrap_err(), TableError::EmptyInput);
        assert_eq!(builder.cells().len(), 1);
    }

    #[test]
    fn test_element_without_group_is_skipped() {
        let mut builder = TableBuilder::new(Surfaces::attached(), None);
        let cells = builder.build(&[element("H", 1, 1, Some(1)), element("X", 120, 7, None)]);
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn test_empty_series_rows_are_not_attached() {
        let mut builder = TableBuilder::new(Surfaces::attached(), None);
        builder.build(&[element("La", 57, 6, None), element("Fe", 26, 4, Some(8))]);

        let rows = builder.series_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, Series::Lanthanide);
    }

    #[test]
    fn test_activate_calls_detail_view() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&shown);
        let mut builder =
            TableBuilder::with_detail_view(move |e: &Element| sink.borrow_mut().push(e.symbol.clone()));
        builder.build(&[element("Fe", 26, 4, Some(8))]);

        assert!(builder.activate("fe"));
        assert!(!builder.activate("Zz"));
        assert_eq!(*shown.borrow(), vec!["Fe".to_string()]);
    }

    #[test]
    fn test_activate_without_detail_view_is_noop() {
        let mut builder = TableBuilder::new(Surfaces::attached(), None);
        builder.build(&[element("Fe", 26, 4, Some(8))]);

        assert!(!builder.activate("Fe"));
        assert_eq!(
            builder.try_activate("Fe").unwrap_err(),
            TableError::MissingDetailView
        );
    }
}
