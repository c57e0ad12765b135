//! Periodic table widget and cursor navigation.
//!
//! The widget lays the table out on a virtual grid: rows 1-7 are periods,
//! rows 8 and 9 are the attached series rows, which start under group 3.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::table::{RenderedCell, TableBuilder};

use super::Theme;

/// Column under which series rows begin.
pub const SERIES_COLUMN_OFFSET: u8 = 3;

const FIRST_SERIES_ROW: u8 = 8;
const LAST_ROW: u8 = 9;
const COLUMNS: u8 = 18;

/// Looks up the cell at a virtual grid position.
#[must_use]
pub fn cell_at(table: &TableBuilder, row: u8, column: u8) -> Option<&RenderedCell> {
    match row {
        1..=7 => table.cell_at(row, column),
        FIRST_SERIES_ROW..=LAST_ROW => {
            let index = column.checked_sub(SERIES_COLUMN_OFFSET)?;
            table.series_cell(usize::from(row - FIRST_SERIES_ROW), usize::from(index))
        }
        _ => None,
    }
}

/// Selected position on the virtual grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCursor {
    /// Virtual row, 1-9
    pub row: u8,
    /// Column, 1-18
    pub column: u8,
}

impl Default for TableCursor {
    fn default() -> Self {
        Self { row: 1, column: 1 }
    }
}

impl TableCursor {
    /// First occupied position, scanning rows top to bottom.
    #[must_use]
    pub fn home(table: &TableBuilder) -> Self {
        (1..=LAST_ROW)
            .flat_map(|row| (1..=COLUMNS).map(move |column| Self { row, column }))
            .find(|c| c.cell(table).is_some())
            .unwrap_or_default()
    }

    /// Position of the cell with `symbol`.
    #[must_use]
    pub fn locate(table: &TableBuilder, symbol: &str) -> Option<Self> {
        (1..=LAST_ROW)
            .flat_map(|row| (1..=COLUMNS).map(move |column| Self { row, column }))
            .find(|c| {
                c.cell(table)
                    .is_some_and(|cell| cell.symbol().eq_ignore_ascii_case(symbol))
            })
    }

    /// The cell under the cursor.
    #[must_use]
    pub fn cell(self, table: &TableBuilder) -> Option<&RenderedCell> {
        cell_at(table, self.row, self.column)
    }

    /// Moves to the next occupied position left (`-1`) or right (`1`).
    ///
    /// Stays put at the edge of a row.
    #[must_use]
    pub fn step_horizontal(self, table: &TableBuilder, delta: i8) -> Self {
        let mut column = i16::from(self.column);
        loop {
            column += i16::from(delta);
            if !(1..=i16::from(COLUMNS)).contains(&column) {
                return self;
            }
            let candidate = Self {
                row: self.row,
                column: column as u8,
            };
            if candidate.cell(table).is_some() {
                return candidate;
            }
        }
    }

    /// Moves up (`-1`) or down (`1`) to the nearest occupied column of the
    /// next row that has any cell.
    #[must_use]
    pub fn step_vertical(self, table: &TableBuilder, delta: i8) -> Self {
        let mut row = i16::from(self.row);
        loop {
            row += i16::from(delta);
            if !(1..=i16::from(LAST_ROW)).contains(&row) {
                return self;
            }
            let row = row as u8;
            let nearest = (1..=COLUMNS)
                .filter(|&column| cell_at(table, row, column).is_some())
                .min_by_key(|&column| (i16::from(column) - i16::from(self.column)).abs());
            if let Some(column) = nearest {
                return Self { row, column };
            }
        }
    }
}

/// Renders the periodic table.
pub struct PeriodicTableWidget;

impl PeriodicTableWidget {
    /// Render the table into `area` with the cursor highlighted.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        table: &TableBuilder,
        cursor: TableCursor,
        theme: &Theme,
    ) {
        let cell_for = |row: u8, column: u8| -> Cell<'static> {
            let Some(cell) = cell_at(table, row, column) else {
                return Cell::from("");
            };

            let selected = cursor.row == row && cursor.column == column;
            let style = if selected {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else if cell.is_matched() {
                Style::default()
                    .fg(theme.category_text())
                    .bg(theme.category_color(cell.category()))
            } else {
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::DIM)
            };

            Cell::from(Text::from(vec![
                Line::from(format!("{:<4}", cell.atomic_number())),
                Line::from(format!(" {:<3}", cell.symbol())),
            ]))
            .style(style)
        };

        let mut rows: Vec<Row> = (1..=7)
            .map(|row| Row::new((1..=COLUMNS).map(|column| cell_for(row, column))).height(2))
            .collect();
        rows.push(Row::new(vec![Cell::from("")]).height(1));
        rows.extend(
            (FIRST_SERIES_ROW..=LAST_ROW)
                .map(|row| Row::new((1..=COLUMNS).map(|column| cell_for(row, column))).height(2)),
        );

        let widths = vec![Constraint::Length(4); usize::from(COLUMNS)];
        let widget = Table::new(rows, widths).column_spacing(1).block(
            Block::default()
                .title(" Periodic Table ")
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );

        f.render_widget(widget, area);
    }
}
