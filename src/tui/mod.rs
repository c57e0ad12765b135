//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod component;
pub mod detail_panel;
pub mod handlers;
pub mod help_overlay;
pub mod search_bar;
pub mod status_bar;
pub mod table_widget;
pub mod theme;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::{error, info, warn};

use crate::config::{Config, Language};
use crate::constants::APP_NAME;
use crate::data::{DataError, Dataset, Element};
use crate::search::SearchIndex;
use crate::table::TableBuilder;

pub use component::{Component, ComponentEvent};
pub use detail_panel::DetailPanel;
pub use help_overlay::HelpOverlayState;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use table_widget::{PeriodicTableWidget, TableCursor};
pub use theme::Theme;

/// Popup types that can be displayed over the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Keyboard shortcut reference
    Help,
    /// Element details
    Detail,
}

/// Active popup component
#[derive(Debug, Clone)]
pub enum ActiveComponent {
    /// Help overlay
    Help(HelpOverlayState),
    /// Detail panel for the activated element
    Detail(Box<DetailPanel>),
}

/// Application state
pub struct AppState {
    /// Current theme
    pub theme: Theme,
    /// Loaded configuration
    pub config: Config,
    /// Language for names and startup errors
    pub language: Language,
    /// Rendered table, `None` when startup failed
    pub table: Option<TableBuilder>,
    /// Localized reason the table could not be built
    pub startup_error: Option<String>,
    /// Alias index, `None` when search is unavailable
    pub search: Option<SearchIndex>,
    /// Search input
    pub search_bar: SearchBar,
    /// Cells matching the current query
    pub matched: usize,
    /// Selected cell
    pub cursor: TableCursor,
    /// Open popup
    pub active_popup: Option<PopupType>,
    /// Component behind the open popup
    pub active_component: Option<ActiveComponent>,
    /// Status line text
    pub status_message: String,
    /// Error overlay text
    pub error_message: Option<String>,
    /// Exit flag
    pub should_quit: bool,
    activated: Rc<RefCell<Option<Element>>>,
}

impl AppState {
    /// Builds the application state from a data load result.
    ///
    /// A failed load leaves the table unbuilt and records a localized
    /// message for the startup screen.
    #[must_use]
    pub fn new(config: Config, language: Language, dataset: Result<Dataset, DataError>) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let activated: Rc<RefCell<Option<Element>>> = Rc::new(RefCell::new(None));

        let mut state = Self {
            theme,
            config,
            language,
            table: None,
            startup_error: None,
            search: None,
            search_bar: SearchBar::new(),
            matched: 0,
            cursor: TableCursor::default(),
            active_popup: None,
            active_component: None,
            status_message: String::new(),
            error_message: None,
            should_quit: false,
            activated: Rc::clone(&activated),
        };

        let dataset = match dataset {
            Ok(dataset) => dataset,
            Err(e) => {
                error!("Failed to load element data: {e}");
                state.startup_error = Some(e.localized_message(language).to_string());
                return state;
            }
        };

        let sink = Rc::clone(&activated);
        let mut table = TableBuilder::with_detail_view(move |element: &Element| {
            *sink.borrow_mut() = Some(element.clone());
        });
        let cells = table.build(&dataset.elements);
        state.matched = cells.len();
        state.search = SearchIndex::init(&dataset.aliases, cells);
        state.cursor = TableCursor::home(&table);

        if state.search.is_none() {
            warn!("Search disabled");
        }
        info!(cells = state.matched, "Table ready");
        state.table = Some(table);

        if state.config.ui.show_help_on_startup {
            state.open_help();
        } else {
            state.set_status("Press ? for help");
        }
        state
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Element under the cursor.
    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        let table = self.table.as_ref()?;
        self.cursor.cell(table).map(|cell| cell.element())
    }

    /// Filters the table by `query` and records the match count.
    pub fn apply_query(&mut self, query: &str) {
        if let (Some(index), Some(table)) = (&self.search, &mut self.table) {
            self.matched = index.apply(query, table.cells_mut());
        }
    }

    /// Activates the selected cell and opens its details.
    pub fn activate_selected(&mut self) {
        let Some(symbol) = self.selected_element().map(|e| e.symbol.clone()) else {
            return;
        };
        if let Some(Err(e)) = self.table.as_ref().map(|t| t.try_activate(&symbol)) {
            warn!("Activation failed: {e}");
            self.set_error(e.to_string());
            return;
        }
        let shown = self.activated.borrow_mut().take();
        if let Some(element) = shown {
            self.set_status(format!("{} selected", element.display_name(self.language)));
            self.active_component = Some(ActiveComponent::Detail(Box::new(DetailPanel::new(
                element,
                self.language,
            ))));
            self.active_popup = Some(PopupType::Detail);
        }
    }

    /// Opens the help overlay.
    pub fn open_help(&mut self) {
        self.active_component = Some(ActiveComponent::Help(HelpOverlayState::new()));
        self.active_popup = Some(PopupType::Help);
    }

    /// Close any active component.
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let Some(table) = &state.table else {
        render_startup_error(f, state);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Search bar
            Constraint::Min(10),   // Table
            Constraint::Length(6), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    if state.search.is_some() {
        state.search_bar.render(f, chunks[1], &state.theme);
    }
    PeriodicTableWidget::render(f, chunks[2], table, state.cursor, &state.theme);
    StatusBar::render(f, chunks[3], state, &state.theme);

    if let Some(component) = &state.active_component {
        match component {
            ActiveComponent::Help(help) => {
                help.render(f, centered_rect(60, 80, f.area()), &state.theme);
            }
            ActiveComponent::Detail(panel) => {
                panel.render(f, centered_rect(60, 80, f.area()), &state.theme);
            }
        }
    }

    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {APP_NAME} - Periodic Table [{}]", state.language);
    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Full-screen notice shown when the element data could not be loaded.
fn render_startup_error(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let message = state.startup_error.as_deref().unwrap_or_default();
    let area = centered_rect(70, 40, f.area());

    let text = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "q/Esc",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Quit", Style::default().fg(theme.text_muted)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {APP_NAME} "))
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(paragraph, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(Style::default().fg(theme.error).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
///
/// Returns `Ok(true)` when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    if state.table.is_none() {
        return handlers::handle_startup_error_input(state, key);
    }

    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return Ok(false);
    }

    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    if state.search_bar.is_focused() {
        return handlers::handle_search_input(state, key);
    }

    handlers::handle_main_input(state, key)
}
