//! Main UI input handlers: table navigation and the search bar.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};
use tracing::debug;

use crate::tui::{AppState, Component, ComponentEvent, TableCursor};

fn is_quit(key: event::KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Handle input while the startup error screen is shown
pub fn handle_startup_error_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if is_quit(key) || key.code == KeyCode::Esc {
        state.should_quit = true;
        return Ok(true);
    }
    Ok(false)
}

/// Handle input for main UI
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if is_quit(key) {
        state.should_quit = true;
        return Ok(true);
    }

    let Some(table) = &state.table else {
        return Ok(false);
    };
    let cursor = state.cursor;

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => state.cursor = cursor.step_horizontal(table, -1),
        KeyCode::Right | KeyCode::Char('l') => state.cursor = cursor.step_horizontal(table, 1),
        KeyCode::Up | KeyCode::Char('k') => state.cursor = cursor.step_vertical(table, -1),
        KeyCode::Down | KeyCode::Char('j') => state.cursor = cursor.step_vertical(table, 1),
        KeyCode::Home => state.cursor = TableCursor::home(table),
        KeyCode::Enter | KeyCode::Char(' ') => state.activate_selected(),
        KeyCode::Char('?') => state.open_help(),
        KeyCode::Char('/') => {
            if state.search.is_some() {
                state.search_bar.set_focused(true);
                state.set_status("Type to filter");
            } else {
                state.set_status("Search is unavailable");
            }
        }
        KeyCode::Esc => {
            if !state.search_bar.query().is_empty() {
                state.search_bar.clear();
                state.apply_query("");
                state.set_status("Filter cleared");
            }
        }
        _ => {}
    }
    Ok(false)
}

/// Handle input while the search bar has focus
pub fn handle_search_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return Ok(true);
    }

    match state.search_bar.handle_input(key) {
        Some(ComponentEvent::QueryChanged(query)) => {
            state.apply_query(&query);
            debug!(query = %query, matched = state.matched, "Search query changed");
        }
        Some(ComponentEvent::QuerySubmitted) => {
            state.set_status(format!("{} matching elements", state.matched));
        }
        Some(ComponentEvent::QueryCleared) => {
            state.apply_query("");
            state.set_status("Filter cleared");
        }
        Some(ComponentEvent::Closed) | None => {}
    }
    Ok(false)
}
