//! Popup input handler.

use anyhow::Result;
use crossterm::event;

use crate::tui::{ActiveComponent, AppState, Component, ComponentEvent};

/// Route input to the active popup component, closing it when done
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let (event, closed) = match &mut state.active_component {
        Some(ActiveComponent::Help(help)) => (help.handle_input(key), help.should_close()),
        Some(ActiveComponent::Detail(panel)) => (panel.handle_input(key), panel.should_close()),
        None => (None, true),
    };

    if closed || event == Some(ComponentEvent::Closed) {
        state.close_component();
    }
    Ok(false)
}
