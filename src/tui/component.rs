//! Component trait pattern for TUI components.
//!
//! Popups and the search bar own their state, handle their own keys and
//! report back to `AppState` through [`ComponentEvent`]s.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the parent has to react.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Check if component should close.
    fn should_close(&self) -> bool {
        false
    }
}

/// Events emitted by components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// The search text changed
    QueryChanged(String),
    /// Enter pressed in the search bar; focus returns to the table
    QuerySubmitted,
    /// Search text cleared and focus returned to the table
    QueryCleared,
    /// Popup dismissed
    Closed,
}
