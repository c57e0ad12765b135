//! Single-line search input above the table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Search input state.
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    query: String,
    focused: bool,
}

impl SearchBar {
    /// Creates an empty, unfocused search bar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether keys go to the search bar.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Gives or takes keyboard focus.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Empties the query without changing focus.
    pub fn clear(&mut self) {
        self.query.clear();
    }
}

impl Component for SearchBar {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => {
                self.query.clear();
                self.focused = false;
                Some(ComponentEvent::QueryCleared)
            }
            KeyCode::Enter => {
                self.focused = false;
                Some(ComponentEvent::QuerySubmitted)
            }
            KeyCode::Backspace => {
                self.query.pop()?;
                Some(ComponentEvent::QueryChanged(self.query.clone()))
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.clear();
                Some(ComponentEvent::QueryChanged(String::new()))
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.push(c);
                Some(ComponentEvent::QueryChanged(self.query.clone()))
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border = if self.focused {
            theme.accent
        } else {
            theme.text_muted
        };

        let content = if self.query.is_empty() && !self.focused {
            Line::from(Span::styled(
                "Press / to search by name, symbol or number",
                Style::default().fg(theme.text_muted),
            ))
        } else {
            let mut spans = vec![Span::styled(
                self.query.clone(),
                Style::default().fg(theme.text),
            )];
            if self.focused {
                spans.push(Span::styled(
                    "█",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(paragraph, area);
    }
}
