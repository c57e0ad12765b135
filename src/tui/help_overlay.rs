//! Help overlay listing keyboard shortcuts.
//!
//! Opened with '?' and scrollable with the arrow keys.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;

const PAGE: usize = 10;
const RULE: &str = "═══════════════════════════════════════════════════════";

const NAVIGATION: &[(&str, &str)] = &[
    ("Arrow Keys", "Move between elements"),
    ("h/j/k/l", "VIM-style navigation (left/down/up/right)"),
    ("Home", "Jump to the first element"),
    ("Enter / Space", "Open element details"),
];

const SEARCH: &[(&str, &str)] = &[
    ("/", "Focus the search bar"),
    ("Typing", "Filter the table as you type"),
    ("Enter", "Keep the filter and return to the table"),
    ("Esc", "Clear the filter"),
];

const SYSTEM: &[(&str, &str)] = &[
    ("?", "Toggle this help"),
    ("q / Ctrl+C", "Quit"),
];

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    total_lines: usize,
    closed: bool,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            total_lines: Self::help_content(&Theme::dark()).len(),
            closed: false,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll down by a page.
    pub fn page_down(&mut self, visible_height: usize) {
        self.scroll_offset =
            (self.scroll_offset + visible_height).min(self.total_lines.saturating_sub(1));
    }

    /// Scroll up by a page.
    pub const fn page_up(&mut self, visible_height: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height);
    }

    fn section(title: &str, entries: &[(&str, &str)], theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("═══ {title} ═══"),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(entries.iter().map(|(key, action)| {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{key:<20}"), Style::default().fg(theme.success)),
                Span::styled((*action).to_string(), Style::default().fg(theme.text)),
            ])
        }));
        lines.push(Line::from(""));
        lines
    }

    fn help_content(theme: &Theme) -> Vec<Line<'static>> {
        let rule = || Line::from(Span::styled(RULE, Style::default().fg(theme.primary)));

        let mut lines = vec![
            rule(),
            Line::from(Span::styled(
                "Mendeleev - Help",
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            rule(),
            Line::from(""),
        ];
        lines.extend(Self::section("NAVIGATION", NAVIGATION, theme));
        lines.extend(Self::section("SEARCH", SEARCH, theme));
        lines.extend(Self::section("SYSTEM", SYSTEM, theme));
        lines.push(Line::from(Span::styled(
            "  Search matches names in English and Persian, symbols and atomic numbers.",
            Style::default().fg(theme.text_secondary),
        )));
        lines.push(Line::from(Span::styled(
            "  Persian and Arabic-Indic digits are accepted.",
            Style::default().fg(theme.text_secondary),
        )));
        lines.push(Line::from(""));
        lines.push(rule());
        lines.push(Line::from(Span::styled(
            "Press '?' or Esc to close help • ↑↓ to scroll",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpOverlayState {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(PAGE),
            KeyCode::PageDown => self.page_down(PAGE),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::Esc | KeyCode::Char('?' | 'q') => {
                self.closed = true;
                return Some(ComponentEvent::Closed);
            }
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let content_area = chunks[0];
        let visible_height = content_area.height.saturating_sub(2) as usize;

        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(Self::help_content(theme))
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.surface)),
            )
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));

        frame.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);

        frame.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
