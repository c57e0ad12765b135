//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PopupType, Theme};

// 6 rows minus borders, minus the help line
const MAX_CONTENT_LINES: usize = 3;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = Vec::new();

        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ]));
        } else if !state.status_message.is_empty() {
            content_lines.push(Line::from(state.status_message.as_str()));
        }

        if let Some(element) = state.selected_element() {
            content_lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", element.symbol),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    element.display_name(state.language).to_string(),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("  #{}  {}  {}", element.atomic_number, element.mass_label(), element.category),
                    Style::default().fg(theme.text_secondary),
                ),
            ]));
        }

        if state.search.is_none() {
            content_lines.push(Line::from(Span::styled(
                "Search unavailable: aliases could not be indexed",
                Style::default().fg(theme.warning),
            )));
        } else if !state.search_bar.query().is_empty() {
            content_lines.push(Line::from(vec![
                Span::styled("Matches: ", Style::default().fg(theme.primary)),
                Span::styled(
                    state.matched.to_string(),
                    Style::default().fg(if state.matched == 0 {
                        theme.warning
                    } else {
                        theme.success
                    }),
                ),
            ]));
        }

        let padding_needed = MAX_CONTENT_LINES.saturating_sub(content_lines.len());
        let mut status_text: Vec<Line> = content_lines.into_iter().take(MAX_CONTENT_LINES).collect();
        status_text.extend((0..padding_needed).map(|_| Line::from("")));
        status_text.push(Self::help_line(state, theme));

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
        match state.active_popup {
            Some(PopupType::Help) => &[("↑↓", "Scroll"), ("Esc", "Close")],
            Some(PopupType::Detail) => &[("↑↓", "Scroll"), ("Esc", "Close")],
            None if state.search_bar.is_focused() => &[
                ("Type", "Filter"),
                ("Enter", "Keep filter"),
                ("Esc", "Clear"),
            ],
            None => &[
                ("←↓↑→", "Move"),
                ("Enter", "Details"),
                ("/", "Search"),
                ("q", "Quit"),
                ("?", "Help"),
            ],
        }
    }

    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans = vec![Span::styled("Help: ", Style::default().fg(theme.text_muted))];
        for (i, (key, action)) in Self::hints(state).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(": {action}"),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
