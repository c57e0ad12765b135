//! Element detail popup, opened by activating a cell.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::Language;
use crate::data::Element;

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Popup showing one element's data.
#[derive(Debug, Clone)]
pub struct DetailPanel {
    element: Element,
    language: Language,
    scroll: u16,
    closed: bool,
}

impl DetailPanel {
    /// Creates a panel for `element`.
    #[must_use]
    pub const fn new(element: Element, language: Language) -> Self {
        Self {
            element,
            language,
            scroll: 0,
            closed: false,
        }
    }

    /// The element being shown.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    fn field(label: &str, value: String, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {label:<18}"),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(value, Style::default().fg(theme.text)),
        ])
    }

    fn optional(value: Option<f64>, unit: &str) -> String {
        value.map_or_else(|| "-".to_string(), |v| format!("{v} {unit}").trim().to_string())
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let e = &self.element;
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{}  ", e.symbol),
                    Style::default()
                        .fg(theme.category_text())
                        .bg(theme.category_color(&e.category))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    e.display_name(self.language).to_string(),
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Self::field("Atomic number", e.atomic_number.to_string(), theme),
            Self::field("Atomic mass", e.mass_label(), theme),
            Self::field("Category", e.category.clone(), theme),
            Self::field("Phase", e.phase.clone(), theme),
            Self::field("Period", e.period.to_string(), theme),
            Self::field(
                "Group",
                e.group.map_or_else(
                    || e.series().map_or("-", |s| s.label()).to_string(),
                    |g| g.to_string(),
                ),
                theme,
            ),
            Self::field(
                "Particles",
                format!("{} p, {} n, {} e", e.protons, e.neutrons, e.electrons),
                theme,
            ),
            Self::field("Shells", e.shell_label(), theme),
            Line::from(""),
            Self::field("Density", Self::optional(e.density, "g/cm³"), theme),
            Self::field("Melting point", Self::optional(e.melting_point, "K"), theme),
            Self::field("Boiling point", Self::optional(e.boiling_point, "K"), theme),
            Self::field("Electronegativity", Self::optional(e.electronegativity, ""), theme),
            Self::field("Atomic radius", Self::optional(e.atomic_radius, "pm"), theme),
            Line::from(""),
        ];

        if !e.discovered_by.is_empty() || !e.discovery_year.is_empty() {
            let discovery = match (e.discovered_by.is_empty(), e.discovery_year.is_empty()) {
                (false, false) => format!("{} ({})", e.discovered_by, e.discovery_year),
                (false, true) => e.discovered_by.clone(),
                _ => e.discovery_year.clone(),
            };
            lines.push(Self::field("Discovered", discovery, theme));
        }

        if !e.uses.is_empty() {
            lines.push(Line::from(Span::styled(
                "  Uses",
                Style::default().fg(theme.text_secondary),
            )));
            lines.extend(e.uses.iter().map(|u| {
                Line::from(Span::styled(format!("    • {u}"), Style::default().fg(theme.text)))
            }));
        }

        lines
    }
}

impl Component for DetailPanel {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.closed = true;
                Some(ComponentEvent::Closed)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);

        let title = format!(" {} - {} ", self.element.atomic_number, self.element.name);
        let paragraph = Paragraph::new(self.lines(theme))
            .block(
                Block::default()
                    .title(title)
                    .title_alignment(Alignment::Center)
                    .title_bottom(Line::from(" Esc: close ").alignment(Alignment::Right))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.surface)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));

        f.render_widget(paragraph, area);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataSource;
    use crossterm::event::KeyModifiers;

    fn panel(symbol: &str, language: Language) -> DetailPanel {
        let dataset = DataSource::Embedded.load().unwrap();
        let element = dataset.elements.get(symbol).unwrap().clone();
        DetailPanel::new(element, language)
    }

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_lines_include_shells() {
        let p = panel("Na", Language::En);
        let rendered = text(&p.lines(&Theme::dark()));
        assert!(rendered.contains("Sodium"));
        assert!(rendered.contains("2, 8, 1"));
    }

    #[test]
    fn test_persian_heading() {
        let p = panel("H", Language::Fa);
        let rendered = text(&p.lines(&Theme::dark()));
        assert!(rendered.contains(&p.element().fa_name));
    }

    #[test]
    fn test_lanthanide_group_shows_series() {
        let p = panel("Ce", Language::En);
        let rendered = text(&p.lines(&Theme::dark()));
        assert!(rendered.contains("Lanthanides"));
    }

    #[test]
    fn test_escape_closes() {
        let mut p = panel("He", Language::En);
        let event = p.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(event, Some(ComponentEvent::Closed));
        assert!(p.should_close());
    }
}
