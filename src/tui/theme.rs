//! Colors for dark and light terminals, plus the element category palette.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles, emphasis
    pub primary: Color,
    /// Selection and key hints
    pub accent: Color,
    /// Confirmations
    pub success: Color,
    /// Errors
    pub error: Color,
    /// Warnings, e.g. search unavailable
    pub warning: Color,

    /// Primary text
    pub text: Color,
    /// Labels
    pub text_secondary: Color,
    /// Help text and cells that do not match the search
    pub text_muted: Color,

    /// Main background
    pub background: Color,
    /// Selection background
    pub highlight_bg: Color,
    /// Popup background
    pub surface: Color,
}

/// Theme variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Dark terminal background
    Dark,
    /// Light terminal background
    Light,
}

impl Theme {
    /// Detects the OS theme via `dark-light`; dark on failure.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for a configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Light theme.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Rgb(170, 170, 170),

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),
        }
    }

    /// Which variant this theme is.
    #[must_use]
    pub const fn variant(&self) -> ThemeVariant {
        match self.background {
            Color::White | Color::Rgb(255, 255, 255) | Color::Rgb(245, 245, 245) => {
                ThemeVariant::Light
            }
            _ => ThemeVariant::Dark,
        }
    }

    /// Background color of a cell in the given category.
    ///
    /// Unknown categories use the surface color.
    #[must_use]
    pub fn category_color(&self, category: &str) -> Color {
        match category {
            "alkali-metal" => Color::Rgb(214, 69, 65),
            "alkaline-earth-metal" => Color::Rgb(230, 126, 34),
            "transition-metal" => Color::Rgb(212, 172, 13),
            "post-transition-metal" => Color::Rgb(39, 174, 96),
            "metalloid" => Color::Rgb(22, 160, 133),
            "nonmetal" => Color::Rgb(41, 128, 185),
            "halogen" => Color::Rgb(52, 152, 219),
            "noble-gas" => Color::Rgb(142, 68, 173),
            "lanthanide" => Color::Rgb(192, 57, 143),
            "actinide" => Color::Rgb(155, 89, 182),
            _ => self.surface,
        }
    }

    /// Foreground that stays readable on [`category_color`](Self::category_color).
    #[must_use]
    pub const fn category_text(&self) -> Color {
        Color::Black
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
