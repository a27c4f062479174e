//! Color palette and styling helpers.

use crate::notifications::NotificationLevel;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            bg: Color::Rgb(16, 18, 24),
            primary: Color::Rgb(97, 175, 239),
            primary_dim: Color::Rgb(58, 101, 140),
            secondary: Color::Rgb(198, 120, 221),
            accent: Color::Rgb(229, 192, 123),
            success: Color::Rgb(152, 195, 121),
            warning: Color::Rgb(229, 192, 123),
            error: Color::Rgb(224, 108, 117),
            info: Color::Rgb(97, 175, 239),
            text: Color::Rgb(220, 223, 228),
            text_dim: Color::Rgb(128, 134, 148),
            border: Color::Rgb(60, 64, 72),
            border_focus: Color::Rgb(97, 175, 239),
        }
    }

    /// Star color for the favorite marker.
    pub fn favorite_color(&self, is_favorite: bool) -> Color {
        if is_favorite {
            self.accent
        } else {
            self.text_dim
        }
    }

    pub fn notification_color(&self, level: NotificationLevel) -> Color {
        match level {
            NotificationLevel::Info => self.info,
            NotificationLevel::Warning => self.warning,
            NotificationLevel::Error => self.error,
            NotificationLevel::Success => self.success,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}
