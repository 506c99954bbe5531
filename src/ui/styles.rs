// UI Styles
// Color schemes and styling for the terminal host

use ratatui::style::{Color, Modifier, Style};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn content() -> Style {
        Style::default().fg(Color::Gray)
    }

    // === Tab Bar ===

    pub fn bar(background: Color) -> Style {
        Style::default().bg(background)
    }

    pub fn button_selected(tint: Color) -> Style {
        Style::default()
            .fg(tint)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_unselected(tint: Color) -> Style {
        Style::default().fg(tint)
    }

    /// First half of the select animation
    pub fn button_flash(tint: Color, background: Color) -> Style {
        Style::default()
            .fg(background)
            .bg(tint)
            .add_modifier(Modifier::BOLD)
    }

    /// Deselect animation in flight
    pub fn button_fading(tint: Color) -> Style {
        Style::default()
            .fg(tint)
            .add_modifier(Modifier::DIM)
    }
}
