// Tab Bar Defaults
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use ratatui::style::Color;
use std::time::Duration;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Defaults applied to every freshly created controller
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarDefaults {
    /// Animation duration at speed 1.0
    pub base_animation_duration: Duration,

    /// Initial animation speed multiplier
    pub animation_speed: f64,

    /// Tint of the selected button
    pub tint: Color,

    /// Tint of buttons that are not selected
    pub unselected_tint: Color,

    /// Bar background
    pub background: Color,
}

impl Default for TabBarDefaults {
    fn default() -> Self {
        Self {
            base_animation_duration: Duration::from_secs_f64(compiled::BASE_ANIMATION_DURATION),
            animation_speed: compiled::DEFAULT_ANIMATION_SPEED,
            tint: rgb(compiled::DEFAULT_TINT),
            unselected_tint: rgb(compiled::UNSELECTED_TINT),
            background: rgb(compiled::BAR_BACKGROUND),
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
