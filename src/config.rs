// Configuration loading module
// Runtime tab bar configuration read from YAML

use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::{TabBarController, TabBarDefaults, TabBarError, TabItem};

/// Tab bar configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabBarConfigYaml {
    /// List of tabs, left to right
    pub tabs: Vec<TabConfigYaml>,
    /// Index of the initially selected tab (none selected if omitted)
    pub selected: Option<usize>,
    /// Animation speed multiplier (defaults to the compiled default)
    pub animation_speed: Option<f64>,
    /// Tint as "#rrggbb" (defaults to the compiled default)
    pub tint: Option<String>,
    /// Bottom inset reserved below the buttons, in cells
    #[serde(default)]
    pub bottom_inset: f64,
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    /// Tab display title
    pub title: String,
    /// Optional glyph drawn before the title
    pub icon: Option<String>,
}

/// Error type for configuration loading and validation
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse tab bar config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Tab {index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("Initial selection {index} is out of range for {count} tabs")]
    SelectionOutOfRange { index: usize, count: usize },
    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),
    #[error("Invalid bottom inset {0}: must be finite and not negative")]
    InvalidInset(f64),
    #[error(transparent)]
    TabBar(#[from] TabBarError),
}

impl TabBarConfigYaml {
    /// Built-in configuration used when no file is given
    pub fn builtin() -> Self {
        let tab = |title: &str, icon: &str| TabConfigYaml {
            title: title.to_string(),
            icon: Some(icon.to_string()),
        };
        Self {
            tabs: vec![
                tab("Events", "◆"),
                tab("Search", "⌕"),
                tab("Highlights", "★"),
            ],
            selected: Some(0),
            animation_speed: None,
            tint: None,
            bottom_inset: 0.0,
        }
    }

    /// Check the values serde cannot check
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.tabs.iter().position(|t| t.title.trim().is_empty()) {
            return Err(ConfigError::EmptyTitle { index });
        }
        if let Some(index) = self.selected {
            if index >= self.tabs.len() {
                return Err(ConfigError::SelectionOutOfRange {
                    index,
                    count: self.tabs.len(),
                });
            }
        }
        if let Some(tint) = &self.tint {
            parse_hex_color(tint)?;
        }
        if !self.bottom_inset.is_finite() || self.bottom_inset < 0.0 {
            return Err(ConfigError::InvalidInset(self.bottom_inset));
        }
        Ok(())
    }

    /// Create the tab items described by this configuration
    pub fn create_items(&self) -> Vec<TabItem> {
        self.tabs
            .iter()
            .map(|t| match &t.icon {
                Some(icon) => TabItem::with_icon(t.title.clone(), icon.clone()),
                None => TabItem::new(t.title.clone()),
            })
            .collect()
    }

    /// Create a controller with items, appearance and initial selection applied
    pub fn build_controller(&self, defaults: &TabBarDefaults) -> Result<TabBarController, ConfigError> {
        self.validate()?;

        let mut controller = TabBarController::with_defaults(defaults);
        if let Some(speed) = self.animation_speed {
            controller.set_animation_speed(speed)?;
        }
        if let Some(tint) = &self.tint {
            controller.set_tint_color(parse_hex_color(tint)?);
        }
        controller.set_items(Some(self.create_items()));
        if let Some(index) = self.selected {
            controller.select_item_at(index, false);
        }
        Ok(controller)
    }
}

/// Parse a YAML document into a tab bar configuration
pub fn parse_config(contents: &str) -> Result<TabBarConfigYaml, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}

pub fn load_config(path: &Path) -> Result<TabBarConfigYaml, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}

/// Load and validate configuration, using the built-in tabs when no path is given
pub fn load_and_validate_config(config_path: Option<&Path>) -> Result<TabBarConfigYaml, ConfigError> {
    let config = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading tab bar config");
            load_config(path)?
        }
        None => {
            warn!("no config path given, using built-in tabs");
            TabBarConfigYaml::builtin()
        }
    };
    config.validate()?;
    Ok(config)
}

/// Parse "#rrggbb" (quotes and leading '#' optional)
pub fn parse_hex_color(s: &str) -> Result<Color, ConfigError> {
    let trimmed = s.trim().trim_matches('"').trim_matches('\'');
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let invalid = || ConfigError::InvalidColor(s.to_string());
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
    Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
