// Flashy Tab Bar Library
// Tab bar control with per-item animated buttons, plus a terminal host for it

// Core infrastructure - selection state machine, buttons, layout
pub mod core;

// Runtime configuration
pub mod config;

// UI - terminal views hosting the tab bar
pub mod ui;

// Re-export commonly used items for convenience
pub use config::{load_and_validate_config, ConfigError, TabBarConfigYaml};
pub use core::{
    ButtonId, ContentBounds, SelectionOrigin, TabBarButton, TabBarController, TabBarDelegate,
    TabBarError, TabItem,
};
