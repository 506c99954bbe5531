// Flashy Tab Bar
// Terminal host for the tab bar control

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flashy_tab_bar::core::App;
use flashy_tab_bar::load_and_validate_config;
use flashy_tab_bar::ui::run_app;

/// Log file used when RUST_LOG is set; stdout belongs to the alternate screen
const LOG_FILE: &str = "flashy-tab-bar.log";

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_logging()?;

    // Optional tab bar config path as the only argument
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_and_validate_config(config_path.as_deref())
        .context("Failed to load tab bar configuration")?;
    let mut app = App::new(&config)?;
    info!(tabs = config.tabs.len(), "starting tab bar host");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Install a file logger filtered by RUST_LOG; does nothing when RUST_LOG is unset
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = File::create(LOG_FILE).with_context(|| format!("Failed to create {}", LOG_FILE))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
