// UI module
// TUI views hosting the tab bar

pub mod app_view;
pub mod styles;
pub mod tab_bar_view;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};

use crate::core::{App, EventHandler};

pub use app_view::render_app;
pub use styles::Styles;
pub use tab_bar_view::TabBarView;

/// Frame interval; short enough for the button animations to play smoothly
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Run the main application event loop
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        // Render the UI (also runs the tab bar's layout hook)
        terminal.draw(|f| render_app(f, app))?;

        // Handle events
        if event::poll(FRAME_INTERVAL)? {
            let event = event::read()?;
            app.handle_event(EventHandler::handle(event));
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
