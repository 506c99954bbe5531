// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

use super::{Styles, TabBarView};
use crate::core::App;

/// Height of the tab bar in rows
const TAB_BAR_HEIGHT: u16 = 3;

/// Render the entire application
///
/// Runs the tab bar's layout hook with the bar's current area before drawing it.
pub fn render_app(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Min(0),                 // Main content
            Constraint::Length(1),              // Footer
            Constraint::Length(TAB_BAR_HEIGHT), // Tab bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_main_content(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);

    app.layout(chunks[3]);
    let view = TabBarView::new(&app.controller, &app.defaults, Instant::now());
    f.render_widget(view, chunks[3]);
}

/// Render the header bar
fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Flashy Tab Bar")
        .style(Styles::header())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render the page belonging to the selected tab
fn render_main_content(f: &mut Frame, app: &App, area: Rect) {
    let title = app
        .controller
        .selected_item()
        .map(|item| item.label())
        .unwrap_or_else(|| "No tab selected".to_string());
    let speed = format!(
        "Animation speed {}x ({} ms)",
        app.controller.animation_speed(),
        app.controller.animation_duration().as_millis()
    );
    let content = Paragraph::new(vec![Line::from(title), Line::from(speed)])
        .style(Styles::content())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

/// Render the status / key help line
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "{}  |  click/1-9 select  ←/→ move  c clear  +/- speed  t tint  q quit",
        app.status
    );
    f.render_widget(Paragraph::new(text).style(Styles::footer()), area);
}
