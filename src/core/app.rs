// Application State
// Terminal host for the tab bar: owns the controller and applies events to it

use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::sync::mpsc::{channel, Receiver};
use std::time::Instant;
use tracing::{trace, warn};

use super::{AppEvent, ContentBounds, TabBarController, TabBarDefaults, TabItem};
use crate::config::TabBarConfigYaml;

const MIN_ANIMATION_SPEED: f64 = 0.125;
const MAX_ANIMATION_SPEED: f64 = 8.0;

/// Tints cycled with the `t` key
const TINT_PALETTE: [Color; 4] = [
    Color::Rgb(30, 30, 110),
    Color::Rgb(196, 40, 71),
    Color::Rgb(20, 130, 90),
    Color::Rgb(214, 120, 0),
];

/// Main application state
#[derive(Debug)]
pub struct App {
    /// The tab bar being hosted
    pub controller: TabBarController,

    /// Compiled appearance defaults
    pub defaults: TabBarDefaults,

    /// Titles reported through the delegate, oldest first
    notifications: Receiver<String>,

    /// Status line text
    pub status: String,

    /// Area the bar was last laid out in, for hit testing
    bar_area: Rect,

    /// Bottom inset handed to the controller on every layout
    bottom_inset: f64,

    tint_index: usize,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &TabBarConfigYaml) -> Result<Self> {
        let defaults = TabBarDefaults::default();
        let mut controller = config.build_controller(&defaults)?;

        let (sender, notifications) = channel();
        controller.set_delegate(move |_: &TabBarController, item: &TabItem| {
            if sender.send(item.title().to_string()).is_err() {
                trace!("selection notice dropped, receiver closed");
            }
        });

        let status = match controller.selected_item() {
            Some(item) => format!("Selected {}", item.title()),
            None => "Nothing selected".to_string(),
        };

        Ok(Self {
            controller,
            defaults,
            notifications,
            status,
            bar_area: Rect::default(),
            bottom_inset: config.bottom_inset,
            tint_index: 0,
            should_quit: false,
        })
    }

    /// Area last passed to [`layout`](Self::layout)
    pub fn bar_area(&self) -> Rect {
        self.bar_area
    }

    /// Layout hook called by the draw loop with the bar's current area
    pub fn layout(&mut self, area: Rect) {
        self.bar_area = area;
        self.controller
            .set_bounds(ContentBounds::from(area).with_bottom_inset(self.bottom_inset));
        self.controller.layout_if_needed();
    }

    /// Advance time-dependent state before drawing
    pub fn tick(&mut self, now: Instant) {
        self.controller.settle_animations(now);
        while let Ok(title) = self.notifications.try_recv() {
            self.status = format!("Delegate: did select {}", title);
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::SelectPrevious => self.step_selection(-1),
            AppEvent::SelectNext => self.step_selection(1),
            AppEvent::SelectIndex(index) => self.select_index(index),
            AppEvent::ClearSelection => {
                self.controller.set_selected_item(None);
                self.status = "Selection cleared".to_string();
            }
            AppEvent::SpeedUp => self.scale_speed(2.0),
            AppEvent::SlowDown => self.scale_speed(0.5),
            AppEvent::CycleTint => {
                self.tint_index = (self.tint_index + 1) % TINT_PALETTE.len();
                self.controller.set_tint_color(TINT_PALETTE[self.tint_index]);
            }
            AppEvent::Tap { column, row } => self.tap(column, row),
            // Bounds are re-read on the next draw
            AppEvent::Resize | AppEvent::None => {}
        }
    }

    /// Programmatic selection by index
    fn select_index(&mut self, index: usize) {
        self.controller.select_item_at(index, false);
        if let Some(item) = self.controller.selected_item() {
            self.status = format!("Selected {}", item.title());
        }
    }

    /// Move the selection left or right, wrapping at the ends
    ///
    /// Goes through the host assignment path rather than the index API.
    fn step_selection(&mut self, direction: isize) {
        let Some(items) = self.controller.items() else {
            return;
        };
        if items.is_empty() {
            return;
        }

        let count = items.len() as isize;
        let next = match self.controller.selected_index() {
            Some(current) => (current as isize + direction).rem_euclid(count),
            None if direction < 0 => count - 1,
            None => 0,
        };
        let item = items[next as usize].clone();
        self.status = format!("Selected {}", item.title());
        self.controller.set_selected_item(Some(item));
    }

    fn scale_speed(&mut self, factor: f64) {
        let speed = (self.controller.animation_speed() * factor)
            .clamp(MIN_ANIMATION_SPEED, MAX_ANIMATION_SPEED);
        match self.controller.set_animation_speed(speed) {
            Ok(()) => self.status = format!("Animation speed {}x", speed),
            Err(e) => warn!("{}", e),
        }
    }

    /// Translate a click into a tap on the button under it
    fn tap(&mut self, column: u16, row: u16) {
        let area = self.bar_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return;
        }

        // Sample the middle of the cell so rounding matches the rendered cells
        let x = (column - area.x) as f64 + 0.5;
        let y = (row - area.y) as f64 + 0.5;
        if let Some(button) = self.controller.button_at(x, y) {
            self.controller.handle_tap(button);
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
