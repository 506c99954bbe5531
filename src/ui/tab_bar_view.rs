// Tab Bar View
// Draws the controller's buttons into the frames computed by its layout pass

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use std::time::Instant;

use super::Styles;
use crate::core::{AnimationKind, TabBarButton, TabBarController, TabBarDefaults};

/// Selection marker drawn under the selected title
const SELECTED_MARKER: &str = "•";

/// Widget rendering a laid-out tab bar
///
/// Expects `area` to be the area the controller was last laid out in.
pub struct TabBarView<'a> {
    controller: &'a TabBarController,
    defaults: &'a TabBarDefaults,
    now: Instant,
}

impl<'a> TabBarView<'a> {
    pub fn new(controller: &'a TabBarController, defaults: &'a TabBarDefaults, now: Instant) -> Self {
        Self { controller, defaults, now }
    }

    fn button_style(&self, button: &TabBarButton) -> Style {
        let tint = button.tint_color;
        match button.playback() {
            Some(p) if p.kind == AnimationKind::Select && p.progress(self.now) < 0.5 => {
                Styles::button_flash(tint, self.defaults.background)
            }
            Some(p) if p.kind == AnimationKind::Deselect && !p.is_finished(self.now) => {
                Styles::button_fading(tint)
            }
            _ if button.is_selected() => Styles::button_selected(tint),
            _ => Styles::button_unselected(self.defaults.unselected_tint),
        }
    }

    /// Selected buttons show their title, the rest their icon
    fn button_label(button: &TabBarButton) -> String {
        let item = button.item();
        match item.icon() {
            Some(icon) if !button.is_selected() => icon.to_string(),
            _ => item.title().to_string(),
        }
    }

    fn render_button(&self, button: &TabBarButton, area: Rect, buf: &mut Buffer) {
        let cells = button.frame.to_cells(area).intersection(area);
        if cells.width == 0 || cells.height == 0 {
            return;
        }

        let style = self.button_style(button);
        let label_row = cells.y + cells.height.saturating_sub(1) / 2;
        let label_area = Rect { y: label_row, height: 1, ..cells };
        Paragraph::new(Line::from(Self::button_label(button)))
            .alignment(Alignment::Center)
            .style(style)
            .render(label_area, buf);

        if button.is_selected() && label_row + 1 < cells.bottom() {
            let marker_area = Rect { y: label_row + 1, height: 1, ..cells };
            Paragraph::new(SELECTED_MARKER)
                .alignment(Alignment::Center)
                .style(Styles::button_selected(button.tint_color))
                .render(marker_area, buf);
        }
    }
}

impl Widget for TabBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Styles::bar(self.defaults.background))
            .render(area, buf);

        for button in self.controller.buttons() {
            self.render_button(button, area, buf);
        }
    }
}
