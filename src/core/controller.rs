// Tab Bar Controller
// Owns the tab items, materializes one button per item, routes selection and lays buttons out

use ratatui::style::Color;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

use super::animation::{scaled_duration, TabItemAnimation};
use super::button::{ButtonId, TabBarButton};
use super::defaults::TabBarDefaults;
use super::geometry::{button_frames, ContentBounds};
use super::item::TabItem;

/// Receives selections made by direct interaction with a button
pub trait TabBarDelegate {
    fn did_select(&mut self, tab_bar: &TabBarController, item: &TabItem);
}

impl<F> TabBarDelegate for F
where
    F: FnMut(&TabBarController, &TabItem),
{
    fn did_select(&mut self, tab_bar: &TabBarController, item: &TabItem) {
        self(tab_bar, item)
    }
}

/// Where a selection request came from
///
/// Only taps animate and notify the delegate. Programmatic and external
/// selections update the buttons directly and write the selected item
/// without passing back through the external-assignment handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOrigin {
    Tap,
    Programmatic,
    ExternalAssignment,
}

/// Error type for tab bar controller operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TabBarError {
    /// Animation speed must be a finite value above zero whose scaled duration fits a `Duration`
    #[error("Invalid animation speed {0}: must be finite, greater than zero and not too small")]
    InvalidAnimationSpeed(f64),
}

pub struct TabBarController {
    items: Option<Vec<TabItem>>,
    buttons: Vec<TabBarButton>,
    selected_item: Option<TabItem>,
    animation_speed: f64,
    animation_duration: Duration,
    base_animation_duration: Duration,
    tint_color: Color,
    bounds: ContentBounds,
    needs_layout: bool,
    generation: u64,
    delegate: Option<Box<dyn TabBarDelegate>>,
}

impl TabBarController {
    pub fn new() -> Self {
        Self::with_defaults(&TabBarDefaults::default())
    }

    pub fn with_defaults(defaults: &TabBarDefaults) -> Self {
        let base = defaults.base_animation_duration;
        let (animation_speed, animation_duration) =
            match scaled_duration(base, defaults.animation_speed) {
                Some(duration) if defaults.animation_speed.is_finite() && defaults.animation_speed > 0.0 => {
                    (defaults.animation_speed, duration)
                }
                _ => {
                    warn!(speed = defaults.animation_speed, "default animation speed unusable, using 1.0");
                    (1.0, base)
                }
            };
        Self {
            items: None,
            buttons: Vec::new(),
            selected_item: None,
            animation_speed,
            animation_duration,
            base_animation_duration: base,
            tint_color: defaults.tint,
            bounds: ContentBounds::default(),
            needs_layout: false,
            generation: 0,
            delegate: None,
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                      Items and buttons                                     │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn items(&self) -> Option<&[TabItem]> {
        self.items.as_deref()
    }

    pub fn buttons(&self) -> &[TabBarButton] {
        &self.buttons
    }

    pub fn button(&self, index: usize) -> Option<&TabBarButton> {
        self.buttons.get(index)
    }

    /// Replace the item list and rebuild every button
    pub fn set_items(&mut self, items: Option<Vec<TabItem>>) {
        self.items = items;
        self.reload_buttons();
    }

    /// Same as [`set_items`](Self::set_items); `animated` only affects the
    /// host's own item transition and is not interpreted here
    pub fn set_items_animated(&mut self, items: Option<Vec<TabItem>>, animated: bool) {
        trace!(animated, "item transition requested");
        self.set_items(items);
    }

    fn reload_buttons(&mut self) {
        self.generation += 1;
        self.buttons.clear();

        let (select_animation, deselect_animation) = self.animations();
        let items = self.items.as_deref().unwrap_or_default();
        let mut preselected = false;
        let mut buttons = Vec::with_capacity(items.len());

        for (slot, item) in items.iter().enumerate() {
            let mut button = TabBarButton::new(
                ButtonId { generation: self.generation, slot },
                item.clone(),
                self.tint_color,
                select_animation,
                deselect_animation,
            );
            if !preselected && self.selected_item.as_ref().is_some_and(|s| s.is(item)) {
                button.select(false);
                preselected = true;
            }
            buttons.push(button);
        }
        self.buttons = buttons;

        if !preselected && self.selected_item.take().is_some() {
            debug!("selected item not in new item list, selection cleared");
        }

        self.reload_animations();
        self.set_needs_layout();

        debug!(
            count = self.buttons.len(),
            selected = ?self.selected_index(),
            generation = self.generation,
            "tab bar buttons rebuilt"
        );
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                      Appearance                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn animation_speed(&self) -> f64 {
        self.animation_speed
    }

    /// Set the speed multiplier; every button's durations become `base / speed`
    ///
    /// Speeds so small that the scaled duration overflows are rejected like
    /// zero or negative ones, and the previous speed stays in effect.
    pub fn set_animation_speed(&mut self, speed: f64) -> Result<(), TabBarError> {
        let duration = if speed.is_finite() && speed > 0.0 {
            scaled_duration(self.base_animation_duration, speed)
        } else {
            None
        };
        let Some(duration) = duration else {
            warn!(speed, "rejected animation speed");
            return Err(TabBarError::InvalidAnimationSpeed(speed));
        };
        self.animation_speed = speed;
        self.animation_duration = duration;
        self.reload_animations();
        debug!(speed, "animation speed changed");
        Ok(())
    }

    /// Current duration of both select and deselect animations
    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    fn animations(&self) -> (TabItemAnimation, TabItemAnimation) {
        let duration = self.animation_duration();
        (TabItemAnimation::select(duration), TabItemAnimation::deselect(duration))
    }

    fn reload_animations(&mut self) {
        let (select_animation, deselect_animation) = self.animations();
        for button in &mut self.buttons {
            button.select_animation = select_animation;
            button.deselect_animation = deselect_animation;
        }
    }

    pub fn tint_color(&self) -> Color {
        self.tint_color
    }

    pub fn set_tint_color(&mut self, color: Color) {
        self.tint_color = color;
        for button in &mut self.buttons {
            button.tint_color = color;
        }
    }

    /// Drop finished button animations
    pub fn settle_animations(&mut self, now: Instant) {
        for button in &mut self.buttons {
            button.settle(now);
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                      Selection                                             │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn selected_item(&self) -> Option<&TabItem> {
        self.selected_item.as_ref()
    }

    /// Index of the selected button
    pub fn selected_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.is_selected())
    }

    pub fn set_delegate(&mut self, delegate: impl TabBarDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Assign the selection from the host
    ///
    /// `None` deselects every button. An item that is not in the list is
    /// ignored and the current selection stays as it is.
    pub fn set_selected_item(&mut self, item: Option<TabItem>) {
        let Some(item) = item else {
            for button in &mut self.buttons {
                button.deselect(false);
            }
            self.selected_item = None;
            debug!("selection cleared");
            return;
        };

        let index = self
            .items
            .as_deref()
            .and_then(|items| items.iter().position(|candidate| candidate.is(&item)));
        match index {
            Some(index) => self.apply_selection(index, SelectionOrigin::ExternalAssignment),
            None => trace!(title = item.title(), "ignoring selection of unknown item"),
        }
    }

    /// Select the button at `index` without notifying the delegate
    ///
    /// Out-of-range indices are ignored. The transition is never animated,
    /// whatever `animated` says.
    pub fn select_item_at(&mut self, index: usize, animated: bool) {
        if index >= self.buttons.len() {
            trace!(index, count = self.buttons.len(), "ignoring out-of-range selection");
            return;
        }
        if animated {
            trace!(index, "animated programmatic selection runs un-animated");
        }
        self.apply_selection(index, SelectionOrigin::Programmatic);
    }

    /// Tap dispatched to a button by the host
    ///
    /// Taps on buttons from a previous item list are ignored.
    pub fn handle_tap(&mut self, button: ButtonId) {
        let index = self.buttons.iter().position(|b| b.id() == button);
        match index {
            Some(index) => self.apply_selection(index, SelectionOrigin::Tap),
            None => trace!(?button, "ignoring tap on detached button"),
        }
    }

    fn apply_selection(&mut self, index: usize, origin: SelectionOrigin) {
        let Some(item) = self.items.as_deref().and_then(|items| items.get(index)).cloned() else {
            return;
        };

        let animated = origin == SelectionOrigin::Tap;
        for (position, button) in self.buttons.iter_mut().enumerate() {
            if position == index {
                continue;
            }
            if animated {
                if button.is_selected() {
                    button.deselect(true);
                }
            } else {
                button.deselect(false);
            }
        }
        self.buttons[index].select(animated);
        self.selected_item = Some(item.clone());

        debug!(index, title = item.title(), ?origin, "tab selected");

        if origin == SelectionOrigin::Tap {
            self.notify_delegate(&item);
        }
    }

    fn notify_delegate(&mut self, item: &TabItem) {
        if let Some(mut delegate) = self.delegate.take() {
            delegate.did_select(self, item);
            if self.delegate.is_none() {
                self.delegate = Some(delegate);
            }
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                      Layout                                                │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn bounds(&self) -> ContentBounds {
        self.bounds
    }

    /// Record the container's content bounds; a change schedules a layout pass
    pub fn set_bounds(&mut self, bounds: ContentBounds) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.set_needs_layout();
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    pub fn layout_if_needed(&mut self) {
        if self.needs_layout {
            self.layout_subviews();
        }
    }

    /// Give every button an equal share of the bar's width
    pub fn layout_subviews(&mut self) {
        self.needs_layout = false;
        if self.buttons.is_empty() {
            return;
        }

        let frames = button_frames(self.bounds, self.buttons.len());
        for (button, frame) in self.buttons.iter_mut().zip(frames) {
            button.frame = frame;
        }
        trace!(
            width = self.bounds.width,
            height = self.bounds.height,
            count = self.buttons.len(),
            "tab bar laid out"
        );
    }

    /// Button whose frame contains the point, for hosts translating touches into taps
    pub fn button_at(&self, x: f64, y: f64) -> Option<ButtonId> {
        self.buttons
            .iter()
            .find(|b| b.frame.contains(x, y))
            .map(|b| b.id())
    }
}

impl Default for TabBarController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TabBarController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabBarController")
            .field("items", &self.items)
            .field("buttons", &self.buttons)
            .field("selected_item", &self.selected_item)
            .field("animation_speed", &self.animation_speed)
            .field("tint_color", &self.tint_color)
            .field("bounds", &self.bounds)
            .field("needs_layout", &self.needs_layout)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}
