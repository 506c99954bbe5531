// Tab Bar Button
// One selectable element bound to a tab item

use ratatui::style::Color;
use std::time::Instant;

use super::animation::{Playback, TabItemAnimation};
use super::geometry::FrameRect;
use super::item::TabItem;

/// Identifies a button within one build of the bar
///
/// The generation changes on every rebuild, so ids handed out before the
/// item list was replaced no longer resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId {
    pub(crate) generation: u64,
    pub(crate) slot: usize,
}

#[derive(Debug, Clone)]
pub struct TabBarButton {
    id: ButtonId,
    item: TabItem,
    selected: bool,
    pub select_animation: TabItemAnimation,
    pub deselect_animation: TabItemAnimation,
    pub tint_color: Color,
    pub frame: FrameRect,
    playback: Option<Playback>,
}

impl TabBarButton {
    pub(crate) fn new(
        id: ButtonId,
        item: TabItem,
        tint_color: Color,
        select_animation: TabItemAnimation,
        deselect_animation: TabItemAnimation,
    ) -> Self {
        Self {
            id,
            item,
            selected: false,
            select_animation,
            deselect_animation,
            tint_color,
            frame: FrameRect::default(),
            playback: None,
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn item(&self) -> &TabItem {
        &self.item
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn select(&mut self, animated: bool) {
        self.set_selected(true, animated);
    }

    pub fn deselect(&mut self, animated: bool) {
        self.set_selected(false, animated);
    }

    /// Change the selected flag, playing the matching animation if requested
    ///
    /// An un-animated change cancels whatever is in flight.
    pub fn set_selected(&mut self, selected: bool, animated: bool) {
        self.selected = selected;
        self.playback = if animated {
            let animation = if selected {
                self.select_animation
            } else {
                self.deselect_animation
            };
            Some(animation.play())
        } else {
            None
        };
    }

    /// Animation currently playing, if any
    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref()
    }

    /// Drop finished animations
    pub fn settle(&mut self, now: Instant) {
        if self.playback.is_some_and(|p| p.is_finished(now)) {
            self.playback = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::AnimationKind;
    use std::time::Duration;

    fn button() -> TabBarButton {
        TabBarButton::new(
            ButtonId { generation: 1, slot: 0 },
            TabItem::new("Home"),
            Color::Blue,
            TabItemAnimation::select(Duration::from_millis(300)),
            TabItemAnimation::deselect(Duration::from_millis(300)),
        )
    }

    #[test]
    fn test_animated_select_plays_select_animation() {
        let mut b = button();
        b.select(true);
        assert!(b.is_selected());
        assert_eq!(b.playback().map(|p| p.kind), Some(AnimationKind::Select));

        b.deselect(true);
        assert!(!b.is_selected());
        assert_eq!(b.playback().map(|p| p.kind), Some(AnimationKind::Deselect));
    }

    #[test]
    fn test_unanimated_change_cancels_playback() {
        let mut b = button();
        b.select(true);
        b.deselect(false);
        assert!(!b.is_selected());
        assert!(b.playback().is_none());
    }

    #[test]
    fn test_settle_drops_finished_playback() {
        let mut b = button();
        b.select(true);
        let started = b.playback().map(|p| p.started).unwrap();
        b.settle(started + Duration::from_millis(100));
        assert!(b.playback().is_some());
        b.settle(started + Duration::from_secs(1));
        assert!(b.playback().is_none());
    }
}
