// Button Geometry
// Content bounds reported by the host and the per-button frames derived from them

use ratatui::layout::Rect;

/// Rectangle in the controller's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FrameRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is within this frame (right and bottom edges excluded)
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Snap to terminal cells relative to `origin`
    ///
    /// Edges are rounded independently so adjacent frames share a boundary
    /// instead of leaving a gap or overlapping by one cell.
    pub fn to_cells(&self, origin: Rect) -> Rect {
        let left = self.x.round().max(0.0) as u16;
        let right = self.max_x().round().max(0.0) as u16;
        let top = self.y.round().max(0.0) as u16;
        let bottom = (self.y + self.height).round().max(0.0) as u16;
        Rect {
            x: origin.x.saturating_add(left),
            y: origin.y.saturating_add(top),
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }
}

/// Content bounds of the container hosting the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentBounds {
    pub width: f64,
    pub height: f64,
    /// Safe-area bottom inset; 0 on hosts without one
    pub bottom_inset: f64,
}

impl ContentBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, bottom_inset: 0.0 }
    }

    pub fn with_bottom_inset(mut self, bottom_inset: f64) -> Self {
        self.bottom_inset = bottom_inset;
        self
    }
}

impl From<Rect> for ContentBounds {
    fn from(rect: Rect) -> Self {
        Self::new(rect.width as f64, rect.height as f64)
    }
}

/// Frames for `count` buttons sharing the bar's width equally
///
/// Returns an empty vector for zero buttons without dividing.
pub fn button_frames(bounds: ContentBounds, count: usize) -> Vec<FrameRect> {
    if count == 0 {
        return Vec::new();
    }

    let width = bounds.width / count as f64;
    let height = bounds.height - bounds.bottom_inset / 2.0;

    (0..count)
        .map(|index| FrameRect::new(width * index as f64, 0.0, width, height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_buttons_partition_width() {
        let frames = button_frames(ContentBounds::new(300.0, 50.0), 3);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], FrameRect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(frames[1], FrameRect::new(100.0, 0.0, 100.0, 50.0));
        assert_eq!(frames[2], FrameRect::new(200.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn test_no_buttons_no_frames() {
        assert!(button_frames(ContentBounds::new(300.0, 50.0), 0).is_empty());
    }

    #[test]
    fn test_bottom_inset_halved() {
        let bounds = ContentBounds::new(200.0, 83.0).with_bottom_inset(34.0);
        let frames = button_frames(bounds, 2);
        assert_eq!(frames[0].height, 66.0); // 83 - 34 / 2
        assert_eq!(frames[1].x, 100.0);
    }

    #[test]
    fn test_contains_half_open() {
        let frame = FrameRect::new(100.0, 0.0, 100.0, 50.0);
        assert!(frame.contains(100.0, 0.0));
        assert!(frame.contains(199.9, 49.9));
        assert!(!frame.contains(200.0, 10.0));
        assert!(!frame.contains(150.0, 50.0));
    }

    #[test]
    fn test_to_cells_shares_edges() {
        let origin = Rect { x: 2, y: 10, width: 80, height: 3 };
        let frames = button_frames(ContentBounds::new(80.0, 3.0), 3);
        let cells: Vec<Rect> = frames.iter().map(|f| f.to_cells(origin)).collect();
        assert_eq!(cells[0].x, 2);
        assert_eq!(cells[0].x + cells[0].width, cells[1].x);
        assert_eq!(cells[1].x + cells[1].width, cells[2].x);
        assert_eq!(cells[2].x + cells[2].width, 82);
        assert!(cells.iter().all(|c| c.y == 10 && c.height == 3));
    }
}
