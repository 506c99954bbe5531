// Layout partitions the bar's width among the buttons

use flashy_tab_bar::{ContentBounds, TabBarController, TabItem};
use proptest::prelude::*;

proptest! {
    #[test]
    fn buttons_partition_width(
        count in 1usize..12,
        width in 1.0f64..2000.0,
        height in 1.0f64..200.0,
        inset in 0.0f64..40.0,
    ) {
        let mut controller = TabBarController::new();
        controller.set_items(Some((0..count).map(|i| TabItem::new(format!("{}", i))).collect()));
        controller.set_bounds(ContentBounds::new(width, height).with_bottom_inset(inset));
        controller.layout_if_needed();

        let frames: Vec<_> = controller.buttons().iter().map(|b| b.frame).collect();
        prop_assert_eq!(frames.len(), count);

        let total: f64 = frames.iter().map(|f| f.width).sum();
        prop_assert!((total - width).abs() < 1e-6 * width.max(1.0));

        prop_assert_eq!(frames[0].x, 0.0);
        for pair in frames.windows(2) {
            prop_assert!(pair[1].x > pair[0].x);
            prop_assert!((pair[0].max_x() - pair[1].x).abs() < 1e-9 * width.max(1.0));
        }
        for frame in &frames {
            prop_assert_eq!(frame.y, 0.0);
            prop_assert!((frame.height - (height - inset / 2.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn layout_follows_bounds_changes(first in 10.0f64..500.0, second in 10.0f64..500.0) {
        let mut controller = TabBarController::new();
        controller.set_items(Some(vec![TabItem::new("a"), TabItem::new("b")]));

        controller.set_bounds(ContentBounds::new(first, 10.0));
        controller.layout_if_needed();
        controller.set_bounds(ContentBounds::new(second, 10.0));
        controller.layout_if_needed();

        prop_assert_eq!(controller.buttons()[1].frame.x, second / 2.0);
    }
}
