// Selection invariants over arbitrary sequences of taps, programmatic and host selections

use flashy_tab_bar::{TabBarController, TabItem};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone)]
enum Op {
    Tap(usize),
    SelectAt(usize, bool),
    AssignKnown(usize),
    AssignUnknown,
    Clear,
    Rebuild(usize),
    Speed(f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8).prop_map(Op::Tap),
        (0usize..8, any::<bool>()).prop_map(|(i, a)| Op::SelectAt(i, a)),
        (0usize..8).prop_map(Op::AssignKnown),
        Just(Op::AssignUnknown),
        Just(Op::Clear),
        (0usize..6).prop_map(Op::Rebuild),
        prop_oneof![
            0.1f64..10.0,
            (-40i32..1).prop_map(|e| 10f64.powi(e)),
            Just(0.0),
            Just(-1.0),
            Just(f64::NAN),
        ]
        .prop_map(Op::Speed),
    ]
}

fn items(count: usize) -> Vec<TabItem> {
    (0..count).map(|i| TabItem::new(format!("Tab {}", i))).collect()
}

/// I1 and I2: at most one selected button, and the selected item is exactly its item
fn assert_consistent(controller: &TabBarController) {
    let selected: Vec<usize> = controller
        .buttons()
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_selected())
        .map(|(i, _)| i)
        .collect();
    assert!(selected.len() <= 1, "more than one selected: {:?}", selected);

    match (selected.first(), controller.selected_item()) {
        (Some(&index), Some(item)) => {
            let items = controller.items().unwrap();
            assert!(items[index].is(item));
            assert!(controller.buttons()[index].item().is(item));
        }
        (None, None) => {}
        (button, item) => panic!("button {:?} vs selected item {:?}", button, item),
    }
}

proptest! {
    #[test]
    fn selection_stays_consistent(count in 0usize..6, ops in prop::collection::vec(op(), 0..40)) {
        let mut controller = TabBarController::new();
        controller.set_items(Some(items(count)));
        let notified = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&notified);
        controller.set_delegate(move |_: &TabBarController, _: &TabItem| counter.set(counter.get() + 1));

        let mut taps = 0;
        for op in ops {
            let before = controller.selected_item().cloned();
            match op {
                Op::Tap(i) => {
                    if let Some(id) = controller.button(i).map(|b| b.id()) {
                        controller.handle_tap(id);
                        taps += 1;
                    }
                }
                Op::SelectAt(i, animated) => {
                    controller.select_item_at(i, animated);
                    let items = controller.items().unwrap_or_default();
                    if i < items.len() {
                        // P2
                        prop_assert!(controller.selected_item().unwrap().is(&items[i]));
                    } else {
                        // P5
                        prop_assert_eq!(controller.selected_item(), before.as_ref());
                    }
                }
                Op::AssignKnown(i) => {
                    let item = controller.items().and_then(|items| items.get(i)).cloned();
                    if let Some(item) = item {
                        controller.set_selected_item(Some(item.clone()));
                        prop_assert_eq!(controller.selected_item(), Some(&item));
                    }
                }
                Op::AssignUnknown => {
                    let flags: Vec<bool> = controller.buttons().iter().map(|b| b.is_selected()).collect();
                    controller.set_selected_item(Some(TabItem::new("stranger")));
                    let after: Vec<bool> = controller.buttons().iter().map(|b| b.is_selected()).collect();
                    prop_assert_eq!(flags, after);
                    prop_assert_eq!(controller.selected_item(), before.as_ref());
                }
                Op::Clear => {
                    controller.set_selected_item(None);
                    prop_assert!(controller.selected_item().is_none());
                }
                Op::Rebuild(n) => {
                    // Keep the current selection among the new items half of the time
                    let mut next = items(n);
                    if let (Some(current), true) = (before.clone(), n % 2 == 0 && n > 0) {
                        next[0] = current;
                    }
                    controller.set_items(Some(next));
                    // P3
                    prop_assert_eq!(controller.buttons().len(), n);
                }
                Op::Speed(speed) => {
                    let selected = controller.selected_index();
                    let previous = controller.animation_speed();
                    match controller.set_animation_speed(speed) {
                        Ok(()) => prop_assert_eq!(controller.animation_speed(), speed),
                        Err(_) => prop_assert_eq!(controller.animation_speed(), previous),
                    }
                    prop_assert_eq!(controller.selected_index(), selected);
                }
            }
            assert_consistent(&controller);
        }

        // P6: only taps notify
        prop_assert_eq!(notified.get(), taps);
    }
}
