// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_minimizable` crate.
//!
//! These drive `PanelState` through every transition from every starting
//! state, and run a full present / drag / minimize scenario through the
//! recognizer and the composed scene.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use understory_minimizable::{
    DragOutcome, DragRecognizer, KeyboardNotifier, MinimizablePanel, PanelEvent, PanelState,
    Renderable, Settings, Viewport,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    Present,
    Dismiss,
    Minimize,
    Expand,
    Toggle,
}

const OPS: [Op; 5] = [Op::Present, Op::Dismiss, Op::Minimize, Op::Expand, Op::Toggle];

fn state_at(presented: bool, minimized: bool) -> PanelState {
    let mut state = PanelState::new();
    if presented {
        state.present();
    }
    if minimized {
        state.minimize();
    }
    assert_eq!((state.is_presented(), state.is_minimized()), (presented, minimized));
    state
}

fn apply(state: &mut PanelState, op: Op) -> bool {
    match op {
        Op::Present => state.present(),
        Op::Dismiss => state.dismiss(),
        Op::Minimize => state.minimize(),
        Op::Expand => state.expand(),
        Op::Toggle => state.toggle(),
    }
}

fn recorder(state: &mut PanelState) -> Rc<RefCell<Vec<&'static str>>> {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let (a, b, c, d) = (fired.clone(), fired.clone(), fired.clone(), fired.clone());
    state.set_on_present(move |_| a.borrow_mut().push("present"));
    state.set_on_dismiss(move |_| b.borrow_mut().push("dismiss"));
    state.set_on_expand(move |_| c.borrow_mut().push("expand"));
    state.set_on_minimize(move |_| d.borrow_mut().push("minimize"));
    fired
}

/// Expected `(presented, minimized, callbacks)` after `op` from `(presented, minimized)`.
fn expected(presented: bool, minimized: bool, op: Op) -> (bool, bool, Vec<&'static str>) {
    match op {
        Op::Present if !presented => (true, minimized, vec!["present"]),
        Op::Dismiss if presented => (false, false, vec!["dismiss"]),
        Op::Minimize if !minimized => (presented, true, vec!["minimize"]),
        Op::Expand if minimized && presented => (presented, false, vec!["expand"]),
        Op::Expand if minimized => (presented, false, vec![]),
        Op::Toggle if minimized => expected(presented, minimized, Op::Expand),
        Op::Toggle => expected(presented, minimized, Op::Minimize),
        _ => (presented, minimized, vec![]),
    }
}

#[test]
fn transition_table_covers_every_state_and_operation() {
    for presented in [false, true] {
        for minimized in [false, true] {
            for op in OPS {
                let mut state = state_at(presented, minimized);
                let fired = recorder(&mut state);

                apply(&mut state, op);

                let (p, m, callbacks) = expected(presented, minimized, op);
                assert_eq!(
                    (state.is_presented(), state.is_minimized()),
                    (p, m),
                    "{op:?} from presented={presented} minimized={minimized}"
                );
                assert_eq!(
                    *fired.borrow(),
                    callbacks,
                    "{op:?} from presented={presented} minimized={minimized}"
                );
            }
        }
    }
}

#[test]
fn repeating_any_operation_is_a_no_op() {
    for op in [Op::Present, Op::Dismiss, Op::Minimize, Op::Expand] {
        for presented in [false, true] {
            for minimized in [false, true] {
                let mut state = state_at(presented, minimized);
                apply(&mut state, op);
                let after_first = state.snapshot();
                let fired = recorder(&mut state);

                assert!(!apply(&mut state, op), "{op:?} twice");
                assert_eq!(state.snapshot(), after_first);
                assert!(fired.borrow().is_empty());
            }
        }
    }
}

#[test]
fn toggle_matches_minimize_and_expand() {
    for presented in [false, true] {
        for minimized in [false, true] {
            let mut toggled = state_at(presented, minimized);
            let mut direct = state_at(presented, minimized);
            let toggled_fired = recorder(&mut toggled);
            let direct_fired = recorder(&mut direct);

            toggled.toggle();
            if minimized {
                direct.expand();
            } else {
                direct.minimize();
            }

            assert_eq!(toggled.snapshot(), direct.snapshot());
            assert_eq!(*toggled_fired.borrow(), *direct_fired.borrow());
        }
    }
}

struct Content;
impl Renderable for Content {}

struct Compact;
impl Renderable for Compact {}

#[test]
fn present_then_swipe_down_minimizes() {
    let settings = Settings::builder()
        .minimized_height(60.0)
        .minimize_threshold(80.0)
        .build()
        .unwrap();
    let panel = MinimizablePanel::new(Content, Compact, (), settings);
    let viewport = Viewport::new(Size::new(390.0, 844.0));
    let mut state = PanelState::new();
    let mut drag = DragRecognizer::new();
    let fired = recorder(&mut state);
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    state.subscribe(move |event, snapshot| sink.borrow_mut().push((event, snapshot.minimized)));

    let parked = panel.layout(&state, &viewport);
    assert!(parked.frame_rect().y0 >= 844.0);

    state.present();
    assert_eq!((state.is_presented(), state.is_minimized()), (true, false));
    assert_eq!(*fired.borrow(), ["present"]);

    for step in [20.0, 60.0, 120.0] {
        assert_eq!(
            drag.on_drag_changed(&mut state, panel.settings(), step),
            DragOutcome::Tracking
        );
        let layout = panel.layout(&state, &viewport);
        assert_eq!(layout.vertical_offset, step);
    }

    assert_eq!(
        drag.on_drag_ended(&mut state, panel.settings(), 120.0),
        DragOutcome::Minimized
    );
    assert_eq!((state.is_presented(), state.is_minimized()), (true, true));
    assert_eq!(state.drag_offset_y(), 0.0);
    assert_eq!(*fired.borrow(), ["present", "minimize"]);
    assert_eq!(
        *events.borrow(),
        [(PanelEvent::Presented, false), (PanelEvent::Minimized, true)]
    );

    let scene = panel.scene(&state, &viewport);
    assert_eq!(scene.layout.frame_height(), 60.0);
    assert_eq!(scene.layout.vertical_offset, 0.0);
    assert!(scene.compact.is_some());
}

#[test]
fn swipe_up_from_minimized_stretches_then_expands() {
    let settings = Settings::builder()
        .minimized_height(60.0)
        .expand_threshold(100.0)
        .build()
        .unwrap();
    let panel = MinimizablePanel::new(Content, Compact, (), settings);
    let viewport = Viewport::new(Size::new(390.0, 844.0));
    let mut state = PanelState::new();
    let mut drag = DragRecognizer::new();
    state.present();
    state.minimize();
    let fired = recorder(&mut state);

    drag.on_drag_changed(&mut state, panel.settings(), -30.0);
    let layout = panel.layout(&state, &viewport);
    assert_eq!(layout.frame_height(), 90.0);
    assert!(layout.content_opacity > 0.0 && layout.compact_opacity < 1.0);

    drag.on_drag_changed(&mut state, panel.settings(), -140.0);
    assert_eq!(
        drag.on_drag_ended(&mut state, panel.settings(), -140.0),
        DragOutcome::Expanded
    );
    assert!(!state.is_minimized());
    assert_eq!(*fired.borrow(), ["expand"]);

    let layout = panel.layout(&state, &viewport);
    assert_eq!(layout.frame_height(), 844.0);
    assert!(!layout.compact_visible);
}

#[test]
fn dismiss_from_minimized_parks_panel_and_fires_once() {
    let panel = MinimizablePanel::new(Content, Compact, (), Settings::default());
    let viewport = Viewport::new(Size::new(390.0, 844.0));
    let mut state = PanelState::new();
    state.present();
    state.minimize();
    let fired = recorder(&mut state);

    assert!(state.dismiss());

    assert_eq!(*fired.borrow(), ["dismiss"]);
    let layout = panel.layout(&state, &viewport);
    assert!(!layout.compact_visible);
    assert!(!layout.is_drawn(&viewport));
}

#[test]
fn expanding_while_keyboard_is_up_draws_the_panel() {
    let panel = MinimizablePanel::new(Content, Compact, (), Settings::default());
    let viewport = Viewport::new(Size::new(390.0, 844.0));
    let mut state = PanelState::new();
    let mut keyboard = KeyboardNotifier::new();
    state.present();
    state.minimize();

    state.handle_keyboard(keyboard.keyboard_will_show(291.0));
    assert!(!panel.layout(&state, &viewport).is_drawn(&viewport));

    state.expand();
    let layout = panel.layout(&state, &viewport);
    assert!(state.is_visible());
    assert_eq!(layout.content_opacity, 1.0);
    assert!(layout.is_drawn(&viewport));
}
