// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimizable panel walkthrough.
//!
//! Present a panel, swipe it down into its compact form, pull it back up, and
//! print the derived geometry at each step.
//!
//! Run:
//! - `cargo run -p understory_minimizable_demos --example panel_walkthrough`

use kurbo::Size;
use understory_minimizable::{
    DragRecognizer, KeyboardNotifier, MinimizablePanel, PanelState, Renderable, Settings,
    TabBarProbe, Viewport,
};
use understory_minimizable_demos::describe_frame;

struct NowPlaying;
impl Renderable for NowPlaying {}

struct MiniPlayer;
impl Renderable for MiniPlayer {}

fn print_frame<C, P: Renderable, B>(
    label: &str,
    panel: &MinimizablePanel<C, P, B>,
    state: &PanelState,
    viewport: &Viewport,
) {
    println!("{}", describe_frame(label, panel, state, viewport));
}

fn main() {
    let settings = Settings::builder()
        .minimized_height(60.0)
        .lateral_margin(8.0)
        .build()
        .expect("valid settings");
    let panel = MinimizablePanel::new(NowPlaying, MiniPlayer, (), settings);

    let mut tab_bar = TabBarProbe::new();
    let mut viewport = Viewport::new(Size::new(390.0, 844.0)).with_safe_area_bottom(34.0);
    tab_bar.report(49.0);
    tab_bar.apply(&mut viewport);

    let mut state = PanelState::new();
    state.set_on_present(|_| println!("-> presented"));
    state.set_on_minimize(|_| println!("-> minimized"));
    state.set_on_expand(|_| println!("-> expanded"));
    state.set_on_dismiss(|_| println!("-> dismissed"));

    let mut drag = DragRecognizer::new();
    let mut keyboard = KeyboardNotifier::new();

    print_frame("dismissed", &panel, &state, &viewport);
    state.present();
    print_frame("presented", &panel, &state, &viewport);

    for dy in [5.0, 40.0, 120.0] {
        drag.on_drag_changed(&mut state, panel.settings(), dy);
        print_frame(&format!("dragging down {dy}"), &panel, &state, &viewport);
    }
    drag.on_drag_ended(&mut state, panel.settings(), 120.0);
    print_frame("released", &panel, &state, &viewport);

    state.handle_keyboard(keyboard.keyboard_will_show(291.0));
    print_frame("keyboard shown", &panel, &state, &viewport);
    state.handle_keyboard(keyboard.keyboard_will_hide());

    for dy in [-30.0, -80.0, -140.0] {
        drag.on_drag_changed(&mut state, panel.settings(), dy);
        print_frame(&format!("dragging up {dy}"), &panel, &state, &viewport);
    }
    drag.on_drag_ended(&mut state, panel.settings(), -140.0);
    print_frame("released", &panel, &state, &viewport);

    if let Some(handle) = panel.handle() {
        handle.on_tap(&mut state);
        print_frame("handle tapped", &panel, &state, &viewport);
    }

    state.dismiss();
    print_frame("dismissed", &panel, &state, &viewport);
}
