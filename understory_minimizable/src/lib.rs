// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Minimizable: a headless minimizable overlay panel.
//!
//! The panel is a card that covers the screen when expanded and collapses into
//! a compact preview near the bottom edge when minimized, like a
//! picture-in-picture player or a bottom sheet. This crate models it without
//! a UI framework:
//!
//! - [`PanelState`]: the presentation state machine (`presented`,
//!   `minimized`, drag offset, visibility) with lifecycle callbacks and
//!   subscribers.
//! - [`PanelLayout`]: pure derivation of offset, size, position and opacity
//!   from the state, the [`Settings`] and the [`Viewport`].
//! - [`DragRecognizer`]: turns raw vertical drag translations into drag
//!   offsets and minimize/expand transitions.
//! - [`MinimizablePanel`]: composes the content, compact and background
//!   renderables into a [`PanelScene`].
//! - Helpers: [`DragHandle`], [`TabBarProbe`] and [`KeyboardNotifier`].
//!
//! Hosts own one [`PanelState`] per panel and pass it explicitly to whatever
//! needs it. Gesture recognition, keyboard notifications and tab-bar
//! introspection come from the platform; this crate only consumes their
//! results.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_minimizable::{
//!     DragRecognizer, MinimizablePanel, PanelState, Renderable, Settings, Viewport,
//! };
//!
//! struct Player;
//! impl Renderable for Player {}
//! struct MiniPlayer;
//! impl Renderable for MiniPlayer {}
//!
//! let panel = MinimizablePanel::new(Player, MiniPlayer, (), Settings::default());
//! let viewport = Viewport::new(Size::new(390.0, 844.0)).with_safe_area_bottom(34.0);
//! let mut state = PanelState::new();
//! let mut drag = DragRecognizer::new();
//!
//! state.present();
//! assert!(panel.scene(&state, &viewport).compact.is_none());
//!
//! // Swipe down far enough to minimize.
//! drag.on_drag_changed(&mut state, panel.settings(), 120.0);
//! drag.on_drag_ended(&mut state, panel.settings(), 120.0);
//!
//! let scene = panel.scene(&state, &viewport);
//! assert!(state.is_minimized());
//! assert!(scene.compact.is_some());
//! assert_eq!(scene.layout.frame_height(), 44.0);
//! ```
//!
//! ## Logging
//!
//! Transitions are logged at `debug` and gesture or keyboard activity at
//! `trace` through the [`log`] facade. Install any logger to see them.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod gesture;
mod handle;
mod keyboard;
mod layout;
mod panel;
mod settings;
mod state;
mod tab_bar;

pub use gesture::{DragOutcome, DragRecognizer};
pub use handle::{DragHandle, HandleStyle};
pub use keyboard::{KeyboardEvent, KeyboardNotifier};
pub use layout::{PanelLayout, Viewport};
pub use panel::{BackgroundLayer, Layer, MinimizablePanel, PanelScene, Renderable};
pub use settings::{DragTrigger, Settings, SettingsBuilder, SettingsError};
pub use state::{
    PanelCallback, PanelEvent, PanelObserver, PanelSnapshot, PanelState, SubscriptionId,
};
pub use tab_bar::TabBarProbe;
