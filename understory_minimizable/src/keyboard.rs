// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge for platform keyboard show/hide notifications.
//!
//! The platform layer calls [`KeyboardNotifier::keyboard_will_show`] and
//! [`KeyboardNotifier::keyboard_will_hide`]; the returned [`KeyboardEvent`]
//! is handed to [`PanelState::handle_keyboard`](crate::PanelState::handle_keyboard).
//!
//! ```rust
//! use understory_minimizable::{KeyboardNotifier, PanelState};
//!
//! let mut keyboard = KeyboardNotifier::new();
//! let mut state = PanelState::new();
//! state.present();
//! state.minimize();
//!
//! state.handle_keyboard(keyboard.keyboard_will_show(291.0));
//! assert!(keyboard.is_visible());
//! assert_eq!(keyboard.height(), 291.0);
//! assert!(!state.is_visible());
//!
//! state.handle_keyboard(keyboard.keyboard_will_hide());
//! assert!(state.is_visible());
//! ```

/// A keyboard lifecycle notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyboardEvent {
    /// The keyboard is about to appear with the given height.
    WillShow {
        /// Height of the keyboard frame.
        height: f64,
    },
    /// The keyboard is about to disappear.
    WillHide,
}

/// Tracks whether the software keyboard is shown and how tall it is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyboardNotifier {
    visible: bool,
    height: f64,
}

impl KeyboardNotifier {
    /// Creates a notifier with the keyboard hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the keyboard is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Height of the keyboard, `0` while hidden.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Records that the keyboard will appear.
    ///
    /// Negative or non-finite heights are recorded as `0`.
    pub fn keyboard_will_show(&mut self, height: f64) -> KeyboardEvent {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.visible = true;
        self.height = height;
        log::trace!("keyboard will show, height {height}");
        KeyboardEvent::WillShow { height }
    }

    /// Records that the keyboard will disappear.
    pub fn keyboard_will_hide(&mut self) -> KeyboardEvent {
        self.visible = false;
        self.height = 0.0;
        log::trace!("keyboard will hide");
        KeyboardEvent::WillHide
    }
}
