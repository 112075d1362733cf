// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical drag recognizer that drives panel transitions.
//!
//! ## Usage
//!
//! 1) Forward every drag-change event with its vertical translation to
//!    [`DragRecognizer::on_drag_changed`].
//! 2) Forward the release to [`DragRecognizer::on_drag_ended`], or a system
//!    cancel to [`DragRecognizer::on_drag_cancelled`].
//!
//! While dragging, the recognizer writes the translation into
//! [`PanelState::set_drag_offset_y`]. On release it minimizes an expanded
//! panel dragged down past [`Settings::minimize_threshold`] and expands a
//! minimized panel dragged up past [`Settings::expand_threshold`]. The drag
//! offset always returns to `0` when the gesture ends.
//!
//! ```
//! use understory_minimizable::{DragOutcome, DragRecognizer, PanelState, Settings};
//!
//! let settings = Settings::default();
//! let mut state = PanelState::new();
//! let mut drag = DragRecognizer::new();
//! state.present();
//!
//! assert_eq!(drag.on_drag_changed(&mut state, &settings, 120.0), DragOutcome::Tracking);
//! assert_eq!(state.drag_offset_y(), 120.0);
//!
//! assert_eq!(drag.on_drag_ended(&mut state, &settings, 120.0), DragOutcome::Minimized);
//! assert!(state.is_minimized());
//! assert_eq!(state.drag_offset_y(), 0.0);
//! ```

use crate::settings::{DragTrigger, Settings};
use crate::state::PanelState;

/// What a drag event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragOutcome {
    /// The event was not reported: panel dismissed, or still under the minimum distance.
    Ignored,
    /// The drag offset was updated.
    Tracking,
    /// The panel was minimized.
    Minimized,
    /// The panel was expanded.
    Expanded,
    /// The gesture ended without a transition.
    Released,
}

/// Tracks one vertical drag gesture at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragRecognizer {
    active: bool,
    fired: bool,
}

impl DragRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once the current gesture passed the minimum drag distance.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active
    }

    /// Handles a drag-change event with the translation since the gesture began.
    pub fn on_drag_changed(
        &mut self,
        state: &mut PanelState,
        settings: &Settings,
        translation_y: f64,
    ) -> DragOutcome {
        if !state.is_presented() {
            return DragOutcome::Ignored;
        }
        if !self.active {
            if translation_y.abs() < settings.minimum_drag_distance() {
                return DragOutcome::Ignored;
            }
            log::trace!("drag started at {translation_y}");
            self.active = true;
        }
        state.set_drag_offset_y(translation_y);

        if settings.drag_trigger() == DragTrigger::Immediate && !self.fired {
            let outcome = apply_thresholds(state, settings, translation_y);
            if outcome != DragOutcome::Released {
                self.fired = true;
                return outcome;
            }
        }
        DragOutcome::Tracking
    }

    /// Handles the release of the gesture.
    ///
    /// A release past the minimum drag distance counts even when no change
    /// event was delivered before it.
    pub fn on_drag_ended(
        &mut self,
        state: &mut PanelState,
        settings: &Settings,
        translation_y: f64,
    ) -> DragOutcome {
        let was_active =
            self.active || translation_y.abs() >= settings.minimum_drag_distance();
        let fired = self.fired;
        self.reset(state);

        if !was_active || !state.is_presented() {
            return DragOutcome::Ignored;
        }
        match settings.drag_trigger() {
            DragTrigger::OnRelease => apply_thresholds(state, settings, translation_y),
            DragTrigger::Immediate if !fired => apply_thresholds(state, settings, translation_y),
            DragTrigger::Immediate => DragOutcome::Released,
        }
    }

    /// Handles a cancelled gesture; never transitions.
    pub fn on_drag_cancelled(&mut self, state: &mut PanelState) -> DragOutcome {
        let was_active = self.active;
        self.reset(state);
        if was_active {
            DragOutcome::Released
        } else {
            DragOutcome::Ignored
        }
    }

    fn reset(&mut self, state: &mut PanelState) {
        self.active = false;
        self.fired = false;
        state.reset_drag_offset();
    }
}

fn apply_thresholds(
    state: &mut PanelState,
    settings: &Settings,
    translation_y: f64,
) -> DragOutcome {
    if state.is_minimized() {
        if translation_y < -settings.expand_threshold() && state.expand() {
            return DragOutcome::Expanded;
        }
    } else if translation_y > settings.minimize_threshold() && state.minimize() {
        return DragOutcome::Minimized;
    }
    DragOutcome::Released
}
