// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation state of a minimizable panel.
//!
//! [`PanelState`] owns the `presented` / `minimized` flags, the in-progress
//! drag offset and a visibility flag, and dispatches lifecycle callbacks.
//!
//! ## Transitions
//!
//! | method | guard | effect | callback |
//! |---|---|---|---|
//! | [`present`](PanelState::present) | not presented | `presented = true` | `on_present` |
//! | [`dismiss`](PanelState::dismiss) | presented | `presented = false`, `minimized = false` | `on_dismiss` |
//! | [`minimize`](PanelState::minimize) | not minimized | `minimized = true` | `on_minimize` |
//! | [`expand`](PanelState::expand) | minimized | `minimized = false` | `on_expand` if presented |
//! | [`toggle`](PanelState::toggle) | | `expand` or `minimize` | per above |
//!
//! A call whose guard fails is a no-op and fires nothing. Callbacks and
//! subscribers run after the mutation, so they always see the new state.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_minimizable::PanelState;
//!
//! let presented = Rc::new(Cell::new(0));
//! let mut state = PanelState::new();
//! let counter = presented.clone();
//! state.set_on_present(move |snapshot| {
//!     assert!(snapshot.presented);
//!     counter.set(counter.get() + 1);
//! });
//!
//! assert!(state.present());
//! assert!(!state.present());
//! assert_eq!(presented.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::keyboard::KeyboardEvent;

/// Lifecycle callback; receives the state after the transition.
pub type PanelCallback = Box<dyn FnMut(&PanelSnapshot)>;

/// Subscriber callback; receives the event and the state after the transition.
pub type PanelObserver = Box<dyn FnMut(PanelEvent, &PanelSnapshot)>;

/// A lifecycle transition delivered to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelEvent {
    /// The panel appeared.
    Presented,
    /// The panel was removed.
    Dismissed,
    /// The panel left the minimized form while presented.
    Expanded,
    /// The panel entered the minimized form.
    Minimized,
    /// The visibility flag changed; see [`PanelState::set_visible`].
    VisibilityChanged,
}

/// A copy of the value fields of a [`PanelState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSnapshot {
    /// Whether the panel is on screen at all.
    pub presented: bool,
    /// Whether the panel is in compact form.
    pub minimized: bool,
    /// Signed vertical translation of the drag in progress; `0` when idle.
    pub drag_offset_y: f64,
    /// Whether the panel is shown; cleared while a keyboard covers a minimized panel.
    pub visible: bool,
}

impl Default for PanelSnapshot {
    fn default() -> Self {
        Self {
            presented: false,
            minimized: false,
            drag_offset_y: 0.0,
            visible: true,
        }
    }
}

/// Handle returned by [`PanelState::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

#[derive(Default)]
struct Callbacks {
    on_present: Option<PanelCallback>,
    on_dismiss: Option<PanelCallback>,
    on_expand: Option<PanelCallback>,
    on_minimize: Option<PanelCallback>,
}

/// Presentation state machine shared by the host screen, the layout and the
/// gesture recognizer.
///
/// Mutate it only through the transition methods; there are no public fields.
#[derive(Default)]
pub struct PanelState {
    snapshot: PanelSnapshot,
    callbacks: Callbacks,
    observers: Vec<(SubscriptionId, PanelObserver)>,
    next_subscription: u32,
    revision: u64,
    hidden_by_host: bool,
    keyboard_shown: bool,
}

impl fmt::Debug for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelState")
            .field("snapshot", &self.snapshot)
            .field("observers", &self.observers.len())
            .field("revision", &self.revision)
            .field("hidden_by_host", &self.hidden_by_host)
            .field("keyboard_shown", &self.keyboard_shown)
            .finish_non_exhaustive()
    }
}

impl PanelState {
    /// Creates a dismissed, expanded, visible state with no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current value fields.
    #[must_use]
    #[inline]
    pub fn snapshot(&self) -> PanelSnapshot {
        self.snapshot
    }

    /// Whether the panel is on screen.
    #[must_use]
    #[inline]
    pub fn is_presented(&self) -> bool {
        self.snapshot.presented
    }

    /// Whether the panel is in compact form.
    #[must_use]
    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.snapshot.minimized
    }

    /// Vertical translation of the drag in progress.
    #[must_use]
    #[inline]
    pub fn drag_offset_y(&self) -> f64 {
        self.snapshot.drag_offset_y
    }

    /// Whether the panel is shown.
    #[must_use]
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.snapshot.visible
    }

    /// Monotonic counter bumped on every observable change.
    #[must_use]
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Presents the panel. Returns `true` if it was not presented before.
    pub fn present(&mut self) -> bool {
        if self.snapshot.presented {
            return false;
        }
        self.snapshot.presented = true;
        self.transitioned(PanelEvent::Presented);
        true
    }

    /// Dismisses the panel, also leaving the minimized form.
    ///
    /// Only `on_dismiss` fires; the forced `minimized = false` is silent.
    pub fn dismiss(&mut self) -> bool {
        if !self.snapshot.presented {
            return false;
        }
        self.snapshot.presented = false;
        self.snapshot.minimized = false;
        self.transitioned(PanelEvent::Dismissed);
        true
    }

    /// Minimizes the panel. Returns `true` if it was expanded before.
    ///
    /// This does not require the panel to be presented.
    pub fn minimize(&mut self) -> bool {
        if self.snapshot.minimized {
            return false;
        }
        self.snapshot.minimized = true;
        self.transitioned(PanelEvent::Minimized);
        true
    }

    /// Expands the panel. Returns `true` if it was minimized before.
    ///
    /// `on_expand` fires only while presented.
    pub fn expand(&mut self) -> bool {
        if !self.snapshot.minimized {
            return false;
        }
        self.snapshot.minimized = false;
        if self.snapshot.presented {
            self.transitioned(PanelEvent::Expanded);
        } else {
            let visibility_changed = self.update_visibility();
            self.revision += 1;
            log::debug!("panel expanded while dismissed; no callback");
            if visibility_changed {
                self.changed(PanelEvent::VisibilityChanged);
            }
        }
        true
    }

    /// Expands a minimized panel, minimizes an expanded one.
    pub fn toggle(&mut self) -> bool {
        if self.snapshot.minimized {
            self.expand()
        } else {
            self.minimize()
        }
    }

    /// Records the translation of the drag in progress.
    pub fn set_drag_offset_y(&mut self, offset: f64) {
        if self.snapshot.drag_offset_y == offset {
            return;
        }
        self.snapshot.drag_offset_y = offset;
        self.revision += 1;
    }

    /// Clears the drag offset, as at the end of every gesture.
    pub fn reset_drag_offset(&mut self) {
        self.set_drag_offset_y(0.0);
    }

    /// Hides or shows the panel without touching `presented` / `minimized`.
    ///
    /// Returns `true` if the effective visibility changed. A panel shown here
    /// still stays hidden while a keyboard covers it in minimized form.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        self.hidden_by_host = !visible;
        self.refresh_visibility()
    }

    /// Applies a keyboard lifecycle event.
    ///
    /// The panel is hidden while the keyboard is shown and the panel is
    /// minimized. Expanding, dismissing or hiding the keyboard shows it again.
    pub fn handle_keyboard(&mut self, event: KeyboardEvent) {
        self.keyboard_shown = matches!(event, KeyboardEvent::WillShow { .. });
        self.refresh_visibility();
    }

    /// Sets the callback fired when the panel is presented.
    pub fn set_on_present(&mut self, callback: impl FnMut(&PanelSnapshot) + 'static) {
        self.callbacks.on_present = Some(Box::new(callback));
    }

    /// Sets the callback fired when the panel is dismissed.
    pub fn set_on_dismiss(&mut self, callback: impl FnMut(&PanelSnapshot) + 'static) {
        self.callbacks.on_dismiss = Some(Box::new(callback));
    }

    /// Sets the callback fired when a presented panel expands.
    pub fn set_on_expand(&mut self, callback: impl FnMut(&PanelSnapshot) + 'static) {
        self.callbacks.on_expand = Some(Box::new(callback));
    }

    /// Sets the callback fired when the panel minimizes.
    pub fn set_on_minimize(&mut self, callback: impl FnMut(&PanelSnapshot) + 'static) {
        self.callbacks.on_minimize = Some(Box::new(callback));
    }

    /// Removes all four lifecycle callbacks.
    pub fn clear_callbacks(&mut self) {
        self.callbacks = Callbacks::default();
    }

    /// Registers a subscriber for every [`PanelEvent`].
    ///
    /// Subscribers run after the matching lifecycle callback, in
    /// registration order.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(PanelEvent, &PanelSnapshot) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        self.observers.len() != before
    }

    /// Recomputes `visible` from the host flag, the keyboard and the form.
    ///
    /// Returns `true` if it changed. Fires nothing.
    fn update_visibility(&mut self) -> bool {
        let visible =
            !self.hidden_by_host && !(self.keyboard_shown && self.snapshot.minimized);
        let changed = visible != self.snapshot.visible;
        self.snapshot.visible = visible;
        changed
    }

    fn refresh_visibility(&mut self) -> bool {
        if !self.update_visibility() {
            return false;
        }
        self.changed(PanelEvent::VisibilityChanged);
        true
    }

    /// Dispatches `event`, followed by a visibility change it caused.
    fn transitioned(&mut self, event: PanelEvent) {
        let visibility_changed = self.update_visibility();
        self.changed(event);
        if visibility_changed {
            self.changed(PanelEvent::VisibilityChanged);
        }
    }

    fn changed(&mut self, event: PanelEvent) {
        self.revision += 1;
        log::debug!("panel {event:?}: {:?}", self.snapshot);
        let snapshot = self.snapshot;
        let callback = match event {
            PanelEvent::Presented => self.callbacks.on_present.as_mut(),
            PanelEvent::Dismissed => self.callbacks.on_dismiss.as_mut(),
            PanelEvent::Expanded => self.callbacks.on_expand.as_mut(),
            PanelEvent::Minimized => self.callbacks.on_minimize.as_mut(),
            PanelEvent::VisibilityChanged => None,
        };
        if let Some(callback) = callback {
            callback(&snapshot);
        }
        for (_, observer) in &mut self.observers {
            observer(event, &snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::{Cell, RefCell};

    fn counting(state: &mut PanelState) -> [Rc<Cell<u32>>; 4] {
        let counts: [Rc<Cell<u32>>; 4] = core::array::from_fn(|_| Rc::new(Cell::new(0)));
        let c = counts.clone();
        let [present, dismiss, expand, minimize] = c;
        state.set_on_present(move |_| present.set(present.get() + 1));
        state.set_on_dismiss(move |_| dismiss.set(dismiss.get() + 1));
        state.set_on_expand(move |_| expand.set(expand.get() + 1));
        state.set_on_minimize(move |_| minimize.set(minimize.get() + 1));
        counts
    }

    fn totals(counts: &[Rc<Cell<u32>>; 4]) -> [u32; 4] {
        [
            counts[0].get(),
            counts[1].get(),
            counts[2].get(),
            counts[3].get(),
        ]
    }

    #[test]
    fn new_state_is_dismissed_expanded_visible() {
        let state = PanelState::new();
        assert!(!state.is_presented());
        assert!(!state.is_minimized());
        assert!(state.is_visible());
        assert_eq!(state.drag_offset_y(), 0.0);
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn repeated_commands_fire_once() {
        let mut state = PanelState::new();
        let counts = counting(&mut state);

        assert!(state.present());
        assert!(!state.present());
        assert!(state.minimize());
        assert!(!state.minimize());
        assert!(state.expand());
        assert!(!state.expand());
        assert!(state.dismiss());
        assert!(!state.dismiss());

        assert_eq!(totals(&counts), [1, 1, 1, 1]);
    }

    #[test]
    fn dismiss_while_minimized_fires_only_dismiss() {
        let mut state = PanelState::new();
        state.present();
        state.minimize();
        let counts = counting(&mut state);

        assert!(state.dismiss());

        assert!(!state.is_presented());
        assert!(!state.is_minimized());
        assert_eq!(totals(&counts), [0, 1, 0, 0]);
    }

    #[test]
    fn expand_while_dismissed_is_silent() {
        let mut state = PanelState::new();
        let counts = counting(&mut state);

        assert!(state.minimize());
        assert!(state.expand());

        assert_eq!(totals(&counts), [0, 0, 0, 1]);
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn callbacks_see_updated_state() {
        let mut state = PanelState::new();
        let seen = Rc::new(RefCell::new(vec![]));
        let sink = seen.clone();
        state.set_on_minimize(move |s| sink.borrow_mut().push((s.presented, s.minimized)));

        state.present();
        state.minimize();

        assert_eq!(*seen.borrow(), vec![(true, true)]);
    }

    #[test]
    fn subscribers_receive_events_in_order() {
        let mut state = PanelState::new();
        let events = Rc::new(RefCell::new(vec![]));
        let sink = events.clone();
        state.subscribe(move |event, _| sink.borrow_mut().push(event));

        state.present();
        state.toggle();
        state.toggle();
        state.set_visible(false);
        state.dismiss();

        assert_eq!(
            *events.borrow(),
            vec![
                PanelEvent::Presented,
                PanelEvent::Minimized,
                PanelEvent::Expanded,
                PanelEvent::VisibilityChanged,
                PanelEvent::Dismissed,
            ]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut state = PanelState::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let id = state.subscribe(move |_, _| h.set(h.get() + 1));

        state.present();
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.dismiss();

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn callback_fires_before_subscribers() {
        let mut state = PanelState::new();
        let order = Rc::new(RefCell::new(vec![]));
        let a = order.clone();
        let b = order.clone();
        state.subscribe(move |_, _| b.borrow_mut().push("observer"));
        state.set_on_present(move |_| a.borrow_mut().push("callback"));

        state.present();

        assert_eq!(*order.borrow(), vec!["callback", "observer"]);
    }

    #[test]
    fn drag_offset_changes_bump_revision() {
        let mut state = PanelState::new();
        state.set_drag_offset_y(12.0);
        state.set_drag_offset_y(12.0);
        assert_eq!(state.revision(), 1);
        state.reset_drag_offset();
        assert_eq!(state.drag_offset_y(), 0.0);
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn keyboard_hides_only_minimized_panel() {
        let mut state = PanelState::new();
        state.present();

        state.handle_keyboard(KeyboardEvent::WillShow { height: 300.0 });
        assert!(state.is_visible());

        state.minimize();
        state.handle_keyboard(KeyboardEvent::WillShow { height: 300.0 });
        assert!(!state.is_visible());
        assert!(state.is_minimized());

        state.handle_keyboard(KeyboardEvent::WillHide);
        assert!(state.is_visible());
    }

    #[test]
    fn expanding_under_keyboard_shows_panel() {
        let mut state = PanelState::new();
        state.present();
        state.minimize();
        state.handle_keyboard(KeyboardEvent::WillShow { height: 300.0 });
        assert!(!state.is_visible());

        let seen = Rc::new(Cell::new(false));
        let sink = seen.clone();
        state.set_on_expand(move |s| sink.set(s.visible));
        state.expand();

        assert!(state.is_visible());
        assert!(seen.get());

        // Minimizing again while the keyboard is still up hides it again.
        state.minimize();
        assert!(!state.is_visible());
    }

    #[test]
    fn dismiss_under_keyboard_restores_visibility() {
        let mut state = PanelState::new();
        state.present();
        state.minimize();
        state.handle_keyboard(KeyboardEvent::WillShow { height: 300.0 });

        state.dismiss();
        assert!(state.is_visible());
        state.present();
        assert!(state.is_visible());
    }

    #[test]
    fn keyboard_visibility_change_follows_transition_event() {
        let mut state = PanelState::new();
        state.present();
        state.minimize();
        state.handle_keyboard(KeyboardEvent::WillShow { height: 300.0 });
        let events = Rc::new(RefCell::new(vec![]));
        let sink = events.clone();
        state.subscribe(move |event, _| sink.borrow_mut().push(event));

        state.expand();

        assert_eq!(
            *events.borrow(),
            vec![PanelEvent::Expanded, PanelEvent::VisibilityChanged]
        );
    }

    #[test]
    fn host_hidden_panel_stays_hidden_after_keyboard_hides() {
        let mut state = PanelState::new();
        state.present();
        assert!(state.set_visible(false));
        state.handle_keyboard(KeyboardEvent::WillShow { height: 300.0 });
        state.handle_keyboard(KeyboardEvent::WillHide);
        assert!(!state.is_visible());
        assert!(state.set_visible(true));
        assert!(state.is_visible());
    }

    #[test]
    fn clear_callbacks_removes_all() {
        let mut state = PanelState::new();
        let counts = counting(&mut state);
        state.clear_callbacks();

        state.present();
        state.minimize();

        assert_eq!(totals(&counts), [0, 0, 0, 0]);
    }
}
