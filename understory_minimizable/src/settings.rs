// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel configuration.
//!
//! [`Settings`] is an immutable bundle of sizes, margins, colors and drag
//! thresholds. Build one with [`SettingsBuilder`] or start from
//! [`Settings::default`].
//!
//! ```rust
//! use understory_minimizable::{DragTrigger, Settings};
//!
//! let settings = Settings::builder()
//!     .minimized_height(60.0)
//!     .override_height(Some(420.0))
//!     .minimize_threshold(100.0)
//!     .drag_trigger(DragTrigger::Immediate)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.minimized_height(), 60.0);
//! assert_eq!(settings.override_height(), Some(420.0));
//! ```

use core::fmt;

use peniko::Color;

use crate::handle::HandleStyle;

/// When a [`DragRecognizer`](crate::DragRecognizer) evaluates its trigger thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragTrigger {
    /// Evaluate thresholds once, when the gesture is released.
    #[default]
    OnRelease,
    /// Fire the transition as soon as the translation crosses a threshold.
    ///
    /// At most one transition fires per gesture.
    Immediate,
}

/// Error returned by [`SettingsBuilder::build`] for an unusable value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettingsError {
    /// Name of the offending setting.
    pub field: &'static str,
    /// The rejected value.
    pub value: f64,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "setting `{}` must be finite and non-negative, got {}",
            self.field, self.value
        )
    }
}

impl core::error::Error for SettingsError {}

/// Sizing, margin, visual and drag-threshold configuration of a panel.
///
/// Only the drag fields (`minimum_drag_distance`, the two thresholds and the
/// trigger mode) influence state transitions; everything else is read by the
/// layout and passed through to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    minimized_height: f64,
    override_height: Option<f64>,
    expanded_top_margin: f64,
    bottom_margin: f64,
    lateral_margin: f64,
    corner_radius: f64,
    shadow_radius: f64,
    background_color: Color,
    shadow_color: Color,
    minimum_drag_distance: f64,
    minimize_threshold: f64,
    expand_threshold: f64,
    drag_trigger: DragTrigger,
    minimized_drag_damping: f64,
    pin_minimized_bottom: bool,
    handle: Option<HandleStyle>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            minimized_height: 44.0,
            override_height: None,
            expanded_top_margin: 0.0,
            bottom_margin: 48.0,
            lateral_margin: 0.0,
            corner_radius: 10.0,
            shadow_radius: 5.0,
            background_color: Color::WHITE,
            shadow_color: Color::from_rgb8(174, 174, 178),
            minimum_drag_distance: 10.0,
            minimize_threshold: 80.0,
            expand_threshold: 100.0,
            drag_trigger: DragTrigger::OnRelease,
            minimized_drag_damping: 1.0,
            pin_minimized_bottom: false,
            handle: Some(HandleStyle::default()),
        }
    }
}

impl Settings {
    /// Returns a builder seeded with the default settings.
    #[must_use]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Height of the panel in minimized state.
    #[must_use]
    #[inline]
    pub fn minimized_height(&self) -> f64 {
        self.minimized_height
    }

    /// Fixed height of the expanded panel; `None` fills the viewport.
    #[must_use]
    #[inline]
    pub fn override_height(&self) -> Option<f64> {
        self.override_height
    }

    /// Top margin of the expanded panel when it fills the viewport.
    #[must_use]
    #[inline]
    pub fn expanded_top_margin(&self) -> f64 {
        self.expanded_top_margin
    }

    /// Distance of the minimized panel from the bottom inset.
    #[must_use]
    #[inline]
    pub fn bottom_margin(&self) -> f64 {
        self.bottom_margin
    }

    /// Leading and trailing margin.
    #[must_use]
    #[inline]
    pub fn lateral_margin(&self) -> f64 {
        self.lateral_margin
    }

    /// Corner radius of the panel background.
    #[must_use]
    #[inline]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Blur radius of the panel shadow.
    #[must_use]
    #[inline]
    pub fn shadow_radius(&self) -> f64 {
        self.shadow_radius
    }

    /// Background color of the panel.
    #[must_use]
    #[inline]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Shadow color of the panel.
    #[must_use]
    #[inline]
    pub fn shadow_color(&self) -> Color {
        self.shadow_color
    }

    /// Distance a drag must travel before it is reported at all.
    ///
    /// Keeps scrollable content embedded in the panel scrollable.
    #[must_use]
    #[inline]
    pub fn minimum_drag_distance(&self) -> f64 {
        self.minimum_drag_distance
    }

    /// Downward translation that minimizes an expanded panel.
    #[must_use]
    #[inline]
    pub fn minimize_threshold(&self) -> f64 {
        self.minimize_threshold
    }

    /// Upward translation (magnitude) that expands a minimized panel.
    #[must_use]
    #[inline]
    pub fn expand_threshold(&self) -> f64 {
        self.expand_threshold
    }

    /// When thresholds are evaluated.
    #[must_use]
    #[inline]
    pub fn drag_trigger(&self) -> DragTrigger {
        self.drag_trigger
    }

    /// Divisor applied to the upward offset of a minimized panel.
    #[must_use]
    #[inline]
    pub fn minimized_drag_damping(&self) -> f64 {
        self.minimized_drag_damping
    }

    /// Whether the minimized panel keeps its bottom edge fixed while stretching.
    ///
    /// When set, the minimized panel grows upward only: its vertical offset
    /// stays `0` and the damping divisor is not used.
    #[must_use]
    #[inline]
    pub fn pin_minimized_bottom(&self) -> bool {
        self.pin_minimized_bottom
    }

    /// Style of the drag-handle capsule, if the panel shows one.
    #[must_use]
    #[inline]
    pub fn handle(&self) -> Option<&HandleStyle> {
        self.handle.as_ref()
    }
}

/// Builder for [`Settings`].
///
/// Every setter consumes and returns the builder. [`SettingsBuilder::build`]
/// validates numeric fields.
#[derive(Clone, Debug, Default)]
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    /// Creates a builder seeded with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimized height.
    #[must_use]
    pub fn minimized_height(mut self, height: f64) -> Self {
        self.settings.minimized_height = height;
        self
    }

    /// Sets the expanded height; `None` fills the viewport.
    #[must_use]
    pub fn override_height(mut self, height: Option<f64>) -> Self {
        self.settings.override_height = height;
        self
    }

    /// Sets the expanded top margin.
    #[must_use]
    pub fn expanded_top_margin(mut self, margin: f64) -> Self {
        self.settings.expanded_top_margin = margin;
        self
    }

    /// Sets the minimized bottom margin.
    #[must_use]
    pub fn bottom_margin(mut self, margin: f64) -> Self {
        self.settings.bottom_margin = margin;
        self
    }

    /// Sets the leading and trailing margin.
    #[must_use]
    pub fn lateral_margin(mut self, margin: f64) -> Self {
        self.settings.lateral_margin = margin;
        self
    }

    /// Sets the corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.settings.corner_radius = radius;
        self
    }

    /// Sets the shadow radius.
    #[must_use]
    pub fn shadow_radius(mut self, radius: f64) -> Self {
        self.settings.shadow_radius = radius;
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.settings.background_color = color;
        self
    }

    /// Sets the shadow color.
    #[must_use]
    pub fn shadow_color(mut self, color: Color) -> Self {
        self.settings.shadow_color = color;
        self
    }

    /// Sets the minimum drag distance.
    #[must_use]
    pub fn minimum_drag_distance(mut self, distance: f64) -> Self {
        self.settings.minimum_drag_distance = distance;
        self
    }

    /// Sets the minimize threshold.
    #[must_use]
    pub fn minimize_threshold(mut self, threshold: f64) -> Self {
        self.settings.minimize_threshold = threshold;
        self
    }

    /// Sets the expand threshold.
    #[must_use]
    pub fn expand_threshold(mut self, threshold: f64) -> Self {
        self.settings.expand_threshold = threshold;
        self
    }

    /// Sets both thresholds to the same distance.
    #[must_use]
    pub fn trigger_threshold(self, threshold: f64) -> Self {
        self.minimize_threshold(threshold).expand_threshold(threshold)
    }

    /// Sets when thresholds are evaluated.
    #[must_use]
    pub fn drag_trigger(mut self, trigger: DragTrigger) -> Self {
        self.settings.drag_trigger = trigger;
        self
    }

    /// Sets the divisor applied to the minimized upward offset.
    #[must_use]
    pub fn minimized_drag_damping(mut self, damping: f64) -> Self {
        self.settings.minimized_drag_damping = damping;
        self
    }

    /// Keeps the minimized bottom edge fixed while the panel stretches.
    #[must_use]
    pub fn pin_minimized_bottom(mut self, pin: bool) -> Self {
        self.settings.pin_minimized_bottom = pin;
        self
    }

    /// Sets the drag-handle style; `None` hides the handle.
    #[must_use]
    pub fn handle(mut self, handle: Option<HandleStyle>) -> Self {
        self.settings.handle = handle;
        self
    }

    /// Validates and returns the settings.
    ///
    /// Sizes, margins, radii and thresholds must be finite and non-negative,
    /// and so must the handle size and inset. The damping divisor must be
    /// finite and strictly positive.
    pub fn build(self) -> Result<Settings, SettingsError> {
        let s = &self.settings;
        let (handle_width, handle_height, handle_inset) = s
            .handle
            .map_or((0.0, 0.0, 0.0), |h| (h.size.width, h.size.height, h.top_inset));
        let checks = [
            ("minimized_height", s.minimized_height),
            ("override_height", s.override_height.unwrap_or(0.0)),
            ("expanded_top_margin", s.expanded_top_margin),
            ("bottom_margin", s.bottom_margin),
            ("lateral_margin", s.lateral_margin),
            ("corner_radius", s.corner_radius),
            ("shadow_radius", s.shadow_radius),
            ("minimum_drag_distance", s.minimum_drag_distance),
            ("minimize_threshold", s.minimize_threshold),
            ("expand_threshold", s.expand_threshold),
            ("handle.size.width", handle_width),
            ("handle.size.height", handle_height),
            ("handle.top_inset", handle_inset),
        ];
        for (field, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError { field, value });
            }
        }
        if !s.minimized_drag_damping.is_finite() || s.minimized_drag_damping <= 0.0 {
            return Err(SettingsError {
                field: "minimized_drag_damping",
                value: s.minimized_drag_damping,
            });
        }
        Ok(self.settings)
    }
}
