// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render parameters derived from panel state.
//!
//! [`PanelLayout::compute`] is a pure function of a [`PanelSnapshot`], the
//! [`Settings`], the [`Viewport`] and whether a compact renderable exists.
//! Recompute it whenever any of those change; the result is cheap.
//!
//! Positions are center anchors in viewport coordinates with `y` growing
//! downward. A dismissed panel is parked below the viewport through
//! [`PanelLayout::position_y`]; its `vertical_offset` is always `0`.
//!
//! ```rust
//! use kurbo::Size;
//! use understory_minimizable::{PanelLayout, PanelState, Settings, Viewport};
//!
//! let settings = Settings::builder().minimized_height(60.0).build().unwrap();
//! let viewport = Viewport::new(Size::new(400.0, 800.0));
//! let mut state = PanelState::new();
//! state.present();
//! state.minimize();
//! state.set_drag_offset_y(-30.0);
//!
//! let layout = PanelLayout::compute(&state.snapshot(), &settings, &viewport, true);
//! assert_eq!(layout.frame_height(), 90.0);
//! assert_eq!(layout.vertical_offset, -30.0);
//! ```

use kurbo::{Point, Rect, RoundedRect, RoundedRectRadii, Size};

use crate::settings::Settings;
use crate::state::PanelSnapshot;

/// Geometry of the area the panel lives in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Size of the hosting area.
    pub size: Size,
    /// Bottom safe-area inset (home indicator and similar).
    pub safe_area_bottom: f64,
    /// Height of an enclosing tab bar, `0` when there is none.
    pub tab_bar_height: f64,
}

impl Viewport {
    /// Creates a viewport with no insets.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            safe_area_bottom: 0.0,
            tab_bar_height: 0.0,
        }
    }

    /// Returns a copy with the given bottom safe-area inset.
    #[must_use]
    pub fn with_safe_area_bottom(mut self, inset: f64) -> Self {
        self.safe_area_bottom = inset;
        self
    }

    /// Returns a copy with the given tab-bar height.
    #[must_use]
    pub fn with_tab_bar_height(mut self, height: f64) -> Self {
        self.tab_bar_height = height;
        self
    }

    /// Total space reserved at the bottom edge.
    #[must_use]
    pub fn bottom_inset(&self) -> f64 {
        self.safe_area_bottom + self.tab_bar_height
    }
}

/// Render parameters for one frame of the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelLayout {
    /// Translation applied after layout: rubber-banding while dragging.
    pub vertical_offset: f64,
    /// Laid-out size of the panel, before the offset.
    pub frame_size: Size,
    /// Vertical center of the panel, before the offset.
    pub position_y: f64,
    /// Horizontal center of the panel.
    pub center_x: f64,
    /// Whether the compact renderable is shown.
    pub compact_visible: bool,
    /// Opacity of the main content layer.
    pub content_opacity: f64,
    /// Opacity of the compact layer.
    pub compact_opacity: f64,
    /// Corner radii of the background shape.
    pub corner_radii: RoundedRectRadii,
}

impl PanelLayout {
    /// Derives the render parameters.
    #[must_use]
    pub fn compute(
        snapshot: &PanelSnapshot,
        settings: &Settings,
        viewport: &Viewport,
        has_compact: bool,
    ) -> Self {
        let height = frame_height(snapshot, settings, viewport);
        let width = (viewport.size.width - 2.0 * settings.lateral_margin()).max(0.0);
        let compact_visible = snapshot.minimized && snapshot.presented && has_compact;
        let (content_opacity, compact_opacity) = if !snapshot.visible {
            (0.0, 0.0)
        } else if compact_visible {
            let progress = expand_progress(snapshot.drag_offset_y, settings.expand_threshold());
            (progress, 1.0 - progress)
        } else {
            (1.0, 0.0)
        };
        let radius = settings.corner_radius();
        let corner_radii = if snapshot.minimized {
            RoundedRectRadii::from_single_radius(radius)
        } else {
            // Only the top corners show while expanded.
            RoundedRectRadii::new(radius, radius, 0.0, 0.0)
        };

        Self {
            vertical_offset: vertical_offset(snapshot, settings),
            frame_size: Size::new(width, height),
            position_y: position_y(snapshot, settings, viewport, height),
            center_x: viewport.size.width * 0.5,
            compact_visible,
            content_opacity,
            compact_opacity,
            corner_radii,
        }
    }

    /// Height of the panel frame.
    #[must_use]
    pub fn frame_height(&self) -> f64 {
        self.frame_size.height
    }

    /// Panel rectangle in viewport coordinates, offset included.
    #[must_use]
    pub fn frame_rect(&self) -> Rect {
        let center = Point::new(self.center_x, self.position_y + self.vertical_offset);
        Rect::from_center_size(center, self.frame_size)
    }

    /// Background shape of the panel.
    #[must_use]
    pub fn rounded_rect(&self) -> RoundedRect {
        self.frame_rect().to_rounded_rect(self.corner_radii)
    }

    /// Whether anything of the panel is drawn.
    #[must_use]
    pub fn is_drawn(&self, viewport: &Viewport) -> bool {
        (self.content_opacity > 0.0 || self.compact_opacity > 0.0)
            && self.frame_rect().y0 < viewport.size.height
    }
}

fn vertical_offset(snapshot: &PanelSnapshot, settings: &Settings) -> f64 {
    let d = snapshot.drag_offset_y;
    if !snapshot.presented {
        0.0
    } else if snapshot.minimized {
        // A pinned panel grows upward through `position_y` alone.
        if settings.pin_minimized_bottom() {
            0.0
        } else {
            d.min(0.0) / settings.minimized_drag_damping()
        }
    } else {
        d.max(0.0)
    }
}

fn frame_height(snapshot: &PanelSnapshot, settings: &Settings, viewport: &Viewport) -> f64 {
    if snapshot.minimized {
        settings.minimized_height() + (-snapshot.drag_offset_y).max(0.0)
    } else {
        expanded_height(settings, viewport)
    }
}

fn expanded_height(settings: &Settings, viewport: &Viewport) -> f64 {
    settings
        .override_height()
        .unwrap_or((viewport.size.height - settings.expanded_top_margin()).max(0.0))
}

fn position_y(
    snapshot: &PanelSnapshot,
    settings: &Settings,
    viewport: &Viewport,
    height: f64,
) -> f64 {
    let vh = viewport.size.height;
    if !snapshot.presented {
        return vh + height * 0.5 + settings.shadow_radius();
    }
    if snapshot.minimized {
        let rest = vh
            - settings.bottom_margin()
            - settings.minimized_height() * 0.5
            - viewport.bottom_inset();
        if settings.pin_minimized_bottom() {
            rest + snapshot.drag_offset_y.min(0.0) * 0.5
        } else {
            rest
        }
    } else {
        match settings.override_height() {
            Some(h) => vh - h * 0.5,
            None => (vh + settings.expanded_top_margin()) * 0.5,
        }
    }
}

/// Fraction of the way an upward drag has travelled toward the expand threshold.
fn expand_progress(drag_offset_y: f64, threshold: f64) -> f64 {
    let up = (-drag_offset_y).max(0.0);
    if threshold <= 0.0 {
        return if up > 0.0 { 1.0 } else { 0.0 };
    }
    (up / threshold).clamp(0.0, 1.0)
}
