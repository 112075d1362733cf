// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag-handle capsule drawn at the top edge of the panel.

use kurbo::{Point, Rect, RoundedRect, Size};
use peniko::Color;

use crate::state::PanelState;

/// Size, color and placement of the drag-handle capsule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleStyle {
    /// Capsule size.
    pub size: Size,
    /// Capsule fill color.
    pub color: Color,
    /// Gap between the top edge of the panel and the capsule.
    pub top_inset: f64,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            size: Size::new(40.0, 5.0),
            color: Color::from_rgb8(142, 142, 147),
            top_inset: 6.0,
        }
    }
}

/// Tap target and geometry helper for the drag handle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragHandle {
    style: HandleStyle,
}

impl DragHandle {
    /// Creates a handle with the given style.
    #[must_use]
    pub fn new(style: HandleStyle) -> Self {
        Self { style }
    }

    /// Returns the handle style.
    #[must_use]
    pub fn style(&self) -> &HandleStyle {
        &self.style
    }

    /// Places the capsule horizontally centered inside `panel`, `top_inset` below its top edge.
    ///
    /// The capsule radius is half its height so the ends are fully round.
    #[must_use]
    pub fn layout(&self, panel: Rect) -> RoundedRect {
        let size = self.style.size;
        let center = Point::new(
            panel.center().x,
            panel.y0 + self.style.top_inset + size.height * 0.5,
        );
        Rect::from_center_size(center, size).to_rounded_rect(size.height * 0.5)
    }

    /// Returns the vertical space the handle occupies above the content.
    #[must_use]
    pub fn reserved_height(&self) -> f64 {
        self.style.top_inset * 2.0 + self.style.size.height
    }

    /// Tapping the handle toggles between minimized and expanded.
    pub fn on_tap(&self, state: &mut PanelState) -> bool {
        state.toggle()
    }
}
