// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of the panel's renderables.
//!
//! [`MinimizablePanel`] owns the main content, the compact preview and the
//! background renderables together with the [`Settings`]. Given the current
//! [`PanelState`] and [`Viewport`] it produces a [`PanelScene`]: which
//! renderables to draw, where, and at what opacity. It never mutates state.

use kurbo::{Rect, RoundedRect};
use peniko::Color;

use crate::handle::DragHandle;
use crate::layout::{PanelLayout, Viewport};
use crate::settings::Settings;
use crate::state::PanelState;

/// Something the host can draw inside the panel.
///
/// Only emptiness matters to the panel: an empty compact renderable means the
/// minimized panel keeps showing its main content.
pub trait Renderable {
    /// Returns `true` if there is nothing to draw.
    fn is_empty(&self) -> bool {
        false
    }
}

impl Renderable for () {
    fn is_empty(&self) -> bool {
        true
    }
}

impl<T: Renderable> Renderable for Option<T> {
    fn is_empty(&self) -> bool {
        self.as_ref().is_none_or(Renderable::is_empty)
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

/// A renderable placed in the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer<'a, T> {
    /// The renderable.
    pub view: &'a T,
    /// Where to draw it, in viewport coordinates.
    pub bounds: Rect,
    /// Opacity in `0..=1`.
    pub opacity: f64,
}

/// The panel background with its shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundLayer<'a, B> {
    /// The background renderable.
    pub view: &'a B,
    /// Background shape.
    pub shape: RoundedRect,
    /// Fill color.
    pub fill: Color,
    /// Shadow color.
    pub shadow_color: Color,
    /// Shadow blur radius.
    pub shadow_radius: f64,
}

/// Everything needed to draw one frame of the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelScene<'a, C, P, B> {
    /// Derived render parameters.
    pub layout: PanelLayout,
    /// Background and shadow.
    pub background: BackgroundLayer<'a, B>,
    /// Drag-handle capsule and its fill, when the settings enable one.
    pub handle: Option<(RoundedRect, Color)>,
    /// Main content.
    pub content: Layer<'a, C>,
    /// Compact preview, only while minimized.
    pub compact: Option<Layer<'a, P>>,
}

/// A minimizable panel built from three renderables.
#[derive(Clone, Debug)]
pub struct MinimizablePanel<C, P, B> {
    content: C,
    compact: P,
    background: B,
    settings: Settings,
}

impl<C, P: Renderable, B> MinimizablePanel<C, P, B> {
    /// Creates a panel.
    ///
    /// Pass `()` as `compact` for a panel without a preview.
    #[must_use]
    pub fn new(content: C, compact: P, background: B, settings: Settings) -> Self {
        Self {
            content,
            compact,
            background,
            settings,
        }
    }

    /// The panel settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The main content renderable.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// The compact renderable.
    #[must_use]
    pub fn compact(&self) -> &P {
        &self.compact
    }

    /// The background renderable.
    #[must_use]
    pub fn background(&self) -> &B {
        &self.background
    }

    /// The drag handle, when the settings enable one.
    #[must_use]
    pub fn handle(&self) -> Option<DragHandle> {
        self.settings.handle().copied().map(DragHandle::new)
    }

    /// Derives the render parameters for the current state.
    #[must_use]
    pub fn layout(&self, state: &PanelState, viewport: &Viewport) -> PanelLayout {
        PanelLayout::compute(
            &state.snapshot(),
            &self.settings,
            viewport,
            !self.compact.is_empty(),
        )
    }

    /// Composes the scene for the current state.
    #[must_use]
    pub fn scene(&self, state: &PanelState, viewport: &Viewport) -> PanelScene<'_, C, P, B> {
        let layout = self.layout(state, viewport);
        let frame = layout.frame_rect();
        let handle = self.handle();

        let bounds = match handle {
            Some(handle) => {
                let top = (frame.y0 + handle.reserved_height()).min(frame.y1);
                Rect::new(frame.x0, top, frame.x1, frame.y1)
            }
            None => frame,
        };

        PanelScene {
            layout,
            background: BackgroundLayer {
                view: &self.background,
                shape: layout.rounded_rect(),
                fill: self.settings.background_color(),
                shadow_color: self.settings.shadow_color(),
                shadow_radius: self.settings.shadow_radius(),
            },
            handle: handle.map(|h| (h.layout(frame), h.style().color)),
            content: Layer {
                view: &self.content,
                bounds,
                opacity: layout.content_opacity,
            },
            compact: layout.compact_visible.then_some(Layer {
                view: &self.compact,
                bounds,
                opacity: layout.compact_opacity,
            }),
        }
    }

    /// Consumes the panel, returning its parts.
    pub fn into_parts(self) -> (C, P, B, Settings) {
        (self.content, self.compact, self.background, self.settings)
    }
}
