// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the `understory_minimizable` demos in `examples/`.

use understory_minimizable::{MinimizablePanel, PanelState, Renderable, Viewport};

/// Formats one line describing the panel frame for the current state.
///
/// Shows the frame top and height, the drag offset, and the content and
/// compact opacities. The compact column is `-` when no compact layer is drawn.
pub fn describe_frame<C, P: Renderable, B>(
    label: &str,
    panel: &MinimizablePanel<C, P, B>,
    state: &PanelState,
    viewport: &Viewport,
) -> String {
    let scene = panel.scene(state, viewport);
    let rect = scene.layout.frame_rect();
    let compact = scene
        .compact
        .map_or_else(|| "-".to_string(), |layer| format!("{:.2}", layer.opacity));
    format!(
        "{label:<28} y0={:>7.1} height={:>6.1} offset={:>6.1} content={:.2} compact={compact}",
        rect.y0,
        rect.height(),
        scene.layout.vertical_offset,
        scene.content.opacity,
    )
}
