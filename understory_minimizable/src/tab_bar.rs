// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab-bar height probe.
//!
//! Hosts that embed the panel inside a tab view report the tab bar height
//! once it is known; the minimized panel then sits above the tab bar.

use crate::layout::Viewport;

/// Records the most recent tab-bar height reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TabBarProbe {
    height: Option<f64>,
}

impl TabBarProbe {
    /// Creates a probe that has not seen a tab bar yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports the tab-bar height. Returns `true` if the stored value changed.
    ///
    /// Negative or non-finite heights are ignored.
    pub fn report(&mut self, height: f64) -> bool {
        if !height.is_finite() || height < 0.0 {
            log::debug!("ignoring tab bar height {height}");
            return false;
        }
        if self.height == Some(height) {
            return false;
        }
        self.height = Some(height);
        true
    }

    /// Forgets the reported height, e.g. when the tab bar is removed.
    pub fn clear(&mut self) {
        self.height = None;
    }

    /// The reported height, if any.
    #[must_use]
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Copies the reported height (or `0`) into `viewport`.
    pub fn apply(&self, viewport: &mut Viewport) {
        viewport.tab_bar_height = self.height.unwrap_or(0.0);
    }
}
