// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot and level spacing.

use kurbo::Size;

/// Slot spacing for one layout pass.
///
/// Horizontal spacing comes from the deepest level's slot count, vertical
/// spacing from the number of levels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    /// Distance between neighbouring slots of the deepest level.
    pub horizontal: f64,
    /// Distance between consecutive levels.
    pub vertical: f64,
    /// X of the deepest level's first slot.
    pub start_x: f64,
    /// Y of the root level.
    pub top_y: f64,
}

impl Spacing {
    /// Spacing for `slots` deepest-level slots and `levels` levels.
    ///
    /// The deepest level is centred on the surface midpoint. For `n` slots the
    /// first one sits `(n - 1) / 2` spacings left of centre, which puts it half
    /// a spacing from the left edge for even and odd `n` alike.
    pub fn new(surface: Size, slots: usize, levels: usize, radius: f64, top_margin: f64) -> Self {
        let slots = slots.max(1);
        let levels = levels.max(1);

        let horizontal = surface.width / slots as f64;
        let vertical = surface.height / levels as f64;

        let mut factor = (slots / 2) as f64;
        if slots % 2 == 0 {
            factor -= 0.5;
        }

        Self {
            horizontal,
            vertical,
            start_x: surface.width / 2.0 - horizontal * factor,
            top_y: radius + top_margin,
        }
    }

    /// X of slot `index` on the deepest level.
    #[inline]
    pub fn slot_x(&self, index: usize) -> f64 {
        self.start_x + self.horizontal * index as f64
    }

    /// Y of every node at `depth`.
    #[inline]
    pub fn level_y(&self, depth: usize) -> f64 {
        self.top_y + self.vertical * depth as f64
    }
}
