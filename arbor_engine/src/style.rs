// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node colors.

use peniko::Color;

/// Colors used when drawing a tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
    /// Outline of unselected nodes.
    pub stroke: Color,
    /// Outline and label of the selected node.
    pub selected: Color,
    /// Labels of unselected nodes.
    pub text: Color,
    /// Parent-child edges.
    pub edge: Color,
}

impl NodeStyle {
    /// Outline color for a node.
    pub fn outline(&self, selected: bool) -> Color {
        if selected { self.selected } else { self.stroke }
    }

    /// Label color for a node.
    pub fn label(&self, selected: bool) -> Color {
        if selected { self.selected } else { self.text }
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            selected: Color::from_rgb8(255, 0, 0),
            text: Color::BLACK,
            edge: Color::BLACK,
        }
    }
}
