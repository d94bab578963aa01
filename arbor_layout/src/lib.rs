// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_layout --heading-base-level=0

//! Arbor Layout: positions for every node of a binary tree on a 2D surface.
//!
//! Layout works **bottom-up** over the placeholder-aligned levels produced by
//! [`BinaryTree::level_order`]:
//!
//! 1. The deepest level is spread evenly across the surface width, one slot
//!    per `surface_width / slot_count`, centred on the surface midpoint.
//! 2. Every shallower slot is placed over its two child slots. A real node
//!    with two real children sits at their midpoint; a real node with a
//!    single real child sits **directly above that child**. Leaves and
//!    placeholders take the midpoint of their (placeholder) child slots.
//! 3. Levels are stacked evenly: the root at `radius + top_margin` from the
//!    top edge, each following level one `surface_height / level_count`
//!    lower.
//!
//! Placeholders are never positioned themselves, but their slots take part in
//! the spacing so siblings stay aligned across levels.
//!
//! The node radius scales with both the surface and the tree:
//! `min(surface_width / width, surface_height / height) * scale_factor`,
//! see [`node_radius`].
//!
//! ## Minimal example
//!
//! ```rust
//! use arbor_layout::{LayoutConfig, layout_tree};
//! use arbor_tree::{BinaryTree, TreeNode};
//! use kurbo::{Point, Size};
//!
//! let mut tree = BinaryTree::with_root(
//!     TreeNode::new(1)
//!         .with_left(TreeNode::new(2))
//!         .with_right(TreeNode::new(3)),
//! );
//!
//! let layout = layout_tree(&mut tree, Size::new(800.0, 600.0), &LayoutConfig::default()).unwrap();
//! assert_eq!(layout.radius, 22.5);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.position(), Point::new(400.0, 32.5));
//! assert_eq!(root.left().unwrap().position(), Point::new(200.0, 332.5));
//! assert_eq!(root.right().unwrap().position(), Point::new(600.0, 332.5));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use arbor_tree::{BinaryTree, Levels};
use kurbo::Size;

mod spacing;

pub use spacing::Spacing;

/// Tunable layout constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Fraction of the per-slot space a node's radius occupies.
    ///
    /// Must stay well below `0.5` so circles never touch across the widest
    /// level or the tallest column.
    pub scale_factor: f64,
    /// Gap between the top edge and the root circle, in surface units.
    pub top_margin: f64,
    /// Text size relative to the node radius.
    pub font_scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale_factor: 0.075,
            top_margin: 10.0,
            font_scale: 0.9,
        }
    }
}

/// Result of a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeLayout {
    /// Node radius for this pass.
    pub radius: f64,
    /// Font size for node labels.
    pub font_size: f64,
    /// Widest slot count (placeholders included).
    pub width: usize,
    /// Number of levels.
    pub height: usize,
    /// Spacing used to place the slots.
    pub spacing: Spacing,
}

/// Node radius for a tree of `width` slots and `height` levels on `surface`.
///
/// Returns `0.0` for an empty tree.
pub fn node_radius(surface: Size, width: usize, height: usize, scale_factor: f64) -> f64 {
    if width == 0 || height == 0 {
        return 0.0;
    }
    let width_factor = surface.width / width as f64;
    let height_factor = surface.height / height as f64;
    width_factor.min(height_factor) * scale_factor
}

/// Lays out `tree` on a surface of `surface` size, writing each node's
/// position and stamping depths.
///
/// Returns `None` (and touches nothing) for an empty tree.
pub fn layout_tree<T>(
    tree: &mut BinaryTree<T>,
    surface: Size,
    config: &LayoutConfig,
) -> Option<TreeLayout> {
    if tree.is_empty() {
        return None;
    }

    let levels = tree.level_order();
    let height = levels.len();
    let width = levels.width();
    let radius = node_radius(surface, width, height, config.scale_factor);
    let spacing = Spacing::new(surface, width, height, radius, config.top_margin);
    let xs = slot_xs(&levels, &spacing);

    tree.for_each_mut(|path, node| {
        let depth = path.depth();
        let x = xs[depth][path.slot_index()];
        node.set_position(x, spacing.level_y(depth));
    });

    Some(TreeLayout {
        radius,
        font_size: radius * config.font_scale,
        width,
        height,
        spacing,
    })
}

/// Horizontal position of every slot, indexed `[depth][slot]`.
///
/// Computed deepest level first so each parent can read its children.
fn slot_xs<T>(levels: &Levels<'_, T>, spacing: &Spacing) -> Vec<Vec<f64>> {
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(levels.len());
    for level in levels.iter().rev() {
        let row = match rows.last() {
            None => (0..level.len()).map(|index| spacing.slot_x(index)).collect(),
            Some(below) => level
                .iter()
                .enumerate()
                .map(|(index, slot)| {
                    let left = below[2 * index];
                    let right = below[2 * index + 1];
                    match slot.map(|node| (node.left().is_some(), node.right().is_some())) {
                        Some((true, false)) => left,
                        Some((false, true)) => right,
                        _ => (left + right) / 2.0,
                    }
                })
                .collect(),
        };
        rows.push(row);
    }
    rows.reverse();
    rows
}
