// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Arbor demos: ready-made trees and argument parsing.

use arbor_tree::{BinaryTree, Side, TreeNode};
use kurbo::Point;
use rand::Rng;

/// The fixed demo tree:
///
/// ```text
///         1
///       /   \
///      2     3
///     / \   /
///    4   5 6
/// ```
pub fn sample_tree() -> BinaryTree<u32> {
    BinaryTree::with_root(
        TreeNode::new(1)
            .with_left(TreeNode::new(2).with_left(TreeNode::new(4)).with_right(TreeNode::new(5)))
            .with_right(TreeNode::new(3).with_left(TreeNode::new(6))),
    )
}

/// A random tree whose values count up from 1 in pre-order.
///
/// The root always exists. Each node shallower than `max_depth` grows each
/// child with probability `density` (clamped to `0..=1`).
pub fn random_tree(rng: &mut impl Rng, max_depth: usize, density: f64) -> BinaryTree<u32> {
    fn grow(
        rng: &mut impl Rng,
        depth: usize,
        max_depth: usize,
        density: f64,
        next: &mut u32,
    ) -> TreeNode<u32> {
        let mut node = TreeNode::new(*next);
        *next += 1;
        if depth < max_depth {
            for side in Side::BOTH {
                if rng.random_bool(density) {
                    let child = grow(rng, depth + 1, max_depth, density, next);
                    node.set_child(side, child);
                }
            }
        }
        node
    }

    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut next = 1;
    BinaryTree::with_root(grow(rng, 0, max_depth, density, &mut next))
}

/// Parses `"X,Y"` into a point.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate '{v}': {e}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

/// An insertion request from the command line: `SIDE:VALUE`.
///
/// The side is kept as text so the engine reports unknown names itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertCommand {
    /// `"left"` or `"right"`, unchecked.
    pub side: String,
    /// Value of the new node.
    pub value: u32,
}

/// Parses `"SIDE:VALUE"`.
pub fn parse_insert(s: &str) -> Result<InsertCommand, String> {
    let (side, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected SIDE:VALUE, got '{s}'"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("bad value '{value}': {e}"))?;
    Ok(InsertCommand {
        side: side.trim().to_string(),
        value,
    })
}
