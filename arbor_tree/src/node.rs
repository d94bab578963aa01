// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes.

use alloc::boxed::Box;
use kurbo::Point;

use crate::path::Side;

/// A single node of a [`BinaryTree`](crate::BinaryTree).
///
/// A node exclusively owns its children, so a node can never appear under two
/// parents. Besides its value it carries layout bookkeeping: a position that
/// layout passes overwrite and a depth that level traversals stamp. Both are
/// only meaningful right after such a pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode<T> {
    value: T,
    position: Point,
    depth: usize,
    left: Option<Box<Self>>,
    right: Option<Box<Self>>,
}

impl<T> TreeNode<T> {
    /// Creates a childless node at the origin with depth 0.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            position: Point::ORIGIN,
            depth: 0,
            left: None,
            right: None,
        }
    }

    /// Sets an initial position.
    #[must_use]
    pub fn with_position(mut self, position: impl Into<Point>) -> Self {
        self.position = position.into();
        self
    }

    /// Attaches `child` as the left child, replacing any existing one.
    #[must_use]
    pub fn with_left(mut self, child: Self) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Attaches `child` as the right child, replacing any existing one.
    #[must_use]
    pub fn with_right(mut self, child: Self) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// The node's value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the node's value.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Position assigned by the last layout pass (or the initial one).
    pub fn position(&self) -> Point {
        self.position
    }

    /// Overwrites the node's coordinates.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    /// Depth stamped by the most recent level traversal.
    ///
    /// Stale after any structural change until the next
    /// [`BinaryTree::level_order`](crate::BinaryTree::level_order).
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The child on `side`, if any.
    pub fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Mutable access to the child on `side`, if any.
    pub fn child_mut(&mut self, side: Side) -> Option<&mut Self> {
        match side {
            Side::Left => self.left.as_deref_mut(),
            Side::Right => self.right.as_deref_mut(),
        }
    }

    /// Attaches `child` on `side`, returning the subtree it replaced.
    pub fn set_child(&mut self, side: Side, child: Self) -> Option<Box<Self>> {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        slot.replace(Box::new(child))
    }

    /// Returns `true` if the node has neither child.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of real children (0, 1 or 2).
    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.left().map_or(0, Self::subtree_len) + self.right().map_or(0, Self::subtree_len)
    }
}
