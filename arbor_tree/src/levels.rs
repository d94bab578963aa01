// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placeholder-aligned level decomposition.

use alloc::vec;
use alloc::vec::Vec;

use crate::node::TreeNode;

/// A slot in a level: a real node, or `None` for a placeholder.
pub type Slot<'a, T> = Option<&'a TreeNode<T>>;

/// Level-order decomposition of a tree.
///
/// Level `i` holds the `2^i` slots at depth `i`, left to right. Absent
/// children (and the children of absent children) appear as placeholder
/// `None` slots, so slot `j` of a level is always the parent of slots `2j`
/// and `2j + 1` of the following level. Decomposition stops at the deepest
/// level that still contains a real node.
#[derive(Debug)]
pub struct Levels<'a, T> {
    levels: Vec<Vec<Slot<'a, T>>>,
}

impl<T> Clone for Levels<'_, T> {
    fn clone(&self) -> Self {
        Self {
            levels: self.levels.clone(),
        }
    }
}

impl<'a, T> Levels<'a, T> {
    pub(crate) fn build(root: Option<&'a TreeNode<T>>) -> Self {
        let mut levels = Vec::new();
        let Some(root) = root else {
            return Self { levels };
        };

        let mut level: Vec<Slot<'a, T>> = vec![Some(root)];
        while level.iter().any(Option::is_some) {
            let next = level
                .iter()
                .flat_map(|slot| match slot {
                    Some(node) => [node.left(), node.right()],
                    None => [None, None],
                })
                .collect();
            levels.push(core::mem::replace(&mut level, next));
        }
        Self { levels }
    }

    /// Number of levels; the height of the tree.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` for the decomposition of an empty tree.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Largest slot count over all levels, placeholders included.
    ///
    /// Since every level doubles the previous one this is the slot count of
    /// the deepest level.
    pub fn width(&self) -> usize {
        self.levels.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The slots of level `depth`, if it exists.
    pub fn get(&self, depth: usize) -> Option<&[Slot<'a, T>]> {
        self.levels.get(depth).map(Vec::as_slice)
    }

    /// The slot at `index` within level `depth`; `None` for placeholders and
    /// out-of-range positions.
    pub fn slot(&self, depth: usize, index: usize) -> Slot<'a, T> {
        self.levels.get(depth)?.get(index).copied().flatten()
    }

    /// Iterates the levels from the root down.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &[Slot<'a, T>]> + ExactSizeIterator {
        self.levels.iter().map(Vec::as_slice)
    }

    /// Iterates every real node together with its `(depth, slot)` coordinates,
    /// level by level.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, usize, &'a TreeNode<T>)> + '_ {
        self.levels.iter().enumerate().flat_map(|(depth, level)| {
            level
                .iter()
                .enumerate()
                .filter_map(move |(index, slot)| slot.map(|node| (depth, index, node)))
        })
    }

    /// Number of real (non-placeholder) slots across all levels.
    pub fn real_count(&self) -> usize {
        self.levels
            .iter()
            .map(|level| level.iter().filter(|slot| slot.is_some()).count())
            .sum()
    }

    /// Consumes the decomposition, returning the raw levels.
    pub fn into_vec(self) -> Vec<Vec<Slot<'a, T>>> {
        self.levels
    }
}

/// Stamps `depth` on every node in the subtree rooted at `node`.
pub(crate) fn stamp_depths<T>(node: &mut TreeNode<T>, depth: usize) {
    node.set_depth(depth);
    for side in crate::Side::BOTH {
        if let Some(child) = node.child_mut(side) {
            stamp_depths(child, depth + 1);
        }
    }
}
