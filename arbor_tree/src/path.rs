// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sides and root-relative node paths.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;
use smallvec::SmallVec;

use crate::error::InvalidSide;

/// Which child slot of a node to address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child.
    Left,
    /// The right child.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// The lowercase name used by text input (`"left"` / `"right"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Offset of this side within a pair of child slots.
    #[inline]
    pub const fn slot_offset(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = InvalidSide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(InvalidSide {
                got: other.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for Side {
    type Error = InvalidSide;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Location of a node expressed as the sides taken from the root.
///
/// The empty path is the root. Paths stay valid as long as nothing is
/// attached over one of their ancestors; nodes are never moved or removed, so
/// in practice a path only goes stale when [`BinaryTree::insert`] overwrites
/// the subtree containing it.
///
/// [`BinaryTree::insert`]: crate::BinaryTree::insert
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath(SmallVec<[Side; 8]>);

impl NodePath {
    /// The path of the root node.
    #[must_use]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Returns `true` if this path addresses the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Distance from the root; equal to the addressed node's depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The sides taken from the root, outermost first.
    #[must_use]
    pub fn sides(&self) -> &[Side] {
        &self.0
    }

    /// Returns the path of the `side` child of this node.
    #[must_use]
    pub fn child(&self, side: Side) -> Self {
        let mut next = self.clone();
        next.0.push(side);
        next
    }

    /// Returns the parent path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.iter().copied().collect()))
    }

    /// Appends a step in place.
    pub fn push(&mut self, side: Side) {
        self.0.push(side);
    }

    /// Removes the last step in place.
    pub fn pop(&mut self) -> Option<Side> {
        self.0.pop()
    }

    /// Index of the addressed slot within its level of a [`Levels`] decomposition.
    ///
    /// [`Levels`]: crate::Levels
    #[must_use]
    pub fn slot_index(&self) -> usize {
        self.0
            .iter()
            .fold(0, |slot, side| slot * 2 + side.slot_offset())
    }
}

impl FromIterator<Side> for NodePath {
    fn from_iter<I: IntoIterator<Item = Side>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
