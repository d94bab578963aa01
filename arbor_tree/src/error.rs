// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by tree mutation.

use alloc::string::String;
use core::fmt;

/// Error returned when a side name is neither `"left"` nor `"right"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidSide {
    /// The rejected input.
    pub got: String,
}

impl fmt::Display for InvalidSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid insertion side: expected 'left' or 'right', got '{}'",
            self.got
        )
    }
}

impl core::error::Error for InvalidSide {}

/// Error returned by [`BinaryTree::insert`](crate::BinaryTree::insert) and
/// [`BinaryTree::insert_named`](crate::BinaryTree::insert_named).
///
/// A failed insertion never modifies the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertError {
    /// The side was not one of `"left"` / `"right"`.
    InvalidSide(InvalidSide),
    /// The tree has a root but nothing is selected to attach to.
    NoSelection,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSide(err) => fmt::Display::fmt(err, f),
            Self::NoSelection => f.write_str("cannot insert: no node is selected"),
        }
    }
}

impl core::error::Error for InsertError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidSide(err) => Some(err),
            Self::NoSelection => None,
        }
    }
}

impl From<InvalidSide> for InsertError {
    fn from(err: InvalidSide) -> Self {
        Self::InvalidSide(err)
    }
}
