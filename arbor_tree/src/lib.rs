// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_tree --heading-base-level=0

//! Arbor Tree: an owned binary tree built for interactive layout.
//!
//! This crate holds the _structure_ half of the Arbor stack: nodes, their
//! exclusive ownership of children, a selection expressed as a path from the
//! root, and the level decomposition that layout code builds on. It does
//! **not** know anything about surfaces, radii, or pixels; see `arbor_layout`
//! and `arbor_engine` for that.
//!
//! ## Core types
//!
//! - [`TreeNode`]: a value, a mutable position, owned left/right children and
//!   a cached depth.
//! - [`BinaryTree`]: an optional root plus an optional selected [`NodePath`].
//!   New nodes are only ever attached relative to the selection via
//!   [`BinaryTree::insert`].
//! - [`Levels`]: the level-order decomposition of a tree, **including
//!   placeholder slots** for absent children so that slot `j` of a level
//!   always owns slots `2j` and `2j + 1` of the next one.
//!
//! Values are never used for ordering; this is not a search tree.
//!
//! ## Minimal example
//!
//! ```rust
//! use arbor_tree::{BinaryTree, Side};
//!
//! let mut tree = BinaryTree::new();
//!
//! // The first insertion becomes the root, whatever the side.
//! tree.insert(1, Side::Left).unwrap();
//! tree.insert(2, Side::Right).unwrap();
//! assert_eq!(tree.selected_node().map(|n| *n.value()), Some(2));
//!
//! // Reselect the root and grow its left side.
//! tree.select(Some(arbor_tree::NodePath::root()));
//! tree.insert(3, Side::Left).unwrap();
//!
//! let levels = tree.level_order();
//! assert_eq!(levels.len(), 2);
//! assert_eq!(levels.width(), 2);
//! ```
//!
//! Side names coming from text input are parsed with [`Side::from_str`]
//! (`"left"` / `"right"`); anything else is an [`InvalidSide`] error.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`Side::from_str`]: core::str::FromStr::from_str

#![no_std]

extern crate alloc;

mod error;
mod levels;
mod node;
mod path;
mod tree;

pub use error::{InsertError, InvalidSide};
pub use levels::{Levels, Slot};
pub use node::TreeNode;
pub use path::{NodePath, Side};
pub use tree::BinaryTree;
