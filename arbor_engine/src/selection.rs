// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection-changed notifications.

use alloc::string::{String, ToString};

use arbor_tree::{BinaryTree, TreeNode};

/// Payload of the selection-changed callback.
///
/// Mirrors the three fields an information panel shows: the selected value,
/// whether it is the root, and its depth.
#[derive(Debug)]
pub struct SelectionChange<'a, T> {
    /// The newly selected node, or `None` when the selection was cleared.
    pub node: Option<&'a TreeNode<T>>,
    /// `true` if the selected node is the root.
    pub is_root: bool,
    /// Distance of the selected node from the root.
    pub depth: Option<usize>,
}

impl<T> Clone for SelectionChange<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SelectionChange<'_, T> {}

impl<'a, T> SelectionChange<'a, T> {
    /// Describes the current selection of `tree`.
    pub fn of(tree: &'a BinaryTree<T>) -> Self {
        match tree.selected().zip(tree.selected_node()) {
            Some((path, node)) => Self {
                node: Some(node),
                is_root: path.is_root(),
                depth: Some(path.depth()),
            },
            None => Self {
                node: None,
                is_root: false,
                depth: None,
            },
        }
    }

    /// The selected value, if any.
    pub fn value(&self) -> Option<&'a T> {
        self.node.map(TreeNode::value)
    }

    /// `"Yes"` or `"No"`.
    pub fn root_label(&self) -> &'static str {
        if self.is_root { "Yes" } else { "No" }
    }

    /// The depth as text, or `"-"` when nothing is selected.
    pub fn depth_label(&self) -> String {
        self.depth.map_or_else(|| "-".to_string(), |depth| depth.to_string())
    }
}
