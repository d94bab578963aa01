// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The binary tree container: root ownership, selection and insertion.

use alloc::boxed::Box;

use crate::error::InsertError;
use crate::levels::{Levels, stamp_depths};
use crate::node::TreeNode;
use crate::path::{NodePath, Side};

/// An owned binary tree with an optional selected node.
///
/// The tree is grown exclusively through [`insert`](Self::insert), which
/// attaches relative to the current selection. There is no removal.
///
/// The selection is stored as a [`NodePath`] rather than a reference so the
/// tree can be mutated freely while something is selected.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryTree<T> {
    root: Option<Box<TreeNode<T>>>,
    selected: Option<NodePath>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    /// Creates an empty tree with nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            selected: None,
        }
    }

    /// Creates a tree from a pre-built node graph. The root starts selected.
    #[must_use]
    pub fn with_root(root: TreeNode<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
            selected: Some(NodePath::root()),
        }
    }

    /// Returns `true` if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Mutable access to the root node, if any.
    pub fn root_mut(&mut self) -> Option<&mut TreeNode<T>> {
        self.root.as_deref_mut()
    }

    /// Resolves `path` to a node.
    pub fn node(&self, path: &NodePath) -> Option<&TreeNode<T>> {
        path.sides()
            .iter()
            .try_fold(self.root()?, |node, &side| node.child(side))
    }

    /// Resolves `path` to a mutable node.
    pub fn node_mut(&mut self, path: &NodePath) -> Option<&mut TreeNode<T>> {
        let mut node = self.root_mut()?;
        for &side in path.sides() {
            node = node.child_mut(side)?;
        }
        Some(node)
    }

    /// Number of real nodes, by direct traversal.
    pub fn len(&self) -> usize {
        self.root().map_or(0, TreeNode::subtree_len)
    }

    /// Path of the selected node, if any.
    pub fn selected(&self) -> Option<&NodePath> {
        self.selected.as_ref()
    }

    /// The selected node, if any.
    pub fn selected_node(&self) -> Option<&TreeNode<T>> {
        self.node(self.selected.as_ref()?)
    }

    /// Replaces the selection, returning `true` if it changed.
    ///
    /// Paths that do not resolve to a node clear the selection.
    pub fn select(&mut self, path: Option<NodePath>) -> bool {
        let path = path.filter(|p| self.node(p).is_some());
        if path == self.selected {
            return false;
        }
        self.selected = path;
        true
    }

    /// Inserts `value` relative to the selection and selects the new node.
    ///
    /// - On an empty tree `value` becomes the root whatever `side` is.
    /// - Otherwise the new leaf is attached as the selected node's `side`
    ///   child. An existing child on that side is **replaced**, together with
    ///   its subtree.
    ///
    /// Depth limits are left to callers.
    ///
    /// # Errors
    ///
    /// [`InsertError::NoSelection`] if the tree is non-empty and nothing (or a
    /// stale path) is selected. The tree is left untouched.
    pub fn insert(&mut self, value: T, side: Side) -> Result<NodePath, InsertError> {
        if self.root.is_none() {
            return Ok(self.plant_root(value));
        }

        let parent_path = self.selected.clone().ok_or(InsertError::NoSelection)?;
        let parent = self
            .node_mut(&parent_path)
            .ok_or(InsertError::NoSelection)?;
        let mut child = TreeNode::new(value);
        child.set_depth(parent.depth() + 1);
        parent.set_child(side, child);

        let path = parent_path.child(side);
        self.selected = Some(path.clone());
        Ok(path)
    }

    /// Like [`insert`](Self::insert), with the side given by name.
    ///
    /// On an empty tree the name is not looked at: `value` becomes the root.
    ///
    /// # Errors
    ///
    /// [`InsertError::InvalidSide`] if the tree is non-empty and `side` is
    /// neither `"left"` nor `"right"`. Otherwise as [`insert`](Self::insert).
    pub fn insert_named(&mut self, value: T, side: &str) -> Result<NodePath, InsertError> {
        if self.root.is_none() {
            return Ok(self.plant_root(value));
        }
        let side = side.parse::<Side>()?;
        self.insert(value, side)
    }

    /// Makes `value` the root of an empty tree and selects it.
    fn plant_root(&mut self, value: T) -> NodePath {
        self.root = Some(Box::new(TreeNode::new(value)));
        let path = NodePath::root();
        self.selected = Some(path.clone());
        path
    }

    /// Stamps every node's depth without building levels.
    pub fn stamp_depths(&mut self) {
        if let Some(root) = self.root_mut() {
            stamp_depths(root, 0);
        }
    }

    /// Level decomposition with placeholders, stamping each node's depth.
    ///
    /// See [`Levels`] for the slot layout.
    pub fn level_order(&mut self) -> Levels<'_, T> {
        self.stamp_depths();
        Levels::build(self.root())
    }

    /// Level decomposition without touching cached depths.
    pub fn levels(&self) -> Levels<'_, T> {
        Levels::build(self.root())
    }

    /// Largest slot count of any level, placeholders included.
    ///
    /// Recomputed on every call.
    pub fn width(&self) -> usize {
        self.levels().width()
    }

    /// Number of levels, found by depth-first search.
    ///
    /// Recomputed on every call.
    pub fn height(&self) -> usize {
        fn dfs<T>(node: Option<&TreeNode<T>>) -> usize {
            match node {
                None => 0,
                Some(node) => 1 + dfs(node.left()).max(dfs(node.right())),
            }
        }
        dfs(self.root())
    }

    /// Visits every real node in pre-order together with its path.
    pub fn for_each(&self, mut f: impl FnMut(&NodePath, &TreeNode<T>)) {
        fn walk<T>(
            node: &TreeNode<T>,
            path: &mut NodePath,
            f: &mut impl FnMut(&NodePath, &TreeNode<T>),
        ) {
            f(&*path, node);
            for side in Side::BOTH {
                if let Some(child) = node.child(side) {
                    path.push(side);
                    walk(child, path, f);
                    path.pop();
                }
            }
        }

        if let Some(root) = self.root() {
            walk(root, &mut NodePath::root(), &mut f);
        }
    }

    /// Visits every real node mutably in pre-order together with its path.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&NodePath, &mut TreeNode<T>)) {
        fn walk<T>(
            node: &mut TreeNode<T>,
            path: &mut NodePath,
            f: &mut impl FnMut(&NodePath, &mut TreeNode<T>),
        ) {
            f(&*path, &mut *node);
            for side in Side::BOTH {
                if let Some(child) = node.child_mut(side) {
                    path.push(side);
                    walk(child, path, f);
                    path.pop();
                }
            }
        }

        if let Some(root) = self.root_mut() {
            walk(root, &mut NodePath::root(), &mut f);
        }
    }

    /// Returns the path of the first node in pre-order (node, left subtree,
    /// right subtree) matching `pred`.
    pub fn find_path(&self, mut pred: impl FnMut(&TreeNode<T>) -> bool) -> Option<NodePath> {
        fn search<T>(
            node: &TreeNode<T>,
            path: &mut NodePath,
            pred: &mut impl FnMut(&TreeNode<T>) -> bool,
        ) -> bool {
            if pred(node) {
                return true;
            }
            for side in Side::BOTH {
                if let Some(child) = node.child(side) {
                    path.push(side);
                    if search(child, path, pred) {
                        return true;
                    }
                    path.pop();
                }
            }
            false
        }

        let mut path = NodePath::root();
        search(self.root()?, &mut path, &mut pred).then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn sample() -> BinaryTree<i32> {
        BinaryTree::with_root(
            TreeNode::new(1)
                .with_left(TreeNode::new(2).with_left(TreeNode::new(4)))
                .with_right(TreeNode::new(3)),
        )
    }

    #[test]
    fn empty_tree_is_total() {
        let mut tree = BinaryTree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.width(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.level_order().is_empty());
        assert!(tree.selected_node().is_none());
        assert!(tree.find_path(|_| true).is_none());
    }

    #[test]
    fn width_and_height_count_placeholders() {
        let tree = sample();
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.width(), 4);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn level_order_stamps_depths() {
        let mut tree = sample();
        let _ = tree.level_order();
        let mut depths = Vec::new();
        tree.for_each_mut(|path, node| depths.push((*node.value(), path.depth(), node.depth())));
        assert_eq!(depths, [(1, 0, 0), (2, 1, 1), (4, 2, 2), (3, 1, 1)]);
    }

    #[test]
    fn insert_into_empty_tree_makes_root() {
        let mut tree = BinaryTree::new();
        let path = tree.insert("x", Side::Right).unwrap();
        assert!(path.is_root());
        assert_eq!(tree.root().map(|n| *n.value()), Some("x"));
        assert_eq!(tree.selected(), Some(&NodePath::root()));
    }

    #[test]
    fn insert_attaches_to_selection_and_moves_it() {
        let mut tree = BinaryTree::new();
        tree.insert("x", Side::Left).unwrap();
        let y = tree.insert("y", Side::Right).unwrap();

        assert_eq!(y, NodePath::root().child(Side::Right));
        assert_eq!(tree.root().and_then(TreeNode::right).map(|n| *n.value()), Some("y"));
        assert_eq!(tree.selected_node().map(|n| *n.value()), Some("y"));
    }

    #[test]
    fn insert_overwrites_existing_child() {
        let mut tree = BinaryTree::new();
        tree.insert("x", Side::Left).unwrap();
        let y = tree.insert("y", Side::Right).unwrap();
        tree.insert("z", Side::Left).unwrap();
        tree.insert("deep", Side::Left).unwrap();

        // Back at "y", inserting left again replaces "z" and its subtree.
        assert!(tree.select(Some(y.clone())));
        tree.insert("w", Side::Left).unwrap();

        let y_node = tree.node(&y).unwrap();
        assert_eq!(y_node.left().map(|n| *n.value()), Some("w"));
        assert!(y_node.left().unwrap().is_leaf());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn insert_named_rejects_unknown_side_without_mutation() {
        let mut tree = sample();
        let before = tree.clone();
        let err = tree.insert_named(9, "up").unwrap_err();
        assert!(matches!(err, InsertError::InvalidSide(ref e) if e.got == "up"));
        assert_eq!(tree, before);
    }

    #[test]
    fn empty_tree_accepts_any_side_name() {
        let mut tree = BinaryTree::new();
        let path = tree.insert_named(5, "up").unwrap();
        assert!(path.is_root());
        assert_eq!(tree.root().map(|n| *n.value()), Some(5));
        assert_eq!(tree.selected(), Some(&NodePath::root()));

        // Once there is a root, names are checked again.
        assert!(tree.insert_named(6, "middle").is_err());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn insert_without_selection_fails() {
        let mut tree = sample();
        tree.select(None);
        assert_eq!(tree.insert(5, Side::Left), Err(InsertError::NoSelection));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn select_reports_changes_only() {
        let mut tree = sample();
        assert!(!tree.select(Some(NodePath::root())));
        let left = NodePath::root().child(Side::Left);
        assert!(tree.select(Some(left.clone())));
        assert!(!tree.select(Some(left)));
        // Unresolvable paths clear the selection.
        let bogus = NodePath::root().child(Side::Right).child(Side::Right);
        assert!(tree.select(Some(bogus)));
        assert_eq!(tree.selected(), None);
    }

    #[test]
    fn for_each_is_preorder() {
        let tree = sample();
        let mut seen = Vec::new();
        tree.for_each(|path, node| seen.push((*node.value(), path.depth())));
        assert_eq!(seen, [(1, 0), (2, 1), (4, 2), (3, 1)]);
    }

    #[test]
    fn find_path_is_preorder() {
        let tree = sample();
        let even = tree.find_path(|n| n.value() % 2 == 0).unwrap();
        assert_eq!(even, NodePath::root().child(Side::Left));
        let four = tree.find_path(|n| *n.value() == 4).unwrap();
        assert_eq!(four.sides(), &[Side::Left, Side::Left]);
    }
}
