// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_engine --heading-base-level=0

//! Arbor Engine: an interactive binary tree on a drawing surface.
//!
//! [`TreeLayoutEngine`] owns a [`BinaryTree`] and ties the other Arbor crates
//! together:
//!
//! - [`draw`](TreeLayoutEngine::draw) lays the tree out for the surface's
//!   current size (see [`arbor_layout`]) and emits circles, labels and edges
//!   through [`arbor_surface::Surface`].
//! - [`handle_pointer`](TreeLayoutEngine::handle_pointer) hit-tests a point
//!   in pre-order against the node circles of the last draw, updates the
//!   selection, and only when the selection actually changed redraws and
//!   notifies the selection callback.
//! - [`insert`](TreeLayoutEngine::insert) grows the tree at the selection.
//!
//! The engine holds no reference to a surface; every drawing entry point
//! takes one. All work happens synchronously on the calling thread.
//!
//! ## Minimal example
//!
//! ```rust
//! use arbor_engine::TreeLayoutEngine;
//! use arbor_surface_ref::RefSurface;
//! use arbor_tree::{BinaryTree, TreeNode};
//! use kurbo::{Point, Size};
//!
//! let tree = BinaryTree::with_root(
//!     TreeNode::new(1)
//!         .with_left(TreeNode::new(2))
//!         .with_right(TreeNode::new(3)),
//! );
//! let mut engine = TreeLayoutEngine::with_tree(tree);
//! engine.set_selection_callback(|change| {
//!     println!("selected {:?} (root: {})", change.value(), change.root_label());
//! });
//!
//! let mut surface = RefSurface::new(Size::new(800.0, 600.0));
//! engine.draw(&mut surface);
//! assert_eq!(surface.circles().count(), 3);
//!
//! // Click the right child.
//! assert!(engine.handle_pointer(Point::new(600.0, 332.5), &mut surface));
//! assert_eq!(engine.tree().selected_node().map(|n| *n.value()), Some(3));
//! ```
//!
//! With the `tracing` feature enabled, each layout pass and each selection
//! change is reported as a `debug!` event.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};
use core::ptr;

use arbor_layout::{LayoutConfig, TreeLayout, layout_tree};
use arbor_surface::{Surface, SurfaceExt};
use arbor_tree::{BinaryTree, InsertError, NodePath, Side, TreeNode};
use kurbo::{Circle, Line, Point, Vec2};

mod hit;
mod selection;
mod style;

pub use hit::{HitParams, HitTarget, circle_contains, hit_targets, hit_test};
pub use selection::SelectionChange;
pub use style::NodeStyle;

type SelectionCallback<T> = Box<dyn FnMut(&SelectionChange<'_, T>)>;

/// Owns a tree and renders, hit-tests and grows it.
pub struct TreeLayoutEngine<T> {
    tree: BinaryTree<T>,
    config: LayoutConfig,
    style: NodeStyle,
    hit: HitParams,
    radius: f64,
    targets: Vec<HitTarget>,
    on_selection_changed: Option<SelectionCallback<T>>,
}

impl<T: Debug> Debug for TreeLayoutEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeLayoutEngine")
            .field("tree", &self.tree)
            .field("config", &self.config)
            .field("style", &self.style)
            .field("hit", &self.hit)
            .field("radius", &self.radius)
            .field("targets", &self.targets)
            .field("on_selection_changed", &self.on_selection_changed.is_some())
            .finish()
    }
}

impl<T> Default for TreeLayoutEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeLayoutEngine<T> {
    /// Creates an engine around an empty tree.
    pub fn new() -> Self {
        Self::with_tree(BinaryTree::new())
    }

    /// Creates an engine around an existing tree, keeping its selection.
    pub fn with_tree(tree: BinaryTree<T>) -> Self {
        Self {
            tree,
            config: LayoutConfig::default(),
            style: NodeStyle::default(),
            hit: HitParams::default(),
            radius: 0.0,
            targets: Vec::new(),
            on_selection_changed: None,
        }
    }

    /// Replaces the layout constants.
    #[must_use]
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the colors.
    #[must_use]
    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the hit-test parameters.
    #[must_use]
    pub fn with_hit_params(mut self, hit: HitParams) -> Self {
        self.hit = hit;
        self
    }

    /// The owned tree.
    pub fn tree(&self) -> &BinaryTree<T> {
        &self.tree
    }

    /// Consumes the engine, returning its tree.
    pub fn into_tree(self) -> BinaryTree<T> {
        self.tree
    }

    /// Layout constants in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Colors in use.
    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    /// Node radius of the most recent draw, `0.0` before the first.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Registers the selection-changed callback, replacing any previous one.
    pub fn set_selection_callback(
        &mut self,
        callback: impl FnMut(&SelectionChange<'_, T>) + 'static,
    ) {
        self.on_selection_changed = Some(Box::new(callback));
    }

    /// Removes the selection-changed callback.
    pub fn clear_selection_callback(&mut self) {
        self.on_selection_changed = None;
    }

    /// Inserts `value` at the selection and reports the new selection.
    ///
    /// See [`BinaryTree::insert`] for placement rules. The surface is not
    /// touched; call [`draw`](Self::draw) afterwards. Until then the new
    /// node cannot be hit by [`handle_pointer`](Self::handle_pointer).
    ///
    /// # Errors
    ///
    /// As [`BinaryTree::insert`]; the tree and selection are unchanged and
    /// the callback is not invoked.
    pub fn insert(&mut self, value: T, side: Side) -> Result<NodePath, InsertError> {
        let path = self.tree.insert(value, side)?;
        self.notify_selection();
        Ok(path)
    }

    /// Like [`insert`](Self::insert), with the side given by name.
    ///
    /// # Errors
    ///
    /// As [`BinaryTree::insert_named`]: an empty tree takes any side name,
    /// otherwise `side` must be `"left"` or `"right"`.
    pub fn insert_named(&mut self, value: T, side: &str) -> Result<NodePath, InsertError> {
        let path = self.tree.insert_named(value, side)?;
        self.notify_selection();
        Ok(path)
    }

    /// Lays the tree out for `surface`, remembering the radius and the
    /// circles to hit-test against.
    fn layout(&mut self, surface: &impl Surface) -> Option<TreeLayout> {
        let layout = layout_tree(&mut self.tree, surface.size(), &self.config)?;
        self.radius = layout.radius;
        self.targets = hit_targets(&self.tree, layout.radius);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            radius = layout.radius,
            levels = layout.height,
            slots = layout.width,
            "tree laid out"
        );
        Some(layout)
    }

    fn notify_selection(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = ?self.tree.selected().map(NodePath::sides),
            "selection changed"
        );
        if let Some(callback) = self.on_selection_changed.as_mut() {
            callback(&SelectionChange::of(&self.tree));
        }
    }
}

impl<T: Display> TreeLayoutEngine<T> {
    /// Clears `surface` and redraws the whole tree.
    ///
    /// An empty tree emits nothing at all, not even a clear.
    pub fn draw(&mut self, surface: &mut impl Surface) {
        let Some(layout) = self.layout(&*surface) else {
            return;
        };
        surface.clear_all();

        let selected = self.tree.selected_node();
        let levels = self.tree.levels();
        for level in levels.iter().rev() {
            for node in level.iter().flatten() {
                let is_selected = selected.is_some_and(|s| ptr::eq(s, *node));
                self.draw_node(surface, node, &layout, is_selected);
            }
        }
    }

    fn draw_node(
        &self,
        surface: &mut impl Surface,
        node: &TreeNode<T>,
        layout: &TreeLayout,
        is_selected: bool,
    ) {
        let center = node.position();
        surface.stroke_circle(
            Circle::new(center, layout.radius),
            self.style.outline(is_selected),
        );
        surface.fill_text(
            &node.value().to_string(),
            center,
            layout.font_size,
            self.style.label(is_selected),
        );
        for child in [node.left(), node.right()].into_iter().flatten() {
            surface.stroke_line(edge(center, child.position(), layout.radius), self.style.edge);
        }
    }

    /// Hit-tests `point` and updates the selection.
    ///
    /// Hits are checked against the circles of the last [`draw`](Self::draw),
    /// so nodes inserted since then are not hit and nothing is before the
    /// first draw. The first node in pre-order whose circle contains `point`
    /// becomes selected; a miss clears the selection. When the selection
    /// changed, `surface` is redrawn and the callback runs. Returns whether
    /// it changed.
    pub fn handle_pointer(&mut self, point: Point, surface: &mut impl Surface) -> bool {
        let hit = hit_test(&self.targets, point, &self.hit).cloned();
        if !self.tree.select(hit) {
            return false;
        }
        self.draw(surface);
        self.notify_selection();
        true
    }
}

/// Segment between two node centres, trimmed to the circle boundaries.
fn edge(parent: Point, child: Point, radius: f64) -> Line {
    let offset = Vec2::from_angle((child - parent).atan2()) * radius;
    Line::new(parent + offset, child - offset)
}
