// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hit-testing against drawn node circles.

use alloc::vec::Vec;

use arbor_tree::{BinaryTree, NodePath};
use kurbo::{Circle, Point};

/// Parameters controlling node hit tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Extra distance, in surface units, beyond the node radius that still
    /// counts as a hit.
    ///
    /// Useful to inflate small nodes for touch input. Negative values shrink
    /// the pickable disk.
    pub tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self { tolerance: 0.0 }
    }
}

/// A node as it was drawn: where it lives in the tree and its circle.
#[derive(Clone, Debug, PartialEq)]
pub struct HitTarget {
    /// Path of the node from the root.
    pub path: NodePath,
    /// The drawn circle.
    pub circle: Circle,
}

/// Hit targets for every node of `tree` at its current position, in
/// pre-order (node, left subtree, right subtree).
pub fn hit_targets<T>(tree: &BinaryTree<T>, radius: f64) -> Vec<HitTarget> {
    let mut targets = Vec::with_capacity(tree.len());
    tree.for_each(|path, node| {
        targets.push(HitTarget {
            path: path.clone(),
            circle: Circle::new(node.position(), radius),
        });
    });
    targets
}

/// Returns `true` if `pt` lies within `circle`, inflated by the tolerance.
///
/// Points exactly on the boundary are hits.
pub fn circle_contains(circle: &Circle, pt: Point, params: &HitParams) -> bool {
    pt.distance(circle.center) <= circle.radius + params.tolerance
}

/// Finds the first target, in order, whose circle contains `pt`.
pub fn hit_test<'a>(
    targets: &'a [HitTarget],
    pt: Point,
    params: &HitParams,
) -> Option<&'a NodePath> {
    targets
        .iter()
        .find(|target| circle_contains(&target.circle, pt, params))
        .map(|target| &target.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_tree::{Side, TreeNode};

    #[test]
    fn boundary_counts_as_hit() {
        let circle = Circle::new((0.0, 0.0), 5.0);
        let params = HitParams::default();
        assert!(circle_contains(&circle, Point::new(5.0, 0.0), &params));
        assert!(circle_contains(&circle, Point::new(3.0, 4.0), &params));
        assert!(!circle_contains(&circle, Point::new(5.01, 0.0), &params));
    }

    #[test]
    fn tolerance_inflates_the_disk() {
        let circle = Circle::new((0.0, 0.0), 5.0);
        let params = HitParams { tolerance: 2.0 };
        assert!(circle_contains(&circle, Point::new(6.5, 0.0), &params));
        assert!(!circle_contains(&circle, Point::new(7.5, 0.0), &params));
    }

    #[test]
    fn overlapping_nodes_resolve_in_preorder() {
        // All nodes share a position; the root wins, then the left subtree.
        let tree = BinaryTree::with_root(
            TreeNode::new(1)
                .with_left(TreeNode::new(2))
                .with_right(TreeNode::new(3)),
        );
        let targets = hit_targets(&tree, 1.0);
        let hit = hit_test(&targets, Point::ZERO, &HitParams::default());
        assert_eq!(hit, Some(&NodePath::root()));

        let tree = BinaryTree::with_root(
            TreeNode::new(1)
                .with_position(Point::new(100.0, 100.0))
                .with_left(TreeNode::new(2))
                .with_right(TreeNode::new(3)),
        );
        let targets = hit_targets(&tree, 1.0);
        let hit = hit_test(&targets, Point::ZERO, &HitParams::default());
        assert_eq!(hit, Some(&NodePath::root().child(Side::Left)));
    }

    #[test]
    fn targets_follow_positions_and_radius() {
        let tree = BinaryTree::with_root(
            TreeNode::new(1)
                .with_position((10.0, 20.0))
                .with_right(TreeNode::new(2).with_position((30.0, 40.0))),
        );
        let targets = hit_targets(&tree, 4.0);
        assert_eq!(
            targets,
            [
                HitTarget {
                    path: NodePath::root(),
                    circle: Circle::new((10.0, 20.0), 4.0),
                },
                HitTarget {
                    path: NodePath::root().child(Side::Right),
                    circle: Circle::new((30.0, 40.0), 4.0),
                },
            ]
        );
    }

    #[test]
    fn nothing_to_hit() {
        let tree = BinaryTree::<u8>::new();
        let targets = hit_targets(&tree, 10.0);
        assert!(targets.is_empty());
        assert_eq!(hit_test(&targets, Point::ZERO, &HitParams::default()), None);
    }
}
