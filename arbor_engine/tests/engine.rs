// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behaviour of `TreeLayoutEngine` against a recording surface.

use std::cell::RefCell;
use std::rc::Rc;

use arbor_engine::{HitParams, NodeStyle, SelectionChange, TreeLayoutEngine};
use arbor_surface::Color;
use arbor_surface_ref::RefSurface;
use arbor_tree::{BinaryTree, InsertError, NodePath, Side, TreeNode};
use kurbo::{Point, Size};

const SURFACE: Size = Size::new(800.0, 600.0);

/// Callback fields as the information panel would show them.
type Report = (Option<String>, &'static str, String);

fn record<T: ToString + 'static>(
    engine: &mut TreeLayoutEngine<T>,
) -> Rc<RefCell<Vec<Report>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    engine.set_selection_callback(move |change: &SelectionChange<'_, T>| {
        sink.borrow_mut().push((
            change.value().map(ToString::to_string),
            change.root_label(),
            change.depth_label(),
        ));
    });
    log
}

fn three_nodes() -> TreeLayoutEngine<i32> {
    TreeLayoutEngine::with_tree(BinaryTree::with_root(
        TreeNode::new(1)
            .with_left(TreeNode::new(2))
            .with_right(TreeNode::new(3)),
    ))
}

fn red() -> Color {
    NodeStyle::default().selected
}

#[test]
fn empty_tree_draws_nothing() {
    let mut engine = TreeLayoutEngine::<i32>::new();
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);
    assert!(surface.ops().is_empty());

    assert!(!engine.handle_pointer(Point::new(400.0, 300.0), &mut surface));
    assert!(surface.ops().is_empty());
}

#[test]
fn root_only() {
    let mut engine = TreeLayoutEngine::with_tree(BinaryTree::with_root(TreeNode::new(42)));
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);

    assert_eq!(surface.clear_count(), 1);
    assert_eq!(engine.radius(), 45.0);

    let circles: Vec<_> = surface.circles().collect();
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].0.center, Point::new(400.0, 55.0));
    assert_eq!(circles[0].0.radius, 45.0);
    // The root starts selected.
    assert_eq!(circles[0].1, red());

    let texts: Vec<_> = surface.texts().collect();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].text, "42");
    assert_eq!(texts[0].anchor, Point::new(400.0, 55.0));
    assert_eq!(texts[0].font_size, 45.0 * 0.9);
    assert_eq!(surface.lines().count(), 0);
}

#[test]
fn single_child_edge_is_vertical_and_trimmed() {
    let mut engine = TreeLayoutEngine::with_tree(BinaryTree::with_root(
        TreeNode::new(1).with_left(TreeNode::new(2)),
    ));
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);

    let r = engine.radius();
    assert_eq!(r, 22.5);
    let lines: Vec<_> = surface.lines().collect();
    assert_eq!(lines.len(), 1);
    let line = lines[0].0;
    assert!((line.p0.x - 200.0).abs() < 1e-9);
    assert!((line.p1.x - 200.0).abs() < 1e-9);
    assert!((line.p0.y - (32.5 + r)).abs() < 1e-9);
    assert!((line.p1.y - (332.5 - r)).abs() < 1e-9);
}

#[test]
fn edge_endpoints_lie_on_circles() {
    let mut engine = three_nodes();
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);

    let r = engine.radius();
    let centers: Vec<Point> = surface.circles().map(|(c, _)| c.center).collect();
    let on_some_circle = |p: Point| centers.iter().any(|c| (p.distance(*c) - r).abs() < 1e-9);

    assert_eq!(surface.lines().count(), 2);
    for (line, color) in surface.lines() {
        assert!(on_some_circle(line.p0));
        assert!(on_some_circle(line.p1));
        assert_eq!(color, NodeStyle::default().edge);
    }
}

#[test]
fn only_the_selection_is_red() {
    let mut engine = three_nodes();
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);

    let red_circles = surface.circles().filter(|(_, c)| *c == red()).count();
    let red_texts: Vec<_> = surface
        .texts()
        .filter(|t| t.color == red())
        .map(|t| t.text)
        .collect();
    assert_eq!(red_circles, 1);
    assert_eq!(red_texts, ["1"]);
}

#[test]
fn clicking_a_centre_selects_and_redraws() {
    let mut engine = three_nodes();
    let log = record(&mut engine);
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);

    assert!(engine.handle_pointer(Point::new(200.0, 332.5), &mut surface));
    assert_eq!(engine.tree().selected(), Some(&NodePath::root().child(Side::Left)));
    assert_eq!(surface.clear_count(), 2);
    assert_eq!(*log.borrow(), [(Some("2".to_string()), "No", "1".to_string())]);

    let red_texts: Vec<_> = surface
        .texts()
        .filter(|t| t.color == red())
        .map(|t| t.text)
        .collect();
    assert_eq!(red_texts, ["2"]);

    // Back to the root.
    assert!(engine.handle_pointer(Point::new(400.0, 32.5), &mut surface));
    assert_eq!(log.borrow()[1], (Some("1".to_string()), "Yes", "0".to_string()));
}

#[test]
fn clicking_near_the_boundary() {
    let mut engine = three_nodes();
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);

    // Exactly on the circle of the right child.
    assert!(engine.handle_pointer(Point::new(600.0 + 22.5, 332.5), &mut surface));
    assert_eq!(engine.tree().selected_node().map(|n| *n.value()), Some(3));

    // Just outside misses without tolerance...
    assert!(engine.handle_pointer(Point::new(600.0 + 25.0, 332.5), &mut surface));
    assert!(engine.tree().selected().is_none());

    // ...and hits with it.
    let mut engine = three_nodes().with_hit_params(HitParams { tolerance: 5.0 });
    engine.draw(&mut surface);
    assert!(engine.handle_pointer(Point::new(600.0 + 25.0, 332.5), &mut surface));
    assert_eq!(engine.tree().selected_node().map(|n| *n.value()), Some(3));
}

#[test]
fn far_click_deselects_once() {
    let mut engine = three_nodes();
    let log = record(&mut engine);
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);

    assert!(engine.handle_pointer(Point::new(5.0, 595.0), &mut surface));
    assert!(engine.tree().selected().is_none());
    assert_eq!(*log.borrow(), [(None, "No", "-".to_string())]);
    assert_eq!(surface.circles().filter(|(_, c)| *c == red()).count(), 0);

    let ops = surface.ops().len();
    assert!(!engine.handle_pointer(Point::new(790.0, 10.0), &mut surface));
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(surface.ops().len(), ops);
}

#[test]
fn same_click_twice_notifies_once() {
    let mut engine = three_nodes();
    let log = record(&mut engine);
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);

    let click = Point::new(600.0, 332.5);
    assert!(engine.handle_pointer(click, &mut surface));
    let ops = surface.ops().len();
    assert!(!engine.handle_pointer(click, &mut surface));

    assert_eq!(log.borrow().len(), 1);
    assert_eq!(surface.ops().len(), ops);
    assert_eq!(surface.clear_count(), 2);
}

#[test]
fn pointer_hits_what_was_last_drawn() {
    let mut engine = three_nodes();
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);

    // Resized but not redrawn: the right child is still shown at (600, 332.5).
    surface.resize(Size::new(400.0, 300.0));
    assert!(engine.handle_pointer(Point::new(600.0, 332.5), &mut surface));
    assert_eq!(engine.tree().selected_node().map(|n| *n.value()), Some(3));

    // That click redrew at the new size; the left child is now at (100, 171.25).
    assert_eq!(engine.radius(), 11.25);
    assert!(engine.handle_pointer(Point::new(100.0, 171.25), &mut surface));
    assert_eq!(engine.tree().selected_node().map(|n| *n.value()), Some(2));
}

#[test]
fn undrawn_insertions_do_not_move_hit_geometry() {
    let root_only = || TreeLayoutEngine::with_tree(BinaryTree::with_root(TreeNode::new(1)));

    // The visible root is still where it was drawn.
    let mut engine = root_only();
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);
    engine.insert(2, Side::Left).unwrap();
    assert!(engine.handle_pointer(Point::new(400.0, 55.0), &mut surface));
    assert_eq!(engine.tree().selected(), Some(&NodePath::root()));

    // The new node has no drawn circle yet, wherever it currently sits.
    let mut engine = root_only();
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);
    let child = engine.insert(2, Side::Left).unwrap();
    let undrawn = engine.tree().node(&child).unwrap().position();
    assert!(engine.handle_pointer(undrawn, &mut surface));
    assert_eq!(engine.tree().selected(), None);
}

#[test]
fn nothing_is_hit_before_the_first_draw() {
    let mut engine = three_nodes();
    let mut surface = RefSurface::new(SURFACE);
    // Deselects the root and draws.
    assert!(engine.handle_pointer(Point::new(400.0, 32.5), &mut surface));
    assert_eq!(engine.tree().selected(), None);
    assert_eq!(surface.clear_count(), 1);
}

#[test]
fn cleared_callback_is_not_called() {
    let mut engine = three_nodes();
    let log = record(&mut engine);
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);

    engine.clear_selection_callback();
    assert!(engine.handle_pointer(Point::new(600.0, 332.5), &mut surface));
    assert!(log.borrow().is_empty());
}

#[test]
fn insert_grows_at_the_selection() {
    let mut engine = TreeLayoutEngine::new();
    let log = record(&mut engine);

    engine.insert("x", Side::Left).unwrap();
    assert_eq!(engine.tree().root().map(|n| *n.value()), Some("x"));
    assert_eq!(engine.tree().selected(), Some(&NodePath::root()));

    let y = engine.insert("y", Side::Right).unwrap();
    assert_eq!(y, NodePath::root().child(Side::Right));

    engine.insert("z", Side::Left).unwrap();
    // Re-select "y" and insert left again: "z" is replaced.
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);
    let y_pos = engine.tree().node(&y).unwrap().position();
    assert!(engine.handle_pointer(y_pos, &mut surface));
    engine.insert("w", Side::Left).unwrap();

    let y_node = engine.tree().node(&y).unwrap();
    assert_eq!(y_node.left().map(|n| *n.value()), Some("w"));
    assert_eq!(engine.tree().len(), 3);

    let values: Vec<_> = log.borrow().iter().map(|r| r.0.clone()).collect();
    let expected = ["x", "y", "z", "y", "w"].map(|v| Some(v.to_string()));
    assert_eq!(values, expected);
}

#[test]
fn insert_does_not_draw() {
    let mut engine = three_nodes();
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);
    let ops = surface.ops().len();

    engine.insert(4, Side::Left).unwrap();
    assert_eq!(surface.ops().len(), ops);

    engine.draw(&mut surface);
    assert_eq!(surface.circles().count(), 3);
    assert_eq!(surface.clear_count(), 2);
}

#[test]
fn invalid_side_leaves_everything_alone() {
    let mut engine = three_nodes();
    let log = record(&mut engine);
    let before = engine.tree().clone();

    let err = engine.insert_named(9, "up").unwrap_err();
    assert!(matches!(err, InsertError::InvalidSide(ref e) if e.got == "up"));
    assert_eq!(
        err.to_string(),
        "invalid insertion side: expected 'left' or 'right', got 'up'"
    );
    assert_eq!(*engine.tree(), before);
    assert!(log.borrow().is_empty());

    engine.insert_named(9, "right").unwrap();
    assert_eq!(engine.tree().len(), 3);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn empty_engine_takes_any_side_name() {
    let mut engine = TreeLayoutEngine::<i32>::new();
    let log = record(&mut engine);

    let path = engine.insert_named(5, "up").unwrap();
    assert!(path.is_root());
    assert_eq!(engine.tree().root().map(|n| *n.value()), Some(5));
    assert_eq!(*log.borrow(), [(Some("5".to_string()), "Yes", "0".to_string())]);

    assert!(engine.insert_named(6, "up").is_err());
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn insert_without_selection_is_rejected() {
    let mut engine = three_nodes();
    let mut surface = RefSurface::new(SURFACE);
    engine.draw(&mut surface);
    assert!(engine.handle_pointer(Point::new(5.0, 595.0), &mut surface));

    assert_eq!(engine.insert(7, Side::Left), Err(InsertError::NoSelection));
    assert_eq!(engine.tree().len(), 3);
}
