use super::*;
use crate::foundation::core::Point;

#[test]
fn children_compose_with_their_parents() {
    let mut tree = SceneTree::new();
    let root = tree.root();
    let a = tree.create_child_under(root).unwrap();
    let b = tree.create_child_under(a).unwrap();
    tree.set_position(a, Vec2::new(1.0, 0.0));
    tree.set_scale(a, Vec2::new(2.0, 2.0));
    tree.set_position(b, Vec2::new(0.0, 1.0));

    let world = tree.world_affine(b).unwrap();
    assert_eq!(world * Point::ORIGIN, Point::new(1.0, 2.0));
    assert_eq!(tree.len(), 3);
}

#[test]
fn rotation_is_counter_clockwise_degrees() {
    let mut tree = SceneTree::new();
    let n = tree.create_child_under(tree.root()).unwrap();
    tree.set_rotation_degrees(n, 90.0);
    let p = tree.world_affine(n).unwrap() * Point::new(1.0, 0.0);
    assert!(p.x.abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
}

#[test]
fn unknown_parent_is_rejected() {
    let mut tree = SceneTree::new();
    assert!(tree.create_child_under(NodeId(7)).is_err());
    assert!(tree.world_affine(NodeId(7)).is_none());
}

#[test]
fn world_visuals_only_lists_nodes_with_visuals() {
    let mut tree = SceneTree::new();
    let outer = tree.create_child_under(tree.root()).unwrap();
    let inner = tree.create_child_under(outer).unwrap();
    tree.attach_visual(inner, Visual::rect(2.0, 1.0));
    tree.set_color(inner, Rgba::BLACK);
    tree.set_position(outer, Vec2::new(3.0, 0.0));

    let visuals = tree.world_visuals();
    assert_eq!(visuals.len(), 1);
    assert_eq!(visuals[0].node, inner);
    assert_eq!(visuals[0].color, Rgba::BLACK);
    assert_eq!(visuals[0].transform * Point::ORIGIN, Point::new(3.0, 0.0));
}

#[test]
fn reset_keeps_only_the_root() {
    let mut tree = SceneTree::new();
    let n = tree.create_child_under(tree.root()).unwrap();
    tree.attach_visual(n, Visual::circle(1.0));
    tree.reset();
    assert!(tree.is_empty());
    assert!(tree.world_visuals().is_empty());
}
