use super::*;
use crate::animation::path::Path;
use crate::animation::progression::Progression;
use crate::animation::track::{MoveTrack, ZoomTrack};
use crate::element::model::Visual;
use crate::foundation::core::{Point, Vec2};
use crate::scene::tree::SceneTree;

fn moving_zoomer() -> Element {
    Element::builder("mz")
        .visual(Visual::rect(1.0, 1.0))
        .movement(
            MoveTrack::builder()
                .path(
                    Progression::constant(2.0).unwrap(),
                    Path::linear(Vec2::new(1.0, 1.0), Vec2::new(3.0, 1.0)),
                )
                .build()
                .unwrap(),
        )
        .zoom(
            ZoomTrack::builder()
                .zoom_around(
                    Progression::constant(2.0).unwrap(),
                    Vec2::new(1.0, 1.0),
                    Vec2::new(3.0, 3.0),
                    Vec2::new(0.5, 0.0),
                )
                .build()
                .unwrap(),
        )
        .build()
}

#[test]
fn bind_allocates_one_node_per_active_transform() {
    let mut scene = SceneTree::new();
    let b = RenderBinding::bind(&moving_zoomer(), &mut scene).unwrap();
    assert_eq!(b.levels().len(), 2);
    assert_eq!(scene.len(), 3);
    let leaf = scene.node(b.leaf()).unwrap();
    assert_eq!(leaf.visual, Some(Visual::rect(1.0, 1.0)));
    assert_eq!(leaf.parent, Some(b.levels()[0]));
}

#[test]
fn bind_applies_the_initial_state() {
    let mut scene = SceneTree::new();
    let b = RenderBinding::bind(&moving_zoomer(), &mut scene).unwrap();
    let origin = scene.world_affine(b.leaf()).unwrap() * Point::ORIGIN;
    assert_eq!(origin, Point::new(1.0, 1.0));
}

#[test]
fn apply_matches_pure_composition() {
    let element = moving_zoomer();
    let mut scene = SceneTree::new();
    let b = RenderBinding::bind(&element, &mut scene).unwrap();
    let composed = b.apply(&element, &mut scene, 1.5);
    let world = scene.world_affine(b.leaf()).unwrap();
    let expected = composed.local_to_world();
    for (x, y) in world.as_coeffs().iter().zip(expected.as_coeffs().iter()) {
        assert!((x - y).abs() < 1e-12);
    }
}

#[test]
fn static_element_still_gets_a_node() {
    let mut scene = SceneTree::new();
    let b = RenderBinding::bind(&Element::builder("s").build(), &mut scene).unwrap();
    assert_eq!(b.levels().len(), 1);
    assert_eq!(scene.world_visuals().len(), 1);
}
