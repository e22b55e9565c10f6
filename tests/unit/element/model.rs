use super::*;
use crate::animation::path::Path;
use crate::animation::progression::Progression;
use crate::foundation::core::{Rgba, Vec2};

fn constant(d: f64) -> Progression {
    Progression::constant(d).unwrap()
}

#[test]
fn element_without_tracks_has_zero_duration() {
    let e = Element::builder("dot").build();
    assert_eq!(e.duration(), 0.0);
    assert!(e.active_kinds().is_empty());
    assert_eq!(e.visual(), Visual::circle(1.0));
}

#[test]
fn duration_covers_every_track_including_color() {
    let e = Element::builder("dot")
        .movement(
            MoveTrack::builder()
                .path(constant(2.0), Path::still(Vec2::ZERO))
                .build()
                .unwrap(),
        )
        .color(
            ColorTrack::builder()
                .fade(constant(7.0), Rgba::WHITE, Rgba::TRANSPARENT)
                .build()
                .unwrap(),
        )
        .build();
    assert_eq!(e.duration(), 7.0);
}

#[test]
fn active_kinds_follow_order_and_skip_missing_tracks() {
    let e = Element::builder("box")
        .order(TransformOrder::ZOOM_ROTATE_MOVE)
        .movement(
            MoveTrack::builder()
                .path(constant(1.0), Path::still(Vec2::ZERO))
                .build()
                .unwrap(),
        )
        .zoom(
            ZoomTrack::builder()
                .zoom(constant(1.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0))
                .build()
                .unwrap(),
        )
        .build();
    assert_eq!(
        e.active_kinds(),
        vec![TransformKind::Zoom, TransformKind::Move]
    );
    assert!(!e.has(TransformKind::Rotate));
}
