use super::*;

fn constant(d: f64) -> Progression {
    Progression::constant(d).unwrap()
}

fn still_then_linear() -> MoveTrack {
    MoveTrack::builder()
        .path(constant(1.0), Path::still(Vec2::ZERO))
        .path(constant(2.0), Path::linear(Vec2::ZERO, Vec2::new(3.0, 1.0)))
        .build()
        .unwrap()
}

#[test]
fn duration_is_sum_of_segments() {
    let track = still_then_linear();
    assert_eq!(track.duration(), 3.0);
    assert!(!track.is_complete(2.9));
    assert!(track.is_complete(3.0));
    assert_eq!(track.segments().len(), 2);
}

#[test]
fn samples_across_segment_boundary() {
    let track = still_then_linear();
    assert_eq!(track.sample(0.0), Vec2::ZERO);
    assert_eq!(track.sample(1.0), Vec2::ZERO);
    assert_eq!(track.sample(2.0), Vec2::new(1.5, 0.5));
    assert_eq!(track.sample(3.0), Vec2::new(3.0, 1.0));
}

#[test]
fn samples_outside_the_track_are_clamped() {
    let track = MoveTrack::builder()
        .path(constant(2.0), Path::linear(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)))
        .path(constant(3.0), Path::linear(Vec2::new(2.0, 2.0), Vec2::new(5.0, 0.0)))
        .build()
        .unwrap();
    assert_eq!(track.duration(), 5.0);
    assert_eq!(track.sample(-1.0), track.sample(0.0));
    assert_eq!(track.sample(10.0), track.sample(5.0));
    assert_eq!(track.sample(5.0), Vec2::new(5.0, 0.0));
}

#[test]
fn end_state_is_exact_under_rubber_band() {
    let track = RotateTrack::builder()
        .rotate(Progression::rubber_band(2.0, 6.0).unwrap(), 0.0, 90.0)
        .build()
        .unwrap();
    assert!(track.sample(5.0) > 90.0);
    assert_eq!(track.sample(6.0), 90.0);
    assert_eq!(track.sample(60.0), 90.0);
}

#[test]
fn color_fade_interpolates_alpha() {
    let track = ColorTrack::builder()
        .fade(constant(2.0), Rgba::new(1.0, 1.0, 1.0, 1.0), Rgba::new(1.0, 1.0, 1.0, 0.0))
        .build()
        .unwrap();
    let c = track.sample(1.0);
    assert_eq!(c.a, 0.5);
    assert_eq!((c.r, c.g, c.b), (1.0, 1.0, 1.0));
}

#[test]
fn color_hold_keeps_the_color() {
    let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
    let track = ColorTrack::builder()
        .hold(red, 1.0)
        .unwrap()
        .fade(constant(1.0), red, Rgba::BLACK)
        .build()
        .unwrap();
    assert_eq!(track.sample(0.5), red);
    assert_eq!(track.duration(), 2.0);
    assert_eq!(track.sample(2.0), Rgba::BLACK);
}

#[test]
fn zoom_axes_run_on_their_own_progressions() {
    let track = ZoomTrack::builder()
        .zoom_axes(
            constant(1.0),
            constant(2.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(3.0, 3.0),
            Vec2::ZERO,
        )
        .build()
        .unwrap();
    assert_eq!(track.duration(), 2.0);
    // Width finished at t=1 and holds; height is halfway.
    assert_eq!(track.sample(1.0), Vec2::new(3.0, 2.0));
    assert_eq!(track.sample(1.5), Vec2::new(3.0, 2.5));
}

#[test]
fn pivots_switch_at_segment_boundaries() {
    let a = Vec2::new(0.5, 0.5);
    let b = Vec2::new(-1.0, 2.0);
    let track = ZoomTrack::builder()
        .zoom_around(constant(1.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), a)
        .zoom_around(constant(1.0), Vec2::new(2.0, 2.0), Vec2::new(1.0, 1.0), b)
        .build()
        .unwrap();
    assert_eq!(track.pivot_at(-1.0), a);
    assert_eq!(track.pivot_at(0.99), a);
    assert_eq!(track.pivot_at(1.0), b);
    assert_eq!(track.pivot_at(5.0), b);
}

#[test]
fn default_pivot_is_origin() {
    let track = RotateTrack::builder()
        .rotate(constant(1.0), 0.0, 45.0)
        .build()
        .unwrap();
    assert_eq!(track.pivot_at(0.5), Vec2::ZERO);
}

#[test]
fn empty_builder_is_rejected() {
    let err = ColorTrack::builder().build().unwrap_err();
    assert!(matches!(err, ReelError::EmptyTrack("color")));
    assert!(MoveTrack::builder().build().is_err());
}
