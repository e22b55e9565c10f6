use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn all_variants() -> Vec<Progression> {
    vec![
        Progression::constant(4.0).unwrap(),
        Progression::ease_in_out(1.0, 4.0).unwrap(),
        Progression::ease_in_out(3.0, 5.0).unwrap(),
        Progression::rubber_band(2.0, 6.0).unwrap(),
        Progression::rubber_band(0.7, 2.3).unwrap(),
    ]
}

#[test]
fn endpoints_are_exact() {
    for p in all_variants() {
        assert_eq!(p.percent(0.0), 0.0, "{p:?}");
        assert_eq!(p.percent(p.duration()), 1.0, "{p:?}");
    }
    assert_eq!(Progression::constant(4.0).unwrap().percent(4.0), 1.0);
}

#[test]
fn inputs_outside_duration_are_clamped() {
    for p in all_variants() {
        assert_eq!(p.percent(-3.0), 0.0);
        assert_eq!(p.percent(p.duration() + 10.0), 1.0);
    }
}

#[test]
fn constant_is_linear() {
    let p = Progression::constant(4.0).unwrap();
    assert!(approx(p.percent(1.0), 0.25));
    assert!(approx(p.percent(3.0), 0.75));
}

#[test]
fn ease_in_out_is_monotonic_and_symmetric() {
    let p = Progression::ease_in_out(1.0, 4.0).unwrap();
    let mut prev = p.percent(0.0);
    for i in 1..=400 {
        let t = f64::from(i) * 0.01;
        let cur = p.percent(t);
        assert!(cur >= prev, "not monotonic at t={t}: {prev} -> {cur}");
        assert!(cur <= 1.0);
        prev = cur;
    }
    assert!(approx(p.percent(2.0), 0.5));
    assert!(approx(p.percent(0.5) + p.percent(3.5), 1.0));
}

#[test]
fn ease_window_is_clamped_to_half_duration() {
    let p = Progression::ease_in_out(10.0, 4.0).unwrap();
    assert_eq!(
        p,
        Progression::EaseInOut {
            duration: 4.0,
            ease: 2.0
        }
    );
    assert!(approx(p.percent(2.0), 0.5));
}

#[test]
fn rubber_band_overshoots_then_settles() {
    // overshoot 2 is halved to 1, which is below duration / 3.
    let p = Progression::rubber_band(2.0, 6.0).unwrap();
    assert_eq!(
        p,
        Progression::RubberBand {
            duration: 6.0,
            rubber: 1.0
        }
    );

    let peak = (1..100)
        .map(|i| p.percent(4.0 + f64::from(i) * 0.02))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0, "expected overshoot, peak={peak}");
    assert!(approx(p.percent(5.0), 1.125));
    assert_eq!(p.percent(6.0), 1.0);
}

#[test]
fn rubber_band_is_linear_before_overshoot_window() {
    let p = Progression::rubber_band(2.0, 6.0).unwrap();
    assert!(approx(p.percent(1.0), 0.25));
    assert!(approx(p.percent(2.0), 0.5));
}

#[test]
fn rubber_clamps_to_third_of_duration() {
    let p = Progression::rubber_band(12.0, 3.0).unwrap();
    assert_eq!(
        p,
        Progression::RubberBand {
            duration: 3.0,
            rubber: 1.0
        }
    );
}

#[test]
fn degenerate_windows_fall_back_to_constant() {
    assert_eq!(
        Progression::ease_in_out(0.0, 2.0).unwrap(),
        Progression::Constant { duration: 2.0 }
    );
    assert_eq!(
        Progression::rubber_band(-1.0, 2.0).unwrap(),
        Progression::Constant { duration: 2.0 }
    );
}

#[test]
fn non_positive_durations_are_rejected() {
    for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            Progression::constant(d),
            Err(ReelError::InvalidDuration(_))
        ));
        assert!(Progression::ease_in_out(0.5, d).is_err());
        assert!(Progression::rubber_band(0.5, d).is_err());
    }
}
