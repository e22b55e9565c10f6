use super::*;
use std::f64::consts::PI;

#[test]
fn still_ignores_progress() {
    let p = Path::still(Vec2::new(2.0, -1.0));
    for t in [-0.5, 0.0, 0.3, 1.0, 1.2] {
        assert_eq!(p.position(t), Vec2::new(2.0, -1.0));
    }
}

#[test]
fn linear_hits_both_endpoints() {
    let p = Path::linear(Vec2::new(0.0, 0.0), Vec2::new(3.0, 1.0));
    assert_eq!(p.position(0.0), Vec2::new(0.0, 0.0));
    assert_eq!(p.position(1.0), Vec2::new(3.0, 1.0));
    assert_eq!(p.position(0.5), Vec2::new(1.5, 0.5));
}

#[test]
fn linear_extrapolates_on_overshoot() {
    let p = Path::linear(Vec2::ZERO, Vec2::new(2.0, 0.0));
    assert_eq!(p.position(1.5), Vec2::new(3.0, 0.0));
}

#[test]
fn function_path_sweeps_x() {
    let p: Path = FunctionPath::new(Function::quadratic(), -1.0, 3.0).into();
    assert_eq!(p.position(0.0), Vec2::new(-1.0, 1.0));
    assert_eq!(p.position(0.5), Vec2::new(1.0, 1.0));
    assert_eq!(p.position(1.0), Vec2::new(3.0, 9.0));
}

#[test]
fn function_path_out_of_domain_falls_back_to_origin() {
    let p = FunctionPath::new(Function::sqrt(), -4.0, 4.0);
    assert_eq!(p.position(0.0), Vec2::ZERO);
    assert_eq!(p.position(1.0), Vec2::new(4.0, 2.0));
}

#[test]
fn parametric_circle() {
    let p = ParametricPath::new(Function::cos(), Function::sin(), 0.0, 2.0 * PI);
    let quarter = p.position(0.25);
    assert!(quarter.x.abs() < 1e-12);
    assert!((quarter.y - 1.0).abs() < 1e-12);
}

#[test]
fn parametric_falls_back_when_one_axis_is_undefined() {
    let p = ParametricPath::new(Function::sin(), Function::ln(), -1.0, 1.0);
    assert_eq!(p.position(0.0), Vec2::ZERO);
}
