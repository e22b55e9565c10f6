use super::*;
use std::f64::consts::{FRAC_PI_2, PI};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn sin_passes_through_origin() {
    assert_eq!(Function::sin().evaluate(0.0), Some(0.0));
    assert!(approx(Function::sin().evaluate(FRAC_PI_2).unwrap(), 1.0));
}

#[test]
fn shift_and_stretch_apply_around_the_base_curve() {
    // y = 2 * sin((x - pi) / 2) + 1
    let f = Function::sin()
        .horizontal_shift(PI)
        .horizontal_stretch(2.0)
        .vertical_stretch(2.0)
        .vertical_shift(1.0);
    assert!(approx(f.evaluate(PI).unwrap(), 1.0));
    assert!(approx(f.evaluate(2.0 * PI).unwrap(), 3.0));
}

#[test]
fn trig_asymptotes_are_out_of_domain() {
    assert_eq!(Function::tan().evaluate(FRAC_PI_2), None);
    assert_eq!(Function::sec().evaluate(FRAC_PI_2), None);
    assert_eq!(Function::csc().evaluate(0.0), None);
    assert_eq!(Function::cot().evaluate(0.0), None);
    assert!(approx(Function::sec().evaluate(0.0).unwrap(), 1.0));
}

#[test]
fn sqrt_and_log_reject_their_invalid_inputs() {
    assert_eq!(Function::sqrt().evaluate(-1.0), None);
    assert_eq!(Function::sqrt().evaluate(9.0), Some(3.0));
    assert_eq!(Function::ln().evaluate(0.0), None);
    assert_eq!(Function::ln().evaluate(-2.0), None);
    assert!(approx(Function::log(10.0).evaluate(1000.0).unwrap(), 3.0));
    assert_eq!(Function::log(1.0).evaluate(5.0), None);
}

#[test]
fn polynomial_uses_ascending_coefficients() {
    // 1 + 2x + 3x^2
    let f = Function::polynomial(vec![1.0, 2.0, 3.0]);
    assert_eq!(f.evaluate(2.0), Some(17.0));
    assert_eq!(Function::polynomial(Vec::new()).evaluate(4.0), Some(0.0));
}

#[test]
fn quadratic_from_coefficients_matches_expanded_form() {
    let (a, b, c) = (2.0, -3.0, 0.5);
    let f = Function::quadratic_from_coefficients(a, b, c);
    for x in [-2.0, -0.5, 0.0, 0.75, 3.0] {
        let expected = a * x * x + b * x + c;
        assert!(approx(f.evaluate(x).unwrap(), expected), "x={x}");
    }
}

#[test]
fn degenerate_quadratic_is_a_line() {
    let f = Function::quadratic_from_coefficients(0.0, 2.0, 1.0);
    assert_eq!(f.kind(), &FunctionKind::Polynomial { coefficients: vec![1.0, 2.0] });
    assert_eq!(f.evaluate(3.0), Some(7.0));
}

#[test]
fn exponential_bases() {
    assert!(approx(Function::exp().evaluate(1.0).unwrap(), std::f64::consts::E));
    assert_eq!(Function::exponential(2.0).evaluate(3.0), Some(8.0));
}

#[test]
fn zero_horizontal_stretch_is_out_of_domain() {
    assert_eq!(Function::sin().horizontal_stretch(0.0).evaluate(1.0), None);
}
