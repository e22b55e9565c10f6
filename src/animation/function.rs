use std::f64::consts::E;

/// Values of `|cos|`/`|sin|` below this are treated as asymptotes.
const ASYMPTOTE_EPS: f64 = 1e-12;

/// Base curve of a [`Function`].
#[derive(Clone, Debug, PartialEq)]
pub enum FunctionKind {
    /// `sin(u)`
    Sin,
    /// `cos(u)`
    Cos,
    /// `tan(u)`
    Tan,
    /// `1 / sin(u)`
    Csc,
    /// `1 / cos(u)`
    Sec,
    /// `cos(u) / sin(u)`
    Cot,
    /// `u^2`
    Quadratic,
    /// `sqrt(u)`
    Sqrt,
    /// `c0 + c1*u + c2*u^2 + ...`
    Polynomial {
        /// Coefficients in ascending power order.
        coefficients: Vec<f64>,
    },
    /// `base^u`
    Exponential {
        /// Exponent base.
        base: f64,
    },
    /// `log_base(u)`
    Log {
        /// Logarithm base.
        base: f64,
    },
}

/// A base curve with vertical/horizontal shift and stretch applied:
///
/// `y = vertical_stretch * f((x - horizontal_shift) / horizontal_stretch) + vertical_shift`
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    kind: FunctionKind,
    vertical_shift: f64,
    horizontal_shift: f64,
    vertical_stretch: f64,
    horizontal_stretch: f64,
}

impl Function {
    /// Wrap a base curve with identity shift/stretch.
    pub fn new(kind: FunctionKind) -> Self {
        Self {
            kind,
            vertical_shift: 0.0,
            horizontal_shift: 0.0,
            vertical_stretch: 1.0,
            horizontal_stretch: 1.0,
        }
    }

    /// `sin(x)`
    pub fn sin() -> Self {
        Self::new(FunctionKind::Sin)
    }

    /// `cos(x)`
    pub fn cos() -> Self {
        Self::new(FunctionKind::Cos)
    }

    /// `tan(x)`
    pub fn tan() -> Self {
        Self::new(FunctionKind::Tan)
    }

    /// `csc(x)`
    pub fn csc() -> Self {
        Self::new(FunctionKind::Csc)
    }

    /// `sec(x)`
    pub fn sec() -> Self {
        Self::new(FunctionKind::Sec)
    }

    /// `cot(x)`
    pub fn cot() -> Self {
        Self::new(FunctionKind::Cot)
    }

    /// `x^2`
    pub fn quadratic() -> Self {
        Self::new(FunctionKind::Quadratic)
    }

    /// `a*x^2 + b*x + c`, stored in vertex form.
    ///
    /// With `a == 0` the curve is the line `b*x + c`.
    pub fn quadratic_from_coefficients(a: f64, b: f64, c: f64) -> Self {
        if a == 0.0 {
            return Self::polynomial(vec![c, b]);
        }
        let h = -b / (2.0 * a);
        let k = a * h * h + b * h + c;
        Self::quadratic()
            .horizontal_shift(h)
            .vertical_shift(k)
            .vertical_stretch(a)
    }

    /// `sqrt(x)`
    pub fn sqrt() -> Self {
        Self::new(FunctionKind::Sqrt)
    }

    /// Polynomial with coefficients in ascending power order.
    pub fn polynomial(coefficients: Vec<f64>) -> Self {
        Self::new(FunctionKind::Polynomial { coefficients })
    }

    /// `e^x`
    pub fn exp() -> Self {
        Self::exponential(E)
    }

    /// `base^x`
    pub fn exponential(base: f64) -> Self {
        Self::new(FunctionKind::Exponential { base })
    }

    /// `ln(x)`
    pub fn ln() -> Self {
        Self::log(E)
    }

    /// `log_base(x)`
    pub fn log(base: f64) -> Self {
        Self::new(FunctionKind::Log { base })
    }

    /// Set the vertical shift.
    pub fn vertical_shift(mut self, v: f64) -> Self {
        self.vertical_shift = v;
        self
    }

    /// Set the horizontal shift.
    pub fn horizontal_shift(mut self, v: f64) -> Self {
        self.horizontal_shift = v;
        self
    }

    /// Set the vertical stretch.
    pub fn vertical_stretch(mut self, v: f64) -> Self {
        self.vertical_stretch = v;
        self
    }

    /// Set the horizontal stretch.
    pub fn horizontal_stretch(mut self, v: f64) -> Self {
        self.horizontal_stretch = v;
        self
    }

    /// The base curve.
    pub fn kind(&self) -> &FunctionKind {
        &self.kind
    }

    /// Evaluate at `x`, or `None` when `x` maps outside the base curve's domain.
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        let u = (x - self.horizontal_shift) / self.horizontal_stretch;
        if !u.is_finite() {
            return None;
        }
        let base = self.evaluate_base(u)?;
        let y = self.vertical_stretch * base + self.vertical_shift;
        y.is_finite().then_some(y)
    }

    fn evaluate_base(&self, u: f64) -> Option<f64> {
        match &self.kind {
            FunctionKind::Sin => Some(u.sin()),
            FunctionKind::Cos => Some(u.cos()),
            FunctionKind::Tan => {
                let c = u.cos();
                (c.abs() > ASYMPTOTE_EPS).then(|| u.sin() / c)
            }
            FunctionKind::Csc => {
                let s = u.sin();
                (s.abs() > ASYMPTOTE_EPS).then(|| 1.0 / s)
            }
            FunctionKind::Sec => {
                let c = u.cos();
                (c.abs() > ASYMPTOTE_EPS).then(|| 1.0 / c)
            }
            FunctionKind::Cot => {
                let s = u.sin();
                (s.abs() > ASYMPTOTE_EPS).then(|| u.cos() / s)
            }
            FunctionKind::Quadratic => Some(u * u),
            FunctionKind::Sqrt => (u >= 0.0).then(|| u.sqrt()),
            FunctionKind::Polynomial { coefficients } => {
                Some(coefficients.iter().rev().fold(0.0, |acc, c| acc * u + c))
            }
            FunctionKind::Exponential { base } => Some(base.powf(u)),
            FunctionKind::Log { base } => {
                if u <= 0.0 || *base <= 0.0 || *base == 1.0 {
                    return None;
                }
                Some(u.ln() / base.ln())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/function.rs"]
mod tests;
