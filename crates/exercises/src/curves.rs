//! Closed-form curves drawn by the exercises.
//!
//! Each curve is a small `Copy` descriptor whose parameters are captured at
//! construction and evaluated through [`Curve::eval`]. None of them validate
//! their inputs: a zero denominator or a non-finite parameter simply produces
//! a non-finite value.

use slate_core::Curve;

/// The logistic curve `1 / (1 + e^-(alpha + beta·x))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sigmoid {
    pub alpha: f64,
    pub beta: f64,
}

impl Sigmoid {
    #[must_use]
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }
}

impl Curve for Sigmoid {
    fn eval(&self, x: f64) -> f64 {
        1.0 / (1.0 + (-(self.alpha + self.beta * x)).exp())
    }
}

/// The polynomial `beta_0 + beta_1·x + beta_2·x²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub beta_0: f64,
    pub beta_1: f64,
    pub beta_2: f64,
}

impl Quadratic {
    #[must_use]
    pub fn new(beta_0: f64, beta_1: f64, beta_2: f64) -> Self {
        Self {
            beta_0,
            beta_1,
            beta_2,
        }
    }
}

impl Curve for Quadratic {
    fn eval(&self, x: f64) -> f64 {
        self.beta_0 + self.beta_1 * x + self.beta_2 * x.powi(2)
    }
}

/// The line `wi·x + wj·y = b + offset`, solved for `y`.
///
/// With `offset = 0` this is an SVM decision boundary; offsets of `±1` give
/// the two margin boundaries. Evaluates to `±inf` or NaN when `wj = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub wi: f64,
    pub wj: f64,
    pub b: f64,
    pub offset: f64,
}

impl Line {
    /// The decision boundary `wi·x + wj·y = b`.
    #[must_use]
    pub fn decision(wi: f64, wj: f64, b: f64) -> Self {
        Self {
            wi,
            wj,
            b,
            offset: 0.0,
        }
    }

    /// The margin boundary on the positive side, `wi·x + wj·y = b + 1`.
    #[must_use]
    pub fn upper_margin(wi: f64, wj: f64, b: f64) -> Self {
        Self {
            offset: 1.0,
            ..Self::decision(wi, wj, b)
        }
    }

    /// The margin boundary on the negative side, `wi·x + wj·y = b - 1`.
    #[must_use]
    pub fn lower_margin(wi: f64, wj: f64, b: f64) -> Self {
        Self {
            offset: -1.0,
            ..Self::decision(wi, wj, b)
        }
    }
}

impl Curve for Line {
    fn eval(&self, x: f64) -> f64 {
        (self.offset + self.b - self.wi * x) / self.wj
    }
}
