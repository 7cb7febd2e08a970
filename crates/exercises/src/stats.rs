//! Normal-distribution helpers.

use slate_core::Point;

// Abramowitz & Stegun 7.1.26; absolute error below 1.5e-7.
const P: f64 = 0.327_591_1;
const A1: f64 = 0.254_829_592;
const A2: f64 = -0.284_496_736;
const A3: f64 = 1.421_413_741;
const A4: f64 = -1.453_152_027;
const A5: f64 = 1.061_405_429;

/// Approximates the Gauss error function with a fixed rational polynomial.
///
/// The result takes the sign of `z`; only a strictly negative `z` takes the
/// negative branch.
#[must_use]
pub fn erf(z: f64) -> f64 {
    let t = 1.0 / (1.0 + P * z.abs());
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let magnitude = 1.0 - poly * (-z * z).exp();

    if z < 0.0 { -magnitude } else { magnitude }
}

/// Returns `P(X <= x)` for `X ~ N(mu, sigma²)`.
#[must_use]
pub fn normal_cdf(mu: f64, sigma: f64, x: f64) -> f64 {
    let z = (x - mu) / (2.0 * sigma * sigma).sqrt();
    0.5 * (1.0 + erf(z))
}

/// Gaussian similarity `exp(-|a - b|² / 2σ²)` between two points.
#[must_use]
pub fn gaussian_kernel(a: Point, b: Point, sigma: f64) -> f64 {
    (-Point::distance(a, b).powi(2) / (2.0 * sigma.powi(2))).exp()
}
