//! Scalar diagnostics recomputed by the exercise watchers.
//!
//! All functions are pure and permissive: non-finite inputs flow through to
//! non-finite results.

use slate_core::{Curve, Point};

use crate::stats::gaussian_kernel;

/// Sum of squared residuals `Σ (y − f(x))²` of `curve` over `points`.
pub fn squared_error<C: Curve + ?Sized>(curve: &C, points: &[Point]) -> f64 {
    points
        .iter()
        .map(|p| (p.y - curve.eval(p.x)).powi(2))
        .sum()
}

/// Negative log-likelihood of a probability curve on binary-labeled inputs.
///
/// `zeros` holds inputs labeled 0 and `ones` inputs labeled 1; each
/// contributes `ln(1 / (1 − f(x)))` or `ln(1 / f(x))` respectively.
pub fn negative_log_likelihood<C: Curve + ?Sized>(curve: &C, zeros: &[f64], ones: &[f64]) -> f64 {
    let ones_loss: f64 = ones.iter().map(|&x| (1.0 / curve.eval(x)).ln()).sum();
    let zeros_loss: f64 = zeros
        .iter()
        .map(|&x| (1.0 / (1.0 - curve.eval(x))).ln())
        .sum();

    ones_loss + zeros_loss
}

/// Soft-margin SVM objective: mean hinge loss plus an L2 penalty.
///
/// With margin `m = wi·x + wj·y − b`, points in `positive` contribute
/// `max(0, 1 − m)` and points in `negative` contribute `max(0, 1 + m)`. The
/// hinge sum is averaged over all points and `lambda·(wi² + wj²)` is added.
#[allow(clippy::cast_precision_loss)]
pub fn svm_objective(
    [wi, wj]: [f64; 2],
    b: f64,
    lambda: f64,
    positive: &[Point],
    negative: &[Point],
) -> f64 {
    let margin = |p: &Point| wi * p.x + wj * p.y - b;

    let positive_loss: f64 = positive.iter().map(|p| (1.0 - margin(p)).max(0.0)).sum();
    let negative_loss: f64 = negative.iter().map(|p| (1.0 + margin(p)).max(0.0)).sum();

    let n = (positive.len() + negative.len()) as f64;
    (positive_loss + negative_loss) / n + lambda * (wi * wi + wj * wj)
}

/// Probability of picking `target` as `anchor`'s neighbor under a Gaussian kernel.
///
/// Computes `k(target, anchor) / Σ k(p, anchor)` over `candidates`, the
/// conditional similarity used by stochastic neighbor embedding.
pub fn neighbor_probability(anchor: Point, target: Point, candidates: &[Point], sigma: f64) -> f64 {
    let numerator = gaussian_kernel(target, anchor, sigma);
    let total: f64 = candidates
        .iter()
        .map(|&p| gaussian_kernel(p, anchor, sigma))
        .sum();

    numerator / total
}

/// Rounds `value` to `decimals` decimal places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}
