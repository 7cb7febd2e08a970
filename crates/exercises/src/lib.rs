//! Slider-driven exercises for an interactive machine-learning course.
//!
//! Each exercise resolves a chart from a [`Step`](slate_core::Step), builds a
//! fixed set of sample points, and subscribes one watcher to a typed
//! [`Store`](slate_core::Store). Whenever a slider moves, the watcher rebuilds
//! its curves, recomputes a diagnostic, writes it back into the store, and
//! redraws the chart.
//!
//! # Modules
//!
//! - [`curves`] — value-type curve descriptors ([`Sigmoid`], [`Quadratic`], [`Line`])
//! - [`stats`] — error function, normal CDF, and Gaussian kernel
//! - [`loss`] — squared error, log-likelihood, hinge objective, kernel ratio
//! - [`exercise`] — the six exercise wirings and their parameter types

mod params;

pub mod curves;
pub mod exercise;
pub mod loss;
pub mod stats;

#[cfg(test)]
mod test_utils;

pub use curves::{Line, Quadratic, Sigmoid};
pub use exercise::{
    DimensionReductionParams, LikelihoodRatioParams, LinearParams, LogisticParams, QdaParams,
    SvmParams, dimension_reduction_exercise, likelihood_ratio_exercise, linear_exercise,
    logistic_exercise, qda_exercise, svm_exercise,
};
