//! Exercise wirings.
//!
//! Every exercise has the same shape:
//!
//! ```ignore
//! fn exercise(step: &impl Step, store: &mut Store<Params>) -> Result<(), StepError>
//! ```
//!
//! It resolves the [`COORDINATE_SYSTEM`] chart from the step and subscribes a
//! single watcher to the store. The watcher runs once on registration and
//! again on every parameter change; it clears the chart, sets the new
//! curves, draws its point sets, and optionally writes a diagnostic back.
//!
//! | Exercise | Curves | Output |
//! |----------|--------|--------|
//! | [`linear_exercise`] | quadratic fit | `loss` (squared error) |
//! | [`qda_exercise`] | quadratic boundary | — |
//! | [`logistic_exercise`] | sigmoid | `loss` (negative log-likelihood) |
//! | [`svm_exercise`] | decision line and margins | `loss` (hinge + L2) |
//! | [`likelihood_ratio_exercise`] | — | growing ROC trace |
//! | [`dimension_reduction_exercise`] | — | `value` (neighbor probability) |
//!
//! [`COORDINATE_SYSTEM`]: slate_core::COORDINATE_SYSTEM

mod dimension_reduction;
mod likelihood_ratio;
mod linear;
mod logistic;
mod qda;
mod svm;

pub use dimension_reduction::{
    DIMENSION_REDUCTION_POINTS, DimensionReductionParams, dimension_reduction_exercise,
};
pub use likelihood_ratio::{LikelihoodRatioParams, likelihood_ratio_exercise, roc_point};
pub use linear::{LINEAR_POINTS, LinearParams, linear_exercise};
pub use logistic::{LOGISTIC_ONES, LOGISTIC_ZEROS, LogisticParams, logistic_exercise};
pub use qda::{QDA_POINTS, QdaParams, qda_exercise};
pub use svm::{SVM_NEGATIVE, SVM_POSITIVE, SvmParams, svm_exercise};
