use thiserror::Error;

use crate::Chart;

/// Selector of the coordinate-system chart every exercise draws into.
pub const COORDINATE_SYSTEM: &str = "x-coordinate-system";

/// Errors that can occur when resolving collaborators from a step.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("no chart matches selector `{0}`")]
    ChartNotFound(String),
}

/// The context an exercise runs in.
///
/// A step owns the charts laid out on the page and hands out handles to them
/// by selector. Handles are `'static` so a watcher can keep one for the
/// lifetime of its store.
pub trait Step {
    /// The chart handle type this step hands out.
    type Chart: Chart + 'static;

    /// Resolves the chart registered under `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::ChartNotFound`] if no chart matches `selector`.
    fn chart(&self, selector: &str) -> Result<Self::Chart, StepError>;
}
