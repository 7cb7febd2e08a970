use log::debug;
use slate_core::{COORDINATE_SYSTEM, Chart, Point, Step, StepError, Store, Writeback};

use crate::{loss::neighbor_probability, params::params};

params! {
    /// Bandwidth of the Gaussian kernel.
    pub struct DimensionReductionParams {
        sigma = 1.0 in 0.1..=5.0,
    }
}

/// The anchor point followed by its three candidate neighbors.
pub const DIMENSION_REDUCTION_POINTS: [Point; 4] = [
    Point::new(0.0, 0.0),
    Point::new(0.0, 1.0),
    Point::new(1.0, 1.0),
    Point::new(4.0, 0.0),
];

/// Wires the dimension reduction (neighbor similarity) exercise.
///
/// Writes back as `value` the probability that the first point picks the
/// second as its neighbor, normalized over the three non-anchor points.
///
/// # Errors
///
/// Returns [`StepError::ChartNotFound`] if the step has no coordinate system.
pub fn dimension_reduction_exercise<S: Step>(
    step: &S,
    store: &mut Store<DimensionReductionParams>,
) -> Result<(), StepError> {
    let mut chart = step.chart(COORDINATE_SYSTEM)?;
    let points = DIMENSION_REDUCTION_POINTS;

    store.subscribe(move |params: &DimensionReductionParams| {
        let [anchor, target, ..] = points;
        let value = neighbor_probability(anchor, target, &points[1..], params.sigma);
        debug!("dimension reduction: {params:?} -> value {value}");

        chart.clear();
        chart.draw_points(&points);

        Some(Writeback::new("value", value))
    });

    Ok(())
}
