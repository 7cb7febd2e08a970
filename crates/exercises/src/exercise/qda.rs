use slate_core::{COORDINATE_SYSTEM, Chart, Point, Step, StepError, Store};

use crate::{curves::Quadratic, params::params};

params! {
    /// Coefficients of the quadratic boundary drawn over the unlabeled cloud.
    pub struct QdaParams {
        beta_0 = 0.0 in -10.0..=10.0,
        beta_1 = 0.0 in -10.0..=10.0,
        beta_2 = 0.0 in -3.0..=3.0,
    }
}

/// The point cloud the boundary is drawn against.
pub const QDA_POINTS: [Point; 11] = [
    Point::new(1.0, 1.0),
    Point::new(2.0, 2.0),
    Point::new(2.0, 4.0),
    Point::new(2.8, 0.0),
    Point::new(2.5, 2.0),
    Point::new(0.0, 8.0),
    Point::new(0.0, 4.0),
    Point::new(0.0, 2.0),
    Point::new(0.0, 8.0),
    Point::new(1.0, 6.0),
    Point::new(1.0, 2.0),
];

/// Wires the quadratic discriminant display.
///
/// Purely visual: redraws the quadratic over [`QDA_POINTS`] and writes
/// nothing back.
///
/// # Errors
///
/// Returns [`StepError::ChartNotFound`] if the step has no coordinate system.
pub fn qda_exercise<S: Step>(step: &S, store: &mut Store<QdaParams>) -> Result<(), StepError> {
    let mut chart = step.chart(COORDINATE_SYSTEM)?;
    let points = QDA_POINTS;

    store.subscribe(move |params: &QdaParams| {
        let boundary = Quadratic::new(params.beta_0, params.beta_1, params.beta_2);

        chart.clear();
        chart.set_functions(vec![Box::new(boundary)]);
        chart.draw_points(&points);

        None
    });

    Ok(())
}
