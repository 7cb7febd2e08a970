use log::debug;
use slate_core::{COORDINATE_SYSTEM, Chart, Point, Step, StepError, Store, Writeback};

use crate::{curves::Quadratic, loss::squared_error, params::params};

params! {
    /// Coefficients of the quadratic fitted in the regression exercise.
    pub struct LinearParams {
        beta_0 = 0.0 in -10.0..=10.0,
        beta_1 = 0.0 in -10.0..=10.0,
        beta_2 = 0.0 in -3.0..=3.0,
    }
}

/// Observations the regression exercise fits.
pub const LINEAR_POINTS: [Point; 6] = [
    Point::new(1.0, 1.0),
    Point::new(2.0, 4.0),
    Point::new(3.0, 8.0),
    Point::new(5.0, 23.0),
    Point::new(4.0, 15.0),
    Point::new(3.5, 12.0),
];

impl From<LinearParams> for Quadratic {
    fn from(p: LinearParams) -> Self {
        Quadratic::new(p.beta_0, p.beta_1, p.beta_2)
    }
}

/// Wires the polynomial regression exercise.
///
/// Redraws the fitted quadratic over [`LINEAR_POINTS`] and writes the sum of
/// squared residuals back as `loss`.
///
/// # Errors
///
/// Returns [`StepError::ChartNotFound`] if the step has no coordinate system.
pub fn linear_exercise<S: Step>(
    step: &S,
    store: &mut Store<LinearParams>,
) -> Result<(), StepError> {
    let mut chart = step.chart(COORDINATE_SYSTEM)?;
    let points = LINEAR_POINTS;

    store.subscribe(move |params: &LinearParams| {
        let fit = Quadratic::from(*params);
        let loss = squared_error(&fit, &points);
        debug!("linear: {params:?} -> loss {loss}");

        chart.clear();
        chart.set_functions(vec![Box::new(fit)]);
        chart.draw_points(&points);

        Some(Writeback::new("loss", loss))
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::test_utils::{EmptyStep, TestStep};

    #[test]
    fn squared_error_for_pure_square() {
        let step = TestStep::default();
        let mut store = Store::new(LinearParams {
            beta_0: 0.0,
            beta_1: 0.0,
            beta_2: 1.0,
        });

        linear_exercise(&step, &mut store).unwrap();

        // Residuals against x²: 0, 0, -1, -2, -1, -0.25.
        assert_eq!(store.output("loss"), Some(6.0625));
    }

    #[test]
    fn loss_tracks_slider_changes() {
        let step = TestStep::default();
        let mut store = Store::<LinearParams>::default();
        linear_exercise(&step, &mut store).unwrap();

        let flat: f64 = LINEAR_POINTS.iter().map(|p| p.y * p.y).sum();
        assert_relative_eq!(store.output("loss").unwrap(), flat);

        store.set("beta_0", 1.0).unwrap();
        let shifted: f64 = LINEAR_POINTS.iter().map(|p| (p.y - 1.0).powi(2)).sum();
        assert_relative_eq!(store.output("loss").unwrap(), shifted);
    }

    #[test]
    fn redraws_curve_and_points_on_every_change() {
        let step = TestStep::default();
        let mut store = Store::<LinearParams>::default();
        linear_exercise(&step, &mut store).unwrap();

        store.set("beta_1", 2.0).unwrap();
        store.set("beta_2", 0.5).unwrap();

        let chart = step.chart.borrow();
        assert_eq!(chart.redraws, 3);
        assert_eq!(chart.point_sets, vec![LINEAR_POINTS.to_vec()]);
        assert_eq!(chart.eval_all(2.0), vec![2.0 * 2.0 + 0.5 * 4.0]);
    }

    #[test]
    fn missing_chart_is_an_error() {
        let mut store = Store::<LinearParams>::default();
        let err = linear_exercise(&EmptyStep, &mut store).unwrap_err();

        assert_eq!(err, StepError::ChartNotFound(COORDINATE_SYSTEM.into()));
        assert_eq!(store.watcher_count(), 0);
    }
}
