use log::debug;
use slate_core::{COORDINATE_SYSTEM, Chart, Point, Step, StepError, Store, Writeback};

use crate::{
    curves::Sigmoid,
    loss::{negative_log_likelihood, round_to},
    params::params,
};

params! {
    /// Intercept and slope of the logistic curve.
    pub struct LogisticParams {
        alpha = 0.0 in -10.0..=10.0,
        beta = 1.0 in -10.0..=10.0,
    }
}

/// Inputs labeled 0.
pub const LOGISTIC_ZEROS: [f64; 6] = [-1.2, -0.8, -0.7, 0.4, -2.4, 1.13];

/// Inputs labeled 1.
pub const LOGISTIC_ONES: [f64; 5] = [2.2, 1.3, 0.8, 2.5, 2.62];

/// Decimal places the displayed loss is rounded to.
const LOSS_DECIMALS: i32 = 3;

/// Wires the logistic regression exercise.
///
/// Draws the sigmoid with the zero-labeled inputs at `y = 0` and the
/// one-labeled inputs at `y = 1`, and writes the negative log-likelihood,
/// rounded to three decimals, back as `loss`.
///
/// # Errors
///
/// Returns [`StepError::ChartNotFound`] if the step has no coordinate system.
pub fn logistic_exercise<S: Step>(
    step: &S,
    store: &mut Store<LogisticParams>,
) -> Result<(), StepError> {
    let mut chart = step.chart(COORDINATE_SYSTEM)?;
    let zeros = LOGISTIC_ZEROS.map(|x| Point::new(x, 0.0));
    let ones = LOGISTIC_ONES.map(|x| Point::new(x, 1.0));

    store.subscribe(move |params: &LogisticParams| {
        let curve = Sigmoid::new(params.alpha, params.beta);
        let nll = negative_log_likelihood(&curve, &LOGISTIC_ZEROS, &LOGISTIC_ONES);
        let loss = round_to(nll, LOSS_DECIMALS);
        debug!("logistic: {params:?} -> loss {loss}");

        chart.clear();
        chart.set_functions(vec![Box::new(curve)]);
        chart.draw_points(&zeros);
        chart.draw_points(&ones);

        Some(Writeback::new("loss", loss))
    });

    Ok(())
}
