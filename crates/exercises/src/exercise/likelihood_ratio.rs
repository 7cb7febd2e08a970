use log::debug;
use slate_core::{COORDINATE_SYSTEM, Chart, Point, Step, StepError, Store};

use crate::{params::params, stats::normal_cdf};

params! {
    /// Signal mean and likelihood-ratio threshold of the detection exercise.
    pub struct LikelihoodRatioParams {
        mu = 1.0 in 0.1..=5.0,
        t = 1.0 in 0.01..=10.0,
    }
}

/// Returns the `(false alarm rate, detection rate)` of a likelihood-ratio test.
///
/// Noise is `N(0, 1)` and signal `N(mu, 1)`; the test fires when the
/// likelihood ratio exceeds `t`.
#[must_use]
pub fn roc_point(mu: f64, t: f64) -> Point {
    let threshold = t.ln() / mu;
    let false_alarm = 1.0 - normal_cdf(0.0, 1.0, threshold + mu / 2.0);
    let detection = 1.0 - normal_cdf(mu, 1.0, threshold + mu);

    Point::new(false_alarm, detection)
}

/// Wires the likelihood-ratio (ROC) exercise.
///
/// Every invocation appends the operating point for the current `mu` and `t`
/// to a trace and redraws the whole trace. The trace is never cleared, so it
/// keeps growing for as long as the store lives.
///
/// # Errors
///
/// Returns [`StepError::ChartNotFound`] if the step has no coordinate system.
pub fn likelihood_ratio_exercise<S: Step>(
    step: &S,
    store: &mut Store<LikelihoodRatioParams>,
) -> Result<(), StepError> {
    let mut chart = step.chart(COORDINATE_SYSTEM)?;
    let mut trace: Vec<Point> = Vec::new();

    store.subscribe(move |params: &LikelihoodRatioParams| {
        let point = roc_point(params.mu, params.t);
        trace.push(point);
        debug!("likelihood ratio: {params:?} -> {point:?} ({} traced)", trace.len());

        chart.clear();
        chart.draw_points(&trace);

        None
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::test_utils::TestStep;

    #[test]
    fn unit_threshold_point() {
        let point = roc_point(1.0, 1.0);

        // ln(1) = 0: FAR = 1 − Φ(0.5), DR = 1 − Φ(0).
        assert_abs_diff_eq!(point.x, 0.308_537_539, epsilon = 1e-6);
        assert_abs_diff_eq!(point.y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn raising_threshold_lowers_false_alarms() {
        let low = roc_point(1.5, 0.5);
        let high = roc_point(1.5, 4.0);

        assert!(high.x < low.x);
        assert!(high.y < low.y);
    }

    #[test]
    fn trace_grows_by_one_per_invocation() {
        let step = TestStep::default();
        let mut store = Store::<LikelihoodRatioParams>::default();
        likelihood_ratio_exercise(&step, &mut store).unwrap();
        assert_eq!(step.chart.borrow().point_sets[0].len(), 1);

        for (i, t) in [0.5, 2.0, 3.0, 0.25].into_iter().enumerate() {
            store.set("t", t).unwrap();

            let chart = step.chart.borrow();
            assert_eq!(chart.point_sets.len(), 1);
            assert_eq!(chart.point_sets[0].len(), i + 2);
        }
    }

    #[test]
    fn trace_keeps_earlier_points() {
        let step = TestStep::default();
        let mut store = Store::<LikelihoodRatioParams>::default();
        likelihood_ratio_exercise(&step, &mut store).unwrap();

        store.set("mu", 2.0).unwrap();
        store.set("t", 3.0).unwrap();

        let chart = step.chart.borrow();
        let trace = &chart.point_sets[0];
        assert_eq!(
            trace,
            &vec![roc_point(1.0, 1.0), roc_point(2.0, 1.0), roc_point(2.0, 3.0)]
        );
        assert!(chart.curves.is_empty());
        assert_eq!(store.outputs().count(), 0);
    }
}
