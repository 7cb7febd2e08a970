use log::debug;
use slate_core::{COORDINATE_SYSTEM, Chart, Point, Step, StepError, Store, Writeback};

use crate::{curves::Line, loss::svm_objective, params::params};

params! {
    /// Weights, bias, and regularization strength of a linear SVM.
    pub struct SvmParams {
        wi = 1.0 in -5.0..=5.0,
        wj = 1.0 in -5.0..=5.0,
        b = 0.0 in -20.0..=20.0,
        lambda = 0.0 in 0.0..=1.0,
    }
}

/// The group expected on the positive side of the decision line.
pub const SVM_POSITIVE: [Point; 8] = [
    Point::new(2.5, 6.0),
    Point::new(3.0, 6.0),
    Point::new(3.5, 5.0),
    Point::new(4.5, 7.0),
    Point::new(4.0, 9.0),
    Point::new(3.5, 6.0),
    Point::new(3.5, 8.0),
    Point::new(2.5, 6.0),
];

/// The group expected on the negative side of the decision line.
pub const SVM_NEGATIVE: [Point; 8] = [
    Point::new(4.0, 3.0),
    Point::new(4.0, 2.0),
    Point::new(6.0, 2.0),
    Point::new(6.0, 4.0),
    Point::new(6.0, 1.0),
    Point::new(4.0, 1.0),
    Point::new(4.5, 2.0),
    Point::new(5.0, 3.0),
];

/// Wires the support vector machine exercise.
///
/// Draws the decision line `wi·x + wj·y = b` with both margin lines over the
/// two groups, and writes the regularized hinge objective back as `loss`.
///
/// # Errors
///
/// Returns [`StepError::ChartNotFound`] if the step has no coordinate system.
pub fn svm_exercise<S: Step>(step: &S, store: &mut Store<SvmParams>) -> Result<(), StepError> {
    let mut chart = step.chart(COORDINATE_SYSTEM)?;
    let (positive, negative) = (SVM_POSITIVE, SVM_NEGATIVE);

    store.subscribe(move |params: &SvmParams| {
        let SvmParams { wi, wj, b, lambda } = *params;
        let loss = svm_objective([wi, wj], b, lambda, &positive, &negative);
        debug!("svm: {params:?} -> loss {loss}");

        chart.clear();
        chart.set_functions(vec![
            Box::new(Line::decision(wi, wj, b)),
            Box::new(Line::upper_margin(wi, wj, b)),
            Box::new(Line::lower_margin(wi, wj, b)),
        ]);
        chart.draw_points(&positive);
        chart.draw_points(&negative);

        Some(Writeback::new("loss", loss))
    });

    Ok(())
}
