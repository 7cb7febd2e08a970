use std::{cell::RefCell, rc::Rc};

use slate_core::{COORDINATE_SYSTEM, Chart, Curve, Point, Step, StepError};

/// The most recent frame drawn into a [`FrameChart`].
#[derive(Default)]
pub(crate) struct FrameChart {
    pub curves: Vec<Box<dyn Curve>>,
    pub point_sets: Vec<Vec<Point>>,
    pub redraws: usize,
}

impl FrameChart {
    /// Evaluates every curve of the current frame at `x`.
    pub fn eval_all(&self, x: f64) -> Vec<f64> {
        self.curves.iter().map(|c| c.eval(x)).collect()
    }
}

impl Chart for FrameChart {
    fn clear(&mut self) {
        self.curves.clear();
        self.point_sets.clear();
        self.redraws += 1;
    }

    fn set_functions(&mut self, curves: Vec<Box<dyn Curve>>) {
        self.curves = curves;
    }

    fn draw_points(&mut self, points: &[Point]) {
        self.point_sets.push(points.to_vec());
    }
}

/// A step exposing a single coordinate-system chart.
#[derive(Default)]
pub(crate) struct TestStep {
    pub chart: Rc<RefCell<FrameChart>>,
}

impl Step for TestStep {
    type Chart = Rc<RefCell<FrameChart>>;

    fn chart(&self, selector: &str) -> Result<Self::Chart, StepError> {
        if selector == COORDINATE_SYSTEM {
            Ok(Rc::clone(&self.chart))
        } else {
            Err(StepError::ChartNotFound(selector.to_owned()))
        }
    }
}

/// A step with no charts at all.
pub(crate) struct EmptyStep;

impl Step for EmptyStep {
    type Chart = Rc<RefCell<FrameChart>>;

    fn chart(&self, selector: &str) -> Result<Self::Chart, StepError> {
        Err(StepError::ChartNotFound(selector.to_owned()))
    }
}
