use std::{cell::RefCell, rc::Rc};

use log::trace;
use slate_core::{Chart, Curve, Point};

use crate::ChartConfig;

/// A shared handle to a [`RecordingChart`].
///
/// The step hands one clone to the exercise watcher and the caller keeps
/// another to read or display the current frame.
pub type ChartHandle = Rc<RefCell<RecordingChart>>;

/// A headless chart that keeps the most recent frame.
///
/// Curves are stored as given and sampled on demand over the configured
/// range; point sets are copied. [`redraws`](RecordingChart::redraws) counts
/// how many times the frame has been cleared.
pub struct RecordingChart {
    config: ChartConfig,
    curves: Vec<Box<dyn Curve>>,
    point_sets: Vec<Vec<Point>>,
    redraws: usize,
}

impl RecordingChart {
    /// Creates an empty chart.
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            curves: Vec::new(),
            point_sets: Vec::new(),
            redraws: 0,
        }
    }

    /// Creates an empty chart wrapped in a shareable handle.
    #[must_use]
    pub fn handle(config: ChartConfig) -> ChartHandle {
        Rc::new(RefCell::new(Self::new(config)))
    }

    /// Returns the sampling configuration.
    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    /// Returns the curves of the current frame.
    #[must_use]
    pub fn curves(&self) -> &[Box<dyn Curve>] {
        &self.curves
    }

    /// Returns the point sets of the current frame, in draw order.
    #[must_use]
    pub fn point_sets(&self) -> &[Vec<Point>] {
        &self.point_sets
    }

    /// Returns how many times the frame has been cleared.
    #[must_use]
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    /// Samples every curve of the current frame over the configured range.
    ///
    /// Non-finite samples are dropped so that a degenerate curve (for example
    /// a vertical line) yields a partial or empty polyline instead of NaNs.
    #[must_use]
    pub fn sampled_curves(&self) -> Vec<Vec<Point>> {
        self.curves
            .iter()
            .map(|curve| {
                curve
                    .sample(self.config.x_range(), self.config.samples())
                    .into_iter()
                    .filter(|p| p.y.is_finite())
                    .collect()
            })
            .collect()
    }
}

impl Default for RecordingChart {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl Chart for RecordingChart {
    fn clear(&mut self) {
        self.curves.clear();
        self.point_sets.clear();
        self.redraws += 1;
    }

    fn set_functions(&mut self, curves: Vec<Box<dyn Curve>>) {
        trace!("chart received {} curve(s)", curves.len());
        self.curves = curves;
    }

    fn draw_points(&mut self, points: &[Point]) {
        trace!("chart received {} point(s)", points.len());
        self.point_sets.push(points.to_vec());
    }
}
