use std::{collections::HashMap, rc::Rc};

use slate_core::{COORDINATE_SYSTEM, Step, StepError};

use crate::{ChartConfig, ChartHandle, RecordingChart};

/// A [`Step`] that owns named [`RecordingChart`]s.
#[derive(Default)]
pub struct Page {
    charts: HashMap<String, ChartHandle>,
}

impl Page {
    /// Creates a page without charts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a page with a single coordinate-system chart.
    #[must_use]
    pub fn with_coordinate_system(config: ChartConfig) -> Self {
        Self::new().with_chart(COORDINATE_SYSTEM, config)
    }

    /// Adds a chart under `selector`, replacing any existing one.
    #[must_use]
    pub fn with_chart(mut self, selector: impl Into<String>, config: ChartConfig) -> Self {
        self.charts
            .insert(selector.into(), RecordingChart::handle(config));
        self
    }

    /// Returns the chart registered under `selector`, if any.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&ChartHandle> {
        self.charts.get(selector)
    }
}

impl Step for Page {
    type Chart = ChartHandle;

    fn chart(&self, selector: &str) -> Result<ChartHandle, StepError> {
        self.charts
            .get(selector)
            .map(Rc::clone)
            .ok_or_else(|| StepError::ChartNotFound(selector.to_owned()))
    }
}
