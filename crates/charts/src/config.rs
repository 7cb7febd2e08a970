use thiserror::Error;

/// Sampling configuration for rendering curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    x_range: [f64; 2],
    samples: usize,
}

/// Errors that can occur when validating a chart config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x range must be finite with min < max")]
    Range,

    #[error("at least two samples are needed to draw a curve")]
    Samples,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_range: [-1.0, 7.0],
            samples: 200,
        }
    }
}

impl ChartConfig {
    /// Creates a new config with a validated range and sample count.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is non-finite or empty, or if fewer than
    /// two samples are requested.
    pub fn new(x_range: [f64; 2], samples: usize) -> Result<Self, ConfigError> {
        let [min, max] = x_range;
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::Range);
        }
        if samples < 2 {
            return Err(ConfigError::Samples);
        }

        Ok(Self { x_range, samples })
    }

    /// Returns the x range curves are sampled over.
    #[must_use]
    pub fn x_range(&self) -> [f64; 2] {
        self.x_range
    }

    /// Returns the number of samples taken per curve.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_config() {
        let config = ChartConfig::new([-3.0, 3.0], 50).unwrap();

        assert_eq!(config.x_range(), [-3.0, 3.0]);
        assert_eq!(config.samples(), 50);
    }

    #[test]
    fn rejects_bad_ranges() {
        assert_eq!(ChartConfig::new([1.0, 1.0], 10), Err(ConfigError::Range));
        assert_eq!(ChartConfig::new([2.0, 1.0], 10), Err(ConfigError::Range));
        assert_eq!(
            ChartConfig::new([f64::NEG_INFINITY, 1.0], 10),
            Err(ConfigError::Range)
        );
        assert_eq!(ChartConfig::new([0.0, f64::NAN], 10), Err(ConfigError::Range));
    }

    #[test]
    fn rejects_too_few_samples() {
        assert_eq!(ChartConfig::new([0.0, 1.0], 1), Err(ConfigError::Samples));
    }

    #[test]
    fn default_is_valid() {
        let config = ChartConfig::default();
        assert_eq!(
            ChartConfig::new(config.x_range(), config.samples()),
            Ok(config)
        );
    }
}
