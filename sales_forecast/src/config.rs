//! Forecast run configuration

use crate::error::{ForecastError, Result};
use forecast_math::{ExponentialSmoothing, MovingAverage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings shared by every model in a forecast run.
///
/// Missing JSON fields fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of periods to forecast
    pub horizon: usize,
    /// Moving average window
    pub window: usize,
    /// Exponential smoothing factor
    pub alpha: f64,
    /// Smallest series a run accepts
    pub min_observations: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: 6,
            window: MovingAverage::DEFAULT_WINDOW,
            alpha: ExponentialSmoothing::DEFAULT_ALPHA,
            min_observations: 3,
        }
    }
}

impl ForecastConfig {
    /// Longest horizon a run accepts
    pub const MAX_HORIZON: usize = 24;

    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set the forecast horizon
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the moving average window
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the smoothing factor
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Check every setting is usable
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 || self.horizon > Self::MAX_HORIZON {
            return Err(ForecastError::InvalidParameter(format!(
                "Horizon must be between 1 and {}, got {}",
                Self::MAX_HORIZON,
                self.horizon
            )));
        }
        if self.min_observations < 2 {
            return Err(ForecastError::InvalidParameter(format!(
                "Minimum observations must be at least 2, got {}",
                self.min_observations
            )));
        }
        MovingAverage::new(self.window)?;
        ExponentialSmoothing::new(self.alpha)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ForecastConfig::default();
        assert_eq!(config.horizon, 6);
        assert_eq!(config.window, 3);
        assert_eq!(config.alpha, 0.3);
        assert_eq!(config.min_observations, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = ForecastConfig::from_json(r#"{ "horizon": 12 }"#).unwrap();
        assert_eq!(config, ForecastConfig::default().with_horizon(12));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ForecastConfig::from_json(r#"{ "horizon": 0 }"#).is_err());
        assert!(ForecastConfig::from_json(r#"{ "horizon": 25 }"#).is_err());
        assert!(ForecastConfig::from_json(r#"{ "window": 0 }"#).is_err());
        assert!(ForecastConfig::from_json(r#"{ "alpha": 1.2 }"#).is_err());
        assert!(ForecastConfig::from_json(r#"{ "min_observations": 1 }"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ForecastConfig::from_json("{ horizon"),
            Err(ForecastError::JsonError(_))
        ));
    }
}
