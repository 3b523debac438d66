//! # Forecast Math
//!
//! Numeric core for elementary sales forecasting.
//! This crate provides the three forecasting methods and the error metrics
//! used to score them:
//!
//! - Linear regression over the period index
//! - Self-feeding moving average
//! - Simple exponential smoothing
//! - MAE, MSE, RMSE and MAPE
//!
//! Every function here is a pure computation over its arguments. Nothing is
//! cached between calls and caller data is never mutated.
//!
//! ## Example
//!
//! ```
//! use forecast_math::{fit_linear_regression, predict_linear, Observation};
//!
//! let series = Observation::from_values(&[100.0, 200.0, 300.0]);
//! let params = fit_linear_regression(&series).unwrap();
//! assert_eq!(predict_linear(&params, &[4, 5]), vec![400.0, 500.0]);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod forecasting;
pub mod metrics;
pub mod moving_averages;

pub use forecasting::{
    fit_linear_regression, predict_exponential_smoothing, predict_linear, ExponentialSmoothing,
    LinearRegression, RegressionParams,
};
pub use metrics::{compute_metrics, MetricKind, Metrics};
pub use moving_averages::{predict_moving_average, MovingAverage};

/// Errors that can occur in forecasting calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    #[error("Length mismatch: {actual} actual values vs {predicted} predicted values")]
    LengthMismatch { actual: usize, predicted: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for forecasting math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// A single point of a historical series.
///
/// `period` is the 1-based position on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Sequential period index
    pub period: u32,
    /// Observed value
    pub value: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(period: u32, value: f64) -> Self {
        Self { period, value }
    }

    /// Build a series from plain values, numbering periods from 1
    pub fn from_values(values: &[f64]) -> Vec<Self> {
        values
            .iter()
            .zip(1u32..)
            .map(|(&value, period)| Self::new(period, value))
            .collect()
    }
}

/// Extract the values of a series in order
pub fn values_of(series: &[Observation]) -> Vec<f64> {
    series.iter().map(|o| o.value).collect()
}
