//! Forecasting models for sales series

use crate::data::SalesSeries;
use crate::error::{ForecastError, Result};
use forecast_math::{compute_metrics, Metrics};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

pub mod exponential_smoothing;
pub mod linear_regression;
pub mod moving_average;

pub use exponential_smoothing::{SmoothingModel, TrainedSmoothingModel};
pub use linear_regression::{LinearTrend, TrainedLinearTrend};
pub use moving_average::{MovingAverageModel, TrainedMovingAverage};

/// A model's reconstruction of the history it was trained on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InSampleFit {
    /// Observed values that were reconstructed
    pub actual: Vec<f64>,
    /// The model's values for the same periods
    pub predicted: Vec<f64>,
}

impl InSampleFit {
    /// Score the reconstruction
    pub fn metrics(&self) -> Result<Metrics> {
        Ok(compute_metrics(&self.actual, &self.predicted)?)
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Generate forecast for future periods
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>>;

    /// Reconstruct the training data
    fn in_sample(&self) -> InSampleFit;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on a sales series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on a sales series
    fn train(&self, data: &SalesSeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

/// The available forecasting methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    LinearRegression,
    MovingAverage,
    ExponentialSmoothing,
}

impl ModelKind {
    /// All models in report order
    pub const ALL: [ModelKind; 3] = [
        ModelKind::LinearRegression,
        ModelKind::MovingAverage,
        ModelKind::ExponentialSmoothing,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::LinearRegression => "Linear Regression",
            ModelKind::MovingAverage => "Moving Average",
            ModelKind::ExponentialSmoothing => "Exponential Smoothing",
        }
    }

    /// One-line summary of the method
    pub fn description(&self) -> &'static str {
        match self {
            ModelKind::LinearRegression => "Fits a linear trend to historical data",
            ModelKind::MovingAverage => "Uses average of recent periods for prediction",
            ModelKind::ExponentialSmoothing => "Gives more weight to recent observations",
        }
    }

    /// Fixed confidence, in percent, attached to every forecast point.
    ///
    /// These are constants, not computed intervals.
    pub fn confidence(&self) -> f64 {
        match self {
            ModelKind::LinearRegression => 85.0,
            ModelKind::MovingAverage => 70.0,
            ModelKind::ExponentialSmoothing => 75.0,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "linearregression" | "linear" | "lr" => Ok(ModelKind::LinearRegression),
            "movingaverage" | "ma" | "sma" => Ok(ModelKind::MovingAverage),
            "exponentialsmoothing" | "es" | "ses" => Ok(ModelKind::ExponentialSmoothing),
            _ => Err(ForecastError::InvalidParameter(format!(
                "Unknown model: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_kind() {
        assert_eq!(
            "Linear Regression".parse::<ModelKind>().unwrap(),
            ModelKind::LinearRegression
        );
        assert_eq!(
            "moving_average".parse::<ModelKind>().unwrap(),
            ModelKind::MovingAverage
        );
        assert_eq!(
            "SES".parse::<ModelKind>().unwrap(),
            ModelKind::ExponentialSmoothing
        );
        assert!("arima".parse::<ModelKind>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.to_string().parse::<ModelKind>().unwrap(), kind);
        }
    }
}
