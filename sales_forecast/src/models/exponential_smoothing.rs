//! Exponential smoothing model

use crate::data::SalesSeries;
use crate::error::Result;
use crate::models::{ForecastModel, InSampleFit, TrainedForecastModel};
use forecast_math::ExponentialSmoothing;
use tracing::debug;

/// Simple exponential smoothing model
#[derive(Debug, Clone)]
pub struct SmoothingModel {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    smoothing: ExponentialSmoothing,
}

/// Trained exponential smoothing model
#[derive(Debug, Clone)]
pub struct TrainedSmoothingModel {
    /// Name of the model
    name: String,
    /// Smoothed level after each observation
    smoothed: Vec<f64>,
    /// Observed values
    values: Vec<f64>,
    /// Final level
    level: f64,
}

impl SmoothingModel {
    /// Create a new exponential smoothing model
    pub fn new(alpha: f64) -> Result<Self> {
        let smoothing = ExponentialSmoothing::new(alpha)?;

        Ok(Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            smoothing,
        })
    }

    /// Get the smoothing factor
    pub fn alpha(&self) -> f64 {
        self.smoothing.alpha()
    }
}

impl ForecastModel for SmoothingModel {
    type Trained = TrainedSmoothingModel;

    fn train(&self, data: &SalesSeries) -> Result<Self::Trained> {
        let observations = data.observations();
        let smoothed = self.smoothing.smoothed_values(&observations)?;
        let level = self.smoothing.level(&observations)?;
        debug!(alpha = self.alpha(), level, "Fitted exponential smoothing");

        Ok(TrainedSmoothingModel {
            name: self.name.clone(),
            smoothed,
            values: data.values(),
            level,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedSmoothingModel {
    /// Get the final smoothed level
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl TrainedForecastModel for TrainedSmoothingModel {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        // Flat line at the last level
        Ok(vec![self.level; horizon])
    }

    fn in_sample(&self) -> InSampleFit {
        InSampleFit {
            actual: self.values.clone(),
            predicted: self.smoothed.clone(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
