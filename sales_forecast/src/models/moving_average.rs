//! Moving average model

use crate::data::SalesSeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, InSampleFit, TrainedForecastModel};
use forecast_math::{MovingAverage, Observation};
use tracing::debug;

/// Self-feeding simple moving average
#[derive(Debug, Clone)]
pub struct MovingAverageModel {
    /// Name of the model
    name: String,
    /// Configured averager
    average: MovingAverage,
}

/// Trained moving average
#[derive(Debug, Clone)]
pub struct TrainedMovingAverage {
    /// Name of the model
    name: String,
    /// Configured averager
    average: MovingAverage,
    /// Historical data
    history: Vec<Observation>,
}

impl MovingAverageModel {
    /// Create a new moving average model
    pub fn new(window: usize) -> Result<Self> {
        let average = MovingAverage::new(window)?;

        Ok(Self {
            name: format!("Moving Average (window={})", window),
            average,
        })
    }

    /// Get the window size
    pub fn window(&self) -> usize {
        self.average.window()
    }
}

impl ForecastModel for MovingAverageModel {
    type Trained = TrainedMovingAverage;

    fn train(&self, data: &SalesSeries) -> Result<Self::Trained> {
        let required = self.average.first_scored() + 1;
        if data.len() < required {
            return Err(ForecastError::DataError(format!(
                "Moving average with window {} needs at least {} records to score, got {}",
                self.window(),
                required,
                data.len()
            )));
        }
        debug!(window = self.window(), records = data.len(), "Prepared moving average");

        Ok(TrainedMovingAverage {
            name: self.name.clone(),
            average: self.average,
            history: data.observations(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedMovingAverage {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        Ok(self.average.predict(&self.history, horizon)?)
    }

    fn in_sample(&self) -> InSampleFit {
        InSampleFit {
            actual: self
                .history
                .iter()
                .skip(self.average.first_scored())
                .map(|o| o.value)
                .collect(),
            predicted: self.average.in_sample(&self.history),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
