//! Linear trend model

use crate::data::SalesSeries;
use crate::error::Result;
use crate::models::{ForecastModel, InSampleFit, TrainedForecastModel};
use forecast_math::{fit_linear_regression, predict_linear, RegressionParams};
use tracing::debug;

/// Least-squares trend over the period index
#[derive(Debug, Clone)]
pub struct LinearTrend {
    /// Name of the model
    name: String,
}

/// Trained linear trend
#[derive(Debug, Clone)]
pub struct TrainedLinearTrend {
    /// Name of the model
    name: String,
    /// Fitted line
    params: RegressionParams,
    /// Periods the line was fitted on
    periods: Vec<u32>,
    /// Values the line was fitted on
    values: Vec<f64>,
}

impl LinearTrend {
    /// Create a new linear trend model
    pub fn new() -> Self {
        Self {
            name: "Linear Regression".to_string(),
        }
    }
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for LinearTrend {
    type Trained = TrainedLinearTrend;

    fn train(&self, data: &SalesSeries) -> Result<Self::Trained> {
        let params = fit_linear_regression(&data.observations())?;
        debug!(
            slope = params.slope,
            intercept = params.intercept,
            "Fitted linear trend"
        );

        Ok(TrainedLinearTrend {
            name: self.name.clone(),
            params,
            periods: data.periods(),
            values: data.values(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedLinearTrend {
    /// Get the fitted slope and intercept
    pub fn params(&self) -> RegressionParams {
        self.params
    }
}

impl TrainedForecastModel for TrainedLinearTrend {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        let last = self.periods.last().copied().unwrap_or(0);
        let future: Vec<u32> = (1..=horizon as u32).map(|step| last + step).collect();

        Ok(predict_linear(&self.params, &future))
    }

    fn in_sample(&self) -> InSampleFit {
        InSampleFit {
            actual: self.values.clone(),
            predicted: predict_linear(&self.params, &self.periods),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
