//! Trend and level forecasting
//!
//! Contains implementations of two forecasting methods:
//! - Linear Regression (least-squares trend over the period index)
//! - Exponential Smoothing (flat forecast at the last smoothed level)

use crate::{MathError, Observation, Result};
use serde::{Deserialize, Serialize};

/// Fitted slope and intercept of a least-squares trend line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionParams {
    /// Change in value per period
    pub slope: f64,
    /// Value of the trend line at period 0
    pub intercept: f64,
}

impl RegressionParams {
    /// Evaluate the trend line at a single period
    pub fn value_at(&self, period: u32) -> f64 {
        self.slope * f64::from(period) + self.intercept
    }

    /// Evaluate the trend line at each requested period, in input order.
    ///
    /// Values are returned raw, so a falling trend may go below zero.
    pub fn predict(&self, periods: &[u32]) -> Vec<f64> {
        periods.iter().map(|&p| self.value_at(p)).collect()
    }
}

/// Ordinary least-squares regression of value on period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    params: RegressionParams,
    n_observations: usize,
}

impl LinearRegression {
    /// Fit the trend line to a series.
    ///
    /// Uses the closed form
    /// `slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)` and
    /// `intercept = (Σy − slope·Σx) / n`.
    pub fn fit(series: &[Observation]) -> Result<Self> {
        if series.len() < 2 {
            return Err(MathError::InsufficientData(format!(
                "Linear regression needs at least 2 observations, got {}",
                series.len()
            )));
        }

        let n = series.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
        for obs in series {
            let x = f64::from(obs.period);
            sum_x += x;
            sum_y += obs.value;
            sum_xy += x * obs.value;
            sum_x2 += x * x;
        }

        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator.abs() < 1e-10 {
            return Err(MathError::DegenerateFit(
                "Cannot calculate slope: all periods are identical".to_string(),
            ));
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Ok(Self {
            params: RegressionParams { slope, intercept },
            n_observations: series.len(),
        })
    }

    /// Predict values for the given periods
    pub fn predict(&self, periods: &[u32]) -> Vec<f64> {
        self.params.predict(periods)
    }

    /// Get the fitted parameters
    pub fn params(&self) -> RegressionParams {
        self.params
    }

    /// Get the slope (trend direction and strength)
    pub fn slope(&self) -> f64 {
        self.params.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.params.intercept
    }

    /// Number of observations the line was fitted on
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }
}

/// Fit a least-squares trend line to a series
pub fn fit_linear_regression(series: &[Observation]) -> Result<RegressionParams> {
    LinearRegression::fit(series).map(|lr| lr.params())
}

/// Evaluate fitted regression parameters at the given periods
pub fn predict_linear(params: &RegressionParams, periods: &[u32]) -> Vec<f64> {
    params.predict(periods)
}

/// Simple Exponential Smoothing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialSmoothing {
    alpha: f64,
}

impl Default for ExponentialSmoothing {
    fn default() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
        }
    }
}

impl ExponentialSmoothing {
    /// Smoothing factor used when none is configured
    pub const DEFAULT_ALPHA: f64 = 0.3;

    /// Create a new Exponential Smoothing with the specified alpha (smoothing factor)
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(MathError::InvalidParameter(format!(
                "Alpha must be in (0, 1], got {}",
                alpha
            )));
        }

        Ok(Self { alpha })
    }

    /// Get the smoothing factor
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Smoothed level after each observation, starting from the first value
    pub fn smoothed_values(&self, series: &[Observation]) -> Result<Vec<f64>> {
        let (first, rest) = series.split_first().ok_or_else(|| {
            MathError::InsufficientData("Exponential smoothing needs a non-empty series".to_string())
        })?;

        let mut smoothed = Vec::with_capacity(series.len());
        let mut level = first.value;
        smoothed.push(level);

        for obs in rest {
            level = self.alpha * obs.value + (1.0 - self.alpha) * level;
            smoothed.push(level);
        }

        Ok(smoothed)
    }

    /// Final smoothed level of a series
    pub fn level(&self, series: &[Observation]) -> Result<f64> {
        let smoothed = self.smoothed_values(series)?;
        // smoothed_values never returns an empty path for a non-empty series
        smoothed.last().copied().ok_or_else(|| {
            MathError::InsufficientData("Exponential smoothing needs a non-empty series".to_string())
        })
    }

    /// Forecast `horizon` periods: a flat line at the last smoothed level
    pub fn predict(&self, series: &[Observation], horizon: usize) -> Result<Vec<f64>> {
        let level = self.level(series)?;
        Ok(vec![level; horizon])
    }
}

/// Forecast with simple exponential smoothing
pub fn predict_exponential_smoothing(
    series: &[Observation],
    alpha: f64,
    horizon: usize,
) -> Result<Vec<f64>> {
    ExponentialSmoothing::new(alpha)?.predict(series, horizon)
}
