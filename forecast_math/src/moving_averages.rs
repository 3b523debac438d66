//! Moving average forecasting
//!
//! The forecast is built one step at a time: each step averages the most
//! recent `window` values of a working copy of the series and appends that
//! average to the copy before the next step. Later steps therefore average
//! earlier forecasts and the sequence flattens out instead of trending.

use crate::{MathError, Observation, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Simple Moving Average forecaster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingAverage {
    window: usize,
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self {
            window: Self::DEFAULT_WINDOW,
        }
    }
}

impl MovingAverage {
    /// Window size used when none is configured
    pub const DEFAULT_WINDOW: usize = 3;

    /// Create a new Moving Average with the specified window
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(MathError::InvalidParameter(
                "Window must be greater than zero".to_string(),
            ));
        }

        Ok(Self { window })
    }

    /// Get the window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// Forecast `horizon` periods past the end of `series`.
    ///
    /// A series shorter than the window is averaged over whatever is
    /// available. `horizon == 0` always yields an empty forecast.
    pub fn predict(&self, series: &[Observation], horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Ok(Vec::new());
        }
        if series.is_empty() {
            return Err(MathError::InsufficientData(
                "Moving average needs at least one observation".to_string(),
            ));
        }

        // Only the trailing window is ever read, so keep just that much
        let start = series.len().saturating_sub(self.window);
        let mut recent: VecDeque<f64> = series[start..].iter().map(|o| o.value).collect();
        let mut predictions = Vec::with_capacity(horizon);

        for _ in 0..horizon {
            let average = recent.iter().sum::<f64>() / recent.len() as f64;
            predictions.push(average);

            recent.push_back(average);
            if recent.len() > self.window {
                recent.pop_front();
            }
        }

        Ok(predictions)
    }

    /// Index of the first value scored by [`MovingAverage::in_sample`].
    ///
    /// Scoring waits until `window - 1` values are available, and always
    /// skips the first value, which has nothing before it.
    pub fn first_scored(&self) -> usize {
        self.window.saturating_sub(1).max(1)
    }

    /// One-step-ahead reconstruction of the history.
    ///
    /// Element `t - first_scored()` is the average of the up to `window`
    /// values preceding `series[t]`, for `t` in `first_scored()..n`. The
    /// result lines up with `series[first_scored()..]` and is empty when the
    /// series is not longer than that.
    pub fn in_sample(&self, series: &[Observation]) -> Vec<f64> {
        (self.first_scored()..series.len())
            .map(|t| {
                let start = t.saturating_sub(self.window);
                let window = &series[start..t];
                window.iter().map(|o| o.value).sum::<f64>() / window.len() as f64
            })
            .collect()
    }
}

/// Forecast with a self-feeding moving average
pub fn predict_moving_average(
    series: &[Observation],
    window: usize,
    horizon: usize,
) -> Result<Vec<f64>> {
    MovingAverage::new(window)?.predict(series, horizon)
}
