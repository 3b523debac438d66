//! Error metrics for scoring a prediction against actual values

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accuracy of a prediction over a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error, in percent
    pub mape: f64,
}

impl Metrics {
    /// Look up a metric by kind
    pub fn get(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Mae => self.mae,
            MetricKind::Mse => self.mse,
            MetricKind::Rmse => self.rmse,
            MetricKind::Mape => self.mape,
        }
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MAE {:.2}, MSE {:.2}, RMSE {:.2}, MAPE {:.2}%",
            self.mae, self.mse, self.rmse, self.mape
        )
    }
}

/// The four metrics, for selecting one by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    Mae,
    Mse,
    Rmse,
    Mape,
}

impl MetricKind {
    /// All metrics in display order
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Mae,
        MetricKind::Mse,
        MetricKind::Rmse,
        MetricKind::Mape,
    ];

    /// Short upper-case label
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Mae => "MAE",
            MetricKind::Mse => "MSE",
            MetricKind::Rmse => "RMSE",
            MetricKind::Mape => "MAPE",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score `predicted` against `actual`.
///
/// Periods whose actual value is zero add nothing to the MAPE sum but still
/// count towards its denominator.
pub fn compute_metrics(actual: &[f64], predicted: &[f64]) -> Result<Metrics> {
    if actual.len() != predicted.len() {
        return Err(MathError::LengthMismatch {
            actual: actual.len(),
            predicted: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(MathError::InsufficientData(
            "Metrics need at least one value".to_string(),
        ));
    }

    let n = actual.len() as f64;
    let (mut abs_sum, mut sq_sum, mut pct_sum) = (0.0, 0.0, 0.0);

    for (&a, &p) in actual.iter().zip(predicted) {
        let error = (a - p).abs();
        abs_sum += error;
        sq_sum += error * error;
        if a != 0.0 {
            pct_sum += (error / a).abs();
        }
    }

    let mse = sq_sum / n;

    Ok(Metrics {
        mae: abs_sum / n,
        mse,
        rmse: mse.sqrt(),
        mape: pct_sum / n * 100.0,
    })
}
