//! Comparing model reports by their error metrics

use crate::models::ModelKind;
use crate::report::ModelReport;
use forecast_math::MetricKind;
use std::fmt;

/// Side-by-side view of several model reports
#[derive(Debug, Clone)]
pub struct ModelComparison {
    reports: Vec<ModelReport>,
}

impl ModelComparison {
    /// Wrap a set of reports
    pub fn new(reports: Vec<ModelReport>) -> Self {
        Self { reports }
    }

    /// Get the reports in their original order
    pub fn reports(&self) -> &[ModelReport] {
        &self.reports
    }

    /// Find the report of a given model
    pub fn get(&self, kind: ModelKind) -> Option<&ModelReport> {
        self.reports.iter().find(|r| r.kind == kind)
    }

    /// Report with the lowest value of `metric`; the earliest wins a tie
    pub fn best_by(&self, metric: MetricKind) -> Option<&ModelReport> {
        self.reports.iter().fold(None, |best, current| match best {
            Some(b) if current.metrics.get(metric) >= b.metrics.get(metric) => Some(b),
            _ => Some(current),
        })
    }

    /// Best model for every metric, in display order
    pub fn winners(&self) -> Vec<(MetricKind, ModelKind)> {
        MetricKind::ALL
            .iter()
            .filter_map(|&metric| self.best_by(metric).map(|r| (metric, r.kind)))
            .collect()
    }
}

impl fmt::Display for ModelComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model Performance Comparison:")?;
        writeln!(
            f,
            "  {:<24}{:>12}{:>16}{:>12}{:>10}",
            "Model", "MAE", "MSE", "RMSE", "MAPE"
        )?;
        for report in &self.reports {
            let m = &report.metrics;
            writeln!(
                f,
                "  {:<24}{:>12.2}{:>16.2}{:>12.2}{:>9.2}%",
                report.name, m.mae, m.mse, m.rmse, m.mape
            )?;
        }
        for (metric, kind) in self.winners() {
            writeln!(f, "  Best {:<5} {}", format!("{}:", metric), kind)?;
        }
        Ok(())
    }
}
