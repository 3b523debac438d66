//! Running every model over a series and collecting the results

use crate::config::ForecastConfig;
use crate::data::SalesSeries;
use crate::error::{ForecastError, Result};
use crate::models::{
    ForecastModel, LinearTrend, ModelKind, MovingAverageModel, SmoothingModel,
    TrainedForecastModel,
};
use crate::utils::{format_iso_date, generate_forecast_dates};
use chrono::NaiveDate;
use csv::WriterBuilder;
use forecast_math::Metrics;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// One forecast point as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Date of the forecast period
    pub date: NaiveDate,
    /// Forecast value, never below zero
    pub predicted: f64,
    /// Fixed confidence of the model, in percent
    pub confidence: f64,
}

/// Forecast and in-sample score of one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    /// Which model produced the report
    pub kind: ModelKind,
    /// Display name
    pub name: String,
    /// One-line summary of the method
    pub description: String,
    /// Forecast points in date order
    pub forecast: Vec<Prediction>,
    /// Accuracy on the training data
    pub metrics: Metrics,
}

impl ModelReport {
    /// Raw forecast values in date order
    pub fn predicted_values(&self) -> Vec<f64> {
        self.forecast.iter().map(|p| p.predicted).collect()
    }

    /// Sum of the forecast values over the horizon
    pub fn total_predicted(&self) -> f64 {
        self.forecast.iter().map(|p| p.predicted).sum()
    }

    /// Mean forecast value per period, `None` for an empty forecast
    pub fn average_predicted(&self) -> Option<f64> {
        if self.forecast.is_empty() {
            return None;
        }
        Some(self.total_predicted() / self.forecast.len() as f64)
    }

    /// Last forecast value minus the first; zero with fewer than two points
    pub fn trend(&self) -> f64 {
        match (self.forecast.first(), self.forecast.last()) {
            (Some(first), Some(last)) if self.forecast.len() >= 2 => {
                last.predicted - first.predicted
            }
            _ => 0.0,
        }
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// File name for a forecast export, e.g. `linear_regression_forecast.csv`
    pub fn export_file_name(&self) -> String {
        let stem = self
            .name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();
        format!("{}_forecast.csv", stem)
    }

    /// Save the forecast as a `Date,Predicted_Sales,Confidence` CSV file
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(file)
    }

    /// Write the forecast as `Date,Predicted_Sales,Confidence` CSV data
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new().from_writer(writer);
        csv_writer.write_record(["Date", "Predicted_Sales", "Confidence"])?;
        for point in &self.forecast {
            csv_writer.write_record([
                format_iso_date(point.date),
                point.predicted.to_string(),
                point.confidence.to_string(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Train a model, score it on its training data and forecast the horizon
fn evaluate<M: ForecastModel>(
    kind: ModelKind,
    model: &M,
    series: &SalesSeries,
    dates: &[NaiveDate],
) -> Result<ModelReport> {
    let trained = model.train(series)?;
    let metrics = trained.in_sample().metrics()?;
    let values = trained.forecast(dates.len())?;
    debug!(model = trained.name(), mae = metrics.mae, "Scored model");

    let forecast = dates
        .iter()
        .zip(values)
        .map(|(&date, value)| Prediction {
            date,
            predicted: value.max(0.0),
            confidence: kind.confidence(),
        })
        .collect();

    Ok(ModelReport {
        kind,
        name: kind.name().to_string(),
        description: kind.description().to_string(),
        forecast,
        metrics,
    })
}

/// Run a single model over the series
pub fn run_model(
    kind: ModelKind,
    series: &SalesSeries,
    config: &ForecastConfig,
) -> Result<ModelReport> {
    config.validate()?;
    check_length(series, config)?;

    let last_date = series
        .last_date()
        .ok_or_else(|| ForecastError::DataError("Sales series is empty".to_string()))?;
    let dates = generate_forecast_dates(last_date, config.horizon);

    match kind {
        ModelKind::LinearRegression => evaluate(kind, &LinearTrend::new(), series, &dates),
        ModelKind::MovingAverage => {
            evaluate(kind, &MovingAverageModel::new(config.window)?, series, &dates)
        }
        ModelKind::ExponentialSmoothing => {
            evaluate(kind, &SmoothingModel::new(config.alpha)?, series, &dates)
        }
    }
}

/// Run every model over the series, in [`ModelKind::ALL`] order
pub fn run_forecasts(series: &SalesSeries, config: &ForecastConfig) -> Result<Vec<ModelReport>> {
    info!(
        records = series.len(),
        horizon = config.horizon,
        "Running forecasts"
    );

    ModelKind::ALL
        .iter()
        .map(|&kind| run_model(kind, series, config))
        .collect()
}

fn check_length(series: &SalesSeries, config: &ForecastConfig) -> Result<()> {
    if series.len() < config.min_observations {
        warn!(
            records = series.len(),
            required = config.min_observations,
            "Series too short to forecast"
        );
        return Err(ForecastError::DataError(format!(
            "Need at least {} records to forecast, got {}",
            config.min_observations,
            series.len()
        )));
    }
    Ok(())
}
