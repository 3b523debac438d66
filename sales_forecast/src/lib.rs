//! # Sales Forecast
//!
//! A Rust library for forecasting monthly sales and comparing forecasting methods.
//!
//! ## Features
//!
//! - Sales series handling with CSV import and export
//! - Forecasting models (Linear Regression, Moving Average, Exponential Smoothing)
//! - In-sample scoring with MAE, MSE, RMSE and MAPE
//! - Monthly forecast date labels
//! - Side-by-side model comparison
//!
//! ## Quick Start
//!
//! ```no_run
//! use sales_forecast::{run_forecasts, ForecastConfig, ModelComparison, SalesSeries};
//!
//! // Load data
//! let data = SalesSeries::from_csv("sales.csv")?;
//!
//! // Forecast the next twelve months with every model
//! let config = ForecastConfig::default().with_horizon(12);
//! let reports = run_forecasts(&data, &config)?;
//!
//! // Compare the models
//! let comparison = ModelComparison::new(reports);
//! println!("{}", comparison);
//! # Ok::<(), sales_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::data::{SalesRecord, SalesSeries};
pub use crate::error::ForecastError;
pub use crate::metrics::ModelComparison;
pub use crate::models::{ForecastModel, InSampleFit, ModelKind, TrainedForecastModel};
pub use crate::report::{run_forecasts, run_model, ModelReport, Prediction};
pub use crate::utils::{format_iso_date, generate_forecast_dates};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
