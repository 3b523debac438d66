//! # Sales Forecasting
//!
//! `sales_forecasting_workspace` bundles the numeric forecasting core and the
//! sales forecasting library into one dependency.
//!
//! ## Example
//!
//! ```
//! use sales_forecasting_workspace::sales::{run_forecasts, ForecastConfig, SalesSeries};
//!
//! let reports = run_forecasts(&SalesSeries::sample(), &ForecastConfig::default()).unwrap();
//! assert_eq!(reports.len(), 3);
//! assert_eq!(reports[0].forecast.len(), 6);
//! ```

/// Linear regression, moving average, exponential smoothing and error metrics
pub use forecast_math as math;

/// Sales series, model orchestration and comparison
pub use sales_forecast as sales;

#[cfg(test)]
mod tests {
    use super::math::{compute_metrics, Observation};
    use super::sales::{run_forecasts, ForecastConfig, ModelKind, SalesSeries};

    #[test]
    fn test_facade_exposes_both_layers() {
        let series = SalesSeries::sample();
        let reports = run_forecasts(&series, &ForecastConfig::default()).unwrap();
        assert_eq!(reports[0].kind, ModelKind::LinearRegression);

        let values: Vec<f64> = series.observations().iter().map(|o| o.value).collect();
        let metrics = compute_metrics(&values, &values).unwrap();
        assert_eq!(metrics.mae, 0.0);
        assert_eq!(Observation::from_values(&values).len(), 12);
    }
}
