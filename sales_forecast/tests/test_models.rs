use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use sales_forecast::models::{LinearTrend, MovingAverageModel, SmoothingModel};
use sales_forecast::{ForecastError, ForecastModel, SalesSeries, TrainedForecastModel};

fn create_test_data(values: &[f64]) -> SalesSeries {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let entries = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (start + chrono::Months::new(i as u32), v));

    SalesSeries::from_entries(entries).unwrap()
}

#[test]
fn test_linear_trend() {
    let data = create_test_data(&[100.0, 200.0, 300.0]);
    let trained = LinearTrend::new().train(&data).unwrap();

    let params = trained.params();
    assert_abs_diff_eq!(params.slope, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(params.intercept, 0.0, epsilon = 1e-9);

    let forecast = trained.forecast(2).unwrap();
    assert_abs_diff_eq!(forecast[0], 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(forecast[1], 500.0, epsilon = 1e-9);

    // A perfect line reconstructs the history exactly
    let metrics = trained.in_sample().metrics().unwrap();
    assert_abs_diff_eq!(metrics.mae, 0.0, epsilon = 1e-9);
}

#[test]
fn test_linear_trend_needs_two_records() {
    let data = create_test_data(&[100.0]);
    let err = LinearTrend::new().train(&data).unwrap_err();
    assert!(matches!(err, ForecastError::Math(_)));
}

#[test]
fn test_moving_average() {
    let data = create_test_data(&[100.0, 200.0, 300.0]);
    let model = MovingAverageModel::new(3).unwrap();
    let trained = model.train(&data).unwrap();

    assert_eq!(trained.forecast(1).unwrap(), vec![200.0]);
    assert!(trained.forecast(0).unwrap().is_empty());

    // Scoring starts at the third record: 300 from [100, 200]
    let fit = trained.in_sample();
    assert_eq!(fit.actual, vec![300.0]);
    assert_eq!(fit.predicted, vec![150.0]);

    let metrics = fit.metrics().unwrap();
    assert_abs_diff_eq!(metrics.mae, 150.0, epsilon = 1e-9);
}

#[test]
fn test_moving_average_scores_sample_from_third_month() {
    let data = SalesSeries::sample();
    let values = data.values();
    let trained = MovingAverageModel::new(3).unwrap().train(&data).unwrap();

    let fit = trained.in_sample();
    assert_eq!(fit.actual, values[2..].to_vec());
    assert_abs_diff_eq!(fit.predicted[0], 11000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fit.predicted[1], 11166.666666666666, epsilon = 1e-9);

    let metrics = fit.metrics().unwrap();
    assert_abs_diff_eq!(metrics.mae, 1486.6666666666667, epsilon = 1e-6);
}

#[test]
fn test_moving_average_needs_a_scored_record() {
    let data = create_test_data(&[100.0, 200.0, 300.0]);

    assert!(MovingAverageModel::new(3).unwrap().train(&data).is_ok());
    let err = MovingAverageModel::new(4).unwrap().train(&data).unwrap_err();
    assert!(matches!(err, ForecastError::DataError(_)));
}

#[test]
fn test_moving_average_invalid_window() {
    assert!(MovingAverageModel::new(0).is_err());
}

#[test]
fn test_exponential_smoothing() {
    let data = create_test_data(&[100.0, 200.0, 300.0]);
    let trained = SmoothingModel::new(0.5).unwrap().train(&data).unwrap();

    assert_eq!(trained.level(), 225.0);
    assert_eq!(trained.forecast(3).unwrap(), vec![225.0; 3]);

    let fit = trained.in_sample();
    assert_eq!(fit.actual, vec![100.0, 200.0, 300.0]);
    assert_eq!(fit.predicted, vec![100.0, 150.0, 225.0]);
}

#[test]
fn test_exponential_smoothing_parameters() {
    assert!(SmoothingModel::new(1.0).is_ok());
    assert!(SmoothingModel::new(0.0).is_err());
    assert!(SmoothingModel::new(1.5).is_err());

    let err = SmoothingModel::new(0.3)
        .unwrap()
        .train(&SalesSeries::new())
        .unwrap_err();
    assert!(matches!(err, ForecastError::Math(_)));
}

#[test]
fn test_model_names() {
    assert_eq!(LinearTrend::new().name(), "Linear Regression");
    assert_eq!(
        MovingAverageModel::new(4).unwrap().name(),
        "Moving Average (window=4)"
    );
    assert_eq!(
        SmoothingModel::new(0.3).unwrap().name(),
        "Exponential Smoothing (alpha=0.3)"
    );
}
