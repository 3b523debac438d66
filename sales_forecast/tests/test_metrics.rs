use forecast_math::{MetricKind, Metrics};
use sales_forecast::{ModelComparison, ModelKind, ModelReport};

fn report(kind: ModelKind, mae: f64, mse: f64, mape: f64) -> ModelReport {
    ModelReport {
        kind,
        name: kind.name().to_string(),
        description: kind.description().to_string(),
        forecast: Vec::new(),
        metrics: Metrics {
            mae,
            mse,
            rmse: mse.sqrt(),
            mape,
        },
    }
}

fn comparison() -> ModelComparison {
    ModelComparison::new(vec![
        report(ModelKind::LinearRegression, 500.0, 360000.0, 4.0),
        report(ModelKind::MovingAverage, 900.0, 250000.0, 6.0),
        report(ModelKind::ExponentialSmoothing, 500.0, 810000.0, 3.5),
    ])
}

#[test]
fn test_best_by_metric() {
    let comparison = comparison();

    assert_eq!(
        comparison.best_by(MetricKind::Mse).unwrap().kind,
        ModelKind::MovingAverage
    );
    assert_eq!(
        comparison.best_by(MetricKind::Rmse).unwrap().kind,
        ModelKind::MovingAverage
    );
    assert_eq!(
        comparison.best_by(MetricKind::Mape).unwrap().kind,
        ModelKind::ExponentialSmoothing
    );
}

#[test]
fn test_tie_goes_to_first_report() {
    assert_eq!(
        comparison().best_by(MetricKind::Mae).unwrap().kind,
        ModelKind::LinearRegression
    );
}

#[test]
fn test_winners_cover_every_metric() {
    let winners = comparison().winners();
    let metrics: Vec<MetricKind> = winners.iter().map(|(m, _)| *m).collect();
    assert_eq!(metrics, MetricKind::ALL.to_vec());
}

#[test]
fn test_empty_comparison() {
    let comparison = ModelComparison::new(Vec::new());
    assert!(comparison.best_by(MetricKind::Mae).is_none());
    assert!(comparison.winners().is_empty());
}

#[test]
fn test_lookup_and_display() {
    let comparison = comparison();
    assert_eq!(
        comparison.get(ModelKind::MovingAverage).unwrap().metrics.mae,
        900.0
    );

    let text = comparison.to_string();
    assert!(text.contains("Model Performance Comparison"));
    assert!(text.contains("Exponential Smoothing"));
    assert!(text.contains("Best MAPE: Exponential Smoothing"));
}
