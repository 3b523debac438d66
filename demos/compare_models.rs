use sales_forecasting_workspace::math::MetricKind;
use sales_forecasting_workspace::sales::{
    format_iso_date, generate_forecast_dates, run_model, ForecastConfig, ModelComparison, ModelKind,
    SalesSeries,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Start from the sample year and add a few manual entries
    let mut data = SalesSeries::sample();
    let last = data.last_date().ok_or("sample data is empty")?;
    for (i, sales) in [20100.0, 19800.0, 21000.0].into_iter().enumerate() {
        let date = generate_forecast_dates(last, i + 1)
            .pop()
            .ok_or("no date generated")?;
        data.push(date, sales)?;
    }
    println!("Using {} data points", data.len());

    // Try a few moving average windows against the other models
    for window in [2, 3, 6] {
        let config = ForecastConfig::default().with_window(window).with_horizon(3);
        let reports = ModelKind::ALL
            .iter()
            .map(|&kind| run_model(kind, &data, &config))
            .collect::<Result<Vec<_>, _>>()?;

        let comparison = ModelComparison::new(reports);
        println!("\nWindow {}:", window);
        print!("{}", comparison);

        if let Some(best) = comparison.best_by(MetricKind::Rmse) {
            for point in &best.forecast {
                println!(
                    "  {} -> {:.2}",
                    format_iso_date(point.date),
                    point.predicted
                );
            }
        }
    }

    Ok(())
}
