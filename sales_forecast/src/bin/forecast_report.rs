//! Print a forecast comparison for a sales CSV.
//!
//! Usage: `forecast_report [SALES_CSV] [CONFIG_JSON]`
//!
//! Without a CSV the built-in 2023 sample data is used. Build with the
//! `cli` feature: `cargo run -p sales_forecast --features cli --bin forecast_report`.

use sales_forecast::{
    format_iso_date, run_forecasts, ForecastConfig, ModelComparison, SalesSeries,
};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sales_forecast=info".into()),
        )
        .init();

    let mut args = env::args().skip(1);

    let data = match args.next() {
        Some(path) => {
            println!("Loading data from: {}", path);
            SalesSeries::from_csv(path)?
        }
        None => {
            println!("No CSV given, using sample data");
            SalesSeries::sample()
        }
    };

    let config = match args.next() {
        Some(path) => ForecastConfig::from_json_file(path)?,
        None => ForecastConfig::default(),
    };

    println!(
        "Loaded {} data points, forecasting {} periods",
        data.len(),
        config.horizon
    );

    let reports = run_forecasts(&data, &config)?;

    for report in &reports {
        println!();
        println!("{} ({})", report.name, report.description);
        for point in &report.forecast {
            println!(
                "  {}: {:>12.2}  (confidence {:.0}%)",
                format_iso_date(point.date),
                point.predicted,
                point.confidence
            );
        }
        println!("  Total forecast: {:.2}", report.total_predicted());
        if let Some(average) = report.average_predicted() {
            println!("  Average/period: {:.2}", average);
        }
        println!("  Trend:          {:+.2}", report.trend());
    }

    println!();
    print!("{}", ModelComparison::new(reports));

    Ok(())
}
