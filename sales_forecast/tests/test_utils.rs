use chrono::NaiveDate;
use rstest::rstest;
use sales_forecast::{format_iso_date, generate_forecast_dates};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[rstest]
#[case(date(2023, 12, 1), 2, vec!["2024-01-01", "2024-02-01"])]
#[case(date(2023, 8, 31), 2, vec!["2023-09-30", "2023-10-31"])]
#[case(date(2023, 11, 30), 3, vec!["2023-12-30", "2024-01-30", "2024-02-29"])]
fn test_forecast_labels(
    #[case] last: NaiveDate,
    #[case] horizon: usize,
    #[case] expected: Vec<&str>,
) {
    let labels: Vec<String> = generate_forecast_dates(last, horizon)
        .into_iter()
        .map(format_iso_date)
        .collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_long_horizon_crosses_years() {
    let dates = generate_forecast_dates(date(2023, 1, 15), 24);
    assert_eq!(dates.len(), 24);
    assert_eq!(dates[23], date(2025, 1, 15));
    assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
}
