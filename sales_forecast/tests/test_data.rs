use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sales_forecast::{ForecastError, SalesSeries};
use std::io::Write;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_series_from_csv() {
    // Create a temporary CSV file
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,sales").unwrap();
    writeln!(file, "2023-01-01, 100.5").unwrap();
    writeln!(file, "2023-02-01,200").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "2023-03-01,300").unwrap();

    let data = SalesSeries::from_csv(file.path()).unwrap();

    assert_eq!(data.len(), 3);
    assert_eq!(data.values(), vec![100.5, 200.0, 300.0]);
    assert_eq!(data.periods(), vec![1, 2, 3]);
    assert_eq!(data.last_date(), Some(date(2023, 3, 1)));
}

#[test]
fn test_incomplete_rows_are_skipped() {
    let csv = "date,sales\n2023-01-01,10\n2023-02-01\n2023-03-01,\n2023-04-01,40\n";
    let data = SalesSeries::from_reader(csv.as_bytes()).unwrap();

    assert_eq!(data.values(), vec![10.0, 40.0]);
    assert_eq!(data.periods(), vec![1, 2]);
}

#[test]
fn test_extra_columns_are_ignored() {
    let csv = "Date,Sales,Period\n2023-01-01,10,7\n2023-02-01,20,9\n";
    let data = SalesSeries::from_reader(csv.as_bytes()).unwrap();

    assert_eq!(data.periods(), vec![1, 2]);
}

#[test]
fn test_invalid_rows_fail() {
    let bad_date = "date,sales\n01/02/2023,10\n";
    match SalesSeries::from_reader(bad_date.as_bytes()) {
        Err(ForecastError::DataError(msg)) => assert!(msg.contains("line 2")),
        other => panic!("Expected DataError, got {:?}", other),
    }

    let bad_sales = "date,sales\n2023-01-01,ten\n";
    assert!(matches!(
        SalesSeries::from_reader(bad_sales.as_bytes()),
        Err(ForecastError::DataError(_))
    ));
}

#[test]
fn test_missing_file() {
    let result = SalesSeries::from_csv("nonexistent_file.csv");
    assert!(matches!(result, Err(ForecastError::IoError(_))));
}

#[test]
fn test_export_format() {
    let data = SalesSeries::from_entries(vec![
        (date(2024, 1, 1), 1500.0),
        (date(2024, 2, 1), 1750.25),
    ])
    .unwrap();

    let mut buffer = Vec::new();
    data.write_csv(&mut buffer).unwrap();

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "Date,Sales,Period\n2024-01-01,1500,1\n2024-02-01,1750.25,2\n"
    );
}

#[test]
fn test_export_then_import() {
    let data = SalesSeries::sample();
    let file = NamedTempFile::new().unwrap();

    data.to_csv(file.path()).unwrap();
    let loaded = SalesSeries::from_csv(file.path()).unwrap();

    assert_eq!(loaded, data);
}
