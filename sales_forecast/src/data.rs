//! Sales series handling and CSV import/export

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use forecast_math::Observation;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Date format used for import, export and forecast labels
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One period of recorded sales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Calendar date of the period
    pub date: NaiveDate,
    /// Sales amount
    pub sales: f64,
    /// 1-based position in the series
    pub period: u32,
}

impl SalesRecord {
    /// View the record as a numeric observation
    pub fn observation(&self) -> Observation {
        Observation::new(self.period, self.sales)
    }
}

/// Ordered sales history.
///
/// Periods always run `1..=len` in insertion order; they are renumbered
/// whenever a record is removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSeries {
    records: Vec<SalesRecord>,
}

impl SalesSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a series from `(date, sales)` pairs, numbering periods in order
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let mut series = Self::new();
        for (date, sales) in entries {
            series.push(date, sales)?;
        }
        Ok(series)
    }

    /// Twelve months of demonstration sales for 2023
    pub fn sample() -> Self {
        const SALES: [f64; 12] = [
            10000.0, 12000.0, 11500.0, 13000.0, 14500.0, 13800.0, 15200.0, 16000.0, 15500.0,
            17000.0, 18500.0, 19200.0,
        ];

        let records = (1..=12u32)
            .filter_map(|month| NaiveDate::from_ymd_opt(2023, month, 1))
            .zip(SALES)
            .zip(1u32..)
            .map(|((date, sales), period)| SalesRecord {
                date,
                sales,
                period,
            })
            .collect();

        Self { records }
    }

    /// Append a record as the next period
    pub fn push(&mut self, date: NaiveDate, sales: f64) -> Result<()> {
        if !sales.is_finite() {
            return Err(ForecastError::InvalidParameter(format!(
                "Sales for {} must be a finite number, got {}",
                date, sales
            )));
        }

        let period = next_period(self.records.len())?;
        self.records.push(SalesRecord {
            date,
            sales,
            period,
        });
        Ok(())
    }

    /// Remove the record at `index` and renumber the following periods
    pub fn remove(&mut self, index: usize) -> Result<SalesRecord> {
        if index >= self.records.len() {
            return Err(ForecastError::DataError(format!(
                "Index {} out of range for a series of {} records",
                index,
                self.records.len()
            )));
        }

        let removed = self.records.remove(index);
        for (record, period) in self.records.iter_mut().zip(1u32..) {
            record.period = period;
        }
        Ok(removed)
    }

    /// Get the records in order
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the series has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Numeric view of the series for the forecasting core
    pub fn observations(&self) -> Vec<Observation> {
        self.records.iter().map(SalesRecord::observation).collect()
    }

    /// Get the sales amounts as a vector
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.sales).collect()
    }

    /// Get the period indices as a vector
    pub fn periods(&self) -> Vec<u32> {
        self.records.iter().map(|r| r.period).collect()
    }

    /// Date of the most recent record
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// Period of the most recent record, 0 for an empty series
    pub fn last_period(&self) -> u32 {
        self.records.last().map_or(0, |r| r.period)
    }

    /// Load a series from a `date,sales` CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Read a series from `date,sales` CSV data.
    ///
    /// The first row is treated as a header. Rows missing either field are
    /// skipped; any further columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut series = Self::new();
        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            // header is line 1
            let line = index + 2;

            let (date, sales) = match (row.get(0), row.get(1)) {
                (Some(date), Some(sales)) if !date.is_empty() && !sales.is_empty() => (date, sales),
                _ => {
                    warn!(line, "Skipping incomplete CSV row");
                    continue;
                }
            };

            let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| {
                ForecastError::DataError(format!("Invalid date '{}' on line {}: {}", date, line, e))
            })?;
            let sales: f64 = sales.parse().map_err(|_| {
                ForecastError::DataError(format!(
                    "Invalid sales value '{}' on line {}",
                    sales, line
                ))
            })?;

            series.push(date, sales)?;
        }

        debug!(records = series.len(), "Loaded sales series from CSV");
        Ok(series)
    }

    /// Save the series as a `Date,Sales,Period` CSV file
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(file)
    }

    /// Write the series as `Date,Sales,Period` CSV data
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new().from_writer(writer);
        csv_writer.write_record(["Date", "Sales", "Period"])?;
        for record in &self.records {
            csv_writer.write_record([
                record.date.format(DATE_FORMAT).to_string(),
                record.sales.to_string(),
                record.period.to_string(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Period number for a record appended after `len` others
fn next_period(len: usize) -> Result<u32> {
    u32::try_from(len)
        .ok()
        .and_then(|count| count.checked_add(1))
        .ok_or_else(|| {
            ForecastError::DataError(format!(
                "Cannot number record {} as a period, the series is too long",
                len
            ))
        })
}
