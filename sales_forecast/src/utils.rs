//! Calendar helpers for labelling forecasts

use crate::data::DATE_FORMAT;
use chrono::{Months, NaiveDate};

/// Dates for the `horizon` months following `last_date`.
///
/// Each date is `last_date` plus `i` months for `i` in `1..=horizon`, so a
/// day that does not exist in a shorter month clamps to that month's last
/// day without drifting the later labels.
pub fn generate_forecast_dates(last_date: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    (1..=horizon)
        .map_while(|i| {
            let months = u32::try_from(i).ok()?;
            last_date.checked_add_months(Months::new(months))
        })
        .collect()
}

/// Render a date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
