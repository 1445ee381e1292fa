use chrono::{NaiveDate, NaiveDateTime};
use tracing::trace;

use domain_model::{PriceRow, PriceTable, RawQuote, RawSeries, DATE_FORMAT};

pub const OPEN: &str = "1. open";
pub const HIGH: &str = "2. high";
pub const LOW: &str = "3. low";
pub const CLOSE: &str = "4. close";
pub const VOLUME: &str = "5. volume";

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds a date-indexed table from the provider series.
/// Rows with an unparseable date or any missing or non-numeric field are dropped.
pub fn transform(series: &RawSeries) -> PriceTable {
    let rows = series
        .iter()
        .filter_map(|(date, quote)| {
            let row = to_row(date, quote);
            if row.is_none() {
                trace!("Dropping unparseable record for '{date}': {quote:?}");
            }
            row
        })
        .collect();
    PriceTable::new(rows)
}

fn to_row(date: &str, quote: &RawQuote) -> Option<PriceRow> {
    Some(PriceRow {
        timestamp: parse_timestamp(date)?,
        open: number(quote, OPEN)?,
        high: number(quote, HIGH)?,
        low: number(quote, LOW)?,
        close: number(quote, CLOSE)?,
        volume: number(quote, VOLUME)?,
    })
}

fn parse_timestamp(date: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(date, DATE_TIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(date, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn number(quote: &RawQuote, field: &str) -> Option<f64> {
    quote
        .get(field)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
