use std::str::FromStr;

use chrono::NaiveDate;

use domain_model::{ChartType, TimeSeries, DATE_FORMAT};
use visualizer_core_api::ChartSubmission;

pub const INVALID_SYMBOL: &str = "Invalid stock symbol selected.";
pub const INVALID_CHART_TYPE: &str = "Invalid chart type selected.";
pub const INVALID_TIME_SERIES: &str = "Invalid time series selected.";
pub const INVALID_DATE_FORMAT: &str = "Invalid date format.";
pub const INVALID_DATE_ORDER: &str = "End date must be after start date.";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub symbol: String,
    pub chart_type: ChartType,
    pub time_series: TimeSeries,
    pub window: DateWindow,
}

/// Calendar days, both ends inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Checks every rule and collects all failures instead of stopping at the first one.
pub fn validate(submission: &ChartSubmission, symbols: &[String]) -> Result<ChartRequest, Vec<String>> {
    let mut errors = Vec::new();

    let symbol = submission
        .symbol
        .as_ref()
        .filter(|symbol| symbols.contains(*symbol));
    if symbol.is_none() {
        errors.push(INVALID_SYMBOL.to_string());
    }

    let chart_type = parse(&submission.chart_type, ChartType::from_str);
    if chart_type.is_none() {
        errors.push(INVALID_CHART_TYPE.to_string());
    }

    let time_series = parse(&submission.time_series, TimeSeries::from_str);
    if time_series.is_none() {
        errors.push(INVALID_TIME_SERIES.to_string());
    }

    let start = parse(&submission.start_date, parse_date);
    let end = parse(&submission.end_date, parse_date);
    let window = match (start, end) {
        (Some(start), Some(end)) if end < start => {
            errors.push(INVALID_DATE_ORDER.to_string());
            None
        }
        (Some(start), Some(end)) => Some(DateWindow { start, end }),
        _ => {
            errors.push(INVALID_DATE_FORMAT.to_string());
            None
        }
    };

    match (symbol, chart_type, time_series, window) {
        (Some(symbol), Some(chart_type), Some(time_series), Some(window)) if errors.is_empty() => {
            Ok(ChartRequest {
                symbol: symbol.clone(),
                chart_type,
                time_series,
                window,
            })
        }
        _ => Err(errors),
    }
}

fn parse<T, E>(value: &Option<String>, parser: impl Fn(&str) -> Result<T, E>) -> Option<T> {
    value.as_deref().and_then(|value| parser(value).ok())
}

fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}
