use domain_model::{RawSeries, DATE_FORMAT};

use crate::validation::DateWindow;

/// Keeps the records whose calendar day falls inside `window`.
///
/// Keys are compared as `YYYY-MM-DD` strings on their date prefix, so intraday keys such as
/// `2023-01-05 16:00:00` stay in a window ending on `2023-01-05`.
pub fn filter_window(series: RawSeries, window: &DateWindow) -> RawSeries {
    let start = window.start.format(DATE_FORMAT).to_string();
    let end = window.end.format(DATE_FORMAT).to_string();
    series
        .into_iter()
        .filter(|(date, _)| {
            let day = date.get(..10).unwrap_or(date);
            start.as_str() <= day && day <= end.as_str()
        })
        .collect()
}
