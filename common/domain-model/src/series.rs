use std::collections::BTreeMap;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Provider fields of a single bar, as returned: `"1. open" -> "131.2500"`.
pub type RawQuote = BTreeMap<String, String>;

/// Date key (`2023-01-05` or `2023-01-05 16:00:00`) to raw bar.
pub type RawSeries = BTreeMap<String, RawQuote>;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PriceRow {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceRow {
    /// Axis label: the bare date for daily and coarser bars, date and time otherwise.
    pub fn label(&self) -> String {
        if self.timestamp.num_seconds_from_midnight() == 0 {
            self.timestamp.format("%Y-%m-%d").to_string()
        } else {
            self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PriceTable {
    pub rows: Vec<PriceRow>,
}

impl PriceTable {
    pub fn new(mut rows: Vec<PriceRow>) -> Self {
        rows.sort_by_key(|row| row.timestamp);
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(PriceRow::label).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.close).collect()
    }
}
