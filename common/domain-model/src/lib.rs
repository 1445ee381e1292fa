use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Error};
use serde::{Deserialize, Serialize};

pub use series::{PriceRow, PriceTable, RawQuote, RawSeries};

pub mod series;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum TimeSeries {
    Daily,
    Weekly,
    Monthly,
    Intraday,
}

impl TimeSeries {
    pub const ALL: [TimeSeries; 4] = [
        TimeSeries::Daily,
        TimeSeries::Weekly,
        TimeSeries::Monthly,
        TimeSeries::Intraday,
    ];

    /// Provider `function` parameter, also used as the form value.
    pub fn function(&self) -> &'static str {
        match self {
            TimeSeries::Daily => "TIME_SERIES_DAILY",
            TimeSeries::Weekly => "TIME_SERIES_WEEKLY",
            TimeSeries::Monthly => "TIME_SERIES_MONTHLY",
            TimeSeries::Intraday => "TIME_SERIES_INTRADAY",
        }
    }

    pub fn interval(&self) -> Option<Interval> {
        match self {
            TimeSeries::Intraday => Some(Interval::FiveMin),
            _ => None,
        }
    }

    pub fn output_size(&self) -> OutputSize {
        match self {
            TimeSeries::Intraday => OutputSize::Compact,
            _ => OutputSize::Full,
        }
    }

    /// Name of the JSON field holding the series in the provider response.
    pub fn series_key(&self) -> String {
        match self {
            TimeSeries::Daily => "Time Series (Daily)".to_string(),
            TimeSeries::Weekly => "Weekly Time Series".to_string(),
            TimeSeries::Monthly => "Monthly Time Series".to_string(),
            TimeSeries::Intraday => format!("Time Series ({})", Interval::FiveMin),
        }
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.function())
    }
}

impl FromStr for TimeSeries {
    type Err = Error;
    fn from_str(input: &str) -> Result<TimeSeries, Self::Err> {
        match input {
            "TIME_SERIES_DAILY" => Ok(TimeSeries::Daily),
            "TIME_SERIES_WEEKLY" => Ok(TimeSeries::Weekly),
            "TIME_SERIES_MONTHLY" => Ok(TimeSeries::Monthly),
            "TIME_SERIES_INTRADAY" => Ok(TimeSeries::Intraday),
            input => bail!("Unknown time series: {input}"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum Interval {
    FiveMin,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Interval::FiveMin => write!(f, "5min"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum OutputSize {
    Compact,
    Full,
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputSize::Compact => write!(f, "compact"),
            OutputSize::Full => write!(f, "full"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum ChartType {
    Line,
    Candlestick,
    Bar,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [ChartType::Line, ChartType::Candlestick, ChartType::Bar];

    pub fn name(&self) -> &'static str {
        match self {
            ChartType::Line => "Line Chart",
            ChartType::Candlestick => "Candlestick Chart",
            ChartType::Bar => "Bar Chart",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ChartType {
    type Err = Error;
    fn from_str(input: &str) -> Result<ChartType, Self::Err> {
        match input {
            "Line Chart" => Ok(ChartType::Line),
            "Candlestick Chart" => Ok(ChartType::Candlestick),
            "Bar Chart" => Ok(ChartType::Bar),
            input => bail!("Unknown chart type: {input}"),
        }
    }
}
