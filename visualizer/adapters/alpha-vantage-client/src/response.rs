use serde_json::{Map, Value};

use domain_model::{RawQuote, RawSeries, TimeSeries};
use visualizer_market_data_api::MarketDataError;

/// Top-level fields the provider uses instead of a series when it refuses a request.
const PROVIDER_MESSAGES: [&str; 3] = ["Error Message", "Note", "Information"];

pub fn parse_series(body: &str, time_series: TimeSeries) -> Result<RawSeries, MarketDataError> {
    let mut payload: Map<String, Value> =
        serde_json::from_str(body).map_err(|err| MarketDataError::Decode(err.to_string()))?;

    match payload.remove(&time_series.series_key()) {
        Some(Value::Object(records)) => records
            .into_iter()
            .map(|(date, record)| to_quote(&date, record).map(|quote| (date, quote)))
            .collect(),
        Some(other) => Err(MarketDataError::Decode(format!(
            "Expected an object under '{}', got: {other}",
            time_series.series_key()
        ))),
        None => match provider_message(&payload) {
            Some(message) => Err(MarketDataError::Provider(message)),
            None => Ok(RawSeries::new()),
        },
    }
}

fn to_quote(date: &str, record: Value) -> Result<RawQuote, MarketDataError> {
    match record {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .filter_map(|(field, value)| match value {
                Value::String(value) => Some((field, value)),
                Value::Null => None,
                value => Some((field, value.to_string())),
            })
            .collect()),
        other => Err(MarketDataError::Decode(format!(
            "Expected an object for '{date}', got: {other}"
        ))),
    }
}

fn provider_message(payload: &Map<String, Value>) -> Option<String> {
    PROVIDER_MESSAGES
        .iter()
        .find_map(|key| payload.get(*key))
        .map(|message| match message {
            Value::String(message) => message.clone(),
            message => message.to_string(),
        })
}
