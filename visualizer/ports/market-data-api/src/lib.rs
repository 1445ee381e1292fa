use async_trait::async_trait;
use thiserror::Error;

use domain_model::{RawSeries, TimeSeries};

#[async_trait]
pub trait MarketDataApi: Send + Sync + 'static {
    /// Fetches the raw series for `symbol`. An empty series means the provider has no data
    /// for the request, a failed call is reported as [`MarketDataError`].
    async fn fetch(&self, symbol: &str, time_series: TimeSeries) -> Result<RawSeries, MarketDataError>;
}

#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request never produced a response body.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed provider response: {0}")]
    Decode(String),

    /// The provider answered with an error, rate limit or information payload.
    #[error("Provider error: {0}")]
    Provider(String),
}

impl MarketDataError {
    pub fn user_message(&self) -> String {
        match self {
            MarketDataError::Transport(_) | MarketDataError::Decode(_) => {
                "Market data provider is unavailable. Try again later.".to_string()
            }
            MarketDataError::Provider(message) => {
                format!("Market data provider rejected the request: {message}")
            }
        }
    }
}
