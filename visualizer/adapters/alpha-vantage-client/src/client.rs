use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_urlencoded::to_string;
use tracing::{debug, trace};

use domain_model::{RawSeries, TimeSeries};
use visualizer_market_data_api::{MarketDataApi, MarketDataError};

use crate::response::parse_series;

#[derive(Debug, Serialize)]
struct TimeSeriesQuery<'a> {
    function: &'a str,
    symbol: &'a str,
    apikey: &'a str,
    datatype: &'a str,
    outputsize: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<String>,
}

pub struct AlphaVantageClient {
    url: String,
    api_key: String,
    client: Client,
}

impl AlphaVantageClient {
    pub fn new(url: &str, api_key: &str) -> Self {
        let mut url = String::from(url);
        if !url.starts_with("http") {
            url = format!("https://{url}");
        }
        Self {
            url,
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }

    fn request_url(&self, symbol: &str, time_series: TimeSeries) -> Result<Url, MarketDataError> {
        let query = TimeSeriesQuery {
            function: time_series.function(),
            symbol,
            apikey: &self.api_key,
            datatype: "json",
            outputsize: time_series.output_size().to_string(),
            interval: time_series.interval().map(|interval| interval.to_string()),
        };
        let mut url = Url::parse(&self.url)
            .map_err(|err| MarketDataError::Transport(format!("Invalid provider url '{}': {err}", self.url)))?;
        let query = to_string(&query)
            .map_err(|err| MarketDataError::Transport(format!("Invalid request query: {err}")))?;
        url.set_query(Some(&query));
        Ok(url)
    }
}

#[async_trait]
impl MarketDataApi for AlphaVantageClient {
    async fn fetch(&self, symbol: &str, time_series: TimeSeries) -> Result<RawSeries, MarketDataError> {
        let url = self.request_url(symbol, time_series)?;
        trace!("Request url: {}?function={time_series}&symbol={symbol}", self.url);
        let body = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| MarketDataError::Transport(err.without_url().to_string()))?
            .text()
            .await
            .map_err(|err| MarketDataError::Transport(err.without_url().to_string()))?;
        let series = parse_series(&body, time_series)?;
        debug!("Fetched {} '{time_series}' records for '{symbol}'", series.len());
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_daily_request() {
        let client = AlphaVantageClient::new("https://www.alphavantage.co/query", "secret");
        let url = client.request_url("IBM", TimeSeries::Daily).unwrap();
        assert_eq!(url.path(), "/query");
        assert_eq!(
            query_pairs(&url),
            vec![
                ("function".to_string(), "TIME_SERIES_DAILY".to_string()),
                ("symbol".to_string(), "IBM".to_string()),
                ("apikey".to_string(), "secret".to_string()),
                ("datatype".to_string(), "json".to_string()),
                ("outputsize".to_string(), "full".to_string()),
            ]
        );
    }

    #[test]
    fn test_intraday_request() {
        let client = AlphaVantageClient::new("www.alphavantage.co/query", "secret");
        let url = client.request_url("BRK.B", TimeSeries::Intraday).unwrap();
        assert_eq!(url.scheme(), "https");
        let pairs = query_pairs(&url);
        assert!(pairs.contains(&("function".to_string(), "TIME_SERIES_INTRADAY".to_string())));
        assert!(pairs.contains(&("symbol".to_string(), "BRK.B".to_string())));
        assert!(pairs.contains(&("outputsize".to_string(), "compact".to_string())));
        assert!(pairs.contains(&("interval".to_string(), "5min".to_string())));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let client = AlphaVantageClient::new("http://127.0.0.1:9/query", "secret");
        let result = client.fetch("IBM", TimeSeries::Daily).await;
        assert!(matches!(result, Err(MarketDataError::Transport(_))));
    }

    #[tokio::test]
    async fn test_transport_error_hides_api_key() {
        let client = AlphaVantageClient::new("http://127.0.0.1:9/query", "SUPERSECRETKEY");
        let err = client.fetch("IBM", TimeSeries::Daily).await.unwrap_err();
        assert!(matches!(err, MarketDataError::Transport(_)));
        assert!(!err.to_string().contains("SUPERSECRETKEY"));
        assert!(!err.to_string().contains("apikey"));
    }
}
