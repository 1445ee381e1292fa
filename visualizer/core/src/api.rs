use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, error, warn};

use domain_model::{ChartType, PriceTable};
use visualizer_catalog_api::CatalogApi;
use visualizer_chart_builder_api::{ChartBuilderApi, Data, Series};
use visualizer_core_api::{ChartPage, ChartSubmission, VisualizerApi};
use visualizer_market_data_api::MarketDataApi;

use crate::filter::filter_window;
use crate::transform::transform;
use crate::validation::{validate, ChartRequest};

pub const FETCH_FAILED: &str = "Failed to fetch stock data. Try a different symbol or time series.";
pub const NO_DATA_IN_RANGE: &str = "No data available for the selected date range.";
pub const RENDER_FAILED: &str = "Failed to render chart.";

pub struct Visualizer<C: CatalogApi, M: MarketDataApi, B: ChartBuilderApi> {
    catalog: Arc<C>,
    market_data: Arc<M>,
    chart_builder: Arc<B>,
}

impl<C: CatalogApi, M: MarketDataApi, B: ChartBuilderApi> Visualizer<C, M, B> {
    pub fn new(catalog: Arc<C>, market_data: Arc<M>, chart_builder: Arc<B>) -> Self {
        Self {
            catalog,
            market_data,
            chart_builder,
        }
    }

    async fn render(&self, request: ChartRequest, page: ChartPage) -> ChartPage {
        let series = match self
            .market_data
            .fetch(&request.symbol, request.time_series)
            .await
        {
            Ok(series) => series,
            Err(err) => {
                error!("Error during fetching '{}' {}: '{err}'", request.symbol, request.time_series);
                return page.with_error(&err.user_message());
            }
        };
        if series.is_empty() {
            warn!("No '{}' data returned for '{}'", request.time_series, request.symbol);
            return page.with_error(FETCH_FAILED);
        }

        let fetched = series.len();
        let series = filter_window(series, &request.window);
        let table = transform(&series);
        debug!(
            "'{}': {fetched} records fetched, {} in window, {} valid",
            request.symbol,
            series.len(),
            table.len()
        );
        if table.is_empty() {
            return page.with_error(NO_DATA_IN_RANGE);
        }

        let title = format!("{} - {}", request.symbol, request.chart_type);
        match self
            .chart_builder
            .build(&title, table.labels(), build_series(&table, request.chart_type))
            .await
        {
            Ok(chart_html) => page.with_chart(chart_html),
            Err(err) => {
                error!("Error during chart building: '{err}'");
                page.with_error(RENDER_FAILED)
            }
        }
    }
}

#[async_trait]
impl<C: CatalogApi, M: MarketDataApi, B: ChartBuilderApi> VisualizerApi for Visualizer<C, M, B> {
    async fn get_page(&self) -> Result<ChartPage> {
        let symbols = self.catalog.load_symbols().await?;
        Ok(ChartPage::new(symbols))
    }

    async fn submit(&self, submission: ChartSubmission) -> Result<ChartPage> {
        let symbols = self.catalog.load_symbols().await?;
        debug!("Chart submission: {submission:?}");
        let request = validate(&submission, &symbols);
        let page = ChartPage::submitted(symbols, submission);
        match request {
            Ok(request) => Ok(self.render(request, page).await),
            Err(errors) => Ok(page.with_errors(errors)),
        }
    }
}

fn build_series(table: &PriceTable, chart_type: ChartType) -> Vec<Series> {
    let data = match chart_type {
        ChartType::Candlestick => Data::CandleStick(
            table
                .rows
                .iter()
                .map(|row| vec![row.open, row.close, row.low, row.high])
                .collect(),
        ),
        ChartType::Line => Data::Line(table.closes()),
        ChartType::Bar => Data::Bar(table.closes()),
    };
    vec![Series::new(chart_type.name(), data)]
}
