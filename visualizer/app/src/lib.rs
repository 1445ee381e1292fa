use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use visualizer_alpha_vantage_client::AlphaVantageClient;
use visualizer_charming_builder::CharmingBuilder;
use visualizer_config::CONFIG;
use visualizer_core::Visualizer;
use visualizer_csv_catalog::CsvCatalog;

pub async fn run() -> Result<()> {
    info!("▶ {} running...", CONFIG.application.name);
    if CONFIG.provider.key.is_empty() {
        warn!("Market data provider key is empty, set VISUALIZER_PROVIDER_KEY");
    }
    let catalog = CsvCatalog::new(&CONFIG.catalog.path);
    let market_data = AlphaVantageClient::new(&CONFIG.provider.url, &CONFIG.provider.key);
    let visualizer = Visualizer::new(
        Arc::new(catalog),
        Arc::new(market_data),
        Arc::new(CharmingBuilder),
    );
    visualizer_rest_api_server::run(CONFIG.application.port, visualizer).await
}
