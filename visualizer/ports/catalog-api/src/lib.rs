use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogApi: Send + Sync + 'static {
    /// Tradable symbols, sorted and without duplicates.
    async fn load_symbols(&self) -> Result<Vec<String>>;
}
