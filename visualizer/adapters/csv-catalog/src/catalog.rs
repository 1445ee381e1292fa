use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use tracing::trace;

use visualizer_catalog_api::CatalogApi;

const SYMBOL_COLUMN: &str = "Symbol";

/// Symbol catalog backed by a CSV file with a `Symbol` header. Re-read on every call.
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogApi for CsvCatalog {
    async fn load_symbols(&self) -> Result<Vec<String>> {
        let symbols = read_symbols(&self.path)
            .with_context(|| format!("Error during reading symbol catalog '{}'", self.path.display()))?;
        trace!("Loaded {} symbols from '{}'", symbols.len(), self.path.display());
        Ok(symbols)
    }
}

fn read_symbols(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let column = reader
        .headers()?
        .iter()
        .position(|header| header.trim() == SYMBOL_COLUMN)
        .ok_or_else(|| anyhow!("Missing '{SYMBOL_COLUMN}' column"))?;

    let mut symbols = BTreeSet::new();
    for record in reader.records() {
        if let Some(symbol) = record?.get(column).filter(|symbol| !symbol.is_empty()) {
            symbols.insert(symbol.to_string());
        }
    }
    Ok(symbols.into_iter().collect())
}
