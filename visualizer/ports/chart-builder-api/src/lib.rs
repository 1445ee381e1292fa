use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ChartBuilderApi: Send + Sync + 'static {
    /// Renders an embeddable HTML fragment, not a full document.
    async fn build(&self, title: &str, labels: Vec<String>, series: Vec<Series>) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub data: Data,
}

impl Series {
    pub fn new(label: &str, data: Data) -> Self {
        Self {
            label: label.to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// One `[open, close, low, high]` entry per label.
    CandleStick(Vec<Vec<f64>>),
    Line(Vec<f64>),
    Bar(Vec<f64>),
}
