use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait VisualizerApi: Send + Sync + 'static {
    /// Empty form with the symbol catalog.
    async fn get_page(&self) -> Result<ChartPage>;

    /// Validates and processes a form submission. Validation and data problems end up in
    /// [`ChartPage::errors`]; `Err` is reserved for failures that prevent rendering the form.
    async fn submit(&self, submission: ChartSubmission) -> Result<ChartPage>;
}

/// Raw form values as submitted, nothing validated yet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChartSubmission {
    pub symbol: Option<String>,
    pub chart_type: Option<String>,
    pub time_series: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChartPage {
    pub symbols: Vec<String>,
    pub submission: Option<ChartSubmission>,
    pub chart_html: Option<String>,
    pub errors: Vec<String>,
}

impl ChartPage {
    pub fn new(symbols: Vec<String>) -> Self {
        Self {
            symbols,
            ..Default::default()
        }
    }

    pub fn submitted(symbols: Vec<String>, submission: ChartSubmission) -> Self {
        Self {
            symbols,
            submission: Some(submission),
            ..Default::default()
        }
    }

    pub fn with_chart(mut self, chart_html: String) -> Self {
        self.chart_html = Some(chart_html);
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.errors.push(error.to_string());
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors.extend(errors);
        self
    }
}
