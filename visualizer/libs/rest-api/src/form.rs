use serde::{Deserialize, Serialize};

use visualizer_core_api::ChartSubmission;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChartForm {
    pub symbol: Option<String>,
    pub chart_type: Option<String>,
    pub time_series: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<ChartForm> for ChartSubmission {
    fn from(value: ChartForm) -> Self {
        Self {
            symbol: value.symbol,
            chart_type: value.chart_type,
            time_series: value.time_series,
            start_date: value.start_date,
            end_date: value.end_date,
        }
    }
}
