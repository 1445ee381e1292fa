use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use domain_model::{ChartType, TimeSeries};
use visualizer_core_api::{ChartPage, ChartSubmission};
use visualizer_rest_api::endpoints::INDEX;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

pub const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Stock Data Visualizer</title></head>
<body><p>Error during page building. Please try again later.</p></body>
</html>
"#;

#[derive(Debug, Serialize)]
struct Choice<'a> {
    value: &'a str,
    label: &'a str,
    selected: bool,
}

/// Renders the form page. Everything except the chart fragment is HTML-escaped.
pub fn render_page(page: &ChartPage) -> Result<String> {
    let empty = ChartSubmission::default();
    let submission = page.submission.as_ref().unwrap_or(&empty);

    let mut context = Context::new();
    context.insert("action", INDEX);
    context.insert(
        "symbols",
        &choices(
            page.symbols.iter().map(|symbol| (symbol.as_str(), symbol.as_str())),
            submission.symbol.as_deref(),
        ),
    );
    context.insert(
        "chart_types",
        &choices(
            ChartType::ALL.iter().map(|chart_type| (chart_type.name(), chart_type.name())),
            submission.chart_type.as_deref(),
        ),
    );
    context.insert(
        "time_series",
        &choices(
            TimeSeries::ALL
                .iter()
                .map(|time_series| (time_series.function(), time_series_label(time_series))),
            submission.time_series.as_deref(),
        ),
    );
    context.insert("start_date", submission.start_date.as_deref().unwrap_or_default());
    context.insert("end_date", submission.end_date.as_deref().unwrap_or_default());
    context.insert("errors", &page.errors);
    context.insert("chart", page.chart_html.as_deref().unwrap_or_default());

    Ok(Tera::one_off(INDEX_TEMPLATE, &context, true)?)
}

fn time_series_label(time_series: &TimeSeries) -> &'static str {
    match time_series {
        TimeSeries::Daily => "Daily",
        TimeSeries::Weekly => "Weekly",
        TimeSeries::Monthly => "Monthly",
        TimeSeries::Intraday => "Intraday (5min)",
    }
}

fn choices<'a>(values: impl Iterator<Item = (&'a str, &'a str)>, selected: Option<&str>) -> Vec<Choice<'a>> {
    values
        .map(|(value, label)| Choice {
            value,
            label,
            selected: Some(value) == selected,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols() -> Vec<String> {
        vec!["AAPL".to_string(), "IBM".to_string()]
    }

    #[test]
    fn test_empty_form() {
        let html = render_page(&ChartPage::new(symbols())).unwrap();
        assert!(html.contains(r#"<option value="AAPL">AAPL</option>"#));
        assert!(html.contains(r#"<option value="Candlestick Chart">Candlestick Chart</option>"#));
        assert!(html.contains(r#"<option value="TIME_SERIES_INTRADAY">Intraday (5min)</option>"#));
        assert!(html.contains(r#"<form method="post" action="/">"#));
        assert!(!html.contains("selected"));
        assert!(!html.contains(r#"class="errors""#));
    }

    #[test]
    fn test_submitted_values_are_kept() {
        let submission = ChartSubmission {
            symbol: Some("IBM".to_string()),
            chart_type: Some("Bar Chart".to_string()),
            time_series: Some("TIME_SERIES_WEEKLY".to_string()),
            start_date: Some("2023-01-02".to_string()),
            end_date: Some("2023-01-05".to_string()),
        };
        let page = ChartPage::submitted(symbols(), submission).with_chart("<div id=\"price-chart\"></div>".to_string());
        let html = render_page(&page).unwrap();
        assert!(html.contains(r#"<option value="IBM" selected>IBM</option>"#));
        assert!(html.contains(r#"<option value="Bar Chart" selected>Bar Chart</option>"#));
        assert!(html.contains(r#"<option value="TIME_SERIES_WEEKLY" selected>Weekly</option>"#));
        assert!(html.contains(r#"name="start_date" value="2023-01-02""#));
        assert!(html.contains(r#"name="end_date" value="2023-01-05""#));
        assert!(html.contains(r#"<div id="price-chart"></div>"#));
    }

    #[test]
    fn test_errors_are_listed_and_escaped() {
        let submission = ChartSubmission {
            start_date: Some("\"><script>".to_string()),
            ..Default::default()
        };
        let page = ChartPage::submitted(symbols(), submission)
            .with_error("Invalid date format.")
            .with_error("End date must be <after> start date.");
        let html = render_page(&page).unwrap();
        assert!(html.contains("<li>Invalid date format.</li>"));
        assert!(html.contains("<li>End date must be &lt;after&gt; start date.</li>"));
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
        assert!(!html.contains("\"><script>"));
    }

    #[test]
    fn test_symbol_markup_is_escaped() {
        let page = ChartPage::new(vec!["<b>AT&T</b>".to_string()]);
        let html = render_page(&page).unwrap();
        assert!(html.contains("&lt;b&gt;AT&amp;T"));
        assert!(!html.contains("<b>AT&T"));
    }
}
