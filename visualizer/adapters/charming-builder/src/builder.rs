use anyhow::Result;
use async_trait::async_trait;
use charming::component::{Axis, DataZoom, DataZoomType, Grid, Legend, Title};
use charming::element::{
    AreaStyle, AxisPointer, AxisPointerType, AxisType, DataBackground, LineStyle, SplitLine,
    TextStyle, Tooltip, Trigger,
};
use charming::series::{Bar, Candlestick, Line};
use charming::Chart;
use tracing::trace;

use visualizer_chart_builder_api::{ChartBuilderApi, Data, Series};

const CHART_ID: &str = "price-chart";
const CHART_HEIGHT: u32 = 600;
const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.4.2/dist/echarts.min.js";
const THEME: &str = "dark";
const X_AXIS_NAME: &str = "Date";
const Y_AXIS_NAME: &str = "Price";

pub struct CharmingBuilder;

#[async_trait]
impl ChartBuilderApi for CharmingBuilder {
    async fn build(&self, title: &str, labels: Vec<String>, series: Vec<Series>) -> Result<String> {
        let chart = self.build_chart(title, labels, series);
        let fragment = render_fragment(&chart);
        trace!("Rendered chart '{title}', {} bytes", fragment.len());
        Ok(fragment)
    }
}

impl CharmingBuilder {
    fn build_chart(&self, title: &str, labels: Vec<String>, series: Vec<Series>) -> Chart {
        let mut chart = build_base_chart(title);
        chart = add_legend(chart, &series);
        chart = add_x_axis(chart, labels);
        chart = add_series(chart, series);
        chart
    }
}

fn build_base_chart(title: &str) -> Chart {
    Chart::new()
        .title(Title::new().text(title))
        .tooltip(
            Tooltip::new().trigger(Trigger::Axis).axis_pointer(
                AxisPointer::new()
                    .animation(true)
                    .type_(AxisPointerType::Cross),
            ),
        )
        .y_axis(
            Axis::new()
                .name(Y_AXIS_NAME)
                .scale(true)
                .split_line(SplitLine::new().show(false)),
        )
        .grid(Grid::new().bottom(80))
        .data_zoom(
            DataZoom::new()
                .handle_icon(ICON)
                .text_style(TextStyle::new().color("#8392A5"))
                .data_background(
                    DataBackground::new()
                        .area_style(AreaStyle::new().color("#8392A5"))
                        .line_style(LineStyle::new().color("#8392A5")),
                )
                .brush_select(true),
        )
        .data_zoom(DataZoom::new().type_(DataZoomType::Inside))
}

fn add_legend(chart: Chart, series: &[Series]) -> Chart {
    let legend: Vec<String> = series.iter().map(|series| series.label.clone()).collect();
    chart.legend(Legend::new().inactive_color("#777").data(legend))
}

fn add_x_axis(chart: Chart, labels: Vec<String>) -> Chart {
    chart.x_axis(
        Axis::new()
            .type_(AxisType::Category)
            .name(X_AXIS_NAME)
            .data(labels),
    )
}

fn add_series(mut chart: Chart, series: Vec<Series>) -> Chart {
    for s in series {
        chart = match s.data {
            Data::CandleStick(data) => chart.series(Candlestick::new().name(s.label).data(data)),
            Data::Line(data) => chart.series(Line::new().name(s.label).data(data)),
            Data::Bar(data) => chart.series(Bar::new().name(s.label).data(data)),
        };
    }
    chart
}

/// A container `div` plus the scripts that draw `chart` into it.
fn render_fragment(chart: &Chart) -> String {
    let options = chart.to_string().replace("</", "<\\/");
    format!(
        r#"<div id="{CHART_ID}" style="width: 100%; height: {CHART_HEIGHT}px;"></div>
<script src="{ECHARTS_URL}"></script>
<script type="text/javascript">
  var chart = echarts.init(document.getElementById('{CHART_ID}'), '{THEME}');
  chart.setOption({options});
  window.addEventListener('resize', function () {{ chart.resize(); }});
</script>"#
    )
}

static ICON: &str = "path://M10.7,11.9v-1.3H9.3v1.3c-4.9,0.3-8.8,4.4-8.8,9.4c0,5,3.9,9.1,8.8,9.4v1.3h1.3v-1.3c4.9-0.3,8.8-4.4,8.8-9.4C19.5,16.3,15.6,12.2,10.7,11.9z M13.3,24.4H6.7V23h6.6V24.4z M13.3,19.6H6.7v-1.4h6.6V19.6z";

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["2023-01-03".to_string(), "2023-01-04".to_string()]
    }

    async fn build(title: &str, series: Series) -> String {
        CharmingBuilder
            .build(title, labels(), vec![series])
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_layout() {
        let html = build("IBM - Line Chart", Series::new("Line Chart", Data::Line(vec![141.55, 142.6]))).await;
        assert!(html.starts_with(r#"<div id="price-chart""#));
        assert!(!html.contains("<html"));
        assert!(html.contains("IBM - Line Chart"));
        assert!(html.contains("\"Date\""));
        assert!(html.contains("\"Price\""));
        assert!(html.contains("'dark'"));
        assert!(html.contains("\"line\""));
        assert!(html.contains("2023-01-04"));
    }

    #[tokio::test]
    async fn test_rendering_is_deterministic() {
        let series = Series::new(
            "Candlestick Chart",
            Data::CandleStick(vec![vec![141.1, 141.55, 140.48, 141.9], vec![142.07, 142.6, 141.37, 143.62]]),
        );
        let first = build("IBM - Candlestick Chart", series.clone()).await;
        let second = build("IBM - Candlestick Chart", series).await;
        assert_eq!(first, second);
        assert!(first.contains("\"candlestick\""));
    }

    #[tokio::test]
    async fn test_bar_chart() {
        let html = build("IBM - Bar Chart", Series::new("Bar Chart", Data::Bar(vec![141.55, 142.6]))).await;
        assert!(html.contains("\"bar\""));
        assert!(html.contains("IBM - Bar Chart"));
    }

    #[test]
    fn test_script_end_tag_is_escaped() {
        let chart = CharmingBuilder.build_chart("</script><b>", labels(), vec![]);
        let html = render_fragment(&chart);
        assert!(!html.contains("</script><b>"));
        assert!(html.contains("<\\/script><b>"));
    }
}
