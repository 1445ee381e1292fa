use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use tracing::{error, info, warn};

use visualizer_core_api::{ChartPage, VisualizerApi};
use visualizer_rest_api::endpoints::INDEX;
use visualizer_rest_api::form::ChartForm;

use crate::page::{render_page, ERROR_PAGE};

pub const INVALID_FORM: &str = "Invalid form submission.";

pub async fn run(port: u16, visualizer: impl VisualizerApi) -> Result<()> {
    let visualizer: Arc<dyn VisualizerApi> = Arc::new(visualizer);
    let router = Router::new()
        .route(INDEX, get(get_index).post(post_index))
        .with_state(visualizer);

    let address = SocketAddr::new(IpAddr::from([0, 0, 0, 0]), port);
    info!("Listening on http://{address}");
    axum::Server::try_bind(&address)?
        .serve(router.into_make_service())
        .await?;
    Ok(())
}

async fn get_index(State(visualizer): State<Arc<dyn VisualizerApi>>) -> (StatusCode, Html<String>) {
    respond(visualizer.get_page().await)
}

async fn post_index(
    State(visualizer): State<Arc<dyn VisualizerApi>>,
    form: Result<Form<ChartForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    match form {
        Ok(Form(form)) => respond(visualizer.submit(form.into()).await),
        Err(rejection) => {
            warn!("Rejected form submission: '{rejection}'");
            respond(visualizer.get_page().await.map(|page| page.with_error(INVALID_FORM)))
        }
    }
}

fn respond(page: Result<ChartPage>) -> (StatusCode, Html<String>) {
    match page.and_then(|page| render_page(&page)) {
        Ok(html) => (StatusCode::OK, Html(html)),
        Err(err) => {
            error!("Error during page building: '{err:#}'");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{Method, Request};

    use visualizer_core_api::ChartSubmission;

    use super::*;

    struct FixedVisualizer;

    #[async_trait]
    impl VisualizerApi for FixedVisualizer {
        async fn get_page(&self) -> Result<ChartPage> {
            Ok(ChartPage::new(vec!["IBM".to_string()]))
        }

        async fn submit(&self, submission: ChartSubmission) -> Result<ChartPage> {
            match submission.symbol.as_deref() {
                Some("IBM") => Ok(ChartPage::submitted(vec!["IBM".to_string()], submission)
                    .with_chart("<div id=\"price-chart\"></div>".to_string())),
                _ => bail!("stocks.csv not found"),
            }
        }
    }

    fn state() -> State<Arc<dyn VisualizerApi>> {
        let visualizer: Arc<dyn VisualizerApi> = Arc::new(FixedVisualizer);
        State(visualizer)
    }

    async fn extract_form(content_type: &str, body: &'static str) -> Result<Form<ChartForm>, FormRejection> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(INDEX)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        Form::<ChartForm>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_get_index() {
        let (status, Html(body)) = get_index(state()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<option value="IBM">IBM</option>"#));
        assert!(!body.contains("price-chart"));
    }

    #[tokio::test]
    async fn test_post_index() {
        let form = ChartForm {
            symbol: Some("IBM".to_string()),
            ..Default::default()
        };
        let (status, Html(body)) = post_index(state(), Ok(Form(form))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<div id="price-chart"></div>"#));
    }

    #[tokio::test]
    async fn test_failure_is_not_leaked() {
        let (status, Html(body)) = post_index(state(), Ok(Form(ChartForm::default()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("stocks.csv"));
    }

    #[tokio::test]
    async fn test_duplicate_field_is_reported_as_invalid_form() {
        let form = extract_form("application/x-www-form-urlencoded", "symbol=IBM&symbol=AAPL").await;
        assert!(form.is_err());
        let (status, Html(body)) = post_index(state(), form).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(INVALID_FORM));
        assert!(body.contains(r#"<option value="IBM">IBM</option>"#));
        assert!(!body.contains("duplicate field"));
        assert!(!body.contains("deserialize"));
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_reported_as_invalid_form() {
        let form = extract_form("text/plain", "symbol=IBM").await;
        assert!(form.is_err());
        let (status, Html(body)) = post_index(state(), form).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(INVALID_FORM));
        assert!(!body.contains("Content-Type"));
    }
}
