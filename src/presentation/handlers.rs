// HTTP request handlers
use crate::domain::error::DashboardError;
use crate::domain::sales::Selection;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    pub region: Option<String>,
    pub product: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.clone())
}

/// Static layout description
pub async fn get_layout(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    respond(&state.layout, &headers).await
}

/// Line and bar figures for one selection
pub async fn get_figures(
    Query(query): Query<SelectionQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match resolve(&state, &query).await {
        Ok(selection) => respond(&state.chart_service.render(selection).await, &headers).await,
        Err(e) => e.into_response(),
    }
}

pub async fn get_line_figure(
    Query(query): Query<SelectionQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match resolve(&state, &query).await {
        Ok(selection) => respond(&state.chart_service.render_line(selection).await, &headers).await,
        Err(e) => e.into_response(),
    }
}

pub async fn get_bar_figure(
    Query(query): Query<SelectionQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match resolve(&state, &query).await {
        Ok(selection) => respond(&state.chart_service.render_bar(selection).await, &headers).await,
        Err(e) => e.into_response(),
    }
}

async fn resolve(state: &AppState, query: &SelectionQuery) -> Result<Selection, DashboardError> {
    state
        .chart_service
        .resolve_selection(query.region.as_deref(), query.product.as_deref())
        .await
        .inspect_err(|e| tracing::warn!("Rejected selection: {}", e))
}

async fn respond<T: Serialize>(data: &T, headers: &HeaderMap) -> Response {
    match json_response(data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dataset::Dataset;
    use crate::infrastructure::config::DatasetSettings;
    use crate::infrastructure::in_memory_repository::InMemorySalesRepository;
    use crate::presentation::router::build_router;
    use serde_json::Value;

    async fn spawn_app() -> String {
        let dataset = Arc::new(Dataset::generate(&DatasetSettings::default()).unwrap());
        let repository = Arc::new(InMemorySalesRepository::new(dataset));
        let state = Arc::new(AppState::build(repository, "Advanced Sales Dashboard".to_string()).await);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });

        format!("http://{}", addr)
    }

    async fn get_json(url: &str) -> (u16, Value) {
        let response = reqwest::get(url).await.unwrap();
        let status = response.status().as_u16();
        (status, response.json::<Value>().await.unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let base = spawn_app().await;
        let body = reqwest::get(format!("{}/healthz", base)).await.unwrap().text().await.unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_index_serves_layout() {
        let base = spawn_app().await;
        let response = reqwest::get(format!("{}/", base)).await.unwrap();
        assert!(response.headers()["content-type"].to_str().unwrap().starts_with("text/html"));

        let html = response.text().await.unwrap();
        assert!(html.contains("<h1>Advanced Sales Dashboard</h1>"));
        assert!(html.contains("id=\"region-dropdown\""));
        assert!(html.contains("id=\"product-dropdown\""));
        assert!(html.contains("id=\"sales-line-chart\""));
        assert!(html.contains("id=\"sales-bar-chart\""));
    }

    #[tokio::test]
    async fn test_layout_endpoint() {
        let base = spawn_app().await;
        let (status, layout) = get_json(&format!("{}/api/layout", base)).await;
        assert_eq!(status, 200);
        assert_eq!(layout["heading"], "Advanced Sales Dashboard");
        assert_eq!(layout["dropdowns"][0]["value"], "North");
        assert_eq!(layout["dropdowns"][1]["options"][2]["value"], "Product C");
        assert_eq!(layout["charts"][1]["kind"], "bar");
    }

    #[tokio::test]
    async fn test_figures_default_selection() {
        let base = spawn_app().await;
        let (status, figures) = get_json(&format!("{}/api/figures", base)).await;
        assert_eq!(status, 200);

        assert_eq!(figures["selection"]["region"], "North");
        assert_eq!(figures["selection"]["product"], "Product A");
        assert_eq!(figures["line"]["title"], "Sales Over Time for Product A in North");
        assert_eq!(figures["line"]["points"].as_array().unwrap().len(), 250);
        assert_eq!(figures["line"]["points"][0]["date"], "2021-01-01");
        assert_eq!(figures["line"]["points"][0]["sales"], 150);
        assert_eq!(figures["line"]["points"], figures["bar"]["points"]);
    }

    #[tokio::test]
    async fn test_figures_for_selection() {
        let base = spawn_app().await;
        let (status, figures) =
            get_json(&format!("{}/api/figures?region=East&product=Product%20C", base)).await;
        assert_eq!(status, 200);
        assert_eq!(figures["line"]["title"], "Sales Over Time for Product C in East");
        assert_eq!(figures["bar"]["title"], "Daily Sales for Product C in East");
        assert_eq!(figures["bar"]["points"][0]["date"], "2021-01-03");
        assert_eq!(figures["bar"]["points"][0]["sales"], 152);
    }

    #[tokio::test]
    async fn test_single_figure_endpoints() {
        let base = spawn_app().await;
        let (_, line) = get_json(&format!("{}/api/figures/line?region=South&product=Product%20B", base)).await;
        let (_, bar) = get_json(&format!("{}/api/figures/bar?region=South&product=Product%20B", base)).await;
        assert_eq!(line["kind"], "line");
        assert_eq!(bar["kind"], "bar");
        assert_eq!(line["points"], bar["points"]);
    }

    #[tokio::test]
    async fn test_pair_without_rows_renders_empty_figures() {
        let base = spawn_app().await;
        let (status, figures) =
            get_json(&format!("{}/api/figures?region=North&product=Product%20B", base)).await;
        assert_eq!(status, 200);
        assert!(figures["line"]["points"].as_array().unwrap().is_empty());
        assert!(figures["bar"]["points"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_region_is_rejected() {
        let base = spawn_app().await;
        let (status, body) = get_json(&format!("{}/api/figures?region=Central", base)).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "unknown region: Central");
    }

    #[tokio::test]
    async fn test_figures_are_brotli_compressed_on_request() {
        let base = spawn_app().await;
        let response = reqwest::Client::new()
            .get(format!("{}/api/figures", base))
            .header("accept-encoding", "br")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.headers()["content-encoding"], "br");
    }
}
