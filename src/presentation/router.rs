// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_bar_figure, get_figures, get_layout, get_line_figure, health_check, index,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    // JSON handlers compress their own bodies, so no CompressionLayer here
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/layout", get(get_layout))
        .route("/api/figures", get(get_figures))
        .route("/api/figures/line", get(get_line_figure))
        .route("/api/figures/bar", get(get_bar_figure))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
