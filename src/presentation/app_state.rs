// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::layout_service::LayoutService;
use crate::application::sales_repository::SalesRepository;
use crate::domain::layout::Layout;
use crate::infrastructure::page::render_page;
use std::sync::Arc;

/// Everything the handlers need, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub layout: Layout,
    pub page: String,
    pub chart_service: ChartService,
}

impl AppState {
    pub async fn build(repository: Arc<dyn SalesRepository>, title: String) -> Self {
        let layout = LayoutService::new(repository.clone(), title).build().await;
        let page = render_page(&layout);

        Self {
            layout,
            page,
            chart_service: ChartService::new(repository),
        }
    }
}
