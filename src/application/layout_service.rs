// Layout service - Builds the static page description from the dataset
use crate::application::sales_repository::SalesRepository;
use crate::domain::figure::ChartKind;
use crate::domain::layout::{ChartSlot, Dropdown, DropdownOption, Layout};
use std::sync::Arc;

pub const REGION_DROPDOWN_ID: &str = "region-dropdown";
pub const PRODUCT_DROPDOWN_ID: &str = "product-dropdown";
pub const LINE_CHART_ID: &str = "sales-line-chart";
pub const BAR_CHART_ID: &str = "sales-bar-chart";

#[derive(Clone)]
pub struct LayoutService {
    repository: Arc<dyn SalesRepository>,
    title: String,
}

impl LayoutService {
    pub fn new(repository: Arc<dyn SalesRepository>, title: String) -> Self {
        Self { repository, title }
    }

    pub async fn build(&self) -> Layout {
        let regions: Vec<DropdownOption> = self
            .repository
            .regions()
            .await
            .iter()
            .map(|r| DropdownOption::new(r.as_str()))
            .collect();

        let products: Vec<DropdownOption> = self
            .repository
            .products()
            .await
            .iter()
            .map(|p| DropdownOption::new(p.as_str()))
            .collect();

        let dropdowns = vec![
            Self::dropdown(REGION_DROPDOWN_ID, "region", regions),
            Self::dropdown(PRODUCT_DROPDOWN_ID, "product", products),
        ];

        let charts = vec![
            ChartSlot::new(LINE_CHART_ID, ChartKind::Line),
            ChartSlot::new(BAR_CHART_ID, ChartKind::Bar),
        ];

        Layout::new(self.title.clone(), dropdowns, charts)
    }

    fn dropdown(id: &str, param: &str, options: Vec<DropdownOption>) -> Dropdown {
        // Mandatory select: the first option is preselected
        let value = options.first().map(|o| o.value.clone()).unwrap_or_default();
        Dropdown::single_select(id, param, options, value)
    }
}
