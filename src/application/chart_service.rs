// Chart service - Recomputes both figures whenever the selection changes
use crate::application::dataset::FilteredView;
use crate::application::layout_service::{BAR_CHART_ID, LINE_CHART_ID};
use crate::application::sales_repository::SalesRepository;
use crate::domain::error::DashboardError;
use crate::domain::figure::{ChartKind, Figure, FigurePoint, FigureSet};
use crate::domain::sales::{Product, Region, Selection};
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn SalesRepository>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn SalesRepository>) -> Self {
        Self { repository }
    }

    /// Turn raw control values into a selection.
    ///
    /// Missing values fall back to the default selection. Values must be
    /// among the options the dataset offers.
    pub async fn resolve_selection(
        &self,
        region: Option<&str>,
        product: Option<&str>,
    ) -> Result<Selection, DashboardError> {
        let defaults = Selection::default();

        let region = match region {
            Some(raw) => raw.parse::<Region>()?,
            None => defaults.region,
        };
        if !self.repository.regions().await.contains(&region) {
            return Err(DashboardError::UnknownRegion(region.to_string()));
        }

        let product = match product {
            Some(raw) => raw.parse::<Product>()?,
            None => defaults.product,
        };
        if !self.repository.products().await.contains(&product) {
            return Err(DashboardError::UnknownProduct(product.to_string()));
        }

        Ok(Selection::new(region, product))
    }

    /// Render the line and bar figures from a single filtered snapshot.
    pub async fn render(&self, selection: Selection) -> FigureSet {
        let view = self.repository.filtered_view(&selection).await;

        if view.is_empty() {
            tracing::debug!(
                "No rows for {} / {}, rendering empty figures",
                selection.region,
                selection.product
            );
        } else {
            tracing::debug!(
                "Rendering figures for {} / {}: {} rows",
                selection.region,
                selection.product,
                view.len()
            );
        }

        let (line, bar) = tokio::join!(async { line_figure(&view) }, async { bar_figure(&view) });

        FigureSet::new(selection, line, bar)
    }

    pub async fn render_line(&self, selection: Selection) -> Figure {
        line_figure(&self.repository.filtered_view(&selection).await)
    }

    pub async fn render_bar(&self, selection: Selection) -> Figure {
        bar_figure(&self.repository.filtered_view(&selection).await)
    }
}

/// Time series of sales, x = date, y = sales.
pub fn line_figure(view: &FilteredView) -> Figure {
    let title = format!(
        "Sales Over Time for {} in {}",
        view.selection.product, view.selection.region
    );
    Figure::new(LINE_CHART_ID.to_string(), ChartKind::Line, title, points(view))
}

/// One bar per matching row.
pub fn bar_figure(view: &FilteredView) -> Figure {
    let title = format!(
        "Daily Sales for {} in {}",
        view.selection.product, view.selection.region
    );
    Figure::new(BAR_CHART_ID.to_string(), ChartKind::Bar, title, points(view))
}

fn points(view: &FilteredView) -> Vec<FigurePoint> {
    view.rows.iter().map(FigurePoint::from).collect()
}
