// Repository trait for sales data access
use crate::application::dataset::FilteredView;
use crate::domain::sales::{Product, Region, Selection};
use async_trait::async_trait;

#[async_trait]
pub trait SalesRepository: Send + Sync {
    /// Regions present in the data, in first-occurrence order
    async fn regions(&self) -> Vec<Region>;

    /// Products present in the data, in first-occurrence order
    async fn products(&self) -> Vec<Product>;

    /// Rows matching both fields of the selection, in date order
    async fn filtered_view(&self, selection: &Selection) -> FilteredView;
}
