// In-memory repository over the generated dataset
use crate::application::dataset::{Dataset, FilteredView};
use crate::application::sales_repository::SalesRepository;
use crate::domain::sales::{Product, Region, Selection};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct InMemorySalesRepository {
    dataset: Arc<Dataset>,
    regions: Vec<Region>,
    products: Vec<Product>,
}

impl InMemorySalesRepository {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        // Option sets never change, compute them once
        let regions = dataset.regions();
        let products = dataset.products();
        Self {
            dataset,
            regions,
            products,
        }
    }
}

#[async_trait]
impl SalesRepository for InMemorySalesRepository {
    async fn regions(&self) -> Vec<Region> {
        self.regions.clone()
    }

    async fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    async fn filtered_view(&self, selection: &Selection) -> FilteredView {
        self.dataset.filter(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::DatasetSettings;

    #[tokio::test]
    async fn test_repository_shares_dataset() {
        let dataset = Arc::new(Dataset::generate(&DatasetSettings::default()).unwrap());
        let repository = InMemorySalesRepository::new(dataset.clone());

        assert_eq!(repository.regions().await, Region::ALL.to_vec());
        assert_eq!(repository.products().await, Product::ALL.to_vec());

        let selection = Selection::new(Region::East, Product::C);
        assert_eq!(repository.filtered_view(&selection).await, dataset.filter(&selection));
    }
}
