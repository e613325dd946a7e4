// Synthetic sales dataset, generated once at startup and shared read-only
use crate::domain::error::DashboardError;
use crate::domain::sales::{Product, Region, SalesRow, Selection};
use crate::infrastructure::config::DatasetSettings;
use chrono::{Days, NaiveDate};

#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<SalesRow>,
}

impl Dataset {
    /// Build the daily sales table.
    ///
    /// Row `i` is dated `start_date + i` days with sales `base_sales + i`.
    /// Region and product advance together, so row `i` always carries
    /// `Region::ALL[i % 4]` and `Product::ALL[i % 4]` and only four of the
    /// sixteen pairs ever occur.
    pub fn generate(settings: &DatasetSettings) -> Result<Self, DashboardError> {
        if settings.rows == 0 {
            return Err(DashboardError::InvalidConfig(
                "dataset.rows must be at least 1".to_string(),
            ));
        }

        let start = settings.start_date;
        let mut rows = Vec::with_capacity(settings.rows);

        for i in 0..settings.rows {
            let date = start.checked_add_days(Days::new(i as u64)).ok_or_else(|| {
                DashboardError::InvalidConfig(format!(
                    "dataset date range overflows after {} rows from {}",
                    i, start
                ))
            })?;
            let sales = settings.base_sales.checked_add(i as i64).ok_or_else(|| {
                DashboardError::InvalidConfig(format!(
                    "dataset sales overflow after {} rows from {}",
                    i, settings.base_sales
                ))
            })?;
            let cycle = i % Region::ALL.len();

            rows.push(SalesRow::new(
                date,
                sales,
                Region::ALL[cycle],
                Product::ALL[cycle],
            ));
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[SalesRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }

    /// Distinct regions in first-occurrence order
    pub fn regions(&self) -> Vec<Region> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.region) {
                seen.push(row.region);
            }
        }
        seen
    }

    /// Distinct products in first-occurrence order
    pub fn products(&self) -> Vec<Product> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.product) {
                seen.push(row.product);
            }
        }
        seen
    }

    pub fn filter(&self, selection: &Selection) -> FilteredView {
        let rows = self
            .rows()
            .iter()
            .filter(|r| r.matches(selection))
            .cloned()
            .collect();

        FilteredView::new(*selection, rows)
    }
}

/// Rows matching a selection on both fields, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    pub selection: Selection,
    pub rows: Vec<SalesRow>,
}

impl FilteredView {
    pub fn new(selection: Selection, rows: Vec<SalesRow>) -> Self {
        Self { selection, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
