// Sales domain model
use crate::domain::error::DashboardError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    /// Cycle order used by the dataset generator.
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownRegion(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Product {
    #[serde(rename = "Product A")]
    A,
    #[serde(rename = "Product B")]
    B,
    #[serde(rename = "Product C")]
    C,
    #[serde(rename = "Product D")]
    D,
}

impl Product {
    /// Cycle order used by the dataset generator.
    pub const ALL: [Product; 4] = [Product::A, Product::B, Product::C, Product::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            Product::A => "Product A",
            Product::B => "Product B",
            Product::C => "Product C",
            Product::D => "Product D",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Product {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Product::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownProduct(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRow {
    pub date: NaiveDate,
    pub sales: i64,
    pub region: Region,
    pub product: Product,
}

impl SalesRow {
    pub fn new(date: NaiveDate, sales: i64, region: Region, product: Product) -> Self {
        Self {
            date,
            sales,
            region,
            product,
        }
    }

    pub fn matches(&self, selection: &Selection) -> bool {
        self.region == selection.region && self.product == selection.product
    }
}

/// The pair of dropdown values a user currently has chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub region: Region,
    pub product: Product,
}

impl Selection {
    pub fn new(region: Region, product: Product) -> Self {
        Self { region, product }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(Region::North, Product::A)
    }
}
