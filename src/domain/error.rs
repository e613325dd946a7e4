// Error types shared by the domain, application and presentation layers
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("unknown product: {0}")]
    UnknownProduct(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
