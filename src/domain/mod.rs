// Domain layer - Sales data, layout and figure models
pub mod error;
pub mod figure;
pub mod layout;
pub mod sales;
