// Application layer - Use cases over the shared dataset
pub mod chart_service;
pub mod dataset;
pub mod layout_service;
pub mod sales_repository;
