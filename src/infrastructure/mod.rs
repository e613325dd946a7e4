// Infrastructure layer - Configuration, storage and HTTP adapters
pub mod config;
pub mod http_response;
pub mod in_memory_repository;
pub mod page;
