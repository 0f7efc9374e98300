pub mod analytics_service;
pub mod auth_service;
pub mod filter_service;
pub mod performance_service;
