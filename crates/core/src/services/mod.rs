pub mod analytics_service;
pub mod catalog_service;
pub mod score_service;
pub mod series_service;
pub mod upload_service;
