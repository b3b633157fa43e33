pub mod analytics;
pub mod model;
pub mod series;
pub mod settings;
pub mod upload;
