pub mod app_config;
pub mod catalog_repo;

pub use app_config::{Config, PricingSettings, TrackingSettings};
pub use catalog_repo::InMemoryCatalog;
