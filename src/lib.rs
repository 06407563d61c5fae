pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::{toml_config::TomlConfig, Settings};

pub use adapters::{FixedGeocoder, HttpDirectory, InMemoryStore};
pub use core::{
    analytics::OrderAnalytics, catalogue::DishCatalogue, discovery::VendorDiscovery,
    histogram::HourZone, proximity::ProximityFilter,
};
pub use utils::error::{InsightError, Result};
