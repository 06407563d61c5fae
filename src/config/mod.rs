pub mod toml_config;

use crate::adapters::geocoder::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use crate::core::histogram::HourZone;
use crate::core::proximity::DEFAULT_RADIUS_KM;
use crate::domain::model::GeoPoint;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use uuid::Uuid;

/// Effective settings after merging the config file and command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub directory_url: String,
    pub request_timeout: Option<Duration>,
    pub radius_km: f64,
    pub zone: HourZone,
    pub geocoder_point: GeoPoint,
    pub snapshot_path: Option<String>,
    pub json_logging: bool,
    pub verbose: bool,
}

impl Settings {
    pub fn new(directory_url: impl Into<String>) -> Self {
        Self {
            directory_url: directory_url.into(),
            request_timeout: None,
            radius_km: DEFAULT_RADIUS_KM,
            zone: HourZone::Local,
            geocoder_point: GeoPoint::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
            snapshot_path: None,
            json_logging: false,
            verbose: false,
        }
    }

    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;
        let mut settings = Self::new(config.directory_url());
        settings.request_timeout = config.directory.timeout_seconds.map(Duration::from_secs);
        settings.radius_km = config.radius_km();
        settings.zone = config.hour_zone()?;
        if let Some(point) = config.geocoder_point() {
            settings.geocoder_point = point;
        }
        settings.snapshot_path = config.snapshot_path().map(str::to_string);
        settings.json_logging = config.json_logging();
        settings.verbose = config
            .logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false);
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("directory_url", &self.directory_url)?;
        validation::validate_positive("radius_km", self.radius_km)?;
        if let Some(path) = &self.snapshot_path {
            validation::validate_path("snapshot_path", path)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "food-insights")]
#[command(about = "Vendor discovery and order analytics for the food platform")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Base URL of the user directory service")]
    pub directory_url: Option<String>,

    #[arg(long, help = "JSON snapshot of dishes and orders")]
    pub store: Option<String>,

    #[arg(long, help = "Search radius in kilometres")]
    pub radius_km: Option<f64>,

    #[arg(long, help = "Zone for hourly buckets: local, UTC or +HH:MM")]
    pub timezone: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Vendors near a customer, optionally filtered by cuisine.
    Nearby {
        customer: Uuid,
        #[arg(long)]
        query: Option<String>,
    },
    /// A vendor's dishes, most ordered first.
    Popular { vendor: Uuid },
    /// A vendor's orders per hour of day.
    Hourly { vendor: Uuid },
    /// Total number of orders for a vendor.
    Volume { vendor: Uuid },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file, if any, and applies command-line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_toml(&TomlConfig::from_file(path)?)?,
            None => Settings::new(
                self.directory_url
                    .clone()
                    .unwrap_or_else(|| "http://localhost:8081".to_string()),
            ),
        };

        if let Some(url) = &self.directory_url {
            settings.directory_url = url.clone();
        }
        if let Some(store) = &self.store {
            settings.snapshot_path = Some(store.clone());
        }
        if let Some(radius) = self.radius_km {
            settings.radius_km = radius;
        }
        if let Some(zone) = &self.timezone {
            settings.zone = zone.parse()?;
        }
        settings.verbose |= self.verbose;

        settings.validate()?;
        Ok(settings)
    }
}
