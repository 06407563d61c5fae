use crate::core::histogram::HourZone;
use crate::core::proximity::DEFAULT_RADIUS_KM;
use crate::domain::model::GeoPoint;
use crate::utils::error::{InsightError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub directory: DirectoryConfig,
    pub discovery: Option<DiscoveryConfig>,
    pub analytics: Option<AnalyticsConfig>,
    pub geocoder: Option<GeocoderConfig>,
    pub store: Option<StoreConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    pub radius_km: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// `local`, `UTC`, or a fixed offset such as `+01:00`.
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub snapshot_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InsightError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InsightError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InsightError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("directory.base_url", &self.directory.base_url)?;

        if let Some(timeout) = self.directory.timeout_seconds {
            validation::validate_range("directory.timeout_seconds", timeout, 1, 300)?;
        }

        validation::validate_positive("discovery.radius_km", self.radius_km())?;

        self.hour_zone()?;

        if let Some(geocoder) = &self.geocoder {
            validation::validate_range("geocoder.latitude", geocoder.latitude, -90.0, 90.0)?;
            validation::validate_range("geocoder.longitude", geocoder.longitude, -180.0, 180.0)?;
        }

        if let Some(store) = &self.store {
            validation::validate_path("store.snapshot_path", &store.snapshot_path)?;
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            if !matches!(format, "compact" | "json") {
                return Err(InsightError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: "Valid formats: compact, json".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn directory_url(&self) -> &str {
        &self.directory.base_url
    }

    pub fn radius_km(&self) -> f64 {
        self.discovery
            .as_ref()
            .and_then(|d| d.radius_km)
            .unwrap_or(DEFAULT_RADIUS_KM)
    }

    pub fn hour_zone(&self) -> Result<HourZone> {
        match self.analytics.as_ref().and_then(|a| a.timezone.as_deref()) {
            Some(zone) => zone.parse(),
            None => Ok(HourZone::Local),
        }
    }

    pub fn geocoder_point(&self) -> Option<GeoPoint> {
        self.geocoder
            .as_ref()
            .map(|g| GeoPoint::new(g.latitude, g.longitude))
    }

    pub fn snapshot_path(&self) -> Option<&str> {
        self.store.as_ref().map(|s| s.snapshot_path.as_str())
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
