use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Location of customer {customer_id} is unavailable")]
    CustomerLocationUnavailable { customer_id: Uuid },

    #[error("Vendor data unavailable: {reason}")]
    VendorDataUnavailable { reason: String },

    #[error("Vendor {vendor_id} not found")]
    VendorNotFound { vendor_id: Uuid },

    #[error("Customer {customer_id} not found")]
    CustomerNotFound { customer_id: Uuid },

    #[error("No orders found for vendor {vendor_id}")]
    NoOrders { vendor_id: Uuid },

    #[error("Dish {dish_id} not found")]
    DishNotFound { dish_id: Uuid },

    #[error("No vendors match the query")]
    NoMatchingVendors,

    #[error("Order {order_id} not found")]
    OrderNotFound { order_id: Uuid },

    #[error("Invalid identifier: expected 16 bytes, got {length}")]
    InvalidIdentifier { length: usize },

    #[error("Order timestamp {millis} is out of range")]
    InvalidTimestamp { millis: i64 },

    #[error("Directory service error: {message}")]
    DirectoryError { message: String },

    #[error("Geocoding failed: {message}")]
    GeocodingError { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field '{field}'")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Upstream,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl InsightError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            InsightError::VendorNotFound { .. }
            | InsightError::CustomerNotFound { .. }
            | InsightError::NoOrders { .. }
            | InsightError::DishNotFound { .. }
            | InsightError::OrderNotFound { .. }
            | InsightError::NoMatchingVendors => ErrorCategory::NotFound,
            InsightError::CustomerLocationUnavailable { .. }
            | InsightError::VendorDataUnavailable { .. }
            | InsightError::DirectoryError { .. }
            | InsightError::GeocodingError { .. }
            | InsightError::ApiError(_) => ErrorCategory::Upstream,
            InsightError::InvalidIdentifier { .. }
            | InsightError::InvalidTimestamp { .. }
            | InsightError::SerializationError(_) => ErrorCategory::Data,
            InsightError::ConfigError { .. }
            | InsightError::ConfigValidationError { .. }
            | InsightError::InvalidConfigValueError { .. }
            | InsightError::MissingConfigError { .. } => ErrorCategory::Configuration,
            InsightError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            InsightError::NoMatchingVendors => ErrorSeverity::Low,
            InsightError::CustomerLocationUnavailable { .. }
            | InsightError::VendorDataUnavailable { .. }
            | InsightError::DirectoryError { .. }
            | InsightError::GeocodingError { .. }
            | InsightError::ApiError(_) => ErrorSeverity::Medium,
            InsightError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Reported to the caller as an empty outcome rather than a failure.
    pub fn is_reported(&self) -> bool {
        matches!(self, InsightError::NoMatchingVendors)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InsightError::CustomerLocationUnavailable { .. } => {
                "We could not determine where you are right now.".to_string()
            }
            InsightError::VendorDataUnavailable { .. } => {
                "Vendor information is temporarily unavailable.".to_string()
            }
            InsightError::NoMatchingVendors => "No vendors nearby match your search.".to_string(),
            InsightError::VendorNotFound { vendor_id } => format!("Unknown vendor {}", vendor_id),
            InsightError::CustomerNotFound { customer_id } => {
                format!("Unknown customer {}", customer_id)
            }
            InsightError::NoOrders { .. } => "This vendor has no orders yet.".to_string(),
            InsightError::ConfigError { .. }
            | InsightError::ConfigValidationError { .. }
            | InsightError::InvalidConfigValueError { .. }
            | InsightError::MissingConfigError { .. } => format!("Configuration problem: {}", self),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::NotFound => "Check the identifiers passed in the request",
            ErrorCategory::Upstream => "Verify the directory service is reachable and retry later",
            ErrorCategory::Data => "Inspect the stored records for corrupted values",
            ErrorCategory::Configuration => "Review the configuration file and command-line flags",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, InsightError>;
