use crate::domain::model::HourHistogram;
use crate::domain::ports::OrderStore;
use crate::utils::error::{InsightError, Result};
use chrono::{DateTime, FixedOffset, Local, Offset, Timelike, Utc};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Calendar used to turn an order timestamp into an hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourZone {
    /// The zone of the machine running the process.
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl HourZone {
    pub fn utc() -> Self {
        HourZone::Fixed(Utc.fix())
    }

    pub fn hour_of(&self, epoch_millis: i64) -> Result<u32> {
        let instant: DateTime<Utc> = DateTime::from_timestamp_millis(epoch_millis)
            .ok_or(InsightError::InvalidTimestamp {
                millis: epoch_millis,
            })?;
        let hour = match self {
            HourZone::Local => instant.with_timezone(&Local).hour(),
            HourZone::Fixed(offset) => instant.with_timezone(offset).hour(),
        };
        Ok(hour)
    }
}

impl FromStr for HourZone {
    type Err = InsightError;

    /// Accepts `local`, `UTC`/`Z`, or an offset such as `+02:00`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" | "" => return Ok(HourZone::Local),
            "utc" | "z" => return Ok(HourZone::utc()),
            _ => {}
        }
        trimmed
            .parse::<FixedOffset>()
            .map(HourZone::Fixed)
            .map_err(|e| InsightError::InvalidConfigValueError {
                field: "analytics.timezone".to_string(),
                value: s.to_string(),
                reason: format!("Expected 'local', 'UTC' or an offset like '+02:00': {}", e),
            })
    }
}

impl fmt::Display for HourZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourZone::Local => write!(f, "local"),
            HourZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Buckets a vendor's orders by the hour they were placed.
pub struct TimeHistogram {
    orders: Arc<dyn OrderStore>,
    zone: HourZone,
}

impl TimeHistogram {
    pub fn new(orders: Arc<dyn OrderStore>, zone: HourZone) -> Self {
        Self { orders, zone }
    }

    pub async fn build(&self, vendor_id: Uuid) -> Result<HourHistogram> {
        if !self.orders.exists_vendor(vendor_id).await? {
            return Err(InsightError::VendorNotFound { vendor_id });
        }

        let orders = match self.orders.find_orders_by_vendor(vendor_id).await? {
            Some(orders) if !orders.is_empty() => orders,
            _ => return Err(InsightError::NoOrders { vendor_id }),
        };

        let mut histogram = HourHistogram::new();
        for order in &orders {
            histogram.increment(self.zone.hour_of(order.date)?);
        }

        tracing::debug!(
            "Built hourly histogram for vendor {} from {} orders ({} zone)",
            vendor_id,
            orders.len(),
            self.zone
        );
        Ok(histogram)
    }
}
