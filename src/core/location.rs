//! Customer location lookup.
//!
//! The permanent postal address is tried first. When any step of that path
//! fails, the directory's live location for the customer is used instead.

use crate::core::decoder::ResilientDecoder;
use crate::domain::model::GeoPoint;
use crate::domain::ports::{DirectoryLookup, Geocoding};
use crate::utils::error::{InsightError, Result};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    PostalAddress,
    LiveLocation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLocation {
    pub point: GeoPoint,
    pub source: LocationSource,
}

/// Why one lookup tier produced no coordinates.
#[derive(Debug)]
pub enum LocationFailure {
    AddressLookup(InsightError),
    Geocoding(InsightError),
    LiveLocationLookup(InsightError),
    LiveLocationEmpty,
    LiveLocationUndecodable,
}

impl fmt::Display for LocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationFailure::AddressLookup(e) => write!(f, "address lookup failed: {}", e),
            LocationFailure::Geocoding(e) => write!(f, "geocoding failed: {}", e),
            LocationFailure::LiveLocationLookup(e) => write!(f, "live location lookup failed: {}", e),
            LocationFailure::LiveLocationEmpty => write!(f, "live location payload was empty"),
            LocationFailure::LiveLocationUndecodable => {
                write!(f, "live location payload could not be decoded")
            }
        }
    }
}

pub type TierOutcome = std::result::Result<ResolvedLocation, LocationFailure>;

pub struct LocationResolver {
    directory: Arc<dyn DirectoryLookup>,
    geocoder: Arc<dyn Geocoding>,
}

impl LocationResolver {
    pub fn new(directory: Arc<dyn DirectoryLookup>, geocoder: Arc<dyn Geocoding>) -> Self {
        Self {
            directory,
            geocoder,
        }
    }

    pub async fn resolve(&self, customer_id: Uuid) -> Result<ResolvedLocation> {
        let from_address = self.resolve_from_address(customer_id).await;
        let outcome = match from_address {
            Ok(resolved) => Ok(resolved),
            Err(failure) => {
                tracing::warn!(
                    "Falling back to live location for customer {}: {}",
                    customer_id,
                    failure
                );
                self.resolve_from_live_location(customer_id).await
            }
        };

        outcome.map_err(|failure| {
            tracing::warn!("No location for customer {}: {}", customer_id, failure);
            InsightError::CustomerLocationUnavailable { customer_id }
        })
    }

    pub async fn resolve_from_address(&self, customer_id: Uuid) -> TierOutcome {
        let address = self
            .directory
            .get_address(customer_id)
            .await
            .map_err(LocationFailure::AddressLookup)?;
        let point = self
            .geocoder
            .to_coordinates(&address)
            .await
            .map_err(LocationFailure::Geocoding)?;
        Ok(ResolvedLocation {
            point,
            source: LocationSource::PostalAddress,
        })
    }

    pub async fn resolve_from_live_location(&self, customer_id: Uuid) -> TierOutcome {
        let payload = self
            .directory
            .get_live_location(customer_id)
            .await
            .map_err(LocationFailure::LiveLocationLookup)?;
        let payload = match payload {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(LocationFailure::LiveLocationEmpty),
        };
        let point =
            ResilientDecoder::decode_location(&payload).ok_or(LocationFailure::LiveLocationUndecodable)?;
        Ok(ResolvedLocation {
            point,
            source: LocationSource::LiveLocation,
        })
    }
}
