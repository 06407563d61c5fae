use crate::core::cuisine::CuisineQueryFilter;
use crate::core::decoder::ResilientDecoder;
use crate::core::location::LocationResolver;
use crate::core::proximity::ProximityFilter;
use crate::domain::ports::{DirectoryLookup, Geocoding};
use crate::utils::error::{InsightError, Result};
use std::sync::Arc;
use uuid::Uuid;

/// Finds vendors close to a customer, optionally narrowed by cuisine.
pub struct VendorDiscovery {
    directory: Arc<dyn DirectoryLookup>,
    resolver: LocationResolver,
    proximity: ProximityFilter,
}

impl VendorDiscovery {
    pub fn new(
        directory: Arc<dyn DirectoryLookup>,
        geocoder: Arc<dyn Geocoding>,
        proximity: ProximityFilter,
    ) -> Self {
        Self {
            resolver: LocationResolver::new(directory.clone(), geocoder),
            directory,
            proximity,
        }
    }

    pub async fn nearby_vendors(&self, customer_id: Uuid) -> Result<Vec<Uuid>> {
        let payload = self
            .directory
            .list_vendors()
            .await
            .map_err(|e| InsightError::VendorDataUnavailable {
                reason: format!("vendor list request failed: {}", e),
            })?;

        let vendors = match ResilientDecoder::decode_vendor_locations(&payload) {
            Some(vendors) if !vendors.is_empty() => vendors,
            _ => {
                return Err(InsightError::VendorDataUnavailable {
                    reason: "no vendor locations could be decoded".to_string(),
                })
            }
        };

        let origin = self.resolver.resolve(customer_id).await?;
        tracing::debug!(
            "Customer {} located at ({}, {}) via {:?}",
            customer_id,
            origin.point.latitude,
            origin.point.longitude,
            origin.source
        );

        let nearby = self.proximity.filter(origin.point, &vendors);
        tracing::info!(
            "Found {} vendors within {} km of customer {}",
            nearby.len(),
            self.proximity.radius_km(),
            customer_id
        );
        Ok(nearby)
    }

    pub async fn nearby_vendors_matching(&self, customer_id: Uuid, query: &str) -> Result<Vec<Uuid>> {
        let nearby = self.nearby_vendors(customer_id).await?;

        let payloads = self
            .directory
            .get_vendors_by_id(&nearby)
            .await
            .map_err(|e| InsightError::VendorDataUnavailable {
                reason: format!("vendor details request failed: {}", e),
            })?;

        let cuisines =
            ResilientDecoder::decode_vendor_cuisines(&payloads).ok_or(InsightError::NoMatchingVendors)?;

        let matching = CuisineQueryFilter::filter(&cuisines, query);
        tracing::info!(
            "{} of {} nearby vendors match '{}'",
            matching.len(),
            nearby.len(),
            query
        );
        Ok(matching)
    }
}
