use crate::domain::model::VendorCuisineMap;
use uuid::Uuid;

pub struct CuisineQueryFilter;

impl CuisineQueryFilter {
    /// Vendors whose cuisine label contains `query`, ignoring case.
    /// An empty query matches every vendor.
    pub fn filter(candidates: &VendorCuisineMap, query: &str) -> Vec<Uuid> {
        let needle = query.to_lowercase();
        candidates
            .iter()
            .filter(|(_, cuisine)| cuisine.to_lowercase().contains(&needle))
            .map(|(&vendor_id, _)| vendor_id)
            .collect()
    }
}
