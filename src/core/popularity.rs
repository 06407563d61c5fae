use crate::core::identifier::IdentifierCodec;
use crate::domain::model::Dish;
use crate::domain::ports::{DishStore, OrderStore};
use crate::utils::error::{InsightError, Result};
use std::sync::Arc;
use uuid::Uuid;

/// Resolves a vendor's most-ordered dishes, keeping the order the store
/// reports them in.
pub struct DishPopularityRanker {
    dishes: Arc<dyn DishStore>,
    orders: Arc<dyn OrderStore>,
}

impl DishPopularityRanker {
    pub fn new(dishes: Arc<dyn DishStore>, orders: Arc<dyn OrderStore>) -> Self {
        Self { dishes, orders }
    }

    pub async fn rank(&self, vendor_id: Uuid) -> Result<Vec<Dish>> {
        if !self.orders.exists_vendor(vendor_id).await? {
            return Err(InsightError::VendorNotFound { vendor_id });
        }

        let occurrences = self.orders.count_dish_occurrences_by_vendor(vendor_id).await?;
        tracing::debug!("Vendor {} has {} distinct ordered dishes", vendor_id, occurrences.len());

        let mut ranked = Vec::with_capacity(occurrences.len());
        for raw in &occurrences {
            let dish_id = IdentifierCodec::decode(raw)?;
            let dish = self
                .dishes
                .find_dish_by_id(dish_id)
                .await?
                .ok_or(InsightError::DishNotFound { dish_id })?;
            ranked.push(dish);
        }

        Ok(ranked)
    }
}
