use crate::domain::model::{Dish, GeoPoint, Order, PostalAddress};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// The user directory service. Vendor and location payloads are returned
/// as raw text so that decoding failures stay local to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryLookup: Send + Sync {
    async fn get_address(&self, user_id: Uuid) -> Result<PostalAddress>;

    /// `Ok(None)` when the directory has nothing to say (e.g. it timed out).
    async fn get_live_location(&self, user_id: Uuid) -> Result<Option<String>>;

    async fn list_vendors(&self) -> Result<String>;

    async fn get_vendors_by_id(&self, vendor_ids: &[Uuid]) -> Result<Vec<String>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoding: Send + Sync {
    async fn to_coordinates(&self, address: &PostalAddress) -> Result<GeoPoint>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DishStore: Send + Sync {
    async fn find_dish_by_id(&self, dish_id: Uuid) -> Result<Option<Dish>>;

    async fn find_dishes_by_vendor(&self, vendor_id: Uuid) -> Result<Option<Vec<Dish>>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn exists_vendor(&self, vendor_id: Uuid) -> Result<bool>;

    async fn exists_customer(&self, customer_id: Uuid) -> Result<bool>;

    async fn find_order_by_id(&self, order_id: Uuid) -> Result<Option<Order>>;

    async fn find_orders_by_vendor_and_customer(
        &self,
        vendor_id: Uuid,
        customer_id: Uuid,
    ) -> Result<Option<Vec<Order>>>;

    /// Raw 16-byte dish identifiers, most-ordered first.
    async fn count_dish_occurrences_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<Vec<u8>>>;

    async fn find_orders_by_vendor(&self, vendor_id: Uuid) -> Result<Option<Vec<Order>>>;

    async fn count_orders_by_vendor(&self, vendor_id: Uuid) -> Result<Option<u64>>;
}
