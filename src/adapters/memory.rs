use crate::core::identifier::IdentifierCodec;
use crate::domain::model::{Dish, Order};
use crate::domain::ports::{DishStore, OrderStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use uuid::Uuid;

/// On-disk snapshot of the order service's tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub vendors: Vec<Uuid>,
    #[serde(default)]
    pub customers: Vec<Uuid>,
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Read-only `DishStore` and `OrderStore` over a snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    vendors: HashSet<Uuid>,
    customers: HashSet<Uuid>,
    dishes: Vec<Dish>,
    orders: Vec<Order>,
}

impl InMemoryStore {
    pub fn new(snapshot: StoreSnapshot) -> Self {
        let mut vendors: HashSet<Uuid> = snapshot.vendors.into_iter().collect();
        vendors.extend(snapshot.dishes.iter().map(|d| d.vendor_id));
        vendors.extend(snapshot.orders.iter().map(|o| o.vendor_id));

        let mut customers: HashSet<Uuid> = snapshot.customers.into_iter().collect();
        customers.extend(snapshot.orders.iter().map(|o| o.customer_id));

        Self {
            vendors,
            customers,
            dishes: snapshot.dishes,
            orders: snapshot.orders,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let snapshot: StoreSnapshot = serde_json::from_str(&content)?;
        tracing::info!(
            "Loaded store snapshot from {}: {} dishes, {} orders",
            path.as_ref().display(),
            snapshot.dishes.len(),
            snapshot.orders.len()
        );
        Ok(Self::new(snapshot))
    }

    fn vendor_orders(&self, vendor_id: Uuid) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |o| o.vendor_id == vendor_id)
    }

    /// Dish ids ordered by how often they were ordered, most first. Ties keep
    /// the order in which the dishes first appear.
    fn dish_occurrences(&self, vendor_id: Uuid) -> Vec<Uuid> {
        let mut counts: HashMap<Uuid, usize> = HashMap::new();
        let mut first_seen: Vec<Uuid> = Vec::new();
        for dish_id in self.vendor_orders(vendor_id).flat_map(|o| o.dishes.iter()) {
            let count = counts.entry(*dish_id).or_insert_with(|| {
                first_seen.push(*dish_id);
                0
            });
            *count += 1;
        }
        first_seen.sort_by_key(|id| std::cmp::Reverse(counts[id]));
        first_seen
    }
}

#[async_trait]
impl DishStore for InMemoryStore {
    async fn find_dish_by_id(&self, dish_id: Uuid) -> Result<Option<Dish>> {
        Ok(self.dishes.iter().find(|d| d.dish_id == dish_id).cloned())
    }

    async fn find_dishes_by_vendor(&self, vendor_id: Uuid) -> Result<Option<Vec<Dish>>> {
        let dishes: Vec<Dish> = self
            .dishes
            .iter()
            .filter(|d| d.vendor_id == vendor_id)
            .cloned()
            .collect();
        Ok((!dishes.is_empty()).then_some(dishes))
    }
}

#[async_trait]
impl OrderStore for InMemoryStore {
    async fn exists_vendor(&self, vendor_id: Uuid) -> Result<bool> {
        Ok(self.vendors.contains(&vendor_id))
    }

    async fn exists_customer(&self, customer_id: Uuid) -> Result<bool> {
        Ok(self.customers.contains(&customer_id))
    }

    async fn find_order_by_id(&self, order_id: Uuid) -> Result<Option<Order>> {
        Ok(self.orders.iter().find(|o| o.order_id == order_id).cloned())
    }

    async fn find_orders_by_vendor_and_customer(
        &self,
        vendor_id: Uuid,
        customer_id: Uuid,
    ) -> Result<Option<Vec<Order>>> {
        let orders: Vec<Order> = self
            .vendor_orders(vendor_id)
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect();
        Ok((!orders.is_empty()).then_some(orders))
    }

    async fn count_dish_occurrences_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<Vec<u8>>> {
        Ok(self
            .dish_occurrences(vendor_id)
            .iter()
            .map(|id| IdentifierCodec::encode(id).to_vec())
            .collect())
    }

    async fn find_orders_by_vendor(&self, vendor_id: Uuid) -> Result<Option<Vec<Order>>> {
        let orders: Vec<Order> = self.vendor_orders(vendor_id).cloned().collect();
        Ok((!orders.is_empty()).then_some(orders))
    }

    async fn count_orders_by_vendor(&self, vendor_id: Uuid) -> Result<Option<u64>> {
        let count = self.vendor_orders(vendor_id).count() as u64;
        Ok((count > 0).then_some(count))
    }
}
