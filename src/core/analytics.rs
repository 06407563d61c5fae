use crate::core::histogram::{HourZone, TimeHistogram};
use crate::core::popularity::DishPopularityRanker;
use crate::domain::model::{Dish, HourHistogram, Order};
use crate::domain::ports::{DishStore, OrderStore};
use crate::utils::error::{InsightError, Result};
use std::sync::Arc;
use uuid::Uuid;

/// Read-only views over a vendor's order history.
pub struct OrderAnalytics {
    orders: Arc<dyn OrderStore>,
    ranker: DishPopularityRanker,
    histogram: TimeHistogram,
}

impl OrderAnalytics {
    pub fn new(dishes: Arc<dyn DishStore>, orders: Arc<dyn OrderStore>, zone: HourZone) -> Self {
        Self {
            ranker: DishPopularityRanker::new(dishes, orders.clone()),
            histogram: TimeHistogram::new(orders.clone(), zone),
            orders,
        }
    }

    pub async fn dishes_by_popularity(&self, vendor_id: Uuid) -> Result<Vec<Dish>> {
        self.ranker.rank(vendor_id).await
    }

    pub async fn order_volume_by_hour(&self, vendor_id: Uuid) -> Result<HourHistogram> {
        self.histogram.build(vendor_id).await
    }

    pub async fn order_volume(&self, vendor_id: Uuid) -> Result<u64> {
        self.ensure_vendor(vendor_id).await?;
        self.orders
            .count_orders_by_vendor(vendor_id)
            .await?
            .ok_or(InsightError::NoOrders { vendor_id })
    }

    pub async fn order_is_paid(&self, order_id: Uuid) -> Result<bool> {
        let order = self
            .orders
            .find_order_by_id(order_id)
            .await?
            .ok_or(InsightError::OrderNotFound { order_id })?;
        Ok(order.order_paid)
    }

    pub async fn orders_from_customer_at_vendor(
        &self,
        vendor_id: Uuid,
        customer_id: Uuid,
    ) -> Result<Vec<Order>> {
        self.ensure_vendor(vendor_id).await?;
        if !self.orders.exists_customer(customer_id).await? {
            return Err(InsightError::CustomerNotFound { customer_id });
        }
        self.orders
            .find_orders_by_vendor_and_customer(vendor_id, customer_id)
            .await?
            .ok_or(InsightError::NoOrders { vendor_id })
    }

    async fn ensure_vendor(&self, vendor_id: Uuid) -> Result<()> {
        if self.orders.exists_vendor(vendor_id).await? {
            Ok(())
        } else {
            Err(InsightError::VendorNotFound { vendor_id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OrderStatus;
    use crate::domain::ports::{MockDishStore, MockOrderStore};
    use mockall::predicate::eq;

    fn order(vendor_id: Uuid, customer_id: Uuid, paid: bool) -> Order {
        Order {
            order_id: Uuid::new_v4(),
            vendor_id,
            customer_id,
            date: 1_700_007_405_000,
            dishes: vec![Uuid::new_v4()],
            special_requirements: Some("Knock on the door".to_string()),
            order_paid: paid,
            status: OrderStatus::Accepted,
            rating: Some(4),
        }
    }

    fn analytics(orders: MockOrderStore) -> OrderAnalytics {
        OrderAnalytics::new(Arc::new(MockDishStore::new()), Arc::new(orders), HourZone::utc())
    }

    #[tokio::test]
    async fn test_order_volume() {
        let vendor_id = Uuid::new_v4();
        let mut orders = MockOrderStore::new();
        orders.expect_exists_vendor().returning(|_| Ok(true));
        orders
            .expect_count_orders_by_vendor()
            .with(eq(vendor_id))
            .returning(|_| Ok(Some(21)));

        assert_eq!(analytics(orders).order_volume(vendor_id).await.unwrap(), 21);
    }

    #[tokio::test]
    async fn test_order_volume_unknown_vendor_and_no_orders() {
        let mut orders = MockOrderStore::new();
        orders.expect_exists_vendor().returning(|_| Ok(false));
        let err = analytics(orders).order_volume(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, InsightError::VendorNotFound { .. }));

        let mut orders = MockOrderStore::new();
        orders.expect_exists_vendor().returning(|_| Ok(true));
        orders.expect_count_orders_by_vendor().returning(|_| Ok(None));
        let err = analytics(orders).order_volume(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, InsightError::NoOrders { .. }));
    }

    #[tokio::test]
    async fn test_order_is_paid() {
        let paid = order(Uuid::new_v4(), Uuid::new_v4(), true);
        let unpaid = order(Uuid::new_v4(), Uuid::new_v4(), false);
        let (paid_id, unpaid_id) = (paid.order_id, unpaid.order_id);

        let mut orders = MockOrderStore::new();
        orders.expect_find_order_by_id().returning(move |id| {
            Ok([&paid, &unpaid].into_iter().find(|o| o.order_id == id).cloned())
        });
        let analytics = analytics(orders);

        assert!(analytics.order_is_paid(paid_id).await.unwrap());
        assert!(!analytics.order_is_paid(unpaid_id).await.unwrap());
        assert!(matches!(
            analytics.order_is_paid(Uuid::new_v4()).await,
            Err(InsightError::OrderNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_orders_from_customer_at_vendor_checks_vendor_first() {
        let mut orders = MockOrderStore::new();
        orders.expect_exists_vendor().returning(|_| Ok(false));
        orders.expect_exists_customer().never();

        let err = analytics(orders)
            .orders_from_customer_at_vendor(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::VendorNotFound { .. }));
    }

    #[tokio::test]
    async fn test_orders_from_customer_at_vendor_unknown_customer() {
        let customer_id = Uuid::new_v4();
        let mut orders = MockOrderStore::new();
        orders.expect_exists_vendor().returning(|_| Ok(true));
        orders.expect_exists_customer().returning(|_| Ok(false));

        let err = analytics(orders)
            .orders_from_customer_at_vendor(Uuid::new_v4(), customer_id)
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::CustomerNotFound { customer_id: c } if c == customer_id));
    }

    #[tokio::test]
    async fn test_orders_from_customer_at_vendor() {
        let vendor_id = Uuid::new_v4();
        let customer_id = Uuid::new_v4();
        let history = vec![
            order(vendor_id, customer_id, true),
            order(vendor_id, customer_id, false),
        ];
        let expected = history.clone();

        let mut orders = MockOrderStore::new();
        orders.expect_exists_vendor().returning(|_| Ok(true));
        orders.expect_exists_customer().returning(|_| Ok(true));
        orders
            .expect_find_orders_by_vendor_and_customer()
            .with(eq(vendor_id), eq(customer_id))
            .return_once(move |_, _| Ok(Some(history)));

        let result = analytics(orders)
            .orders_from_customer_at_vendor(vendor_id, customer_id)
            .await
            .unwrap();
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_orders_from_customer_at_vendor_empty() {
        let mut orders = MockOrderStore::new();
        orders.expect_exists_vendor().returning(|_| Ok(true));
        orders.expect_exists_customer().returning(|_| Ok(true));
        orders
            .expect_find_orders_by_vendor_and_customer()
            .returning(|_, _| Ok(None));

        let err = analytics(orders)
            .orders_from_customer_at_vendor(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::NoOrders { .. }));
    }
}
