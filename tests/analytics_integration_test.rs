use food_insights::{DishCatalogue, HourZone, InMemoryStore, InsightError, OrderAnalytics};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use uuid::Uuid;

const VENDOR: &str = "550e8400-e29b-41d4-a716-446655440000";
const QUIET_VENDOR: &str = "660e8400-e29b-41d4-a716-446655440000";
const CUSTOMER: &str = "770e8400-e29b-41d4-a716-446655440000";
const PIZZA: &str = "0a0e8400-e29b-41d4-a716-446655440001";
const PASTA: &str = "0a0e8400-e29b-41d4-a716-446655440002";
const SALAD: &str = "0a0e8400-e29b-41d4-a716-446655440003";
const PAID_ORDER: &str = "0b0e8400-e29b-41d4-a716-446655440001";

// 2023-11-14T22:13:20Z
const TEN_PAST_TEN_PM: i64 = 1_700_000_000_000;
const ONE_HOUR: i64 = 3_600_000;

fn write_snapshot() -> NamedTempFile {
    let snapshot = serde_json::json!({
        "vendors": [QUIET_VENDOR],
        "dishes": [
            {
                "dishID": PIZZA,
                "vendorID": VENDOR,
                "name": "Margherita",
                "description": "Tomato and mozzarella",
                "image": "pizza.png",
                "price": 9.5,
                "listOfIngredients": ["dough", "tomato", "mozzarella"],
                "listOfAllergies": ["Gluten", "Lactose"]
            },
            {
                "dishID": PASTA,
                "vendorID": VENDOR,
                "name": "Carbonara",
                "price": 12.0,
                "listOfAllergies": ["gluten", "egg"]
            },
            {
                "dishID": SALAD,
                "vendorID": VENDOR,
                "name": "Caprese",
                "price": 7.25,
                "listOfAllergies": ["lactose"]
            }
        ],
        "orders": [
            {
                "orderID": PAID_ORDER,
                "vendorID": VENDOR,
                "customerID": CUSTOMER,
                "date": TEN_PAST_TEN_PM,
                "listOfDishes": [PASTA, PIZZA],
                "orderPaid": true,
                "status": "delivered",
                "rating": 5
            },
            {
                "orderID": Uuid::new_v4(),
                "vendorID": VENDOR,
                "customerID": CUSTOMER,
                "date": TEN_PAST_TEN_PM + ONE_HOUR,
                "listOfDishes": [PIZZA],
                "specialRequirements": "No basil",
                "orderPaid": false,
                "status": "given to courier"
            },
            {
                "orderID": Uuid::new_v4(),
                "vendorID": VENDOR,
                "customerID": Uuid::new_v4(),
                "date": TEN_PAST_TEN_PM + 2 * ONE_HOUR,
                "listOfDishes": [PIZZA, SALAD],
                "orderPaid": true,
                "status": "pending"
            }
        ]
    });

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(snapshot.to_string().as_bytes()).unwrap();
    file
}

fn uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap()
}

#[tokio::test]
async fn test_order_analytics_over_snapshot() {
    let file = write_snapshot();
    let store = Arc::new(InMemoryStore::from_file(file.path()).unwrap());
    let analytics = OrderAnalytics::new(store.clone(), store, HourZone::utc());

    let popular: Vec<Uuid> = analytics
        .dishes_by_popularity(uuid(VENDOR))
        .await
        .unwrap()
        .iter()
        .map(|d| d.dish_id)
        .collect();
    assert_eq!(popular, vec![uuid(PIZZA), uuid(PASTA), uuid(SALAD)]);

    let histogram = analytics.order_volume_by_hour(uuid(VENDOR)).await.unwrap();
    assert_eq!(histogram.count(22), 1);
    assert_eq!(histogram.count(23), 1);
    assert_eq!(histogram.count(0), 1);
    assert_eq!(histogram.total(), 3);

    assert_eq!(analytics.order_volume(uuid(VENDOR)).await.unwrap(), 3);
    assert!(analytics.order_is_paid(uuid(PAID_ORDER)).await.unwrap());

    let history = analytics
        .orders_from_customer_at_vendor(uuid(VENDOR), uuid(CUSTOMER))
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn test_order_analytics_error_cases() {
    let file = write_snapshot();
    let store = Arc::new(InMemoryStore::from_file(file.path()).unwrap());
    let analytics = OrderAnalytics::new(store.clone(), store, HourZone::utc());

    let err = analytics
        .order_volume_by_hour(Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, InsightError::VendorNotFound { .. }));

    let err = analytics
        .order_volume_by_hour(uuid(QUIET_VENDOR))
        .await
        .unwrap_err();
    assert!(matches!(err, InsightError::NoOrders { .. }));

    let err = analytics.order_is_paid(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, InsightError::OrderNotFound { .. }));

    let err = analytics
        .orders_from_customer_at_vendor(uuid(VENDOR), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, InsightError::CustomerNotFound { .. }));
}

#[tokio::test]
async fn test_dish_catalogue_over_snapshot() {
    let file = write_snapshot();
    let catalogue = DishCatalogue::new(Arc::new(InMemoryStore::from_file(file.path()).unwrap()));

    let pizza = catalogue.dish_by_id(uuid(PIZZA)).await.unwrap();
    assert_eq!(pizza.name, "Margherita");
    assert_eq!(pizza.ingredients.len(), 3);

    assert_eq!(catalogue.dishes_by_vendor(uuid(VENDOR)).await.unwrap().len(), 3);

    let safe = catalogue
        .allergy_filtered_dishes(uuid(VENDOR), &["LACTOSE".to_string()])
        .await
        .unwrap();
    assert_eq!(safe.len(), 1);
    assert_eq!(safe[0].dish_id, uuid(PASTA));

    let err = catalogue.dish_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, InsightError::DishNotFound { .. }));

    let err = catalogue
        .dishes_by_vendor(uuid(QUIET_VENDOR))
        .await
        .unwrap_err();
    assert!(matches!(err, InsightError::VendorNotFound { .. }));
}
