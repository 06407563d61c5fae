use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

pub type VendorLocationMap = BTreeMap<Uuid, GeoPoint>;

pub type VendorCuisineMap = BTreeMap<Uuid, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub country: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    #[serde(rename = "dishID")]
    pub dish_id: Uuid,
    #[serde(rename = "vendorID")]
    pub vendor_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: f32,
    #[serde(default, rename = "listOfIngredients")]
    pub ingredients: Vec<String>,
    #[serde(default, rename = "listOfAllergies")]
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "accepted")]
    Accepted,
    #[serde(rename = "rejected")]
    Rejected,
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "given to courier")]
    GivenToCourier,
    #[serde(rename = "on-transit")]
    OnTransit,
    #[serde(rename = "delivered")]
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "orderID")]
    pub order_id: Uuid,
    #[serde(rename = "vendorID")]
    pub vendor_id: Uuid,
    #[serde(rename = "customerID")]
    pub customer_id: Uuid,
    /// Epoch milliseconds.
    pub date: i64,
    #[serde(default, rename = "listOfDishes")]
    pub dishes: Vec<Uuid>,
    #[serde(default)]
    pub special_requirements: Option<String>,
    #[serde(default)]
    pub order_paid: bool,
    pub status: OrderStatus,
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Order counts per hour of day; index 0 is midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HourHistogram([u32; 24]);

impl HourHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, hour: u32) {
        if let Some(bucket) = self.0.get_mut(hour as usize) {
            *bucket += 1;
        }
    }

    pub fn count(&self, hour: u32) -> u32 {
        self.0.get(hour as usize).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| c as u64).sum()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn into_inner(self) -> [u32; 24] {
        self.0
    }
}
