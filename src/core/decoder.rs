//! Decoding of the loosely structured payloads returned by the user
//! directory.
//!
//! Top-level structural failures yield `None`. Individual records that fail
//! to decode are skipped and logged, so one bad vendor entry only makes the
//! result less complete.

use crate::domain::model::{GeoPoint, VendorCuisineMap, VendorLocationMap};
use serde_json::Value;
use uuid::Uuid;

const LATITUDE: &str = "latitude";
const LONGITUDE: &str = "longitude";
const USER_ID: &str = "userID";
const LOCATION: &str = "location";
const CUISINE_TYPE: &str = "cuisineType";
const USER_TYPE: &str = "userType";

pub struct ResilientDecoder;

impl ResilientDecoder {
    /// Reads `latitude` and `longitude` from a single JSON object.
    pub fn decode_location(text: &str) -> Option<GeoPoint> {
        let value: Value = serde_json::from_str(text).ok()?;
        Self::location_from_value(&value)
    }

    fn location_from_value(value: &Value) -> Option<GeoPoint> {
        let object = value.as_object()?;
        let latitude = object.get(LATITUDE)?.as_f64()?;
        let longitude = object.get(LONGITUDE)?.as_f64()?;
        Some(GeoPoint::new(latitude, longitude))
    }

    /// Decodes the vendor list into a map of vendor id to location.
    ///
    /// Returns `None` for empty or unparseable text. A lone object is treated
    /// as a list of one record.
    pub fn decode_vendor_locations(text: &str) -> Option<VendorLocationMap> {
        if text.trim().is_empty() {
            tracing::warn!("Vendor list payload is empty");
            return None;
        }

        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Vendor list payload is not valid JSON: {}", e);
                return None;
            }
        };

        let records = match value {
            Value::Array(items) => items,
            object @ Value::Object(_) => vec![object],
            other => {
                tracing::warn!("Vendor list payload has unexpected shape: {}", type_name(&other));
                return None;
            }
        };

        let mut vendors = VendorLocationMap::new();
        for (index, record) in records.iter().enumerate() {
            let Some(vendor_id) = Self::user_id(record) else {
                tracing::debug!("Skipping vendor record {}: missing or invalid {}", index, USER_ID);
                continue;
            };
            let Some(location) = record.get(LOCATION).and_then(Self::location_from_value) else {
                tracing::debug!("Skipping vendor {}: missing or invalid {}", vendor_id, LOCATION);
                continue;
            };
            vendors.insert(vendor_id, location);
        }

        tracing::debug!("Decoded {} of {} vendor locations", vendors.len(), records.len());
        Some(vendors)
    }

    pub fn decode_user_type(text: Option<&str>) -> Option<String> {
        let value: Value = serde_json::from_str(text?).ok()?;
        value.get(USER_TYPE)?.as_str().map(str::to_string)
    }

    /// Decodes one cuisine payload per vendor.
    ///
    /// An empty input slice yields `None`; a non-empty one always yields a
    /// map, even when every entry was skipped.
    pub fn decode_vendor_cuisines(payloads: &[String]) -> Option<VendorCuisineMap> {
        if payloads.is_empty() {
            return None;
        }

        let mut cuisines = VendorCuisineMap::new();
        for (index, payload) in payloads.iter().enumerate() {
            let record: Value = match serde_json::from_str(payload) {
                Ok(record) => record,
                Err(e) => {
                    tracing::debug!("Skipping cuisine record {}: {}", index, e);
                    continue;
                }
            };
            let Some(cuisine) = record.get(CUISINE_TYPE).and_then(Value::as_str) else {
                tracing::debug!("Skipping cuisine record {}: missing {}", index, CUISINE_TYPE);
                continue;
            };
            let Some(vendor_id) = Self::user_id(&record) else {
                tracing::debug!("Skipping cuisine record {}: missing or invalid {}", index, USER_ID);
                continue;
            };
            cuisines.insert(vendor_id, cuisine.to_string());
        }

        tracing::debug!("Decoded {} of {} vendor cuisines", cuisines.len(), payloads.len());
        Some(cuisines)
    }

    fn user_id(record: &Value) -> Option<Uuid> {
        record
            .get(USER_ID)?
            .as_str()
            .and_then(|raw| Uuid::parse_str(raw).ok())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
