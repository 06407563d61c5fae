pub mod analytics;
pub mod catalogue;
pub mod cuisine;
pub mod decoder;
pub mod discovery;
pub mod histogram;
pub mod identifier;
pub mod location;
pub mod popularity;
pub mod proximity;

pub use crate::domain::model::{Dish, GeoPoint, HourHistogram, Order};
pub use crate::domain::ports::{DirectoryLookup, DishStore, Geocoding, OrderStore};
pub use crate::utils::error::Result;
