// Adapters layer: concrete implementations of the domain ports.

pub mod geocoder;
pub mod http;
pub mod memory;

pub use geocoder::FixedGeocoder;
pub use http::HttpDirectory;
pub use memory::{InMemoryStore, StoreSnapshot};
