use crate::domain::model::{GeoPoint, VendorLocationMap};
use uuid::Uuid;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Great-circle distance in kilometres.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let p = std::f64::consts::PI / 180.0;
    let a = 0.5 - ((to.latitude - from.latitude) * p).cos() / 2.0
        + (from.latitude * p).cos()
            * (to.latitude * p).cos()
            * (1.0 - ((to.longitude - from.longitude) * p).cos())
            / 2.0;
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[derive(Debug, Clone, Copy)]
pub struct ProximityFilter {
    radius_km: f64,
}

impl ProximityFilter {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Vendors strictly closer than the radius, in map order.
    pub fn filter(&self, origin: GeoPoint, candidates: &VendorLocationMap) -> Vec<Uuid> {
        let nearby: Vec<Uuid> = candidates
            .iter()
            .filter(|(_, &location)| haversine_km(origin, location) < self.radius_km)
            .map(|(&vendor_id, _)| vendor_id)
            .collect();

        tracing::debug!(
            "{} of {} vendors within {} km",
            nearby.len(),
            candidates.len(),
            self.radius_km
        );
        nearby
    }
}

impl Default for ProximityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS_KM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_distance_to_self_is_zero() {
        let point = GeoPoint::new(51.998513, 4.37127);
        assert_eq!(haversine_km(point, point), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let a = GeoPoint::new(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0));
            let b = GeoPoint::new(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0));
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
        }
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let origin = GeoPoint::new(52.0, 4.35);
        let vendor = Uuid::new_v4();
        let location = GeoPoint::new(52.02, 4.36);
        let mut candidates = VendorLocationMap::new();
        candidates.insert(vendor, location);

        let exact = haversine_km(origin, location);

        assert!(ProximityFilter::new(exact).filter(origin, &candidates).is_empty());
        assert_eq!(
            ProximityFilter::new(exact + 1e-9).filter(origin, &candidates),
            vec![vendor]
        );
    }

    #[test]
    fn test_nearby_vendor_kept_far_vendor_dropped() {
        let near = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
        let far = Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap();
        let mut candidates = VendorLocationMap::new();
        candidates.insert(near, GeoPoint::new(52.01, 4.36));
        candidates.insert(far, GeoPoint::new(10.0, 10.0));

        let result = ProximityFilter::default().filter(GeoPoint::new(52.00, 4.35), &candidates);

        assert_eq!(result, vec![near]);
    }

    #[test]
    fn test_empty_candidates() {
        let result = ProximityFilter::default().filter(GeoPoint::new(0.0, 0.0), &VendorLocationMap::new());
        assert!(result.is_empty());
    }
}
