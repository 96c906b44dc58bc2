//! Spatial math for step sizing and route distance calculations.

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Flat-earth scale used when converting metric step sizes to degrees.
///
/// A single meters-per-degree constant (with cosine scaling on longitude)
/// is accurate enough for sites spanning a few hundred meters. Larger
/// sites would need the scale recomputed per row.
pub const METERS_PER_DEG: f64 = 111_000.0;

/// Calculate distance between two points in meters using the Haversine formula.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Great-circle distance in meters
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Convert a north/south offset in meters to degrees latitude.
pub fn meters_to_lat_deg(meters: f64) -> f64 {
    meters / METERS_PER_DEG
}

/// Convert an east/west offset in meters to degrees longitude at the
/// given reference latitude.
pub fn meters_to_lon_deg(meters: f64, ref_lat_deg: f64) -> f64 {
    let scale = (METERS_PER_DEG * ref_lat_deg.to_radians().cos()).max(1e-9);
    meters / scale
}

/// Approximate metric length of a degree offset, reversing the flat-earth
/// conversion above.
pub fn deg_offset_to_meters(dlat_deg: f64, dlon_deg: f64, ref_lat_deg: f64) -> f64 {
    let north_m = dlat_deg * METERS_PER_DEG;
    let east_m = dlon_deg * METERS_PER_DEG * ref_lat_deg.to_radians().cos();
    (north_m * north_m + east_m * east_m).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // ~111km between these points (1 degree latitude)
        let dist = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert!((dist - 111_194.0).abs() < 100.0);
    }

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_distance(26.0173, 77.2088, 26.0173, 77.2088);
        assert!(dist < 0.001);
    }

    #[test]
    fn test_haversine_symmetric() {
        let d1 = haversine_distance(26.0150, 77.2060, 26.0200, 77.2110);
        let d2 = haversine_distance(26.0200, 77.2110, 26.0150, 77.2060);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn meters_to_degrees_round_trips() {
        let ref_lat = 26.0175;
        let dlat = meters_to_lat_deg(18.0);
        let dlon = meters_to_lon_deg(18.0, ref_lat);
        assert!((deg_offset_to_meters(dlat, 0.0, ref_lat) - 18.0).abs() < 1e-9);
        assert!((deg_offset_to_meters(0.0, dlon, ref_lat) - 18.0).abs() < 1e-9);
    }
}
