//! Great-circle distance between place coordinates
//!
//! Used both to build the "nearby" candidate pool and to turn an entry's
//! distance from a candidate into a proximity score.

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two lat/lon points in kilometers.
///
/// Symmetric, and ~0 for identical coordinates. Inputs are not validated:
/// NaN coordinates propagate NaN, and callers are expected to reject
/// out-of-range coordinates with [`in_valid_range`] before relying on the
/// result in a threshold comparison.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let lat1_r = lat1.to_radians();
    let lat2_r = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1_r.cos() * lat2_r.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_KM * c
}

/// Whether a coordinate pair is finite and within lat [-90, 90], lon [-180, 180]
pub fn in_valid_range(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}
