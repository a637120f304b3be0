// src/geo.rs

/// Mean Earth radius in statute miles. Every radius in this app is in miles,
/// so distances come out in miles too.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance between two points in decimal degrees, in miles.
///
/// Standard haversine on a spherical Earth. Good to within ~0.5% of the
/// ellipsoidal distance, which is plenty for a "within N miles" listing
/// filter. Non-finite inputs are the caller's problem.
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}
