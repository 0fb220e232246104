//! Physical constants and system parameters

/// Mean earth radius used for haversine distances (m)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distance from the route line beyond which the traveller counts as off-route (km)
pub const OFF_ROUTE_THRESHOLD_KM: f64 = 5.0;

/// Fallback map center when geolocation is denied or unavailable (Tiruchirappalli)
pub const DEFAULT_CENTER_LON: f64 = 78.7047;
pub const DEFAULT_CENTER_LAT: f64 = 10.7905;
