//! Core data types for the travel companion

use serde::{Deserialize, Serialize};

/// Geographic position in WGS-84 decimal degrees, longitude first
/// (the wire order used by the routing and geolocation services)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

/// Single geolocation fix as delivered by the location service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    pub point: GeoPoint,
    /// Reported horizontal accuracy (meters), when the service provides one
    pub accuracy_m: Option<f64>,
}

impl PositionSample {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            point: GeoPoint::new(lon, lat),
            accuracy_m: None,
        }
    }

    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }
}
