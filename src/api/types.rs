//! Common API types for the navigation session

use crate::core::{GeoPoint, DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON};
use crate::route::TrackerConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for session operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Session error types
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Tracking was requested with no route present
    NoRouteAvailable,
    /// Invalid configuration value
    ConfigurationError { parameter: String, value: String },
    /// A callback handle did not match any registration
    InvalidCallbackHandle,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NoRouteAvailable => {
                write!(f, "No route available to track")
            }
            ApiError::ConfigurationError { parameter, value } => {
                write!(f, "Configuration error: invalid {} = {}", parameter, value)
            }
            ApiError::InvalidCallbackHandle => {
                write!(f, "Invalid callback handle")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Session configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Tracker tuning (deviation threshold)
    pub tracker: TrackerConfig,
    /// Map center used when geolocation fails
    pub fallback_center: GeoPoint,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            fallback_center: GeoPoint::new(DEFAULT_CENTER_LON, DEFAULT_CENTER_LAT),
        }
    }
}

/// Session bookkeeping, readable at any time
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub tracking: bool,
    pub route_present: bool,
    pub routes_received: u32,
    pub positions_processed: u32,
    pub deviations_flagged: u32,
    pub geolocation_failures: u32,
    /// Marker location after the last processed fix (or the fallback center)
    pub marker: GeoPoint,
}

impl SessionState {
    pub fn new(fallback_center: GeoPoint) -> Self {
        Self {
            tracking: false,
            route_present: false,
            routes_received: 0,
            positions_processed: 0,
            deviations_flagged: 0,
            geolocation_failures: 0,
            marker: fallback_center,
        }
    }
}
