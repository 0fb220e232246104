//! Geolocation service interface

use crate::core::PositionSample;
use std::fmt;

/// Failures reported by the location service
#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationError {
    /// The user denied the location permission
    PermissionDenied,
    /// No fix arrived within the service's timeout
    Timeout,
    /// Positioning is not available on this device at all
    Unavailable { message: String },
}

impl GeolocationError {
    /// One-line status text shown to the traveller
    pub fn status_message(&self) -> String {
        format!("Could not get location: {}", self)
    }
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeolocationError::PermissionDenied => write!(f, "permission denied"),
            GeolocationError::Timeout => write!(f, "position acquisition timed out"),
            GeolocationError::Unavailable { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for GeolocationError {}

/// Interface to the device location service
pub trait GeolocationProvider {
    /// Poll for the next position fix or error.
    /// Returns `None` when nothing new has arrived (non-blocking).
    fn poll_fix(&mut self) -> Option<Result<PositionSample, GeolocationError>>;
}
