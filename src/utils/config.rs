//! Application configuration
//!
//! JSON-backed configuration covering the navigation session, the collage
//! builder, the upload endpoint, and the dataset file locations. Loading and
//! saving go through `serde_json`; `validate` catches values that would
//! misbehave at runtime.

use crate::api::SessionConfig;
use crate::collage::CollageLayout;
use crate::core::{GeoPoint, DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, OFF_ROUTE_THRESHOLD_KM};
use crate::media::ImageFileFormat;
use crate::route::TrackerConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid {} = {}: {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "Config file I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "Config serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Navigation session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Off-route threshold (km)
    pub deviation_threshold_km: f64,
    /// Map center when geolocation fails
    pub fallback_center_lon: f64,
    pub fallback_center_lat: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            deviation_threshold_km: OFF_ROUTE_THRESHOLD_KM,
            fallback_center_lon: DEFAULT_CENTER_LON,
            fallback_center_lat: DEFAULT_CENTER_LAT,
        }
    }
}

impl NavigationConfig {
    /// Session configuration derived from these settings
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            tracker: TrackerConfig {
                deviation_threshold_km: self.deviation_threshold_km,
            },
            fallback_center: GeoPoint::new(self.fallback_center_lon, self.fallback_center_lat),
        }
    }
}

/// Collage builder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollageConfig {
    pub default_layout: CollageLayout,
    /// Largest selection the picker offers
    pub max_selection: usize,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            default_layout: CollageLayout::Grid,
            max_selection: 9,
        }
    }
}

/// Upload endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Storage folder on the image host
    pub folder: String,
    /// Accepted file extensions
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            folder: "memories".to_string(),
            allowed_extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
        }
    }
}

/// Dataset file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetPaths {
    pub hotels: String,
    pub bus_routes: String,
    pub attractions: String,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            hotels: "data/hotels.csv".to_string(),
            bus_routes: "data/busRoutes.csv".to_string(),
            attractions: "data/attractions.csv".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub navigation: NavigationConfig,
    pub collage: CollageConfig,
    pub upload: UploadConfig,
    pub datasets: DatasetPaths,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: e.to_string(),
        })?;
        let config: AppConfig =
            serde_json::from_str(&text).map_err(|e| ConfigError::SerializationError {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: e.to_string(),
            })?;
        fs::write(path, text).map_err(|e| ConfigError::IoError {
            message: e.to_string(),
        })
    }

    /// Reject values that would misbehave at runtime
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.navigation.deviation_threshold_km;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "navigation.deviation_threshold_km".to_string(),
                value: threshold.to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }

        let center = GeoPoint::new(
            self.navigation.fallback_center_lon,
            self.navigation.fallback_center_lat,
        );
        if !center.is_finite() {
            return Err(ConfigError::InvalidParameter {
                parameter: "navigation.fallback_center".to_string(),
                value: format!("({}, {})", center.lon, center.lat),
                reason: "coordinates must be finite".to_string(),
            });
        }

        if self.collage.max_selection == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "collage.max_selection".to_string(),
                value: "0".to_string(),
                reason: "a collage needs at least one image".to_string(),
            });
        }

        if self.upload.folder.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "upload.folder".to_string(),
                value: self.upload.folder.clone(),
                reason: "must not be empty".to_string(),
            });
        }
        for ext in &self.upload.allowed_extensions {
            if ImageFileFormat::from_extension(ext).is_none() {
                return Err(ConfigError::InvalidParameter {
                    parameter: "upload.allowed_extensions".to_string(),
                    value: ext.clone(),
                    reason: "the image host only accepts jpg, jpeg, png".to_string(),
                });
            }
        }

        Ok(())
    }
}
