//! Shared utilities

pub mod config;

pub use config::{
    AppConfig, CollageConfig, ConfigError, DatasetPaths, NavigationConfig, UploadConfig,
};
