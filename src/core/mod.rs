//! Core types and constants shared across the travel companion

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
