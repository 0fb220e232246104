//! Input validation for service-provided data

pub mod route;

pub use route::{RouteValidationError, RouteValidationResult, RouteValidator};
