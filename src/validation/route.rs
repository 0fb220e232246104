//! Route validation
//!
//! Incoming routes are service data and are checked before the tracker
//! accepts them. Rejections are per-route; warnings flag shapes we accept
//! but handle with known limitations.

use crate::route::Route;
use std::fmt;

/// Reasons a route is unusable for guidance
#[derive(Debug, Clone, PartialEq)]
pub enum RouteValidationError {
    /// Route carries no legs at all
    NoLegs,
    /// Leg 0 carries no maneuver steps
    NoSteps,
    /// Line geometry has no points to snap onto
    EmptyGeometry,
    /// A coordinate is NaN or infinite
    NonFiniteCoordinate { context: String },
    /// A step distance or duration is negative
    NegativeMetric { field: String, value: f64 },
}

impl fmt::Display for RouteValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteValidationError::NoLegs => write!(f, "Route has no legs"),
            RouteValidationError::NoSteps => write!(f, "Route leg 0 has no steps"),
            RouteValidationError::EmptyGeometry => write!(f, "Route has no line geometry"),
            RouteValidationError::NonFiniteCoordinate { context } => {
                write!(f, "Non-finite coordinate in {}", context)
            }
            RouteValidationError::NegativeMetric { field, value } => {
                write!(f, "Negative {}: {}", field, value)
            }
        }
    }
}

impl std::error::Error for RouteValidationError {}

/// Validation outcome over a batch of candidate routes
#[derive(Debug, Clone)]
pub struct RouteValidationResult {
    pub valid: Vec<Route>,
    /// (candidate index, first error found)
    pub rejected: Vec<(usize, RouteValidationError)>,
    pub warnings: Vec<String>,
}

/// Route sanity checker
#[derive(Debug, Default)]
pub struct RouteValidator;

impl RouteValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check one route; `Ok` may still carry warnings
    pub fn check(&self, route: &Route) -> Result<Vec<String>, RouteValidationError> {
        if route.legs.is_empty() {
            return Err(RouteValidationError::NoLegs);
        }
        if route.legs[0].steps.is_empty() {
            return Err(RouteValidationError::NoSteps);
        }
        if route.geometry.is_empty() {
            return Err(RouteValidationError::EmptyGeometry);
        }
        for (i, point) in route.geometry.iter().enumerate() {
            if !point.is_finite() {
                return Err(RouteValidationError::NonFiniteCoordinate {
                    context: format!("geometry point {}", i),
                });
            }
        }
        for (i, step) in route.legs[0].steps.iter().enumerate() {
            if !step.maneuver_location.is_finite() {
                return Err(RouteValidationError::NonFiniteCoordinate {
                    context: format!("step {} maneuver location", i),
                });
            }
            if step.distance_m < 0.0 {
                return Err(RouteValidationError::NegativeMetric {
                    field: format!("step {} distance", i),
                    value: step.distance_m,
                });
            }
            if step.duration_s < 0.0 {
                return Err(RouteValidationError::NegativeMetric {
                    field: format!("step {} duration", i),
                    value: step.duration_s,
                });
            }
        }

        let mut warnings = Vec::new();
        if route.legs.len() > 1 {
            // Remaining distance/time aggregation only covers leg 0
            warnings.push(format!(
                "Route has {} legs; guidance aggregates leg 0 only",
                route.legs.len()
            ));
        }
        Ok(warnings)
    }

    /// Validate a batch of candidates, splitting valid from rejected
    pub fn validate_routes(&self, routes: Vec<Route>) -> RouteValidationResult {
        let mut valid = Vec::new();
        let mut rejected = Vec::new();
        let mut warnings = Vec::new();

        for (index, route) in routes.into_iter().enumerate() {
            match self.check(&route) {
                Ok(mut route_warnings) => {
                    warnings.append(&mut route_warnings);
                    valid.push(route);
                }
                Err(error) => rejected.push((index, error)),
            }
        }

        RouteValidationResult {
            valid,
            rejected,
            warnings,
        }
    }
}
