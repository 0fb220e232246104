//! Route model
//!
//! A route as delivered by the routing service: ordered legs, each an ordered
//! list of maneuver steps, plus the line geometry used for proximity queries.
//! Routes are immutable once received; a new route replaces the old one
//! wholesale and clearing discards it entirely.

use crate::core::GeoPoint;
use serde::{Deserialize, Serialize};

/// One maneuver along a leg ("turn left", the coordinate where it applies,
/// and the distance/time to cover until the next maneuver)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instruction: String,
    pub maneuver_location: GeoPoint,
    pub distance_m: f64,
    pub duration_s: f64,
}

impl RouteStep {
    pub fn new(
        instruction: impl Into<String>,
        maneuver_location: GeoPoint,
        distance_m: f64,
        duration_s: f64,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            maneuver_location,
            distance_m,
            duration_s,
        }
    }
}

/// Origin-to-destination segment of a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub steps: Vec<RouteStep>,
    pub distance_m: f64,
    pub duration_s: f64,
}

impl RouteLeg {
    pub fn from_steps(steps: Vec<RouteStep>) -> Self {
        let distance_m = steps.iter().map(|s| s.distance_m).sum();
        let duration_s = steps.iter().map(|s| s.duration_s).sum();
        Self {
            steps,
            distance_m,
            duration_s,
        }
    }
}

/// Complete route with line geometry for snapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub legs: Vec<RouteLeg>,
    /// Ordered polyline of the full route, used for proximity queries
    pub geometry: Vec<GeoPoint>,
    pub distance_m: f64,
    pub duration_s: f64,
}

impl Route {
    /// Build a single-leg route, deriving totals from the steps
    pub fn single_leg(steps: Vec<RouteStep>, geometry: Vec<GeoPoint>) -> Self {
        let leg = RouteLeg::from_steps(steps);
        let distance_m = leg.distance_m;
        let duration_s = leg.duration_s;
        Self {
            legs: vec![leg],
            geometry,
            distance_m,
            duration_s,
        }
    }

    /// Steps of the first leg; guidance only ever reads leg 0
    pub fn primary_steps(&self) -> &[RouteStep] {
        self.legs.first().map(|leg| leg.steps.as_slice()).unwrap_or(&[])
    }
}
