//! Live route tracking
//!
//! Maintains navigation guidance state as position samples arrive against a
//! stored route: snaps the sample to the route line, selects the nearest
//! maneuver step, derives the upcoming instruction with remaining
//! distance/time, and runs the edge-triggered off-route detector.
//!
//! The tracker is a two-state machine (Idle, Tracking). Position updates are
//! processed synchronously and only while Tracking with a route present;
//! anything else is a no-op. Each sample fully supersedes the previous one.

use crate::core::{GeoPoint, PositionSample, OFF_ROUTE_THRESHOLD_KM};
use crate::route::geometry::{haversine_m, nearest_point_on_line, SnappedPoint};
use crate::route::model::Route;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors raised by tracking state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// Tracking was started without a route present
    NoRouteAvailable,
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::NoRouteAvailable => {
                write!(f, "Cannot start tracking: no route available")
            }
        }
    }
}

impl std::error::Error for TrackerError {}

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Whether the tracker is consuming position samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    Idle,
    Tracking,
}

/// Off-route detector state; transitions only at the threshold crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviationState {
    OnRoute,
    OffRoute,
}

/// One-shot notifications emitted when the deviation state changes
#[derive(Debug, Clone, PartialEq)]
pub enum DeviationEvent {
    /// Distance to the route line crossed above the threshold
    Started { distance_km: f64 },
    /// Distance returned to or below the threshold
    Ended,
}

/// Guidance shown to the traveller after each position update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    /// Instruction text of the upcoming step
    pub instruction: String,
    /// Remaining distance over leg 0, km rounded to 2 decimals
    pub distance_remaining_km: f64,
    /// Remaining duration over leg 0, minutes rounded to nearest integer
    pub eta_minutes: u32,
}

/// Everything derived from one position sample
#[derive(Debug, Clone, PartialEq)]
pub struct PositionOutcome {
    /// Marker location: the sample snapped onto the route line
    pub snapped: SnappedPoint,
    /// Step in leg 0 whose maneuver location is nearest the snapped point
    pub current_step_index: usize,
    pub guidance: Guidance,
    /// Present only when the deviation state changed on this update
    pub deviation: Option<DeviationEvent>,
}

/// Tracker tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Distance from the route line that counts as off-route (km)
    pub deviation_threshold_km: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            deviation_threshold_km: OFF_ROUTE_THRESHOLD_KM,
        }
    }
}

/// Navigation guidance state machine
pub struct RouteTracker {
    config: TrackerConfig,
    route: Option<Route>,
    state: TrackingState,
    deviation: DeviationState,
    current_step_index: usize,
    last_snapped: Option<GeoPoint>,
}

impl RouteTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            route: None,
            state: TrackingState::Idle,
            deviation: DeviationState::OnRoute,
            current_step_index: 0,
            last_snapped: None,
        }
    }

    /// Store a freshly computed route, replacing any previous one.
    ///
    /// Guidance state resets; the tracking state itself is unchanged, so a
    /// rerouted journey keeps navigating against the new route.
    pub fn route_received(&mut self, route: Route) {
        self.route = Some(route);
        self.reset_guidance_state();
    }

    /// Discard the route; tracking stops until a new route arrives
    pub fn route_cleared(&mut self) {
        self.route = None;
        self.state = TrackingState::Idle;
        self.reset_guidance_state();
    }

    /// Idle -> Tracking; requires a route to already be present
    pub fn start_tracking(&mut self) -> TrackerResult<()> {
        if self.route.is_none() {
            return Err(TrackerError::NoRouteAvailable);
        }
        self.state = TrackingState::Tracking;
        self.reset_guidance_state();
        Ok(())
    }

    /// Tracking -> Idle; the route stays stored for a later restart
    pub fn stop_tracking(&mut self) {
        self.state = TrackingState::Idle;
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        self.state == TrackingState::Tracking
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn last_snapped(&self) -> Option<GeoPoint> {
        self.last_snapped
    }

    pub fn is_deviated(&self) -> bool {
        self.deviation == DeviationState::OffRoute
    }

    /// Process one position sample.
    ///
    /// Returns `None` (a no-op, not an error) while Idle, without a route,
    /// or when the route carries no usable geometry/steps.
    pub fn position_update(&mut self, sample: &PositionSample) -> Option<PositionOutcome> {
        if self.state != TrackingState::Tracking {
            return None;
        }
        let route = self.route.as_ref()?;
        let snapped = nearest_point_on_line(&route.geometry, &sample.point)?;

        let steps = route.primary_steps();
        if steps.is_empty() {
            return None;
        }

        // Nearest maneuver to the snapped point; ties go to the lowest index
        let mut current = 0usize;
        let mut min_distance = f64::INFINITY;
        for (index, step) in steps.iter().enumerate() {
            let d = haversine_m(&snapped.point, &step.maneuver_location);
            if d < min_distance {
                min_distance = d;
                current = index;
            }
        }

        // No upcoming step beyond route end
        let upcoming = if current < steps.len() - 1 {
            current + 1
        } else {
            current
        };

        let remaining = &steps[upcoming..];
        let distance_m: f64 = remaining.iter().map(|s| s.distance_m).sum();
        let duration_s: f64 = remaining.iter().map(|s| s.duration_s).sum();

        let guidance = Guidance {
            instruction: steps[upcoming].instruction.clone(),
            distance_remaining_km: (distance_m / 1000.0 * 100.0).round() / 100.0,
            eta_minutes: (duration_s / 60.0).round() as u32,
        };

        let deviation = self.update_deviation(snapped.distance_m);

        self.current_step_index = current;
        self.last_snapped = Some(snapped.point);

        Some(PositionOutcome {
            snapped,
            current_step_index: current,
            guidance,
            deviation,
        })
    }

    /// Edge-triggered threshold detector over the raw distance to the line
    fn update_deviation(&mut self, distance_m: f64) -> Option<DeviationEvent> {
        let distance_km = distance_m / 1000.0;
        match self.deviation {
            DeviationState::OnRoute if distance_km > self.config.deviation_threshold_km => {
                self.deviation = DeviationState::OffRoute;
                Some(DeviationEvent::Started { distance_km })
            }
            DeviationState::OffRoute if distance_km <= self.config.deviation_threshold_km => {
                self.deviation = DeviationState::OnRoute;
                Some(DeviationEvent::Ended)
            }
            _ => None,
        }
    }

    fn reset_guidance_state(&mut self) {
        self.deviation = DeviationState::OnRoute;
        self.current_step_index = 0;
        self.last_snapped = None;
    }
}

impl Default for RouteTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EARTH_RADIUS_M;
    use crate::route::model::RouteStep;

    /// Straight route along the equator with maneuvers at regular longitudes
    fn test_route() -> Route {
        let steps = vec![
            RouteStep::new("Head east", GeoPoint::new(0.0, 0.0), 1000.0, 60.0),
            RouteStep::new("Turn left", GeoPoint::new(0.01, 0.0), 2000.0, 120.0),
            RouteStep::new("Arrive", GeoPoint::new(0.02, 0.0), 500.0, 30.0),
        ];
        let geometry = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.01, 0.0),
            GeoPoint::new(0.02, 0.0),
        ];
        Route::single_leg(steps, geometry)
    }

    fn tracking_tracker() -> RouteTracker {
        let mut tracker = RouteTracker::default();
        tracker.route_received(test_route());
        tracker.start_tracking().unwrap();
        tracker
    }

    /// Latitude offset whose north distance from the equator is `km`
    fn lat_for_km(km: f64) -> f64 {
        (km * 1000.0 / EARTH_RADIUS_M).to_degrees()
    }

    #[test]
    fn test_start_requires_route() {
        let mut tracker = RouteTracker::default();
        assert_eq!(
            tracker.start_tracking().unwrap_err(),
            TrackerError::NoRouteAvailable
        );
        tracker.route_received(test_route());
        assert!(tracker.start_tracking().is_ok());
        assert!(tracker.is_tracking());
    }

    #[test]
    fn test_update_ignored_while_idle() {
        let mut tracker = RouteTracker::default();
        tracker.route_received(test_route());
        assert!(tracker.position_update(&PositionSample::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_update_ignored_without_route() {
        let mut tracker = RouteTracker::default();
        assert!(tracker.position_update(&PositionSample::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_guidance_worked_example() {
        // Snapped nearest step 0 -> upcoming step 1, remaining 2500 m / 150 s
        let mut tracker = tracking_tracker();
        let outcome = tracker
            .position_update(&PositionSample::new(0.001, 0.0001))
            .unwrap();

        assert_eq!(outcome.current_step_index, 0);
        assert_eq!(outcome.guidance.instruction, "Turn left");
        assert_eq!(outcome.guidance.distance_remaining_km, 2.5);
        assert_eq!(outcome.guidance.eta_minutes, 3);
    }

    #[test]
    fn test_upcoming_clamps_at_last_step() {
        let mut tracker = tracking_tracker();
        let outcome = tracker
            .position_update(&PositionSample::new(0.02, 0.0))
            .unwrap();

        assert_eq!(outcome.current_step_index, 2);
        assert_eq!(outcome.guidance.instruction, "Arrive");
        assert_eq!(outcome.guidance.distance_remaining_km, 0.5);
        assert_eq!(outcome.guidance.eta_minutes, 1);
    }

    #[test]
    fn test_marker_follows_snapped_point() {
        let mut tracker = tracking_tracker();
        let outcome = tracker
            .position_update(&PositionSample::new(0.005, 0.002))
            .unwrap();

        assert!((outcome.snapped.point.lon - 0.005).abs() < 1e-6);
        assert!(outcome.snapped.point.lat.abs() < 1e-6);
        assert_eq!(tracker.last_snapped(), Some(outcome.snapped.point));
    }

    #[test]
    fn test_deviation_is_edge_triggered() {
        let mut tracker = tracking_tracker();
        let mut started = 0;
        let mut ended = 0;

        for km in [1.0, 2.0, 6.0, 7.0, 8.0, 3.0, 9.0] {
            let sample = PositionSample::new(0.005, lat_for_km(km));
            if let Some(event) = tracker.position_update(&sample).unwrap().deviation {
                match event {
                    DeviationEvent::Started { .. } => started += 1,
                    DeviationEvent::Ended => ended += 1,
                }
            }
        }

        assert_eq!(started, 2);
        assert_eq!(ended, 1);
        assert!(tracker.is_deviated());
    }

    #[test]
    fn test_threshold_crossing_boundary() {
        let mut tracker = tracking_tracker();

        let below = PositionSample::new(0.005, lat_for_km(4.99));
        assert!(tracker.position_update(&below).unwrap().deviation.is_none());

        let above = PositionSample::new(0.005, lat_for_km(5.01));
        assert!(matches!(
            tracker.position_update(&above).unwrap().deviation,
            Some(DeviationEvent::Started { .. })
        ));

        // Holding above the threshold stays silent
        assert!(tracker.position_update(&above).unwrap().deviation.is_none());

        // Dropping back re-arms the detector
        assert_eq!(
            tracker.position_update(&below).unwrap().deviation,
            Some(DeviationEvent::Ended)
        );
    }

    #[test]
    fn test_clear_then_new_route_resets_state() {
        let mut tracker = tracking_tracker();
        tracker
            .position_update(&PositionSample::new(0.02, lat_for_km(8.0)))
            .unwrap();
        assert!(tracker.is_deviated());
        assert_eq!(tracker.current_step_index(), 2);

        tracker.route_cleared();
        assert!(!tracker.is_tracking());
        assert!(tracker.route().is_none());
        assert!(!tracker.is_deviated());
        assert_eq!(tracker.current_step_index(), 0);
        assert!(tracker.last_snapped().is_none());

        tracker.route_received(test_route());
        tracker.start_tracking().unwrap();
        assert_eq!(tracker.current_step_index(), 0);
        assert!(!tracker.is_deviated());
    }

    #[test]
    fn test_new_route_resets_but_keeps_tracking() {
        let mut tracker = tracking_tracker();
        tracker
            .position_update(&PositionSample::new(0.02, lat_for_km(8.0)))
            .unwrap();
        assert!(tracker.is_deviated());

        tracker.route_received(test_route());
        assert!(tracker.is_tracking());
        assert!(!tracker.is_deviated());
        assert_eq!(tracker.current_step_index(), 0);
    }

    #[test]
    fn test_stop_keeps_route_for_restart() {
        let mut tracker = tracking_tracker();
        tracker.stop_tracking();
        assert!(!tracker.is_tracking());
        assert!(tracker.route().is_some());
        assert!(tracker.position_update(&PositionSample::new(0.0, 0.0)).is_none());
        assert!(tracker.start_tracking().is_ok());
    }
}
