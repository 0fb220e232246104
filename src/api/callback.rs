//! Callback-based navigation session
//!
//! Owns the tracker, the validator, and the external providers, and turns
//! their event streams into guidance and session-event callbacks. Events are
//! applied synchronously in arrival order; a new position fix fully
//! supersedes the previous one. The session is an explicitly constructed,
//! owned value with explicit shutdown.

use crate::api::types::{ApiError, ApiResult, SessionConfig, SessionState};
use crate::providers::{GeolocationProvider, RouteEvent, RoutingProvider};
use crate::route::{DeviationEvent, Guidance, RouteTracker};
use crate::validation::RouteValidator;
use std::collections::HashMap;

/// Callback function type for guidance updates
pub type GuidanceCallback = Box<dyn Fn(&Guidance) + Send>;

/// Callback function type for session events
pub type EventCallback = Box<dyn Fn(&SessionEvent) + Send>;

/// Session events that can trigger callbacks
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A computed route passed validation and was stored
    RouteAccepted { steps: usize, distance_m: f64 },
    /// Every candidate route failed validation
    RouteRejected { reason: String },
    /// The route was cleared; tracking stopped
    RouteCleared,
    TrackingStarted,
    TrackingStopped,
    /// The traveller crossed beyond the off-route threshold
    DeviationStarted { distance_km: f64 },
    /// The traveller returned to the route
    DeviationEnded,
    /// One-line status for the traveller (geolocation failures etc.)
    StatusMessage { message: String },
}

/// Callback registration handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackHandle(u32);

impl CallbackHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Navigation session wiring providers, tracker, and callbacks together
pub struct NavigationSession {
    routing: Box<dyn RoutingProvider>,
    geolocation: Box<dyn GeolocationProvider>,
    tracker: RouteTracker,
    validator: RouteValidator,
    config: SessionConfig,
    state: SessionState,
    callback_counter: u32,
    guidance_callbacks: HashMap<CallbackHandle, GuidanceCallback>,
    event_callbacks: HashMap<CallbackHandle, EventCallback>,
}

impl NavigationSession {
    pub fn new(
        config: SessionConfig,
        routing: Box<dyn RoutingProvider>,
        geolocation: Box<dyn GeolocationProvider>,
    ) -> Self {
        let state = SessionState::new(config.fallback_center);
        let tracker = RouteTracker::new(config.tracker.clone());
        Self {
            routing,
            geolocation,
            tracker,
            validator: RouteValidator::new(),
            config,
            state,
            callback_counter: 0,
            guidance_callbacks: HashMap::new(),
            event_callbacks: HashMap::new(),
        }
    }

    /// Register a guidance callback
    pub fn register_guidance_callback(&mut self, callback: GuidanceCallback) -> CallbackHandle {
        self.callback_counter += 1;
        let handle = CallbackHandle(self.callback_counter);
        self.guidance_callbacks.insert(handle, callback);
        handle
    }

    /// Register a session event callback
    pub fn register_event_callback(&mut self, callback: EventCallback) -> CallbackHandle {
        self.callback_counter += 1;
        let handle = CallbackHandle(self.callback_counter);
        self.event_callbacks.insert(handle, callback);
        handle
    }

    /// Unregister a callback of either kind
    pub fn unregister_callback(&mut self, handle: CallbackHandle) -> ApiResult<()> {
        let removed = self.guidance_callbacks.remove(&handle).is_some()
            || self.event_callbacks.remove(&handle).is_some();
        if removed {
            Ok(())
        } else {
            Err(ApiError::InvalidCallbackHandle)
        }
    }

    /// Begin consuming position fixes; requires an accepted route
    pub fn start_tracking(&mut self) -> ApiResult<()> {
        self.tracker
            .start_tracking()
            .map_err(|_| ApiError::NoRouteAvailable)?;
        self.state.tracking = true;
        self.trigger_event(SessionEvent::TrackingStarted);
        Ok(())
    }

    /// Stop consuming position fixes; the route stays stored
    pub fn stop_tracking(&mut self) {
        self.tracker.stop_tracking();
        self.state.tracking = false;
        self.trigger_event(SessionEvent::TrackingStopped);
    }

    /// Drain pending provider events and trigger callbacks.
    ///
    /// Returns the number of events applied.
    pub fn process(&mut self) -> u32 {
        let mut applied = 0;

        while let Some(event) = self.routing.poll_event() {
            self.apply_route_event(event);
            applied += 1;
        }

        while let Some(fix) = self.geolocation.poll_fix() {
            match fix {
                Ok(sample) => self.apply_position_sample(sample),
                Err(error) => {
                    self.state.geolocation_failures += 1;
                    self.state.marker = self.config.fallback_center;
                    self.trigger_event(SessionEvent::StatusMessage {
                        message: error.status_message(),
                    });
                }
            }
            applied += 1;
        }

        applied
    }

    fn apply_route_event(&mut self, event: RouteEvent) {
        match event {
            RouteEvent::Computed(candidates) => {
                let result = self.validator.validate_routes(candidates);
                for warning in &result.warnings {
                    self.trigger_event(SessionEvent::StatusMessage {
                        message: warning.clone(),
                    });
                }
                // Only the first usable candidate is kept
                if let Some(route) = result.valid.into_iter().next() {
                    let steps = route.primary_steps().len();
                    let distance_m = route.distance_m;
                    self.tracker.route_received(route);
                    self.state.route_present = true;
                    self.state.routes_received += 1;
                    self.trigger_event(SessionEvent::RouteAccepted { steps, distance_m });
                } else {
                    let reason = result
                        .rejected
                        .first()
                        .map(|(_, e)| e.to_string())
                        .unwrap_or_else(|| "no candidate routes".to_string());
                    self.trigger_event(SessionEvent::RouteRejected { reason });
                }
            }
            RouteEvent::Cleared => {
                self.tracker.route_cleared();
                self.state.route_present = false;
                self.state.tracking = false;
                self.trigger_event(SessionEvent::RouteCleared);
            }
        }
    }

    fn apply_position_sample(&mut self, sample: crate::core::PositionSample) {
        self.state.positions_processed += 1;

        match self.tracker.position_update(&sample) {
            Some(outcome) => {
                // While navigating the marker sits on the snapped point
                self.state.marker = outcome.snapped.point;
                match outcome.deviation {
                    Some(DeviationEvent::Started { distance_km }) => {
                        self.state.deviations_flagged += 1;
                        self.trigger_event(SessionEvent::DeviationStarted { distance_km });
                    }
                    Some(DeviationEvent::Ended) => {
                        self.trigger_event(SessionEvent::DeviationEnded);
                    }
                    None => {}
                }
                self.trigger_guidance(&outcome.guidance);
            }
            None => {
                // Not navigating: the marker follows the raw fix
                self.state.marker = sample.point;
            }
        }
    }

    fn trigger_guidance(&self, guidance: &Guidance) {
        for callback in self.guidance_callbacks.values() {
            callback(guidance);
        }
    }

    fn trigger_event(&self, event: SessionEvent) {
        for callback in self.event_callbacks.values() {
            callback(&event);
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    pub fn callback_count(&self) -> (usize, usize) {
        (self.guidance_callbacks.len(), self.event_callbacks.len())
    }

    /// Drop callbacks and forget the route; the session can be rebuilt after
    pub fn shutdown(&mut self) {
        self.guidance_callbacks.clear();
        self.event_callbacks.clear();
        self.tracker.route_cleared();
        self.state = SessionState::new(self.config.fallback_center);
    }
}
