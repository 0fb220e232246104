//! Mock providers for testing and development
//!
//! Both mocks share their queue across clones, so a test or demo can keep a
//! feeder handle while the session owns the provider, pushing events between
//! `process` calls the way the real services deliver them over time.

use crate::core::PositionSample;
use crate::providers::geolocation::{GeolocationError, GeolocationProvider};
use crate::providers::routing::{RouteEvent, RoutingProvider};
use crate::route::Route;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Queue-backed routing service for tests and demos
#[derive(Clone, Default)]
pub struct MockRoutingProvider {
    events: Arc<Mutex<VecDeque<RouteEvent>>>,
}

impl MockRoutingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a computed-routes event (first candidate wins downstream)
    pub fn push_routes(&self, routes: Vec<Route>) {
        self.events.lock().unwrap().push_back(RouteEvent::Computed(routes));
    }

    pub fn push_clear(&self) {
        self.events.lock().unwrap().push_back(RouteEvent::Cleared);
    }

    pub fn pending(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl RoutingProvider for MockRoutingProvider {
    fn poll_event(&mut self) -> Option<RouteEvent> {
        self.events.lock().unwrap().pop_front()
    }
}

/// Queue-backed location service for tests and demos
#[derive(Clone, Default)]
pub struct MockGeolocationProvider {
    fixes: Arc<Mutex<VecDeque<Result<PositionSample, GeolocationError>>>>,
}

impl MockGeolocationProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_fix(&self, sample: PositionSample) {
        self.fixes.lock().unwrap().push_back(Ok(sample));
    }

    pub fn push_error(&self, error: GeolocationError) {
        self.fixes.lock().unwrap().push_back(Err(error));
    }

    /// Queue a walk along a sequence of (lon, lat) coordinates
    pub fn push_track(&self, coords: &[(f64, f64)]) {
        for &(lon, lat) in coords {
            self.push_fix(PositionSample::new(lon, lat));
        }
    }

    pub fn pending(&self) -> usize {
        self.fixes.lock().unwrap().len()
    }
}

impl GeolocationProvider for MockGeolocationProvider {
    fn poll_fix(&mut self) -> Option<Result<PositionSample, GeolocationError>> {
        self.fixes.lock().unwrap().pop_front()
    }
}
