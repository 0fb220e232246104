//! Routing service interface

use crate::route::Route;

/// Events emitted by the routing service
#[derive(Debug, Clone, PartialEq)]
pub enum RouteEvent {
    /// One or more candidate routes were computed; only the first is used
    Computed(Vec<Route>),
    /// The current origin/destination was cleared
    Cleared,
}

/// Interface to the route computation service
pub trait RoutingProvider {
    /// Poll for the next pending route event.
    /// Returns `None` when no event is waiting (non-blocking).
    fn poll_event(&mut self) -> Option<RouteEvent>;
}
