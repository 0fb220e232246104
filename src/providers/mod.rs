//! External service abstraction layer
//!
//! The routing and geolocation services are consumed as black boxes behind
//! polling traits, so the session logic can be exercised against mocks and
//! real integrations can be swapped in without touching the core.

pub mod routing;
pub mod geolocation;
pub mod mock;

pub use routing::{RouteEvent, RoutingProvider};
pub use geolocation::{GeolocationError, GeolocationProvider};
pub use mock::{MockGeolocationProvider, MockRoutingProvider};
