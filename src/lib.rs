//! Journease travel companion core
//!
//! Library backing a travel-planning app: photo collage composition,
//! turn-by-turn route tracking with off-route alerts, trip budgeting over
//! CSV datasets, itinerary generation, and story playback. Map rendering,
//! route computation, geolocation, and image storage are external services
//! consumed through the provider traits.

pub mod core;
pub mod collage;
pub mod route;
pub mod providers;
pub mod media;
pub mod trip;
pub mod stories;
pub mod validation;
pub mod api;
pub mod utils;

// Re-export commonly used types
pub use self::core::{
    GeoPoint, PositionSample, DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, OFF_ROUTE_THRESHOLD_KM,
};
pub use collage::{
    build_collage, compose, decode_selection, export_png, plan, CollageError, CollageLayout,
    CollagePlan, CollageResult, DecodeJoin, ImageDimensions, Placement,
};
pub use route::{
    haversine_m, nearest_point_on_line, DeviationEvent, Guidance, Route, RouteLeg, RouteStep,
    RouteTracker, TrackerConfig, TrackerError, TrackingState,
};
pub use providers::{
    GeolocationError, GeolocationProvider, MockGeolocationProvider, MockRoutingProvider,
    RouteEvent, RoutingProvider,
};
pub use media::{MediaFile, MockUploadEndpoint, StoredImage, UploadEndpoint, UploadError};
pub use trip::{
    estimate_cost, parse_attractions, parse_bus_routes, parse_hotels, BudgetTier, CostBreakdown,
    DietaryPreference, Itinerary, ItineraryRequest, TripRequest,
};
pub use stories::{Story, StoryAdvance, StoryPlayer};
pub use validation::RouteValidator;
pub use api::{ApiError, ApiResult, NavigationSession, SessionConfig, SessionEvent};
pub use utils::{AppConfig, ConfigError};
