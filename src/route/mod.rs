//! Route model, geometry, and live tracking

pub mod model;
pub mod geometry;
pub mod tracker;

pub use model::{Route, RouteLeg, RouteStep};
pub use geometry::{haversine_m, nearest_point_on_line, SnappedPoint};
pub use tracker::{
    DeviationEvent, DeviationState, Guidance, PositionOutcome, RouteTracker, TrackerConfig,
    TrackerError, TrackerResult, TrackingState,
};
