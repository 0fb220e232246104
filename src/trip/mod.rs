//! Trip planning: datasets, cost estimation, itinerary generation

pub mod datasets;
pub mod budget;
pub mod itinerary;

pub use datasets::{
    parse_attractions, parse_bus_routes, parse_hotels, Attraction, BusRoute, DatasetError, Hotel,
    ParsedDataset,
};
pub use budget::{
    estimate_cost, matches_destination, within_budget, BudgetTier, CostBreakdown,
    DietaryPreference, TripRequest,
};
pub use itinerary::{city_places, generate, DayPlan, Itinerary, ItineraryRequest};
