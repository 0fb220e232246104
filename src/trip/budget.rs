//! Trip cost estimation
//!
//! Mirrors the dashboard's budget card: match each dataset against the
//! requested destination, take the first hit per dataset, and multiply its
//! unit charge by the head count. Datasets without a match contribute
//! nothing.

use crate::trip::datasets::{Attraction, BusRoute, Hotel};
use serde::{Deserialize, Serialize};

/// Coarse spending level selected on the trip form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
    Luxury,
}

/// Meal preference selected on the trip form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPreference {
    Vegetarian,
    NonVegetarian,
    Both,
}

/// Trip planning form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub persons: u32,
    /// City or attraction name; empty matches everything
    pub destination: String,
    pub budget_tier: BudgetTier,
    pub exact_budget: Option<u32>,
    pub dietary: DietaryPreference,
    pub emergency_contact: Option<String>,
    pub companion_contact: Option<String>,
    pub notes: Option<String>,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            persons: 1,
            destination: String::new(),
            budget_tier: BudgetTier::Low,
            exact_budget: None,
            dietary: DietaryPreference::Vegetarian,
            emergency_contact: None,
            companion_contact: None,
            notes: None,
        }
    }
}

/// Per-dataset component costs for one trip request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub hotel: u32,
    pub bus: u32,
    pub attraction: u32,
}

impl CostBreakdown {
    pub fn total(&self) -> u32 {
        self.hotel + self.bus + self.attraction
    }
}

/// Case-insensitive substring match; an empty query matches everything
pub fn matches_destination(city: &str, destination: &str) -> bool {
    destination.is_empty() || city.to_lowercase().contains(&destination.to_lowercase())
}

/// Estimate the trip cost against the loaded datasets
pub fn estimate_cost(
    request: &TripRequest,
    hotels: &[Hotel],
    routes: &[BusRoute],
    attractions: &[Attraction],
) -> CostBreakdown {
    let destination = request.destination.trim();

    let hotel = hotels
        .iter()
        .find(|h| h.category == "Hotel" && matches_destination(&h.city, destination))
        .and_then(|h| h.room_charge)
        .map(|charge| charge * request.persons)
        .unwrap_or(0);

    // Bus routes only match an explicit destination, on either endpoint
    let bus = if destination.is_empty() {
        0
    } else {
        routes
            .iter()
            .find(|r| {
                matches_destination(&r.destination, destination)
                    || matches_destination(&r.origin, destination)
            })
            .and_then(|r| r.fare)
            .map(|fare| fare * request.persons)
            .unwrap_or(0)
    };

    let attraction = attractions
        .iter()
        .find(|a| matches_destination(&a.city, destination))
        .and_then(|a| a.entry_fee)
        .map(|fee| fee * request.persons)
        .unwrap_or(0);

    CostBreakdown {
        hotel,
        bus,
        attraction,
    }
}

/// Whether the estimate stays inside the exact budget, when one was given
pub fn within_budget(request: &TripRequest, breakdown: &CostBreakdown) -> Option<bool> {
    request.exact_budget.map(|budget| breakdown.total() <= budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotels() -> Vec<Hotel> {
        vec![
            Hotel {
                name: "Apollo Care".to_string(),
                category: "Hospital".to_string(),
                city: "Tiruchirappalli".to_string(),
                phone: String::new(),
                room_charge: Some(9999),
            },
            Hotel {
                name: "Sangam Residency".to_string(),
                category: "Hotel".to_string(),
                city: "Tiruchirappalli".to_string(),
                phone: String::new(),
                room_charge: Some(1500),
            },
        ]
    }

    fn routes() -> Vec<BusRoute> {
        vec![BusRoute {
            origin: "Chennai".to_string(),
            destination: "Tiruchirappalli".to_string(),
            duration: "6h".to_string(),
            fare: Some(450),
        }]
    }

    fn attractions() -> Vec<Attraction> {
        vec![Attraction {
            name: "Rock Fort".to_string(),
            city: "Tiruchirappalli".to_string(),
            entry_fee: Some(50),
        }]
    }

    fn request_for(destination: &str, persons: u32) -> TripRequest {
        TripRequest {
            persons,
            destination: destination.to_string(),
            ..TripRequest::default()
        }
    }

    #[test]
    fn test_cost_scales_with_persons() {
        let breakdown = estimate_cost(&request_for("trichy", 2), &hotels(), &routes(), &attractions());
        // "trichy" is not a substring of "Tiruchirappalli": nothing matches
        assert_eq!(breakdown.total(), 0);

        let breakdown = estimate_cost(
            &request_for("tiruchirappalli", 2),
            &hotels(),
            &routes(),
            &attractions(),
        );
        assert_eq!(breakdown.hotel, 3000);
        assert_eq!(breakdown.bus, 900);
        assert_eq!(breakdown.attraction, 100);
        assert_eq!(breakdown.total(), 4000);
    }

    #[test]
    fn test_hospitals_never_priced_as_hotels() {
        let only_hospital = vec![hotels()[0].clone()];
        let breakdown = estimate_cost(
            &request_for("tiruchirappalli", 1),
            &only_hospital,
            &[],
            &[],
        );
        assert_eq!(breakdown.hotel, 0);
    }

    #[test]
    fn test_bus_matches_either_endpoint() {
        let breakdown = estimate_cost(&request_for("chennai", 1), &[], &routes(), &[]);
        assert_eq!(breakdown.bus, 450);
    }

    #[test]
    fn test_empty_destination_skips_bus_but_matches_first_hotel() {
        let breakdown = estimate_cost(&request_for("", 1), &hotels(), &routes(), &attractions());
        assert_eq!(breakdown.bus, 0);
        assert_eq!(breakdown.hotel, 1500);
        assert_eq!(breakdown.attraction, 50);
    }

    #[test]
    fn test_within_budget() {
        let mut request = request_for("tiruchirappalli", 1);
        let breakdown = estimate_cost(&request, &hotels(), &routes(), &attractions());
        assert_eq!(within_budget(&request, &breakdown), None);

        request.exact_budget = Some(5000);
        assert_eq!(within_budget(&request, &breakdown), Some(true));
        request.exact_budget = Some(100);
        assert_eq!(within_budget(&request, &breakdown), Some(false));
    }
}
