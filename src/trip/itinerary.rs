//! Day-by-day itinerary generation
//!
//! Builds a framed, printable itinerary from built-in place, meal, souvenir,
//! and safety-tip tables. Selection rotates deterministically over the
//! tables by day and slot, so the same request always renders the same plan.

use crate::trip::budget::{BudgetTier, DietaryPreference};
use serde::{Deserialize, Serialize};

/// Known tourist cities and their signature places
pub fn city_places(city: &str) -> Option<&'static [&'static str]> {
    match city {
        "Bangalore" => Some(&["Lalbagh Botanical Garden", "Cubbon Park", "Commercial Street"]),
        "Mysore" => Some(&["Mysore Palace", "Brindavan Gardens", "Devaraja Market"]),
        "Coorg" => Some(&["Abbey Falls", "Raja's Seat", "Madikeri Fort"]),
        "Ooty" => Some(&["Ooty Lake", "Botanical Gardens", "Rose Garden"]),
        "Chennai" => Some(&["Marina Beach", "Fort St. George", "Express Avenue Mall"]),
        "North Goa" => Some(&["Baga Beach", "Fort Aguada", "Calangute Market"]),
        _ => None,
    }
}

/// Souvenirs with popular buying spots
fn city_souvenirs(city: &str) -> &'static [(&'static str, &'static str)] {
    match city {
        "Bangalore" => &[("Local Handicraft", "Chickpet Market"), ("Keychain", "Commercial Street")],
        "Mysore" => &[("Silk Saree", "Devaraja Market"), ("Postcard", "Mysore Palace Gift Shop")],
        "Coorg" => &[("Coffee", "Madikeri Market"), ("Handicraft", "Abbey Falls souvenir shops")],
        "Ooty" => &[("Tea", "Ooty Market"), ("Chocolate", "Charing Cross Shops")],
        "Chennai" => &[("Spices", "T. Nagar Market"), ("Sweets", "Express Avenue Mall")],
        _ => &[("Souvenir", "local market")],
    }
}

fn city_safety_tips(city: &str) -> &'static [&'static str] {
    match city {
        "Bangalore" => &[
            "Carry water during garden visits",
            "Avoid crowded streets at night",
            "Use safe transport options like cabs",
        ],
        "Mysore" => &[
            "Watch your belongings in markets",
            "Wear comfortable shoes for palace tours",
            "Carry sunscreen for outdoor activities",
        ],
        "Coorg" => &[
            "Carry raincoat during waterfalls visit",
            "Avoid venturing into dense forests alone",
            "Hire local guides for trekking",
        ],
        "Ooty" => &[
            "Dress warmly in the morning",
            "Be careful on hilly roads",
            "Keep children close near lakes",
        ],
        "Chennai" => &[
            "Avoid walking alone at night",
            "Use cabs for long distances",
            "Carry water during beach visits",
        ],
        "North Goa" => &[
            "Avoid swimming in rough sea",
            "Keep valuables safe on beaches",
            "Follow local beach guidelines",
        ],
        _ => &["Follow general safety tips."],
    }
}

fn dietary_meals(dietary: DietaryPreference) -> &'static [&'static str] {
    match dietary {
        DietaryPreference::Vegetarian => &[
            "Vegetable Curry",
            "Salad Bowl",
            "Paneer Dish",
            "Vegetable Sandwich",
            "Dosa",
            "Idli",
        ],
        DietaryPreference::NonVegetarian => &[
            "Chicken Curry",
            "Fish Fry",
            "Egg Sandwich",
            "Mutton Stew",
            "Grilled Fish",
            "Chicken Biryani",
        ],
        DietaryPreference::Both => &[
            "Mixed Platter",
            "Chicken & Veg Curry",
            "Paneer & Fish Dish",
        ],
    }
}

/// Itinerary form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryRequest {
    pub destination: String,
    pub days: u32,
    pub group_size: u32,
    pub travel_interests: Vec<String>,
    pub dietary: DietaryPreference,
    pub budget_tier: BudgetTier,
    pub preferred_places: Vec<String>,
    pub vehicles: Vec<String>,
}

/// One planned day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub breakfast: String,
    pub morning_activity: String,
    pub lunch: String,
    pub afternoon_activity: String,
    pub evening_activity: String,
    pub dinner: String,
    pub location: String,
    pub vehicle: String,
    pub souvenir: String,
    pub safety_tip: String,
}

/// Complete generated itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub request: ItineraryRequest,
    pub day_plans: Vec<DayPlan>,
}

/// Rotating pick: day `seed` takes the next entry, wrapping around
fn pick<'a>(options: &[&'a str], seed: usize) -> Option<&'a str> {
    if options.is_empty() {
        None
    } else {
        Some(options[seed % options.len()])
    }
}

/// Generate the full day-by-day plan for a request
pub fn generate(request: &ItineraryRequest) -> Itinerary {
    let city = request.destination.as_str();
    let meals = dietary_meals(request.dietary);
    let souvenirs = city_souvenirs(city);
    let tips = city_safety_tips(city);

    let mut activity_pool: Vec<&str> =
        request.travel_interests.iter().map(String::as_str).collect();
    activity_pool.extend(request.preferred_places.iter().map(String::as_str));
    let places: Vec<&str> = request.preferred_places.iter().map(String::as_str).collect();
    let vehicles: Vec<&str> = request.vehicles.iter().map(String::as_str).collect();

    let mut day_plans = Vec::with_capacity(request.days as usize);
    for day in 1..=request.days {
        let d = (day - 1) as usize;
        day_plans.push(DayPlan {
            day,
            breakfast: pick(meals, d * 3).unwrap_or("Local breakfast").to_string(),
            lunch: pick(meals, d * 3 + 1).unwrap_or("Local lunch").to_string(),
            dinner: pick(meals, d * 3 + 2).unwrap_or("Local dinner").to_string(),
            morning_activity: pick(&activity_pool, d * 3).unwrap_or("Sightseeing").to_string(),
            afternoon_activity: pick(&activity_pool, d * 3 + 1)
                .unwrap_or("Sightseeing")
                .to_string(),
            evening_activity: pick(&activity_pool, d * 3 + 2)
                .unwrap_or("Sightseeing")
                .to_string(),
            location: pick(&places, d).unwrap_or("city center").to_string(),
            vehicle: pick(&vehicles, d).unwrap_or("local transport").to_string(),
            souvenir: souvenirs[d % souvenirs.len()].0.to_string(),
            safety_tip: tips[d % tips.len()].to_string(),
        });
    }

    Itinerary {
        request: request.clone(),
        day_plans,
    }
}

impl Itinerary {
    /// Render the framed printable itinerary
    pub fn render_text(&self) -> String {
        let request = &self.request;
        let mut out = String::new();

        out.push_str("==================== TRAVEL ITINERARY ====================\n");
        out.push_str(&format!("Destination: {}\n", request.destination));
        out.push_str(&format!("Duration: {} days\n", request.days));
        out.push_str(&format!("Group Size: {} persons\n", request.group_size));
        out.push_str(&format!(
            "Travel Interests: {}\n",
            request.travel_interests.join(", ")
        ));
        out.push_str(&format!("Dietary Preference: {:?}\n", request.dietary));
        out.push_str(&format!("Budget Level: {:?}\n", request.budget_tier));
        if !request.preferred_places.is_empty() {
            out.push_str(&format!(
                "Preferred Places: {}\n",
                request.preferred_places.join(", ")
            ));
        }
        if !request.vehicles.is_empty() {
            out.push_str(&format!("Preferred Vehicles: {}\n", request.vehicles.join(", ")));
        }
        out.push_str("===========================================================\n\n");

        for plan in &self.day_plans {
            out.push_str(&format!("Day {}:\n", plan.day));
            out.push_str(&format!("- Breakfast: {} at hotel or local cafe\n", plan.breakfast));
            out.push_str(&format!(
                "- Morning: {} around {} using {}\n",
                plan.morning_activity, plan.location, plan.vehicle
            ));
            out.push_str(&format!("- Lunch: {} at local restaurant\n", plan.lunch));
            out.push_str(&format!(
                "- Afternoon: {} and explore local attractions\n",
                plan.afternoon_activity
            ));
            out.push_str(&format!(
                "- Evening: {}, free time for shopping or photography\n",
                plan.evening_activity
            ));
            out.push_str(&format!("- Dinner: {} at recommended local cuisine\n", plan.dinner));
            out.push_str(&format!(
                "- Memory Suggestion: You may consider buying a '{}' (popular spot available in the city)\n",
                plan.souvenir
            ));
            out.push_str(&format!("- Safety Tip: {}\n", plan.safety_tip));
            out.push_str("----------------------------------------------------\n");
        }
        out.push_str("==================== END OF ITINERARY ====================\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ItineraryRequest {
        ItineraryRequest {
            destination: "Mysore".to_string(),
            days: 3,
            group_size: 2,
            travel_interests: vec!["Cultural".to_string(), "Heritage".to_string()],
            dietary: DietaryPreference::Vegetarian,
            budget_tier: BudgetTier::Medium,
            preferred_places: vec!["Mysore Palace".to_string()],
            vehicles: vec!["Car".to_string(), "Walking".to_string()],
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate(&request());
        let second = generate(&request());
        assert_eq!(first, second);
        assert_eq!(first.render_text(), second.render_text());
    }

    #[test]
    fn test_one_plan_per_day() {
        let itinerary = generate(&request());
        assert_eq!(itinerary.day_plans.len(), 3);
        assert_eq!(itinerary.day_plans[0].day, 1);
        assert_eq!(itinerary.day_plans[2].day, 3);
    }

    #[test]
    fn test_meals_respect_dietary_preference() {
        let itinerary = generate(&request());
        let meals = dietary_meals(DietaryPreference::Vegetarian);
        for plan in &itinerary.day_plans {
            assert!(meals.contains(&plan.breakfast.as_str()));
            assert!(meals.contains(&plan.lunch.as_str()));
            assert!(meals.contains(&plan.dinner.as_str()));
        }
    }

    #[test]
    fn test_days_rotate_through_tables() {
        let itinerary = generate(&request());
        // Six vegetarian meals and three days: breakfasts all differ
        let breakfasts: Vec<&str> = itinerary
            .day_plans
            .iter()
            .map(|p| p.breakfast.as_str())
            .collect();
        assert_eq!(breakfasts.len(), 3);
        assert_ne!(breakfasts[0], breakfasts[1]);
        assert_ne!(breakfasts[1], breakfasts[2]);
    }

    #[test]
    fn test_unknown_city_uses_fallbacks() {
        let mut req = request();
        req.destination = "Atlantis".to_string();
        req.preferred_places.clear();
        req.vehicles.clear();

        let itinerary = generate(&req);
        let plan = &itinerary.day_plans[0];
        assert_eq!(plan.location, "city center");
        assert_eq!(plan.vehicle, "local transport");
        assert_eq!(plan.souvenir, "Souvenir");
        assert_eq!(plan.safety_tip, "Follow general safety tips.");
    }

    #[test]
    fn test_render_text_frame() {
        let text = generate(&request()).render_text();
        assert!(text.starts_with("==================== TRAVEL ITINERARY ===================="));
        assert!(text.contains("Destination: Mysore"));
        assert!(text.contains("Day 3:"));
        assert!(text.trim_end().ends_with("==================== END OF ITINERARY ===================="));
    }

    #[test]
    fn test_known_city_catalog() {
        assert!(city_places("Chennai").is_some());
        assert_eq!(city_places("Chennai").unwrap().len(), 3);
        assert!(city_places("Atlantis").is_none());
    }
}
