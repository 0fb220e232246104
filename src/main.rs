//! Journease demo walkthrough
//!
//! Exercises the travel companion end to end against the mock providers:
//! trip budgeting, itinerary generation, a navigated journey with an
//! off-route excursion, and story playback.

use journease::api::{NavigationSession, SessionEvent, TextFormatter};
use journease::core::{GeoPoint, EARTH_RADIUS_M};
use journease::providers::{GeolocationError, MockGeolocationProvider, MockRoutingProvider};
use journease::route::{Route, RouteStep};
use journease::stories::{Story, StoryAdvance, StoryPlayer};
use journease::trip::{self, DietaryPreference, ItineraryRequest, TripRequest};
use journease::utils::AppConfig;

const HOTELS_CSV: &str = "\
name,type,city,phone,roomCharge
Sangam Residency,Hotel,Tiruchirappalli,+91-431-2414414,1500
Kauvery Care,Hospital,Tiruchirappalli,+91-431-4077777,
Marina Stay,Hotel,Chennai,+91-44-28524252,2200
";

const BUS_ROUTES_CSV: &str = "\
from,to,duration,fare
Chennai,Tiruchirappalli,6h,450
Tiruchirappalli,Ooty,8h,600
";

const ATTRACTIONS_CSV: &str = "\
name,city,entryFee
Rock Fort Temple,Tiruchirappalli,50
Marina Beach,Chennai,0
";

fn main() {
    println!("=== Journease Travel Companion Demo ===\n");

    let config = AppConfig::default();
    config.validate().expect("default config is valid");

    demonstrate_budget();
    demonstrate_itinerary();
    demonstrate_navigation(&config);
    demonstrate_stories();
}

fn demonstrate_budget() {
    println!("1. Trip budget estimate");

    let hotels = trip::parse_hotels(HOTELS_CSV).expect("hotels dataset parses");
    let routes = trip::parse_bus_routes(BUS_ROUTES_CSV).expect("bus dataset parses");
    let attractions = trip::parse_attractions(ATTRACTIONS_CSV).expect("attractions dataset parses");

    let request = TripRequest {
        persons: 2,
        destination: "Tiruchirappalli".to_string(),
        exact_budget: Some(5000),
        ..TripRequest::default()
    };

    let breakdown = trip::estimate_cost(
        &request,
        &hotels.records,
        &routes.records,
        &attractions.records,
    );
    println!("   Hotel: ₹{}", breakdown.hotel);
    println!("   Bus: ₹{}", breakdown.bus);
    println!("   Attractions: ₹{}", breakdown.attraction);
    println!("   Total: ₹{}", breakdown.total());
    match trip::within_budget(&request, &breakdown) {
        Some(true) => println!("   Within the ₹5000 budget\n"),
        Some(false) => println!("   Over the ₹5000 budget\n"),
        None => println!(),
    }
}

fn demonstrate_itinerary() {
    println!("2. Generated itinerary");

    let request = ItineraryRequest {
        destination: "Mysore".to_string(),
        days: 2,
        group_size: 2,
        travel_interests: vec!["Cultural".to_string(), "Heritage".to_string()],
        dietary: DietaryPreference::Vegetarian,
        budget_tier: trip::BudgetTier::Medium,
        preferred_places: vec!["Mysore Palace".to_string()],
        vehicles: vec!["Car".to_string()],
    };

    let itinerary = trip::generate(&request);
    println!("{}", itinerary.render_text());
}

fn demonstrate_navigation(config: &AppConfig) {
    println!("3. Navigated journey with an off-route excursion");

    let route = Route::single_leg(
        vec![
            RouteStep::new("Head east on Bridge Road", GeoPoint::new(0.0, 0.0), 1000.0, 60.0),
            RouteStep::new("Turn left onto Hill Street", GeoPoint::new(0.01, 0.0), 2000.0, 120.0),
            RouteStep::new("Arrive at destination", GeoPoint::new(0.02, 0.0), 500.0, 30.0),
        ],
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.01, 0.0),
            GeoPoint::new(0.02, 0.0),
        ],
    );

    let routing = MockRoutingProvider::new();
    routing.push_routes(vec![route]);

    let geolocation = MockGeolocationProvider::new();
    let geo_feed = geolocation.clone();

    let mut session = NavigationSession::new(
        config.navigation.session_config(),
        Box::new(routing),
        Box::new(geolocation),
    );

    let text = TextFormatter::compact();
    session.register_guidance_callback(Box::new(move |guidance| {
        println!("   guidance: {}", text.format(guidance));
    }));
    session.register_event_callback(Box::new(|event| match event {
        SessionEvent::RouteAccepted { steps, distance_m } => {
            println!("   route accepted: {} steps, {:.0} m", steps, distance_m);
        }
        SessionEvent::DeviationStarted { distance_km } => {
            println!("   !! {:.1} km off route", distance_km);
        }
        SessionEvent::DeviationEnded => println!("   back on route"),
        SessionEvent::StatusMessage { message } => println!("   status: {}", message),
        other => println!("   event: {:?}", other),
    }));

    session.process();
    session.start_tracking().expect("route was accepted");

    geo_feed.push_error(GeolocationError::Timeout);
    // A drive along the route that wanders 6 km off and comes back
    let off_route_lat = (6_000.0 / EARTH_RADIUS_M).to_degrees();
    geo_feed.push_track(&[
        (0.001, 0.0001),
        (0.008, 0.0002),
        (0.012, off_route_lat),
        (0.015, 0.0001),
        (0.02, 0.0),
    ]);
    session.process();
    session.stop_tracking();

    let state = session.state();
    println!(
        "   processed {} fixes, {} deviation(s), {} geolocation failure(s)\n",
        state.positions_processed, state.deviations_flagged, state.geolocation_failures
    );
}

fn demonstrate_stories() {
    println!("4. Story playback");

    let story = Story {
        id: 1,
        username: "TravelBug".to_string(),
        profile_pic: "https://pics.invalid/profile/1".to_string(),
        images: vec![
            "https://pics.invalid/story/sunrise".to_string(),
            "https://pics.invalid/story/market".to_string(),
            "https://pics.invalid/story/beach".to_string(),
        ],
    };

    let mut player = StoryPlayer::new(story);
    loop {
        println!(
            "   {} frame {}: {}",
            player.story().username,
            player.current_index() + 1,
            player.current_image().unwrap_or("-")
        );
        match player.advance() {
            StoryAdvance::Next(_) => {}
            StoryAdvance::Finished => {
                println!("   story finished, viewer closes");
                break;
            }
        }
    }
}
