//! Card entities.
//!
//! ## Key Types
//!
//! - `Card`: A card with its pose, depth rank and optional flight
//! - `FlightRequest`: Target, duration, ranks, curve and landing hook
//! - `Flight`: The motion record of an active flight
//! - `FlightStatus`: What a single `advance` did

pub mod card;

pub use card::{Card, Flight, FlightRequest, FlightStatus, LandingHook, MIN_FLIGHT_DURATION};
