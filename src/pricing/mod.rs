//! Trip pricing engine.
//!
//! Turns a trip request (dates, guests, hotel, transport) into a cost
//! breakdown and a day-by-day timetable for one destination.

pub mod calculators;
pub mod itinerary;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::round_money;
pub use itinerary::generate_timetable;
pub use models::{PricingMode, PricingRules, Quote, Timetable, TripRequest};
pub use responses::{Currency, ErrorResponse, MoneyResponse, QuoteResponse};
pub use routes::router;
pub use services::{
    check_stay, compute_quote, confirm_booking, BookingConfirmation, BookingError,
};
