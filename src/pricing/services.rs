//! Pricing service functions over a destination's catalog.
//!
//! These resolve the form's selections against the destination's hotels and
//! transport options, then hand off to the pure calculators.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Destination, Hotel, TransportOption};

use super::calculators::{compute_nights, guest_surcharge, hotel_cost, transport_cost};
use super::itinerary::generate_timetable;
use super::models::{PricingMode, PricingRules, Quote, Timetable, TripRequest};

/// Find a hotel by id; a miss is not an error
pub fn find_hotel<'a>(destination: &'a Destination, hotel_id: Option<&str>) -> Option<&'a Hotel> {
    let hotel_id = hotel_id?;
    destination.hotels.iter().find(|h| h.id == hotel_id)
}

/// Find a transport option by its type label across taxi and other options
pub fn find_transport<'a>(
    destination: &'a Destination,
    transport_type: Option<&str>,
) -> Option<&'a TransportOption> {
    let transport_type = transport_type?;
    destination
        .transport_options()
        .find(|t| t.kind == transport_type)
}

/// Reject date ranges longer than the rules allow
pub fn check_stay(request: &TripRequest, rules: &PricingRules) -> Result<i64, BookingError> {
    let nights = compute_nights(request.check_in, request.check_out);
    if nights > rules.max_nights {
        return Err(BookingError::StayTooLong {
            nights,
            max_nights: rules.max_nights,
        });
    }
    Ok(nights)
}

/// Compute the full quote for a trip request.
///
/// Nights are derived once and shared by every cost line. Nothing is cached
/// between calls; the same inputs always give the same quote. A stay longer
/// than `rules.max_nights` is treated like a missing date range.
pub fn compute_quote(
    destination: &Destination,
    request: &TripRequest,
    rules: &PricingRules,
) -> Quote {
    let guests = request.guests.max(1);
    let nights = compute_nights(request.check_in, request.check_out);
    if nights < 1 || nights > rules.max_nights {
        return Quote::empty(guests);
    }

    let hotel = find_hotel(destination, request.hotel_id.as_deref());
    let transport = find_transport(destination, request.transport_type.as_deref());

    let hotel_cost = hotel_cost(hotel, nights);
    let guest_surcharge = guest_surcharge(guests, nights, rules);
    let transport_cost = transport_cost(
        transport,
        nights,
        request.pricing_mode,
        request.km_per_day,
        rules,
    );

    Quote {
        nights,
        hotel_cost,
        guest_surcharge,
        transport_cost,
        total: hotel_cost + guest_surcharge + transport_cost,
        guests,
        timetable: generate_timetable(destination, nights),
    }
}

/// Transport as it was booked
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedTransport {
    #[serde(rename = "type")]
    pub kind: String,
    pub pricing_mode: PricingMode,
    /// Per-day or per-km rate, depending on the mode
    #[serde(with = "rust_decimal::serde::str_option")]
    pub rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km_per_day: Option<u32>,
}

/// Frozen snapshot of a confirmed plan. Lives only in the transient cache.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub id: Uuid,
    pub destination_id: i64,
    pub destination_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub guests: u32,
    pub hotel: Hotel,
    pub transport: Option<BookedTransport>,
    #[serde(with = "rust_decimal::serde::str")]
    pub hotel_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub guest_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub transport_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub timetable: Timetable,
    pub confirmed_at: DateTime<Utc>,
}

/// Reasons a booking cannot be confirmed yet
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Booking is missing required fields: {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    #[error("Hotel {hotel_id} is not offered at this destination")]
    UnknownHotel { hotel_id: String },

    #[error("Stay of {nights} nights exceeds the {max_nights}-night limit")]
    StayTooLong { nights: i64, max_nights: i64 },
}

/// Freeze the current quote and selections into a confirmation.
///
/// Requires both dates and a hotel that resolves in the catalog.
pub fn confirm_booking(
    destination: &Destination,
    request: &TripRequest,
    rules: &PricingRules,
) -> Result<BookingConfirmation, BookingError> {
    let (Some(check_in), Some(check_out), Some(hotel_id)) =
        (request.check_in, request.check_out, request.hotel_id.as_deref())
    else {
        return Err(BookingError::Incomplete {
            missing: request.missing_fields(),
        });
    };

    check_stay(request, rules)?;

    let hotel = find_hotel(destination, Some(hotel_id)).ok_or_else(|| {
        BookingError::UnknownHotel {
            hotel_id: hotel_id.to_string(),
        }
    })?;

    let quote = compute_quote(destination, request, rules);

    let transport = find_transport(destination, request.transport_type.as_deref()).map(|t| {
        BookedTransport {
            kind: t.kind.clone(),
            pricing_mode: request.pricing_mode,
            rate: request.pricing_mode.rate_of(t),
            km_per_day: match request.pricing_mode {
                PricingMode::PerKm => Some(request.km_per_day),
                PricingMode::FullDay => None,
            },
        }
    });

    let confirmation = BookingConfirmation {
        id: Uuid::new_v4(),
        destination_id: destination.id,
        destination_name: destination.name.clone(),
        check_in,
        check_out,
        nights: quote.nights,
        guests: quote.guests,
        hotel: hotel.clone(),
        transport,
        hotel_cost: quote.hotel_cost,
        guest_surcharge: quote.guest_surcharge,
        transport_cost: quote.transport_cost,
        total: quote.total,
        timetable: quote.timetable,
        confirmed_at: Utc::now(),
    };

    tracing::info!(
        booking_id = %confirmation.id,
        destination = %confirmation.destination_name,
        nights = confirmation.nights,
        guests = confirmation.guests,
        total = %confirmation.total,
        "Plan created"
    );

    Ok(confirmation)
}
