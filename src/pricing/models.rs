//! Trip request and quote value types.
//!
//! `TripRequest` replaces ad-hoc form state: the booking form owns one and
//! rebuilds the `Quote` from it whenever a field changes.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::{ItineraryItem, TransportOption};

/// Guests assumed when the form value is missing or invalid
pub const DEFAULT_GUESTS: u32 = 1;

/// Kilometres per day assumed when the form value is missing or invalid
pub const DEFAULT_KM_PER_DAY: u32 = 50;

/// How a transport option is charged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PricingMode {
    /// Flat daily rate, discounted for longer stays
    #[default]
    FullDay,
    /// Distance based, with a minimum daily charge
    PerKm,
}

impl PricingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMode::FullDay => "fullDay",
            PricingMode::PerKm => "perKm",
        }
    }

    /// Unit rate this mode reads from an option, if present
    pub fn rate_of(&self, option: &TransportOption) -> Option<Decimal> {
        match self {
            PricingMode::FullDay => option.price_per_day,
            PricingMode::PerKm => option.price_per_km,
        }
    }
}

/// Rate tables used by the calculators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRules {
    /// Per guest per night for the first `included_guests`
    pub guest_rate: Decimal,
    /// Per guest per night beyond `included_guests`
    pub extra_guest_rate: Decimal,
    pub included_guests: u32,
    /// (minimum nights, multiplier), longest tier first
    pub duration_discounts: Vec<(i64, Decimal)>,
    /// Per-km billing never charges for fewer km than this per day
    pub min_km_per_day: u32,
    /// Longest stay that can be quoted
    pub max_nights: i64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            guest_rate: dec!(1000),
            extra_guest_rate: dec!(800),
            included_guests: 4,
            duration_discounts: vec![(7, dec!(0.90)), (3, dec!(0.95))],
            min_km_per_day: 30,
            max_nights: 365,
        }
    }
}

/// Everything the booking form has collected so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub hotel_id: Option<String>,
    pub transport_type: Option<String>,
    pub pricing_mode: PricingMode,
    pub km_per_day: u32,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            guests: DEFAULT_GUESTS,
            hotel_id: None,
            transport_type: None,
            pricing_mode: PricingMode::FullDay,
            km_per_day: DEFAULT_KM_PER_DAY,
        }
    }
}

impl TripRequest {
    /// Set check-in, pulling check-out forward so it never precedes it
    pub fn set_check_in(&mut self, date: Option<NaiveDate>) {
        self.check_in = date;
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out < check_in {
                self.check_out = Some(check_in);
            }
        }
    }

    /// Set check-out; dates before check-in are clamped to check-in
    pub fn set_check_out(&mut self, date: Option<NaiveDate>) {
        self.check_out = match (self.check_in, date) {
            (Some(check_in), Some(check_out)) if check_out < check_in => Some(check_in),
            _ => date,
        };
    }

    /// Fields still required before the booking can be confirmed
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.check_in.is_none() {
            missing.push("checkIn");
        }
        if self.check_out.is_none() {
            missing.push("checkOut");
        }
        if self.hotel_id.is_none() {
            missing.push("hotelId");
        }
        missing
    }

    pub fn can_confirm(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Pricing modes the option has a rate for
    pub fn available_modes(option: &TransportOption) -> Vec<PricingMode> {
        [PricingMode::FullDay, PricingMode::PerKm]
            .into_iter()
            .filter(|mode| mode.rate_of(option).is_some())
            .collect()
    }
}

/// Day number (1-based) -> activities
pub type Timetable = BTreeMap<u32, Vec<ItineraryItem>>;

/// Cost breakdown and generated plan for a trip request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub nights: i64,
    pub hotel_cost: Decimal,
    pub guest_surcharge: Decimal,
    pub transport_cost: Decimal,
    pub total: Decimal,
    pub guests: u32,
    pub timetable: Timetable,
}

impl Quote {
    /// Quote for a request without a usable date range
    pub fn empty(guests: u32) -> Self {
        Self {
            nights: 0,
            hotel_cost: Decimal::ZERO,
            guest_surcharge: Decimal::ZERO,
            transport_cost: Decimal::ZERO,
            total: Decimal::ZERO,
            guests,
            timetable: Timetable::new(),
        }
    }
}
