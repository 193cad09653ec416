//! Core pricing calculation functions.
//!
//! Pure functions for trip pricing math - no catalog lookups, no I/O.
//! Absent inputs price as zero rather than failing.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::models::{Hotel, TransportOption};

use super::models::{PricingMode, PricingRules, DEFAULT_KM_PER_DAY};

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use explore_gujarat_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Nights for a stay, counting both the check-in and check-out day.
///
/// Returns 0 if either date is missing or the range is inverted.
pub fn compute_nights(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> i64 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => {
            let nights = (check_out - check_in).num_days() + 1;
            nights.max(0)
        }
        _ => 0,
    }
}

/// Hotel cost for the stay; no hotel costs nothing.
pub fn hotel_cost(hotel: Option<&Hotel>, nights: i64) -> Decimal {
    match hotel {
        Some(hotel) if nights > 0 => hotel.price_per_night * Decimal::from(nights),
        _ => Decimal::ZERO,
    }
}

/// Per-guest charge with a cheaper rate beyond the included group size.
///
/// With the default rules the first 4 guests cost 1000 per night each and
/// every further guest 800 per night.
pub fn guest_surcharge(guests: u32, nights: i64, rules: &PricingRules) -> Decimal {
    if nights <= 0 {
        return Decimal::ZERO;
    }

    let guests = guests.max(1);
    let per_night = if guests <= rules.included_guests {
        Decimal::from(guests) * rules.guest_rate
    } else {
        let extra = guests - rules.included_guests;
        Decimal::from(rules.included_guests) * rules.guest_rate
            + Decimal::from(extra) * rules.extra_guest_rate
    };

    per_night * Decimal::from(nights)
}

/// Length-of-stay multiplier for full-day transport.
///
/// Tiers are inclusive and the longest matching tier wins.
pub fn duration_discount(nights: i64, rules: &PricingRules) -> Decimal {
    rules
        .duration_discounts
        .iter()
        .filter(|(min_nights, _)| nights >= *min_nights)
        .max_by_key(|(min_nights, _)| *min_nights)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(Decimal::ONE)
}

/// Transport cost for the stay under the chosen pricing mode.
///
/// Returns 0 when nothing is selected or the option has no rate for `mode`.
pub fn transport_cost(
    option: Option<&TransportOption>,
    nights: i64,
    mode: PricingMode,
    km_per_day: u32,
    rules: &PricingRules,
) -> Decimal {
    let Some(option) = option else {
        return Decimal::ZERO;
    };
    if nights <= 0 {
        return Decimal::ZERO;
    }
    let Some(rate) = mode.rate_of(option) else {
        return Decimal::ZERO;
    };

    let nights_dec = Decimal::from(nights);
    let cost = match mode {
        PricingMode::FullDay => rate * nights_dec * duration_discount(nights, rules),
        PricingMode::PerKm => {
            let km = if km_per_day == 0 {
                DEFAULT_KM_PER_DAY
            } else {
                km_per_day
            };
            let daily = rate * Decimal::from(km);
            let minimum_daily = rate * Decimal::from(rules.min_km_per_day);
            daily.max(minimum_daily) * nights_dec
        }
    };

    round_money(cost, 2)
}
