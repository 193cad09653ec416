//! Request DTOs for pricing API endpoints.
//!
//! The booking form posts raw field values. Numeric fields may arrive as
//! text; anything unusable falls back to a default instead of failing.

use chrono::NaiveDate;
use serde::Deserialize;

use super::models::{PricingMode, TripRequest, DEFAULT_GUESTS, DEFAULT_KM_PER_DAY};

/// A form number that may have been typed as text
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FormNumber {
    Number(f64),
    Text(String),
}

impl FormNumber {
    /// Leading integer value, like a browser number input would yield
    fn leading_integer(&self) -> Option<i64> {
        match self {
            FormNumber::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            FormNumber::Number(_) => None,
            FormNumber::Text(s) => parse_leading_integer(s),
        }
    }
}

/// Digits that overflow `i64` saturate, matching how float input is cast
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }
    Some(sign * digits.parse::<i64>().unwrap_or(i64::MAX))
}

/// Guest count from form input, clamped to at least one
pub fn parse_guests(raw: Option<&FormNumber>) -> u32 {
    raw.and_then(FormNumber::leading_integer)
        .filter(|n| *n >= 1)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .unwrap_or(DEFAULT_GUESTS)
}

/// Kilometres per day from form input; non-positive or unparsable input
/// becomes the default
pub fn parse_km_per_day(raw: Option<&FormNumber>) -> u32 {
    raw.and_then(FormNumber::leading_integer)
        .filter(|n| *n >= 1)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .unwrap_or(DEFAULT_KM_PER_DAY)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Raw booking form as posted by the planner
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripForm {
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    #[serde(default)]
    pub guests: Option<FormNumber>,
    #[serde(default)]
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub transport_type: Option<String>,
    #[serde(default)]
    pub pricing_mode: PricingMode,
    #[serde(default)]
    pub km_per_day: Option<FormNumber>,
}

impl From<TripForm> for TripRequest {
    fn from(form: TripForm) -> Self {
        let mut request = TripRequest {
            guests: parse_guests(form.guests.as_ref()),
            hotel_id: non_empty(form.hotel_id),
            transport_type: non_empty(form.transport_type),
            pricing_mode: form.pricing_mode,
            km_per_day: parse_km_per_day(form.km_per_day.as_ref()),
            ..TripRequest::default()
        };
        request.set_check_in(form.check_in);
        request.set_check_out(form.check_out);
        request
    }
}

/// Query parameters for the destination listing
#[derive(Debug, Default, Deserialize)]
pub struct DestinationListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FormNumber {
        FormNumber::Text(s.to_string())
    }

    #[test]
    fn test_parse_guests_from_text() {
        assert_eq!(parse_guests(Some(&text("3"))), 3);
        assert_eq!(parse_guests(Some(&text(" 12 "))), 12);
        assert_eq!(parse_guests(Some(&text("5 people"))), 5);
    }

    #[test]
    fn test_parse_guests_clamps_to_one() {
        assert_eq!(parse_guests(None), 1);
        assert_eq!(parse_guests(Some(&text(""))), 1);
        assert_eq!(parse_guests(Some(&text("abc"))), 1);
        assert_eq!(parse_guests(Some(&text("0"))), 1);
        assert_eq!(parse_guests(Some(&text("-4"))), 1);
        assert_eq!(parse_guests(Some(&FormNumber::Number(-2.0))), 1);
        assert_eq!(parse_guests(Some(&FormNumber::Number(f64::NAN))), 1);
    }

    #[test]
    fn test_parse_guests_truncates_fractions() {
        assert_eq!(parse_guests(Some(&FormNumber::Number(3.7))), 3);
        assert_eq!(parse_guests(Some(&text("2.9"))), 2);
    }

    #[test]
    fn test_huge_input_saturates_for_text_and_number() {
        assert_eq!(parse_guests(Some(&text("99999999999"))), u32::MAX);
        assert_eq!(parse_guests(Some(&FormNumber::Number(99999999999.0))), u32::MAX);
        assert_eq!(parse_guests(Some(&text("99999999999999999999999"))), u32::MAX);
        assert_eq!(parse_guests(Some(&FormNumber::Number(1e30))), u32::MAX);
        assert_eq!(parse_km_per_day(Some(&text("99999999999999999999999"))), u32::MAX);
        assert_eq!(parse_guests(Some(&text("-99999999999999999999999"))), 1);
    }

    #[test]
    fn test_parse_km_per_day_defaults() {
        assert_eq!(parse_km_per_day(Some(&text("120"))), 120);
        assert_eq!(parse_km_per_day(Some(&FormNumber::Number(80.0))), 80);
        assert_eq!(parse_km_per_day(None), 50);
        assert_eq!(parse_km_per_day(Some(&text("far"))), 50);
        assert_eq!(parse_km_per_day(Some(&text("0"))), 50);
    }

    #[test]
    fn test_trip_form_into_request() {
        let form: TripForm = serde_json::from_value(serde_json::json!({
            "checkIn": "2025-12-20",
            "checkOut": "2025-12-22",
            "guests": "4",
            "hotelId": "h1",
            "transportType": "",
            "pricingMode": "perKm",
            "kmPerDay": 75
        }))
        .unwrap();
        let request = TripRequest::from(form);

        assert_eq!(request.check_in, NaiveDate::from_ymd_opt(2025, 12, 20));
        assert_eq!(request.check_out, NaiveDate::from_ymd_opt(2025, 12, 22));
        assert_eq!(request.guests, 4);
        assert_eq!(request.hotel_id.as_deref(), Some("h1"));
        assert_eq!(request.transport_type, None);
        assert_eq!(request.pricing_mode, PricingMode::PerKm);
        assert_eq!(request.km_per_day, 75);
    }

    #[test]
    fn test_trip_form_clamps_inverted_dates() {
        let form: TripForm = serde_json::from_value(serde_json::json!({
            "checkIn": "2025-12-20",
            "checkOut": "2025-12-18"
        }))
        .unwrap();
        let request = TripRequest::from(form);
        assert_eq!(request.check_out, NaiveDate::from_ymd_opt(2025, 12, 20));
    }

    #[test]
    fn test_empty_form_uses_defaults() {
        let form: TripForm = serde_json::from_str("{}").unwrap();
        assert_eq!(TripRequest::from(form), TripRequest::default());
    }
}
