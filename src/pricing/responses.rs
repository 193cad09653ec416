//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::display::format_currency;
use crate::models::TransportOption;

use super::models::{PricingMode, Quote, Timetable, TripRequest};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    /// Amount formatted for display, e.g. "₹12,000"
    pub display: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &Currency) -> Self {
        Self {
            amount,
            currency: currency.code.clone(),
            display: format_currency(amount, &currency.symbol),
        }
    }
}

/// Currency code and display symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            code: "INR".to_string(),
            symbol: "₹".to_string(),
        }
    }
}

/// Response for a quote calculation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub destination_id: i64,
    pub nights: i64,
    pub guests: u32,
    pub hotel_cost: MoneyResponse,
    pub guest_surcharge: MoneyResponse,
    pub transport_cost: MoneyResponse,
    pub total: MoneyResponse,
    /// Pricing modes the selected transport supports
    pub available_modes: Vec<PricingMode>,
    pub can_confirm: bool,
    pub timetable: Timetable,
}

impl QuoteResponse {
    pub fn new(
        destination_id: i64,
        quote: Quote,
        request: &TripRequest,
        transport: Option<&TransportOption>,
        currency: &Currency,
    ) -> Self {
        Self {
            destination_id,
            nights: quote.nights,
            guests: quote.guests,
            hotel_cost: MoneyResponse::new(quote.hotel_cost, currency),
            guest_surcharge: MoneyResponse::new(quote.guest_surcharge, currency),
            transport_cost: MoneyResponse::new(quote.transport_cost, currency),
            total: MoneyResponse::new(quote.total, currency),
            available_modes: transport
                .map(TripRequest::available_modes)
                .unwrap_or_default(),
            can_confirm: request.can_confirm(),
            timetable: quote.timetable,
        }
    }
}

/// Error body for failed API calls
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<&'static str>,
}
