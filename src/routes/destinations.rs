//! Destination browsing handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::display::{format_currency, AmenityView, CATEGORIES};
use crate::error::{AppError, Result};
use crate::models::{Destination, Experience, Hotel, TransportOption};
use crate::pricing::requests::DestinationListQuery;
use crate::pricing::{PricingMode, TripRequest};
use crate::AppState;

/// Card shown in the destination grid
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationCard {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub rating: f32,
    pub reviews: u32,
    pub highlights: Vec<String>,
}

impl From<&Destination> for DestinationCard {
    fn from(d: &Destination) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            location: d.location.clone(),
            description: d.description.clone(),
            image_url: d.image_url.clone(),
            category: d.category.clone(),
            rating: d.rating,
            reviews: d.reviews,
            highlights: d.highlights.clone(),
        }
    }
}

/// Hotel with display-ready price and amenity icons
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelView {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub price_display: String,
    pub amenity_icons: Vec<AmenityView>,
}

/// Transport option with the pricing modes it can be booked under
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportView {
    #[serde(flatten)]
    pub option: TransportOption,
    pub pricing_modes: Vec<PricingMode>,
}

/// Full destination detail for the modal and planner
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDetail {
    #[serde(flatten)]
    pub destination: Destination,
    pub hotel_views: Vec<HotelView>,
    pub transport_views: Vec<TransportView>,
}

/// Category filter entry
#[derive(Debug, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Destination listing, filtered by search text and category
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<DestinationListQuery>,
) -> Json<Vec<DestinationCard>> {
    let found = state
        .catalog
        .search(query.search.as_deref(), query.category.as_deref());
    tracing::debug!(
        "Destination search {:?} / {:?}: {} results",
        query.search,
        query.category,
        found.len()
    );
    Json(found.into_iter().map(DestinationCard::from).collect())
}

/// Single destination with hotels and transport prepared for display
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DestinationDetail>> {
    let destination = state.catalog.destination(id).ok_or(AppError::NotFound)?;

    let hotel_views = destination
        .hotels
        .iter()
        .map(|hotel| HotelView {
            hotel: hotel.clone(),
            price_display: format_currency(hotel.price_per_night, &state.currency.symbol),
            amenity_icons: hotel.amenities.iter().map(|a| AmenityView::new(a)).collect(),
        })
        .collect();

    let transport_views = destination
        .transport_options()
        .map(|option| TransportView {
            option: option.clone(),
            pricing_modes: TripRequest::available_modes(option),
        })
        .collect();

    Ok(Json(DestinationDetail {
        destination: destination.clone(),
        hotel_views,
        transport_views,
    }))
}

pub async fn categories() -> Json<Vec<CategoryOption>> {
    Json(
        CATEGORIES
            .iter()
            .map(|&(value, label)| CategoryOption { value, label })
            .collect(),
    )
}

pub async fn experiences(State(state): State<AppState>) -> Json<Vec<Experience>> {
    Json(state.catalog.experiences().to_vec())
}
