//! HTTP handlers for quotes and booking confirmations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::AppState;

use super::models::TripRequest;
use super::requests::TripForm;
use super::responses::QuoteResponse;
use super::services::{
    check_stay, compute_quote, confirm_booking, find_transport, BookingConfirmation,
};

/// Pricing routes, mounted under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/destinations/:id/quote", post(quote))
        .route("/destinations/:id/bookings", post(create_booking))
        .route("/bookings/:booking_id", get(get_booking))
}

/// Recompute the quote for the current form values
async fn quote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<TripForm>,
) -> Result<Json<QuoteResponse>> {
    let destination = state.catalog.destination(id).ok_or(AppError::NotFound)?;
    let request = TripRequest::from(form);
    check_stay(&request, &state.rules)?;

    let quote = compute_quote(destination, &request, &state.rules);
    tracing::debug!(
        destination_id = id,
        nights = quote.nights,
        total = %quote.total,
        "Quote computed"
    );

    let transport = find_transport(destination, request.transport_type.as_deref());
    Ok(Json(QuoteResponse::new(
        id,
        quote,
        &request,
        transport,
        &state.currency,
    )))
}

/// Confirm the plan and keep the snapshot for later display
async fn create_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<TripForm>,
) -> Result<(StatusCode, Json<BookingConfirmation>)> {
    let destination = state.catalog.destination(id).ok_or(AppError::NotFound)?;
    let request = TripRequest::from(form);

    let confirmation = confirm_booking(destination, &request, &state.rules)?;
    let stored = state.cache.remember_booking(confirmation).await;

    Ok((StatusCode::CREATED, Json((*stored).clone())))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingConfirmation>> {
    let booking = state
        .cache
        .booking(&booking_id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json((*booking).clone()))
}
