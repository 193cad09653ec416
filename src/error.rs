//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::{BookingError, ErrorResponse};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Booking rejected: {0}")]
    Booking(#[from] BookingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, missing_fields) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", vec![]),
            AppError::Booking(BookingError::Incomplete { missing }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "incomplete_booking",
                missing.clone(),
            ),
            AppError::Booking(BookingError::UnknownHotel { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unknown_hotel", vec![])
            }
            AppError::Booking(BookingError::StayTooLong { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "stay_too_long", vec![])
            }
        };
        tracing::debug!(%status, "Request rejected: {}", self);

        let body = ErrorResponse {
            error_type: error_type.to_string(),
            message: self.to_string(),
            missing_fields,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
