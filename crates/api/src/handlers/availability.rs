//! # Availability Handler
//!
//! Read-only view of a time slot's remaining capacity: the slot's fixed
//! capacity minus the sum of confirmed booking quantities, clamped at zero.
//! The read has no side effects; repeated calls with no intervening bookings
//! return the same value.

use axum::{
    extract::{Path, State},
    Json,
};
use eventbook_core::{errors::BookingError, models::time_slot::AvailabilityResponse};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let availability = eventbook_db::repositories::booking::slot_availability(&state.db_pool, id)
        .await
        .map_err(BookingError::Storage)?
        .ok_or_else(|| {
            BookingError::InvalidReference(format!("Time slot with ID {} not found", id))
        })?;

    let response = AvailabilityResponse {
        time_slot_id: id,
        capacity: availability.capacity,
        free_slots: availability.free,
    };

    Ok(Json(response))
}
