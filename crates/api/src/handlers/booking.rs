//! # Booking Handlers
//!
//! Implements the booking admission operation: a form submission is validated,
//! checked against the remaining capacity of the requested time slot, and
//! either persisted as a booking (with a checkout redirect) or answered with
//! one of the two fixed rejection messages.
//!
//! The availability read and the booking write form a check-then-act sequence
//! over shared capacity, so the handler holds the slot's lock from the
//! `SlotLockMap` across both steps. Admission is single-shot: a resubmission
//! after a rejection is a new, independent request.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use eventbook_core::{
    admission::{self, Admission},
    errors::BookingError,
    models::booking::{BookingDecision, BookingRequest, GetBookingResponse},
};
use eventbook_db::repositories::booking::ReserveOutcome;
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<Json<BookingDecision>, AppError> {
    // Malformed input fails before any storage access
    admission::validate_quantity(payload.quantity)?;

    let slot = eventbook_db::repositories::time_slot::get_time_slot_by_id(
        &state.db_pool,
        payload.time_slot_id,
    )
    .await
    .map_err(BookingError::Storage)?
    .ok_or_else(|| {
        BookingError::InvalidReference(format!(
            "Time slot with ID {} not found",
            payload.time_slot_id
        ))
    })?;

    if slot.event_id != payload.event_id {
        return Err(AppError(BookingError::InvalidReference(format!(
            "Time slot {} does not belong to event {}",
            slot.id, payload.event_id
        ))));
    }

    let event =
        eventbook_db::repositories::event::get_event_by_id(&state.db_pool, payload.event_id)
            .await
            .map_err(BookingError::Storage)?
            .ok_or_else(|| {
                BookingError::InvalidReference(format!(
                    "Event with ID {} not found",
                    payload.event_id
                ))
            })?;

    let unit_price = admission::effective_unit_price(slot.override_price, event.base_price);

    // Held across the availability read and the booking write
    let _guard = state.slot_locks.acquire(slot.id).await;

    let availability =
        eventbook_db::repositories::booking::slot_availability(&state.db_pool, slot.id)
            .await
            .map_err(BookingError::Storage)?
            .ok_or_else(|| {
                BookingError::InvalidReference(format!("Time slot with ID {} not found", slot.id))
            })?;

    let decision = match admission::admit(availability.free, payload.quantity) {
        Admission::Granted => {
            let submitted_at = payload.submitted_at.unwrap_or_else(Utc::now);
            let outcome = eventbook_db::repositories::booking::create_booking(
                &state.db_pool,
                event.id,
                slot.id,
                payload.quantity,
                unit_price,
                submitted_at,
            )
            .await
            .map_err(BookingError::Storage)?;

            match outcome {
                ReserveOutcome::Created(booking) => {
                    let token = checkout_token();
                    tracing::info!(
                        "Booking {} accepted for slot {} (quantity {})",
                        booking.id,
                        slot.id,
                        booking.quantity
                    );
                    BookingDecision::Accepted {
                        checkout_url: state.booking.checkout_url(booking.id, &token),
                        booking_id: booking.id,
                        token,
                    }
                }
                ReserveOutcome::CapacityExceeded { capacity, booked } => {
                    return Err(AppError(BookingError::CapacityExceeded(format!(
                        "slot {}: booked sum {} exceeds capacity {}",
                        slot.id, booked, capacity
                    ))));
                }
            }
        }
        Admission::PartiallyUnavailable => BookingDecision::PartiallyUnavailable {
            message: state.booking.messages.not_enough_slots.clone(),
        },
        Admission::FullyBooked => BookingDecision::FullyBooked {
            message: state.booking.messages.booked_out.clone(),
        },
    };

    Ok(Json(decision))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetBookingResponse>, AppError> {
    let booking = eventbook_db::repositories::booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Storage)?
        .ok_or_else(|| {
            BookingError::InvalidReference(format!("Booking with ID {} not found", id))
        })?;

    let response = GetBookingResponse {
        id: booking.id,
        event_id: booking.event_id,
        time_slot_id: booking.time_slot_id,
        quantity: booking.quantity,
        unit_price: booking.unit_price,
        total_price: booking.unit_price * f64::from(booking.quantity),
        created_at: booking.created_at,
    };

    Ok(Json(response))
}

/// Anti-forgery token carried on the checkout redirect.
fn checkout_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}
