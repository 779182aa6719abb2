use axum::{
    extract::{Path, State},
    Json,
};
use eventbook_core::{
    admission,
    errors::BookingError,
    models::event::{CreateEventRequest, CreateEventResponse, EventTimeEntry, GetEventResponse},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<Json<CreateEventResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Event name must not be empty".to_string(),
        )));
    }
    if payload.base_price < 0.0 {
        return Err(AppError(BookingError::Validation(
            "Base price must not be negative".to_string(),
        )));
    }
    for slot in &payload.times {
        if slot.capacity < 0 {
            return Err(AppError(BookingError::Validation(
                "Slot capacity must not be negative".to_string(),
            )));
        }
    }

    // Create event in database
    let db_event = eventbook_db::repositories::event::create_event(
        &state.db_pool,
        &payload.name,
        payload.base_price,
        payload.price_hint.as_deref(),
        payload.venue.as_deref(),
    )
    .await
    .map_err(BookingError::Storage)?;

    // Create time slots if provided
    let mut time_slot_ids = Vec::new();
    for slot in &payload.times {
        let db_slot = eventbook_db::repositories::time_slot::create_time_slot(
            &state.db_pool,
            db_event.id,
            slot.start,
            slot.end,
            slot.capacity,
            slot.override_price,
            slot.date_only,
        )
        .await
        .map_err(BookingError::Storage)?;
        time_slot_ids.push(db_slot.id);
    }

    let response = CreateEventResponse {
        id: db_event.id,
        name: db_event.name,
        created_at: db_event.created_at,
        time_slot_ids,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetEventResponse>, AppError> {
    // Get event from database
    let db_event = eventbook_db::repositories::event::get_event_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Storage)?
        .ok_or_else(|| BookingError::InvalidReference(format!("Event with ID {} not found", id)))?;

    // Get time slots with their derived availability
    let time_slots =
        eventbook_db::repositories::time_slot::get_time_slots_by_event_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Storage)?;

    let mut times = Vec::with_capacity(time_slots.len());
    for slot in time_slots {
        let availability =
            eventbook_db::repositories::booking::slot_availability(&state.db_pool, slot.id)
                .await
                .map_err(BookingError::Storage)?
                .ok_or_else(|| {
                    BookingError::InvalidReference(format!(
                        "Time slot with ID {} not found",
                        slot.id
                    ))
                })?;

        times.push(EventTimeEntry {
            id: slot.id,
            start: slot.start_time,
            end: slot.end_time,
            date_only: slot.date_only,
            capacity: slot.capacity,
            free_slots: availability.free,
            unit_price: admission::effective_unit_price(slot.override_price, db_event.base_price),
        });
    }

    let response = GetEventResponse {
        id: db_event.id,
        name: db_event.name,
        base_price: db_event.base_price,
        price_hint: db_event.price_hint,
        venue: db_event.venue,
        times,
    };

    Ok(Json(response))
}
