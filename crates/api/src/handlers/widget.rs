//! # Widget Handler
//!
//! Assembles the data a client needs to render the booking box for one event:
//! resolved display options, the event's price presentation, the bookable
//! dates with their remaining capacity and effective prices, and the
//! individual-request contact link for events without bookable dates.
//!
//! Display options arrive as query parameters and are resolved against the
//! enumerated option set; requests carrying unknown keys are rejected.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use eventbook_core::{
    admission,
    errors::BookingError,
    models::widget::{IndividualRequest, WidgetResponse, WidgetTimeEntry},
    options::WidgetOptions,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn get_widget(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<WidgetResponse>, AppError> {
    // Resolve display options before touching storage; unknown keys are a 400
    let options = WidgetOptions::resolve(
        &state.booking,
        params.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    )?;

    let db_event = eventbook_db::repositories::event::get_event_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Storage)?
        .ok_or_else(|| BookingError::InvalidReference(format!("Event with ID {} not found", id)))?;

    let time_slots =
        eventbook_db::repositories::time_slot::get_time_slots_by_event_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Storage)?;

    let mut times = Vec::with_capacity(time_slots.len());
    for slot in &time_slots {
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

        let price = admission::effective_unit_price(slot.override_price, db_event.base_price);
        let label = if slot.date_only {
            slot.start_time.format("%Y-%m-%d").to_string()
        } else {
            slot.start_time.to_rfc3339()
        };

        times.push(WidgetTimeEntry {
            id: slot.id,
            label,
            free_slots: availability.free,
            price,
            price_display: state.booking.format_price(price),
        });
    }

    // Events without bookable dates fall back to an individual request link;
    // the option can force the link even when dates exist
    let individual_request = if times.is_empty() || options.ind_req_force {
        Some(IndividualRequest {
            label: options.ind_req_label.clone(),
            url: state.booking.individual_request_url(&db_event.name),
        })
    } else {
        None
    };

    let response = WidgetResponse {
        event_id: db_event.id,
        headline: options.headline,
        name: db_event.name,
        price: db_event.base_price,
        price_display: state.booking.format_price(db_event.base_price),
        price_hint: db_event.price_hint,
        button_text: options.button_text,
        button_class: options.button_class,
        select_label: options.select_label,
        select_class: options.select_class,
        select_layout: options.select_layout,
        amount_input_label: options.amount_input_label,
        amount_input_class: options.amount_input_class,
        times,
        individual_request,
    };

    Ok(Json(response))
}
