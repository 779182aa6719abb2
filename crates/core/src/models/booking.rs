use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A confirmed booking. Immutable once created; the unit price is captured at
/// admission time (slot override price if set and nonzero, else the event's
/// base price).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub event_id: Uuid,
    pub time_slot_id: Uuid,
    pub quantity: i32,
    pub unit_price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub event_id: Uuid,
    pub time_slot_id: Uuid,
    pub quantity: i32,
    /// Submission timestamp recorded on the booking; defaults to server time.
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Outcome of one admission request. Accepted bookings carry the checkout
/// redirect; rejections carry one of the two fixed human-readable messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingDecision {
    Accepted {
        booking_id: Uuid,
        checkout_url: String,
        token: String,
    },
    PartiallyUnavailable {
        message: String,
    },
    FullyBooked {
        message: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBookingResponse {
    pub id: Uuid,
    pub event_id: Uuid,
    pub time_slot_id: Uuid,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}
