use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable event. Written once through the admin ingest endpoint and
/// immutable afterwards; edits happen in an external content-management flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub base_price: f64,
    pub price_hint: Option<String>,
    pub venue: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub base_price: f64,
    pub price_hint: Option<String>,
    pub venue: Option<String>,
    #[serde(default)]
    pub times: Vec<CreateTimeSlotRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimeSlotRequest {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub capacity: i32,
    pub override_price: Option<f64>,
    #[serde(default)]
    pub date_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub time_slot_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetEventResponse {
    pub id: Uuid,
    pub name: String,
    pub base_price: f64,
    pub price_hint: Option<String>,
    pub venue: Option<String>,
    pub times: Vec<EventTimeEntry>,
}

/// One slot row in the event read-back, with the derived availability and the
/// unit price a booking against it would be charged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventTimeEntry {
    pub id: Uuid,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub date_only: bool,
    pub capacity: i32,
    pub free_slots: i64,
    pub unit_price: f64,
}
