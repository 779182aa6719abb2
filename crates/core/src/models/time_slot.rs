use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable date or date-time instance belonging to exactly one event.
/// Capacity is fixed at creation; free slots are always derived from the
/// booking records, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub event_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub override_price: Option<f64>,
    pub capacity: i32,
    pub date_only: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub time_slot_id: Uuid,
    pub capacity: i32,
    pub free_slots: i64,
}
