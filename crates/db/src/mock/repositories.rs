use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBooking, DbEvent, DbTimeSlot};
use crate::repositories::booking::{ReserveOutcome, SlotAvailability};

// Mock repositories for testing
mock! {
    pub EventRepo {
        pub async fn create_event(
            &self,
            name: &'static str,
            base_price: f64,
            price_hint: Option<&'static str>,
            venue: Option<&'static str>,
        ) -> eyre::Result<DbEvent>;

        pub async fn get_event_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbEvent>>;
    }
}

mock! {
    pub TimeSlotRepo {
        pub async fn create_time_slot(
            &self,
            event_id: Uuid,
            start_time: DateTime<Utc>,
            end_time: Option<DateTime<Utc>>,
            capacity: i32,
            override_price: Option<f64>,
            date_only: bool,
        ) -> eyre::Result<DbTimeSlot>;

        pub async fn get_time_slot_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbTimeSlot>>;

        pub async fn get_time_slots_by_event_id(
            &self,
            event_id: Uuid,
        ) -> eyre::Result<Vec<DbTimeSlot>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn slot_availability(
            &self,
            time_slot_id: Uuid,
        ) -> eyre::Result<Option<SlotAvailability>>;

        pub async fn create_booking(
            &self,
            event_id: Uuid,
            time_slot_id: Uuid,
            quantity: i32,
            unit_price: f64,
            submitted_at: DateTime<Utc>,
        ) -> eyre::Result<ReserveOutcome>;

        pub async fn list_bookings_for_slot(
            &self,
            time_slot_id: Uuid,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn get_booking_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;
    }
}
