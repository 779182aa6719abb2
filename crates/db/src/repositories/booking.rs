use crate::models::{DbBooking, DbTimeSlot};
use chrono::{DateTime, Utc};
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Result of a reserve attempt.
///
/// `CapacityExceeded` means the post-insert re-check found the booked sum
/// above capacity; the transaction was rolled back and nothing was persisted.
/// With admissions serialized through the slot lock map this is unreachable.
#[derive(Debug, Clone)]
pub enum ReserveOutcome {
    Created(DbBooking),
    CapacityExceeded { capacity: i32, booked: i64 },
}

/// Derived availability for one time slot.
#[derive(Debug, Clone)]
pub struct SlotAvailability {
    pub capacity: i32,
    pub booked: i64,
    pub free: i64,
}

pub async fn list_bookings_for_slot(
    pool: &Pool<Postgres>,
    time_slot_id: Uuid,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, event_id, time_slot_id, quantity, unit_price, created_at
        FROM bookings
        WHERE time_slot_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(time_slot_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, event_id, time_slot_id, quantity, unit_price, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

/// Free slots are capacity minus the confirmed booked sum, never negative.
pub fn derive_free(capacity: i32, booked: i64, time_slot_id: Uuid) -> i64 {
    let free = i64::from(capacity) - booked;
    if free < 0 {
        tracing::warn!(
            "time slot {} booked over capacity: capacity={}, booked={}",
            time_slot_id,
            capacity,
            booked
        );
        return 0;
    }
    free
}

/// Reads the derived availability for a slot, or `None` for an unknown id.
pub async fn slot_availability(
    pool: &Pool<Postgres>,
    time_slot_id: Uuid,
) -> Result<Option<SlotAvailability>> {
    let Some(slot) = super::time_slot::get_time_slot_by_id(pool, time_slot_id).await? else {
        return Ok(None);
    };

    let bookings = list_bookings_for_slot(pool, time_slot_id).await?;
    let booked: i64 = bookings.iter().map(|b| i64::from(b.quantity)).sum();

    Ok(Some(SlotAvailability {
        capacity: slot.capacity,
        booked,
        free: derive_free(slot.capacity, booked, time_slot_id),
    }))
}

/// Persists a booking inside a transaction that holds the slot row lock.
///
/// After the insert the booked sum is re-checked against capacity; if it came
/// out above capacity the transaction is rolled back and the breach is
/// reported instead of committed.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    event_id: Uuid,
    time_slot_id: Uuid,
    quantity: i32,
    unit_price: f64,
    submitted_at: DateTime<Utc>,
) -> Result<ReserveOutcome> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating booking: id={}, time_slot_id={}, quantity={}, unit_price={}",
        id,
        time_slot_id,
        quantity,
        unit_price
    );

    let mut tx = pool.begin().await?;

    let slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, event_id, start_time, end_time, override_price, capacity, date_only, created_at
        FROM time_slots
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(time_slot_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| eyre!("time slot {} not found", time_slot_id))?;

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, event_id, time_slot_id, quantity, unit_price, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, event_id, time_slot_id, quantity, unit_price, created_at
        "#,
    )
    .bind(id)
    .bind(event_id)
    .bind(time_slot_id)
    .bind(quantity)
    .bind(unit_price)
    .bind(submitted_at)
    .fetch_one(&mut *tx)
    .await?;

    let booked: i64 = sqlx::query_scalar(
        r#"
        SELECT COALESCE(SUM(quantity), 0)
        FROM bookings
        WHERE time_slot_id = $1
        "#,
    )
    .bind(time_slot_id)
    .fetch_one(&mut *tx)
    .await?;

    if booked > i64::from(slot.capacity) {
        tx.rollback().await?;
        tracing::warn!(
            "rejecting booking for slot {}: booked sum {} would exceed capacity {}",
            time_slot_id,
            booked,
            slot.capacity
        );
        return Ok(ReserveOutcome::CapacityExceeded {
            capacity: slot.capacity,
            booked,
        });
    }

    tx.commit().await?;

    Ok(ReserveOutcome::Created(booking))
}
