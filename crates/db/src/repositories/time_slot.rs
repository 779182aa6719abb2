use crate::models::DbTimeSlot;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_time_slot(
    pool: &Pool<Postgres>,
    event_id: Uuid,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    capacity: i32,
    override_price: Option<f64>,
    date_only: bool,
) -> Result<DbTimeSlot> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating time slot: id={}, event_id={}, capacity={}",
        id,
        event_id,
        capacity
    );

    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        INSERT INTO time_slots (id, event_id, start_time, end_time, override_price, capacity, date_only, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, event_id, start_time, end_time, override_price, capacity, date_only, created_at
        "#,
    )
    .bind(id)
    .bind(event_id)
    .bind(start_time)
    .bind(end_time)
    .bind(override_price)
    .bind(capacity)
    .bind(date_only)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(time_slot)
}

pub async fn get_time_slot_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbTimeSlot>> {
    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, event_id, start_time, end_time, override_price, capacity, date_only, created_at
        FROM time_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(time_slot)
}

pub async fn get_time_slots_by_event_id(
    pool: &Pool<Postgres>,
    event_id: Uuid,
) -> Result<Vec<DbTimeSlot>> {
    let time_slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, event_id, start_time, end_time, override_price, capacity, date_only, created_at
        FROM time_slots
        WHERE event_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(time_slots)
}
