use crate::models::DbEvent;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_event(
    pool: &Pool<Postgres>,
    name: &str,
    base_price: f64,
    price_hint: Option<&str>,
    venue: Option<&str>,
) -> Result<DbEvent> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating event: id={}, name={}, base_price={}",
        id,
        name,
        base_price
    );

    let event = sqlx::query_as::<_, DbEvent>(
        r#"
        INSERT INTO events (id, name, base_price, price_hint, venue, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, base_price, price_hint, venue, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(base_price)
    .bind(price_hint)
    .bind(venue)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(event)
}

pub async fn get_event_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbEvent>> {
    let event = sqlx::query_as::<_, DbEvent>(
        r#"
        SELECT id, name, base_price, price_hint, venue, created_at
        FROM events
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(event)
}
