use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create events table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            base_price DOUBLE PRECISION NOT NULL,
            price_hint TEXT NULL,
            venue VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT nonnegative_base_price CHECK (base_price >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create time_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            event_id UUID NOT NULL REFERENCES events(id),
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NULL,
            override_price DOUBLE PRECISION NULL,
            capacity INTEGER NOT NULL,
            date_only BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT nonnegative_capacity CHECK (capacity >= 0),
            CONSTRAINT valid_time_range CHECK (end_time IS NULL OR end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            event_id UUID NOT NULL REFERENCES events(id),
            time_slot_id UUID NOT NULL REFERENCES time_slots(id),
            quantity INTEGER NOT NULL,
            unit_price DOUBLE PRECISION NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_quantity CHECK (quantity > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_time_slots_event_id ON time_slots(event_id);",
        "CREATE INDEX IF NOT EXISTS idx_time_slots_start_time ON time_slots(start_time);",
        "CREATE INDEX IF NOT EXISTS idx_bookings_time_slot_id ON bookings(time_slot_id);",
        "CREATE INDEX IF NOT EXISTS idx_bookings_event_id ON bookings(event_id);",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
