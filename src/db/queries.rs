//! Database queries for persisted quotes

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::NewQuote;

use super::models::QuoteRow;

/// Create the quote table if it does not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quote (
            seq BIGSERIAL PRIMARY KEY,
            id UUID NOT NULL UNIQUE,
            quote_type TEXT NOT NULL CHECK (quote_type IN ('auto', 'home')),
            zip_code TEXT NOT NULL,
            age INTEGER,
            vehicle_year INTEGER,
            vehicle_make TEXT,
            vehicle_model TEXT,
            accidents_last_5_years INTEGER,
            home_value NUMERIC,
            square_feet INTEGER,
            security_system BOOLEAN,
            results JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert a priced quote, returning the stored creation time
pub async fn insert_quote(
    pool: &PgPool,
    id: Uuid,
    quote: &NewQuote,
) -> Result<DateTime<Utc>, sqlx::Error> {
    let request = &quote.request;

    let created_at: DateTime<Utc> = sqlx::query_scalar(
        r#"
        INSERT INTO quote (
            id,
            quote_type,
            zip_code,
            age,
            vehicle_year,
            vehicle_make,
            vehicle_model,
            accidents_last_5_years,
            home_value,
            square_feet,
            security_system,
            results
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING created_at
        "#,
    )
    .bind(id)
    .bind(request.quote_type.as_str())
    .bind(&request.zip_code)
    .bind(request.age)
    .bind(request.vehicle_year)
    .bind(&request.vehicle_make)
    .bind(&request.vehicle_model)
    .bind(request.accidents_last_5_years)
    .bind(request.home_value)
    .bind(request.square_feet)
    .bind(request.security_system)
    .bind(Json(&quote.results))
    .fetch_one(pool)
    .await?;

    Ok(created_at)
}

/// Get the most recently inserted quotes, newest first
pub async fn list_recent_quotes(pool: &PgPool, limit: i64) -> Result<Vec<QuoteRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, QuoteRow>(
        r#"
        SELECT
            id,
            quote_type,
            zip_code,
            age,
            vehicle_year,
            vehicle_make,
            vehicle_model,
            accidents_last_5_years,
            home_value,
            square_feet,
            security_system,
            results,
            created_at
        FROM quote
        ORDER BY seq DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Name of the database the pool is connected to
pub async fn current_database(pool: &PgPool) -> Result<String, sqlx::Error> {
    sqlx::query_scalar("SELECT current_database()::text")
        .fetch_one(pool)
        .await
}

/// Table names in the current schema
pub async fn list_tables(pool: &PgPool, limit: i64) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT table_name::text
        FROM information_schema.tables
        WHERE table_schema = current_schema()
        ORDER BY table_name
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
