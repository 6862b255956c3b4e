//! Database row models for the quote table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{CarrierOffer, QuoteRequest, StoredQuote};

/// Row from the `quote` table
#[derive(Debug, Clone, FromRow)]
pub struct QuoteRow {
    pub id: Uuid,
    pub quote_type: String,
    pub zip_code: String,
    pub age: Option<i32>,
    pub vehicle_year: Option<i32>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub accidents_last_5_years: Option<i32>,
    pub home_value: Option<Decimal>,
    pub square_feet: Option<i32>,
    pub security_system: Option<bool>,
    pub results: Json<Vec<CarrierOffer>>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<QuoteRow> for StoredQuote {
    type Error = StoreError;

    fn try_from(row: QuoteRow) -> Result<Self, Self::Error> {
        let quote_type = row
            .quote_type
            .parse()
            .map_err(|e| StoreError::Read(format!("quote {}: {}", row.id, e)))?;

        Ok(StoredQuote {
            id: row.id,
            request: QuoteRequest {
                quote_type,
                zip_code: row.zip_code,
                age: row.age,
                vehicle_year: row.vehicle_year,
                vehicle_make: row.vehicle_make,
                vehicle_model: row.vehicle_model,
                accidents_last_5_years: row.accidents_last_5_years,
                home_value: row.home_value,
                square_feet: row.square_feet,
                security_system: row.security_system,
            },
            results: row.results.0,
            created_at: row.created_at,
        })
    }
}
