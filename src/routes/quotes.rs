//! Quote route handlers

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::db::NOT_CONFIGURED;
use crate::error::{AppError, Result};
use crate::models::{NewQuote, QuoteListResponse, QuotePayload, QuoteResponse};
use crate::pricing;
use crate::AppState;

pub const DEFAULT_LIST_LIMIT: i64 = 20;
pub const MAX_LIST_LIMIT: i64 = 100;

/// Query parameters for the quote listing
#[derive(Debug, Deserialize)]
pub struct ListQuotesQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIST_LIMIT
}

/// Validate, price and persist a quote request
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuotePayload>, JsonRejection>,
) -> Result<Json<QuoteResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidBody(e.body_text()))?;
    let request = payload.into_request().map_err(AppError::Validation)?;

    if !state.store.is_configured() {
        return Err(AppError::StorageUnavailable(NOT_CONFIGURED.to_string()));
    }

    let results = pricing::price(&request);
    tracing::debug!(
        quote_type = %request.quote_type,
        zip_code = %request.zip_code,
        "Priced quote"
    );

    let quote_type = request.quote_type;
    let zip_code = request.zip_code.clone();
    let id = state
        .store
        .create(NewQuote {
            request,
            results: results.clone(),
        })
        .await?;

    Ok(Json(QuoteResponse {
        id: id.to_string(),
        quote_type,
        zip_code,
        results,
    }))
}

/// List the most recent quotes
pub async fn list(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListQuotesQuery>, QueryRejection>,
) -> Result<Json<QuoteListResponse>> {
    let Query(query) = query.map_err(|e| AppError::InvalidQuery(e.body_text()))?;

    if query.limit < 0 {
        return Err(AppError::InvalidQuery(format!(
            "limit must be greater than or equal to 0, got {}",
            query.limit
        )));
    }

    let items = state.store.list(query.limit.min(MAX_LIST_LIMIT)).await?;

    Ok(Json(QuoteListResponse { items }))
}
