//! Response DTOs for the quote API endpoints.

use serde::{Deserialize, Serialize};

use super::quote::{CarrierOffer, QuoteType, StoredQuote};

/// Response for a submitted quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub id: String,
    pub quote_type: QuoteType,
    pub zip_code: String,
    pub results: Vec<CarrierOffer>,
}

/// Response for the quote listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteListResponse {
    pub items: Vec<StoredQuote>,
}
