//! Request, offer and persisted quote models

pub mod quote;
pub mod responses;

pub use quote::{
    CarrierOffer, FieldError, NewQuote, QuotePayload, QuoteRequest, QuoteType, StoredQuote,
};
pub use responses::{QuoteListResponse, QuoteResponse};
