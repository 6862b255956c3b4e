//! Quote store.
//!
//! [`QuoteStore`] is the handle injected into request handlers. It is either
//! configured with a [`QuoteRepository`] backend or explicitly unconfigured,
//! in which case every operation fails with [`StoreError::Unavailable`].

mod memory;
mod models;
mod postgres;
pub mod queries;

pub use memory::InMemoryQuoteRepository;
pub use models::QuoteRow;
pub use postgres::PgQuoteRepository;

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{NewQuote, StoredQuote};

/// Most collection names reported by diagnostics
pub const DIAGNOSTIC_COLLECTION_LIMIT: i64 = 10;

/// Message used when no backend was configured at startup
pub const NOT_CONFIGURED: &str = "Database not configured";

/// Database details reported by the diagnostic endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreDiagnostics {
    pub database: String,
    pub collections: Vec<String>,
}

/// Persistence backend for quotes.
///
/// Each `insert` is an independent atomic write; there is no update or delete.
#[async_trait]
pub trait QuoteRepository: Debug + Send + Sync {
    /// Persist a priced quote under a freshly generated id
    async fn insert(&self, quote: NewQuote) -> Result<StoredQuote, StoreError>;

    /// Up to `limit` quotes, most recently inserted first
    async fn list_recent(&self, limit: i64) -> Result<Vec<StoredQuote>, StoreError>;

    /// Database name and a sample of collection names
    async fn diagnostics(&self) -> Result<StoreDiagnostics, StoreError>;
}

/// Injected quote store handle
#[derive(Debug, Clone)]
pub struct QuoteStore {
    inner: Option<Arc<dyn QuoteRepository>>,
}

impl QuoteStore {
    /// Store with no backend; every operation reports the store as unavailable
    pub fn unconfigured() -> Self {
        Self { inner: None }
    }

    pub fn new(repository: Arc<dyn QuoteRepository>) -> Self {
        Self {
            inner: Some(repository),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PgQuoteRepository::new(pool)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryQuoteRepository::new()))
    }

    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }

    fn repository(&self) -> Result<&Arc<dyn QuoteRepository>, StoreError> {
        self.inner
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable(NOT_CONFIGURED.to_string()))
    }

    /// Persist a priced quote and return its id
    pub async fn create(&self, quote: NewQuote) -> Result<Uuid, StoreError> {
        let stored = self.repository()?.insert(quote).await?;
        tracing::info!(id = %stored.id, quote_type = %stored.request.quote_type, "Quote stored");
        Ok(stored.id)
    }

    /// Up to `limit` quotes, most recently inserted first
    pub async fn list(&self, limit: i64) -> Result<Vec<StoredQuote>, StoreError> {
        if limit <= 0 {
            // Still report an unconfigured store
            self.repository()?;
            return Ok(Vec::new());
        }
        self.repository()?.list_recent(limit).await
    }

    pub async fn diagnostics(&self) -> Result<StoreDiagnostics, StoreError> {
        self.repository()?.diagnostics().await
    }
}
