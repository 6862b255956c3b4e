//! In-memory quote repository, used for tests and local runs without a database.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{NewQuote, StoredQuote};

use super::{QuoteRepository, StoreDiagnostics};

/// Quotes kept in insertion order
#[derive(Debug, Default)]
pub struct InMemoryQuoteRepository {
    quotes: RwLock<Vec<StoredQuote>>,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored quotes
    pub async fn len(&self) -> usize {
        self.quotes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.quotes.read().await.is_empty()
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn insert(&self, quote: NewQuote) -> Result<StoredQuote, StoreError> {
        let stored = StoredQuote {
            id: Uuid::new_v4(),
            request: quote.request,
            results: quote.results,
            created_at: Utc::now(),
        };
        self.quotes.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<StoredQuote>, StoreError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let quotes = self.quotes.read().await;
        Ok(quotes.iter().rev().take(limit).cloned().collect())
    }

    async fn diagnostics(&self) -> Result<StoreDiagnostics, StoreError> {
        Ok(StoreDiagnostics {
            database: "memory".to_string(),
            collections: vec!["quote".to_string()],
        })
    }
}
