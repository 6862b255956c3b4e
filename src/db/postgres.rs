//! Quote repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{NewQuote, StoredQuote};

use super::{queries, QuoteRepository, StoreDiagnostics, DIAGNOSTIC_COLLECTION_LIMIT};

/// PostgreSQL quote repository
#[derive(Debug, Clone)]
pub struct PgQuoteRepository {
    pool: PgPool,
}

impl PgQuoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteRepository for PgQuoteRepository {
    #[instrument(skip_all, fields(quote_type = %quote.request.quote_type))]
    async fn insert(&self, quote: NewQuote) -> Result<StoredQuote, StoreError> {
        let id = Uuid::new_v4();
        let created_at = queries::insert_quote(&self.pool, id, &quote)
            .await
            .map_err(StoreError::write)?;

        Ok(StoredQuote {
            id,
            request: quote.request,
            results: quote.results,
            created_at,
        })
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> Result<Vec<StoredQuote>, StoreError> {
        queries::list_recent_quotes(&self.pool, limit)
            .await
            .map_err(StoreError::read)?
            .into_iter()
            .map(StoredQuote::try_from)
            .collect()
    }

    async fn diagnostics(&self) -> Result<StoreDiagnostics, StoreError> {
        let database = queries::current_database(&self.pool)
            .await
            .map_err(StoreError::read)?;
        let collections = queries::list_tables(&self.pool, DIAGNOSTIC_COLLECTION_LIMIT)
            .await
            .map_err(StoreError::read)?;

        Ok(StoreDiagnostics {
            database,
            collections,
        })
    }
}
