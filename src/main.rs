use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use insurance_quotes::config::Config;
use insurance_quotes::db::{queries, QuoteStore};
use insurance_quotes::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "insurance_quotes=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let store = match &config.database {
        Some(db_config) => {
            let pool = db_config.pool().context("Failed to configure database pool")?;
            if let Err(e) = queries::ensure_schema(&pool).await {
                tracing::warn!("Could not ensure quote table exists: {}", e);
            }
            tracing::info!("Quote store configured");
            QuoteStore::postgres(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; quote endpoints will report the database as unavailable");
            QuoteStore::unconfigured()
        }
    };

    let app = router(AppState::from_config(store, &config));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
