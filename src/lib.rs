//! Insurance quote comparison backend.
//!
//! Accepts auto and home quote requests, prices them against three simulated
//! carriers, persists each quote and lists recent ones.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;

use db::QuoteStore;

/// Shared state injected into every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: QuoteStore,
    pub database_url_set: bool,
    pub database_name_set: bool,
}

impl AppState {
    /// State with no environment information; diagnostics report both
    /// database variables as unset
    pub fn new(store: QuoteStore) -> Self {
        Self {
            store,
            database_url_set: false,
            database_name_set: false,
        }
    }

    pub fn from_config(store: QuoteStore, config: &config::Config) -> Self {
        Self {
            store,
            database_url_set: config.database.is_some(),
            database_name_set: config.database_name_set,
        }
    }
}

pub use routes::router;
