//! Service banner and database diagnostic handlers

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::truncate_detail;
use crate::AppState;

const DIAGNOSTIC_ERROR_LEN: usize = 50;

/// Root banner
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Insurance Comparison API Running" }))
}

/// Database diagnostic report
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn set_or_not(set: bool) -> String {
    let label = if set { "Set" } else { "Not Set" };
    label.to_string()
}

/// Report whether the store is configured and reachable.
///
/// Always answers 200; failures are described in the body.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "Running".to_string(),
        database: "Not Available".to_string(),
        database_url: set_or_not(state.database_url_set),
        database_name: set_or_not(state.database_name_set),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if state.store.is_configured() {
        match state.store.diagnostics().await {
            Ok(diagnostics) => {
                response.database = format!("Connected & Working ({})", diagnostics.database);
                response.connection_status = "Connected".to_string();
                response.collections = diagnostics.collections;
            }
            Err(e) => {
                tracing::warn!("Database diagnostic failed: {}", e);
                response.database = format!(
                    "Configured but Error: {}",
                    truncate_detail(&e.to_string(), DIAGNOSTIC_ERROR_LEN)
                );
            }
        }
    }

    Json(response)
}
