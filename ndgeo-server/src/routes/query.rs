//! Natural-language query route

use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub response: String,
    pub success: bool,
}

/// Dispatch a query through the shared agent.
///
/// Engine errors are reported inside the body with `success: false`; only a
/// poisoned agent lock fails the request itself.
pub async fn query(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let mut agent = state.agent()?;

    let (response, success) = match agent.try_process_query(&req.query) {
        Ok(reply) => (reply, true),
        Err(e) => {
            tracing::warn!(query = %req.query, "Query failed: {}", e);
            (format!("Error processing query: {}", e), false)
        }
    };

    Ok(Json(QueryResponse {
        query: req.query,
        response,
        success,
    }))
}
