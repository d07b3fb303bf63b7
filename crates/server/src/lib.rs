//! Demo HTTP surface hosting the alert triage pipeline.
//!
//! The endpoints mirror a minimal service skeleton (greeting, health,
//! item read/update, environment dump) plus `POST /api/triage`, which
//! feeds the request body through triage-core and returns grouped
//! priorities. The router is built by [`app`] so tests can drive it
//! in-process without binding a socket.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use triage_core::{
    alerts_from_value, filter_alerts, group_alerts, priority, FilterParams, TriageError,
};

/// Build the service router. Wide-open CORS, demo posture.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health_check))
        .route("/items/:item_id", get(read_item).put(update_item))
        .route("/data", get(read_data))
        .route("/api/triage", post(triage_alerts))
        .layer(cors)
}

// ============================================================================
// Basic Endpoints
// ============================================================================

async fn read_root() -> Json<serde_json::Value> {
    tracing::info!("Root endpoint accessed");
    Json(json!({ "Hello": "World" }))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    environment: String,
    version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "unknown".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct ItemQuery {
    q: Option<String>,
}

async fn read_item(Path(item_id): Path<i64>, Query(query): Query<ItemQuery>) -> Response {
    if item_id < 0 {
        return bad_request("Item ID must be positive");
    }
    tracing::info!(item_id, q = ?query.q, "Item endpoint accessed");
    Json(json!({ "item_id": item_id, "q": query.q })).into_response()
}

#[derive(Debug, Deserialize)]
struct Item {
    name: String,
    #[allow(dead_code)]
    price: f64,
    #[allow(dead_code)]
    is_offer: Option<bool>,
}

async fn update_item(Path(item_id): Path<i64>, Json(item): Json<Item>) -> Response {
    if item_id < 0 {
        return bad_request("Item ID must be positive");
    }
    tracing::info!(item_id, "Item update endpoint accessed");
    Json(json!({ "item_name": item.name, "item_id": item_id })).into_response()
}

async fn read_data() -> Json<serde_json::Value> {
    tracing::info!("Data endpoint accessed");
    // DB_PASSWORD is reported masked, never in the clear.
    Json(json!({
        "DB_PASSWORD": std::env::var("DB_PASSWORD").ok().map(|_| "***"),
        "API_BASE_URL": std::env::var("API_BASE_URL").ok(),
        "LOG_LEVEL": std::env::var("LOG_LEVEL").ok(),
        "MAX_CONNECTIONS": std::env::var("MAX_CONNECTIONS").ok(),
        "ENVIRONMENT": std::env::var("ENVIRONMENT").ok(),
    }))
}

// ============================================================================
// Triage Endpoint
// ============================================================================

async fn triage_alerts(
    Query(params): Query<FilterParams>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    match run_triage(&body, &params) {
        Ok(result) => {
            tracing::info!(matched = result["matched"].as_u64(), "Triage completed");
            Json(result).into_response()
        }
        Err(err) => {
            tracing::warn!("Triage failed: {}", err);
            triage_error_response(err)
        }
    }
}

fn run_triage(
    body: &serde_json::Value,
    params: &FilterParams,
) -> Result<serde_json::Value, TriageError> {
    let alerts = alerts_from_value(body)?;
    let filtered = filter_alerts(&alerts, params)?;

    if filtered.is_empty() {
        let all_groups: Vec<_> = group_alerts(&alerts)
            .iter()
            .map(|(key, members)| {
                json!({
                    "service": key.service,
                    "component": key.component,
                    "alerts": members.len(),
                })
            })
            .collect();
        return Ok(json!({ "matched": 0, "all_groups": all_groups }));
    }

    let mut groups = Vec::new();
    for (key, members) in group_alerts(&filtered).iter() {
        let priority = priority(members)?;
        groups.push(json!({
            "service": key.service,
            "component": key.component,
            "alerts": members.len(),
            "priority": priority,
        }));
    }

    Ok(json!({ "matched": filtered.len(), "groups": groups }))
}

fn triage_error_response(err: TriageError) -> Response {
    let status = match err {
        TriageError::Structure(_)
        | TriageError::Record(_)
        | TriageError::Timestamp { .. }
        | TriageError::Window { .. } => StatusCode::BAD_REQUEST,
        TriageError::EmptyGroup | TriageError::ZeroThreshold { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    (status, Json(json!({ "detail": err.to_string() }))).into_response()
}

fn bad_request(detail: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail }))).into_response()
}
