//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::search::{SearchConfig, search};
use crate::stations::Station;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/stations/:id", get(get_station))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all stations, or search them when `q` is given.
async fn list_stations(
    State(state): State<AppState>,
    Query(req): Query<StationListRequest>,
) -> Result<Json<StationListResponse>, AppError> {
    let snapshot = state.stations.snapshot().await;
    let stations = select_stations(&snapshot, &req, &state.config)?;

    Ok(Json(StationListResponse { stations }))
}

/// Look up a single station by id.
async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Station>, AppError> {
    state
        .stations
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Station {id} not found"),
        })
}

/// Pick the stations a `GET /stations` request asks for.
///
/// Without a query every station is returned in directory order. With one,
/// the matcher ranks them and the result is capped at the requested limit
/// (or the configured default), never exceeding the configured maximum.
pub fn select_stations(
    stations: &[Station],
    req: &StationListRequest,
    config: &SearchConfig,
) -> Result<Vec<Station>, AppError> {
    let Some(query) = req.q.as_deref() else {
        return Ok(stations.to_vec());
    };

    if !config.accepts_query(query) {
        return Err(AppError::BadRequest {
            message: format!(
                "Query too long: at most {} characters allowed",
                config.max_query_chars
            ),
        });
    }

    let limit = config.clamp_limit(req.limit);
    let matches: Vec<Station> = search(stations, query, limit)
        .into_iter()
        .cloned()
        .collect();
    debug!(query, limit, results = matches.len(), "searched stations");

    Ok(matches)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
