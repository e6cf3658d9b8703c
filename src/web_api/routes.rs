//! API Routes

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::board_store::Point;
use crate::error::{Error, Result};
use crate::state::AppState;

/// Create API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(super::health_check))
        // Board
        .route("/board/add", post(add_point))
        .route("/board/points", get(list_points))
        .route("/board/clear", delete(clear_points))
        .with_state(state)
}

/// POST /board/add - append one point to the board
///
/// Bodies with missing or mistyped fields are rejected with 400 rather than
/// silently defaulted.
async fn add_point(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Point>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(point) = payload.map_err(|e| Error::Validation(e.body_text()))?;
    state.board.add(point).await;
    Ok(StatusCode::OK)
}

/// GET /board/points - full snapshot, insertion order
async fn list_points(State(state): State<AppState>) -> Json<Vec<Point>> {
    Json(state.board.points().await)
}

/// DELETE /board/clear - empty the board (idempotent)
async fn clear_points(State(state): State<AppState>) -> StatusCode {
    state.board.clear().await;
    StatusCode::OK
}
