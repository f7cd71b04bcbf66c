use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Form,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::models::PlayerForm;
use crate::services::tracker::Mutation;
use super::{game_page, query_error, AppState};

pub async fn add_player(
    State(state): State<Arc<AppState>>,
    Path(match_id): Path<i64>,
    Form(form): Form<PlayerForm>,
) -> impl IntoResponse {
    match state.tracker.add_player(match_id, form.name.as_deref()) {
        Ok(Some(change)) => game_page(change.game_id).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn add_round(
    State(state): State<Arc<AppState>>,
    Path(match_id): Path<i64>,
    Form(fields): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    match state.tracker.add_round(match_id, &fields) {
        Ok(Some(change)) => match change.outcome {
            Mutation::Rejected(reason) => (StatusCode::BAD_REQUEST, reason).into_response(),
            _ => game_page(change.game_id).into_response(),
        },
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn match_standings(
    State(state): State<Arc<AppState>>,
    Path(match_id): Path<i64>,
) -> impl IntoResponse {
    match state.tracker.match_view(match_id) {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => query_error(e),
    }
}
