use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect},
    Form,
};
use std::sync::Arc;

use crate::api::models::{GameForm, GameListResponse};
use crate::domain::GameSummary;
use super::{game_page, query_error, AppState};

pub async fn list_games(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let games = match state.tracker.list_games() {
        Ok(games) => games,
        Err(e) => return query_error(e),
    };

    let items: Vec<GameSummary> = games.iter().map(GameSummary::from).collect();
    Json(GameListResponse {
        total: items.len(),
        items,
    })
    .into_response()
}

pub async fn view_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<i64>,
) -> impl IntoResponse {
    match state.tracker.game_view(game_id) {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn add_game(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GameForm>,
) -> impl IntoResponse {
    match state.tracker.add_game(form.name.as_deref(), form.mode.as_deref()) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn add_match(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<i64>,
) -> impl IntoResponse {
    match state.tracker.add_match(game_id) {
        Ok(Some(_)) => game_page(game_id).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => query_error(e),
    }
}
