use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::services::tracker::ScoreTracker;

pub mod games;
pub mod matches;

#[derive(Clone)]
pub struct AppState {
    pub tracker: ScoreTracker,
}

pub(crate) fn game_page(game_id: i64) -> Redirect {
    Redirect::to(&format!("/game/{}", game_id))
}

pub(crate) fn query_error(e: anyhow::Error) -> Response {
    log::error!("Request failed: {:#}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
}
