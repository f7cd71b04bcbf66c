use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{
    games::{add_game, add_match, list_games, view_game},
    matches::{add_player, add_round, match_standings},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_games))
        .route("/game/:game_id", get(view_game))
        .route("/add_game", post(add_game))
        .route("/add_match/:game_id", post(add_match))
        .route("/add_player/:match_id", post(add_player))
        .route("/add_round/:match_id", post(add_round))
        .route("/match/:match_id/standings", get(match_standings))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::database::connection::test_pool;
    use crate::services::tracker::ScoreTracker;

    fn app() -> Router {
        let state = Arc::new(AppState {
            tracker: ScoreTracker::new(test_pool()),
        });
        create_router(state)
    }

    async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_add_game_redirects_to_index() {
        let app = app();

        let response = post_form(&app, "/add_game", "name=Catan&mode=sum_high").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let (status, body) = get_json(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["items"][0], json!({"id": 1, "name": "Catan", "mode": "sum_high"}));
    }

    #[tokio::test]
    async fn test_add_game_missing_field_is_silent() {
        let app = app();

        let response = post_form(&app, "/add_game", "name=Catan").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let (_, body) = get_json(&app, "/").await;
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_unknown_entities_are_not_found() {
        let app = app();

        assert_eq!(get_json(&app, "/game/7").await.0, StatusCode::NOT_FOUND);
        assert_eq!(post_form(&app, "/add_match/7", "").await.status(), StatusCode::NOT_FOUND);
        assert_eq!(post_form(&app, "/add_player/7", "name=Ann").await.status(), StatusCode::NOT_FOUND);
        assert_eq!(post_form(&app, "/add_round/7", "").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_full_sum_high_match() {
        let app = app();
        post_form(&app, "/add_game", "name=Yahtzee&mode=sum_high").await;

        let response = post_form(&app, "/add_match/1", "").await;
        assert_eq!(location(&response), "/game/1");
        let response = post_form(&app, "/add_player/1", "name=A").await;
        assert_eq!(location(&response), "/game/1");
        post_form(&app, "/add_player/1", "name=B").await;

        post_form(&app, "/add_round/1", "score_1=10&score_2=20").await;
        let response = post_form(&app, "/add_round/1", "score_1=15&score_2=5").await;
        assert_eq!(location(&response), "/game/1");

        let (status, body) = get_json(&app, "/game/1").await;
        assert_eq!(status, StatusCode::OK);
        let m = &body["matches"][0];
        assert_eq!(m["players"][0]["total"], 25);
        assert_eq!(m["players"][1]["total"], 25);
        assert_eq!(m["players"][0]["highlighted"], true);
        assert_eq!(m["players"][1]["highlighted"], true);
        assert_eq!(m["winners"], json!([1, 2]));
        assert_eq!(m["rounds"][1]["number"], 2);
    }

    #[tokio::test]
    async fn test_placement_standings() {
        let app = app();
        post_form(&app, "/add_game", "name=Kart&mode=placement").await;
        post_form(&app, "/add_match/1", "").await;
        for name in ["X", "Y", "Z"] {
            post_form(&app, "/add_player/1", &format!("name={}", name)).await;
        }
        post_form(&app, "/add_round/1", "score_1=5&score_2=5&score_3=1").await;

        let (status, body) = get_json(&app, "/match/1/standings").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["players"][0]["total"], 2.0);
        assert_eq!(body["players"][1]["total"], 3.0);
        assert_eq!(body["players"][2]["total"], 1.0);
        assert_eq!(body["winners"], json!([3]));
        assert_eq!(body["bestTotal"], 1.0);
    }

    #[tokio::test]
    async fn test_invalid_score_is_bad_request() {
        let app = app();
        post_form(&app, "/add_game", "name=Darts&mode=sum_low").await;
        post_form(&app, "/add_match/1", "").await;
        post_form(&app, "/add_player/1", "name=P").await;

        let response = post_form(&app, "/add_round/1", "score_1=lots").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let (_, body) = get_json(&app, "/match/1/standings").await;
        assert_eq!(body["rounds"], json!([]));
    }

    #[tokio::test]
    async fn test_unrecognized_mode_has_no_totals() {
        let app = app();
        post_form(&app, "/add_game", "name=Odd&mode=highest").await;
        post_form(&app, "/add_match/1", "").await;
        post_form(&app, "/add_player/1", "name=P").await;
        post_form(&app, "/add_round/1", "score_1=3").await;

        let (_, body) = get_json(&app, "/match/1/standings").await;

        assert_eq!(body["players"][0]["total"], Value::Null);
        assert_eq!(body["winners"], json!([]));
    }
}
