use chrono::NaiveDateTime;
use serde::Serialize;

use crate::scoring::{PlayerId, Score, Total};

/// Game as listed on the index
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: i64,
    pub name: String,
    pub mode: String,
}

/// One player's line in a match table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStanding {
    pub player_id: PlayerId,
    pub name: String,
    /// Missing when the mode produces no total for this player
    pub total: Option<Total>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub player_id: PlayerId,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub number: i64,
    pub scores: Vec<ScoreEntry>,
}

/// A match with its rounds, totals and highlighted leaders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub id: i64,
    pub game_id: i64,
    pub mode: String,
    pub created_at: NaiveDateTime,
    pub players: Vec<PlayerStanding>,
    pub rounds: Vec<RoundView>,
    pub best_total: Option<Total>,
    pub winners: Vec<PlayerId>,
}

/// A game page: the game plus all of its matches
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub game: GameSummary,
    pub matches: Vec<MatchView>,
}
