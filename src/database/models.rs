use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i64,
    pub game_id: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub match_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: i64,
    pub match_id: i64,
    pub number: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub id: i64,
    pub round_id: i64,
    pub player_id: i64,
    pub score: i64,
}
