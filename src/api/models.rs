use serde::{Deserialize, Serialize};

use crate::domain::GameSummary;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameListResponse {
    pub items: Vec<GameSummary>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct GameForm {
    pub name: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerForm {
    pub name: Option<String>,
}
