use std::collections::HashMap;

use crate::database::{Game, Match, Player, Round, ScoreResult};
use crate::scoring::{self, MatchSnapshot, ResultEntry, RoundSnapshot};

use super::models::{GameSummary, MatchView, PlayerStanding, RoundView, ScoreEntry};

/// Stored rows of one match, as loaded from the database.
#[derive(Debug, Clone)]
pub struct MatchRecords {
    pub record: Match,
    pub players: Vec<Player>,
    /// Ordered by round number
    pub rounds: Vec<Round>,
    /// Ordered by insertion
    pub results: Vec<ScoreResult>,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            mode: game.mode.clone(),
        }
    }
}

pub fn build_snapshot(mode: &str, records: &MatchRecords) -> MatchSnapshot {
    let mut by_round: HashMap<i64, Vec<ResultEntry>> = HashMap::new();
    for result in &records.results {
        by_round.entry(result.round_id).or_default().push(ResultEntry {
            player_id: result.player_id,
            score: result.score,
        });
    }

    let rounds = records
        .rounds
        .iter()
        .map(|round| RoundSnapshot {
            number: round.number,
            results: by_round.remove(&round.id).unwrap_or_default(),
        })
        .collect();

    MatchSnapshot {
        mode: mode.to_string(),
        players: records.players.iter().map(|p| p.id).collect(),
        rounds,
    }
}

/// Scores a match and lays it out for display.
pub fn build_match_view(game: &Game, records: MatchRecords) -> MatchView {
    let snapshot = build_snapshot(&game.mode, &records);
    let mode = snapshot.scoring_mode();
    let totals = scoring::compute_totals(&snapshot);
    let best_total = scoring::best_total(mode, &totals);
    let winners = scoring::winners(mode, &totals);

    let players = records
        .players
        .into_iter()
        .map(|player| PlayerStanding {
            total: totals.get(&player.id).copied(),
            highlighted: winners.contains(&player.id),
            player_id: player.id,
            name: player.name,
        })
        .collect();

    let rounds = snapshot
        .rounds
        .into_iter()
        .map(|round| RoundView {
            number: round.number,
            scores: round
                .results
                .into_iter()
                .map(|r| ScoreEntry {
                    player_id: r.player_id,
                    score: r.score,
                })
                .collect(),
        })
        .collect();

    MatchView {
        id: records.record.id,
        game_id: records.record.game_id,
        mode: game.mode.clone(),
        created_at: records.record.created_at,
        players,
        rounds,
        best_total,
        winners: winners.into_iter().collect(),
    }
}
