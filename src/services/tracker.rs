use std::collections::HashMap;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use rusqlite::Connection;

use crate::database::{self, games, matches, players, results, rounds, DbPool, Game, Match, Player, Round};
use crate::domain::{build_match_view, GameView, MatchRecords, MatchView};
use crate::scoring::next_round_number;

/// What a write request ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<T> {
    Created(T),
    /// A required field was missing; nothing was written
    Skipped,
    /// Input was present but unusable; nothing was written
    Rejected(String),
}

/// A write scoped to a match, with the game that owns the match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchChange<T> {
    pub game_id: i64,
    pub outcome: Mutation<T>,
}

/// Form field carrying a player's score for a new round.
pub fn score_field(player_id: i64) -> String {
    format!("score_{}", player_id)
}

/// Reads, records and scores games, matches, players and rounds.
#[derive(Clone)]
pub struct ScoreTracker {
    pool: DbPool,
}

impl ScoreTracker {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn list_games(&self) -> Result<Vec<Game>> {
        let conn = database::get_connection(&self.pool)?;
        games::list_all(&conn)
    }

    pub fn add_game(&self, name: Option<&str>, mode: Option<&str>) -> Result<Mutation<Game>> {
        let (Some(name), Some(mode)) = (present(name), present(mode)) else {
            debug!("Skipping game creation: name or mode missing");
            return Ok(Mutation::Skipped);
        };

        let conn = database::get_connection(&self.pool)?;
        let game = games::insert_game(&conn, name, mode)?;
        info!("Created game {} '{}' (mode {})", game.id, game.name, game.mode);
        Ok(Mutation::Created(game))
    }

    /// Creates an empty match. `None` when the game does not exist.
    pub fn add_match(&self, game_id: i64) -> Result<Option<Match>> {
        let conn = database::get_connection(&self.pool)?;
        if games::find_by_id(&conn, game_id)?.is_none() {
            return Ok(None);
        }

        let created = matches::insert_match(&conn, game_id, Utc::now().naive_utc())?;
        info!("Created match {} for game {}", created.id, game_id);
        Ok(Some(created))
    }

    /// Adds a player to a match. `None` when the match does not exist.
    pub fn add_player(&self, match_id: i64, name: Option<&str>) -> Result<Option<MatchChange<Player>>> {
        let conn = database::get_connection(&self.pool)?;
        let Some(record) = matches::find_by_id(&conn, match_id)? else {
            return Ok(None);
        };

        let outcome = match present(name) {
            Some(name) => {
                let player = players::insert_player(&conn, match_id, name)?;
                info!("Added player {} '{}' to match {}", player.id, player.name, match_id);
                Mutation::Created(player)
            }
            None => {
                debug!("Skipping player creation for match {}: name missing", match_id);
                Mutation::Skipped
            }
        };

        Ok(Some(MatchChange {
            game_id: record.game_id,
            outcome,
        }))
    }

    /// Adds the next round to a match and records a result for every current
    /// player whose `score_{id}` field is present. `None` when the match does
    /// not exist.
    pub fn add_round(
        &self,
        match_id: i64,
        fields: &HashMap<String, String>,
    ) -> Result<Option<MatchChange<Round>>> {
        let mut conn = database::get_connection(&self.pool)?;
        let Some(record) = matches::find_by_id(&conn, match_id)? else {
            return Ok(None);
        };

        let roster = players::list_by_match(&conn, match_id)?;
        let scores = match collect_scores(&roster, fields) {
            Ok(scores) => scores,
            Err(reason) => {
                debug!("Rejecting round for match {}: {}", match_id, reason);
                return Ok(Some(MatchChange {
                    game_id: record.game_id,
                    outcome: Mutation::Rejected(reason),
                }));
            }
        };

        let tx = conn.transaction().context("Failed to start round transaction")?;
        let round = record_round(&tx, match_id, &scores)?;
        tx.commit().context("Failed to commit round")?;

        info!(
            "Added round {} to match {} with {} results",
            round.number,
            match_id,
            scores.len()
        );
        Ok(Some(MatchChange {
            game_id: record.game_id,
            outcome: Mutation::Created(round),
        }))
    }

    /// A game with every match scored. `None` when the game does not exist.
    pub fn game_view(&self, game_id: i64) -> Result<Option<GameView>> {
        let conn = database::get_connection(&self.pool)?;
        let Some(game) = games::find_by_id(&conn, game_id)? else {
            return Ok(None);
        };

        let match_views = matches::list_by_game(&conn, game_id)?
            .into_iter()
            .map(|record| load_records(&conn, record).map(|records| build_match_view(&game, records)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(GameView {
            game: (&game).into(),
            matches: match_views,
        }))
    }

    /// One match scored. `None` when the match does not exist.
    pub fn match_view(&self, match_id: i64) -> Result<Option<MatchView>> {
        let conn = database::get_connection(&self.pool)?;
        let Some(record) = matches::find_by_id(&conn, match_id)? else {
            return Ok(None);
        };
        let game = games::find_by_id(&conn, record.game_id)?
            .with_context(|| format!("Match {} refers to missing game {}", match_id, record.game_id))?;

        let records = load_records(&conn, record)?;
        Ok(Some(build_match_view(&game, records)))
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Scores supplied for the current players, in roster order.
fn collect_scores(
    roster: &[Player],
    fields: &HashMap<String, String>,
) -> std::result::Result<Vec<(i64, i64)>, String> {
    let mut scores = Vec::new();
    for player in roster {
        let field = score_field(player.id);
        let Some(raw) = present(fields.get(&field).map(String::as_str)) else {
            continue;
        };
        let score = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("{} is not an integer score: {:?}", field, raw))?;
        scores.push((player.id, score));
    }
    Ok(scores)
}

fn record_round(conn: &Connection, match_id: i64, scores: &[(i64, i64)]) -> Result<Round> {
    let number = next_round_number(rounds::list_numbers(conn, match_id)?);
    let round = rounds::insert_round(conn, match_id, number)?;

    for &(player_id, score) in scores {
        results::insert_result(conn, round.id, player_id, score)?;
    }

    Ok(round)
}

fn load_records(conn: &Connection, record: Match) -> Result<MatchRecords> {
    let players = players::list_by_match(conn, record.id)?;
    let rounds = rounds::list_by_match(conn, record.id)?;
    let results = results::list_by_match(conn, record.id)?;

    Ok(MatchRecords {
        record,
        players,
        rounds,
        results,
    })
}
