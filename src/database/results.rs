use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::ScoreResult;

pub fn insert_result(conn: &Connection, round_id: i64, player_id: i64, score: i64) -> Result<ScoreResult> {
    let sql = "INSERT INTO results (round_id, player_id, score) VALUES (?1, ?2, ?3) RETURNING id, round_id, player_id, score";

    conn.query_row(sql, params![round_id, player_id, score], parse_result_row)
        .context("Failed to insert result")
}

fn parse_result_row(row: &rusqlite::Row) -> rusqlite::Result<ScoreResult> {
    Ok(ScoreResult {
        id: row.get(0)?,
        round_id: row.get(1)?,
        player_id: row.get(2)?,
        score: row.get(3)?,
    })
}

/// All results recorded in a match's rounds, in insertion order.
pub fn list_by_match(conn: &Connection, match_id: i64) -> Result<Vec<ScoreResult>> {
    let sql = "
        SELECT r.id, r.round_id, r.player_id, r.score
        FROM results r
        JOIN rounds rd ON r.round_id = rd.id
        WHERE rd.match_id = ?1
        ORDER BY r.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![match_id], parse_result_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
