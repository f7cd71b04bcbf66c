use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::Player;

pub fn insert_player(conn: &Connection, match_id: i64, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (match_id, name) VALUES (?1, ?2) RETURNING id, match_id, name";

    conn.query_row(sql, params![match_id, name], parse_player_row)
        .context("Failed to insert player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        match_id: row.get(1)?,
        name: row.get(2)?,
    })
}

/// Players of a match in the order they joined.
pub fn list_by_match(conn: &Connection, match_id: i64) -> Result<Vec<Player>> {
    let sql = "SELECT id, match_id, name FROM players WHERE match_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![match_id], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
