use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::Round;

pub fn insert_round(conn: &Connection, match_id: i64, number: i64) -> Result<Round> {
    let sql = "INSERT INTO rounds (match_id, number) VALUES (?1, ?2) RETURNING id, match_id, number";

    conn.query_row(sql, params![match_id, number], parse_round_row)
        .context("Failed to insert round")
}

fn parse_round_row(row: &rusqlite::Row) -> rusqlite::Result<Round> {
    Ok(Round {
        id: row.get(0)?,
        match_id: row.get(1)?,
        number: row.get(2)?,
    })
}

/// Rounds of a match ordered by round number.
pub fn list_by_match(conn: &Connection, match_id: i64) -> Result<Vec<Round>> {
    let sql = "SELECT id, match_id, number FROM rounds WHERE match_id = ?1 ORDER BY number, id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![match_id], parse_round_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_numbers(conn: &Connection, match_id: i64) -> Result<Vec<i64>> {
    let sql = "SELECT number FROM rounds WHERE match_id = ?1";

    let mut stmt = conn.prepare(sql)?;
    let numbers = stmt
        .query_map(params![match_id], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<i64>>>()
        .context("Failed to list round numbers")?;

    Ok(numbers)
}
