use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Match;

pub fn insert_match(conn: &Connection, game_id: i64, created_at: NaiveDateTime) -> Result<Match> {
    let sql = "INSERT INTO matches (game_id, created_at) VALUES (?1, ?2) RETURNING id, game_id, created_at";

    conn.query_row(sql, params![game_id, created_at], parse_match_row)
        .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        game_id: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Match>> {
    let sql = "SELECT id, game_id, created_at FROM matches WHERE id = ?1";

    conn.query_row(sql, params![id], parse_match_row)
        .optional()
        .context("Failed to query match by id")
}

pub fn list_by_game(conn: &Connection, game_id: i64) -> Result<Vec<Match>> {
    let sql = "SELECT id, game_id, created_at FROM matches WHERE game_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![game_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::database::connection::test_pool;
    use crate::database::{games, get_connection};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_insert_keeps_timestamp() {
        let pool = test_pool();
        let conn = get_connection(&pool).unwrap();
        let game = games::insert_game(&conn, "Uno", "sum_low").unwrap();

        let created = insert_match(&conn, game.id, noon()).unwrap();

        assert_eq!(created.created_at, noon());
        assert_eq!(find_by_id(&conn, created.id).unwrap(), Some(created));
    }

    #[test]
    fn test_list_by_game_filters_other_games() {
        let pool = test_pool();
        let conn = get_connection(&pool).unwrap();
        let uno = games::insert_game(&conn, "Uno", "sum_low").unwrap();
        let yahtzee = games::insert_game(&conn, "Yahtzee", "sum_high").unwrap();

        insert_match(&conn, uno.id, noon()).unwrap();
        insert_match(&conn, yahtzee.id, noon()).unwrap();
        insert_match(&conn, uno.id, noon()).unwrap();

        assert_eq!(list_by_game(&conn, uno.id).unwrap().len(), 2);
        assert_eq!(list_by_game(&conn, yahtzee.id).unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_game_is_rejected_by_foreign_key() {
        let pool = test_pool();
        let conn = get_connection(&pool).unwrap();

        assert!(insert_match(&conn, 42, noon()).is_err());
    }
}
