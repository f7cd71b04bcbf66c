use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Game;

pub fn insert_game(conn: &Connection, name: &str, mode: &str) -> Result<Game> {
    let sql = "INSERT INTO games (name, mode) VALUES (?1, ?2) RETURNING id, name, mode";

    conn.query_row(sql, params![name, mode], parse_game_row)
        .context("Failed to insert game")
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<Game> {
    Ok(Game {
        id: row.get(0)?,
        name: row.get(1)?,
        mode: row.get(2)?,
    })
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Game>> {
    let sql = "SELECT id, name, mode FROM games WHERE id = ?1";

    conn.query_row(sql, params![id], parse_game_row)
        .optional()
        .context("Failed to query game by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Game>> {
    let sql = "SELECT id, name, mode FROM games ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::test_pool;
    use crate::database::get_connection;

    #[test]
    fn test_insert_and_find_game() {
        let pool = test_pool();
        let conn = get_connection(&pool).unwrap();

        let game = insert_game(&conn, "Skull King", "sum_high").unwrap();
        let found = find_by_id(&conn, game.id).unwrap();

        assert_eq!(found, Some(game));
        assert_eq!(find_by_id(&conn, 9999).unwrap(), None);
    }

    #[test]
    fn test_list_all_in_creation_order() {
        let pool = test_pool();
        let conn = get_connection(&pool).unwrap();

        insert_game(&conn, "Hearts", "sum_low").unwrap();
        insert_game(&conn, "Mario Kart", "placement").unwrap();

        let names: Vec<String> = list_all(&conn).unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Hearts", "Mario Kart"]);
    }
}
