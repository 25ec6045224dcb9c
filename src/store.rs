//! Game ledger - SQLite persistence for finished games.
//!
//! Connections are short-lived: callers open, perform one read or write,
//! and close again. IDs are assigned manually as max(id) + 1 so the ledger
//! reads naturally in play order.

use std::path::Path;

use anyhow::Result;
use rusqlite::{Connection, params};

/// Database file, created next to the executable on first use.
const DB_FILE: &str = "games.db";

const CREATE_GAMES: &str = "CREATE TABLE IF NOT EXISTS games (
    id integer PRIMARY KEY,
    w_name text NOT NULL,
    w_elo text NOT NULL,
    b_name text NOT NULL,
    b_elo text NOT NULL,
    winner text NOT NULL,
    moves text NOT NULL
)";

/// One finished game as stored in the `games` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub id: i64,
    pub white_name: String,
    pub white_elo: String,
    pub black_name: String,
    pub black_elo: String,
    pub winner: String,
    pub moves: String,
}

/// An open connection to the ledger. The schema is created on open when
/// missing.
pub struct GamesDb {
    conn: Connection,
}

impl GamesDb {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(CREATE_GAMES, [])?;
        Ok(Self { conn })
    }

    /// Open the ledger at its usual location in the working directory.
    pub fn open_default() -> Result<Self> {
        Self::open(DB_FILE)
    }

    /// All recorded games, oldest first.
    pub fn games(&self) -> Result<Vec<GameRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, w_name, w_elo, b_name, b_elo, winner, moves FROM games ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(GameRecord {
                id: row.get(0)?,
                white_name: row.get(1)?,
                white_elo: row.get(2)?,
                black_name: row.get(3)?,
                black_elo: row.get(4)?,
                winner: row.get(5)?,
                moves: row.get(6)?,
            })
        })?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Insert one finished game and return its assigned ID.
    pub fn add_game(
        &self,
        w_name: &str,
        w_elo: &str,
        b_name: &str,
        b_elo: &str,
        winner: &str,
        moves: &str,
    ) -> Result<i64> {
        let max: Option<i64> = self
            .conn
            .query_row("SELECT max(id) FROM games", [], |row| row.get(0))?;
        let id = max.map_or(1, |m| m + 1);
        self.conn.execute(
            "INSERT INTO games (id, w_name, w_elo, b_name, b_elo, winner, moves)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![id, w_name, w_elo, b_name, b_elo, winner, moves],
        )?;
        Ok(id)
    }

    #[allow(dead_code)]
    pub fn delete_game(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM games WHERE id = ?1", params![id])?;
        Ok(())
    }

    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Fresh database file under the system temp directory.
    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("ledger-{}-{}.db", name, std::process::id()));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn add_sample(db: &GamesDb, winner: &str) -> i64 {
        db.add_game("Anna", "1400", "Ben", "1350", winner, "1. e2 to e4, e7 to e5.\n")
            .unwrap()
    }

    #[test]
    fn test_first_game_gets_id_one() {
        let path = scratch("first-id");
        let db = GamesDb::open(&path).unwrap();
        assert_eq!(add_sample(&db, "White"), 1);
        assert_eq!(add_sample(&db, "Black"), 2);
        db.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_ids_follow_the_maximum_not_the_count() {
        let path = scratch("max-id");
        let db = GamesDb::open(&path).unwrap();
        for _ in 0..7 {
            add_sample(&db, "White");
        }
        db.delete_game(3).unwrap();
        assert_eq!(add_sample(&db, "Black"), 8);
        db.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_round_trip_across_reopen() {
        let path = scratch("round-trip");
        let db = GamesDb::open(&path).unwrap();
        let id = db
            .add_game("Anna", "1400", "Ben", "1350", "Stalemate", "1. e2 to e4, ")
            .unwrap();
        db.close().unwrap();

        let db = GamesDb::open(&path).unwrap();
        let records = db.games().unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, id);
        assert_eq!(record.white_name, "Anna");
        assert_eq!(record.white_elo, "1400");
        assert_eq!(record.black_name, "Ben");
        assert_eq!(record.black_elo, "1350");
        assert_eq!(record.winner, "Stalemate");
        assert_eq!(record.moves, "1. e2 to e4, ");
        db.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_names_with_sql_metacharacters_survive() {
        let path = scratch("quoting");
        let db = GamesDb::open(&path).unwrap();
        db.add_game("O'Brien; DROP TABLE games", "1400", "--Ben", "1350", "White", "x")
            .unwrap();
        let records = db.games().unwrap();
        assert_eq!(records[0].white_name, "O'Brien; DROP TABLE games");
        assert_eq!(records[0].black_name, "--Ben");
        // the table survived the attempt
        assert_eq!(db.games().unwrap().len(), 1);
        db.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let path = scratch("delete");
        let db = GamesDb::open(&path).unwrap();
        for _ in 0..3 {
            add_sample(&db, "White");
        }
        db.delete_game(2).unwrap();
        let ids: Vec<i64> = db.games().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        db.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_ordered_oldest_first() {
        let path = scratch("order");
        let db = GamesDb::open(&path).unwrap();
        add_sample(&db, "White");
        add_sample(&db, "Black");
        add_sample(&db, "Stalemate");
        let winners: Vec<String> = db.games().unwrap().into_iter().map(|r| r.winner).collect();
        assert_eq!(winners, vec!["White", "Black", "Stalemate"]);
        db.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }
}
