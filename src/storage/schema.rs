//! Database schema and connection management

use crate::error::Result;
use rusqlite::{Connection, Transaction};
use std::path::Path;

/// Connection manager for the league history database.
pub struct HistoryDb {
    conn: Connection,
}

impl HistoryDb {
    /// Open (creating if needed) the database at `path` and ensure the
    /// schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Begin the whole-run transaction. Dropping it without `commit` rolls
    /// everything back.
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS leagues (
                id INTEGER PRIMARY KEY,
                espn_league_id TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS owners (
                id INTEGER PRIMARY KEY,
                league_id INTEGER NOT NULL REFERENCES leagues(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                UNIQUE (league_id, name)
            );

            CREATE TABLE IF NOT EXISTS seasons (
                id INTEGER PRIMARY KEY,
                league_id INTEGER NOT NULL REFERENCES leagues(id) ON DELETE CASCADE,
                year INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                UNIQUE (league_id, year)
            );

            CREATE TABLE IF NOT EXISTS teams (
                id INTEGER PRIMARY KEY,
                season_id INTEGER NOT NULL REFERENCES seasons(id) ON DELETE CASCADE,
                owner_id INTEGER NOT NULL REFERENCES owners(id) ON DELETE CASCADE,
                espn_team_id TEXT NOT NULL,
                name TEXT NOT NULL,
                final_standing INTEGER,
                wins INTEGER NOT NULL DEFAULT 0,
                losses INTEGER NOT NULL DEFAULT 0,
                ties INTEGER NOT NULL DEFAULT 0,
                points_for REAL NOT NULL DEFAULT 0,
                points_against REAL NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                UNIQUE (season_id, espn_team_id)
            );

            CREATE TABLE IF NOT EXISTS matchups (
                id INTEGER PRIMARY KEY,
                season_id INTEGER NOT NULL REFERENCES seasons(id) ON DELETE CASCADE,
                week INTEGER NOT NULL,
                home_team_id INTEGER NOT NULL REFERENCES teams(id) ON DELETE CASCADE,
                away_team_id INTEGER NOT NULL REFERENCES teams(id) ON DELETE CASCADE,
                home_score REAL NOT NULL,
                away_score REAL NOT NULL,
                is_playoff INTEGER NOT NULL DEFAULT 0,
                is_championship INTEGER NOT NULL DEFAULT 0,
                matchup_type TEXT NOT NULL DEFAULT 'NONE',
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                UNIQUE (season_id, week, home_team_id, away_team_id)
            );

            CREATE INDEX IF NOT EXISTS idx_owners_league ON owners(league_id);
            CREATE INDEX IF NOT EXISTS idx_seasons_league ON seasons(league_id);
            CREATE INDEX IF NOT EXISTS idx_teams_season ON teams(season_id);
            CREATE INDEX IF NOT EXISTS idx_teams_owner ON teams(owner_id);
            CREATE INDEX IF NOT EXISTS idx_matchups_season_week ON matchups(season_id, week);
            CREATE INDEX IF NOT EXISTS idx_matchups_playoff ON matchups(is_playoff);
            CREATE INDEX IF NOT EXISTS idx_matchups_type ON matchups(matchup_type);",
        )?;
        Ok(())
    }
}
