//! Natural-key upserts against the five history tables.
//!
//! Each function is an `INSERT ... ON CONFLICT ... DO UPDATE` keyed on the
//! entity's external identifier and returns the durable row id. All mutable
//! fields are overwritten on conflict (last write wins); `created_at` is
//! preserved and `updated_at` refreshed. Functions take a plain
//! [`Connection`] so they work both standalone and inside the orchestrator's
//! transaction.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::Result;
use crate::espn::types::MatchupType;
use crate::matchups::MatchupRow;
use crate::types::Season;

fn now_epoch() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn upsert_league(conn: &Connection, espn_league_id: &str, name: &str) -> Result<i64> {
    let id = conn.query_row(
        "INSERT INTO leagues (espn_league_id, name, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?3)
         ON CONFLICT (espn_league_id) DO UPDATE SET
             name = excluded.name,
             updated_at = excluded.updated_at
         RETURNING id",
        params![espn_league_id, name, now_epoch()],
        |row| row.get(0),
    )?;
    Ok(id)
}

pub fn upsert_season(conn: &Connection, league_id: i64, year: Season) -> Result<i64> {
    let id = conn.query_row(
        "INSERT INTO seasons (league_id, year, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?3)
         ON CONFLICT (league_id, year) DO UPDATE SET
             updated_at = excluded.updated_at
         RETURNING id",
        params![league_id, year.as_u16(), now_epoch()],
        |row| row.get(0),
    )?;
    Ok(id)
}

pub fn upsert_owner(conn: &Connection, league_id: i64, name: &str) -> Result<i64> {
    let id = conn.query_row(
        "INSERT INTO owners (league_id, name, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?3)
         ON CONFLICT (league_id, name) DO UPDATE SET
             updated_at = excluded.updated_at
         RETURNING id",
        params![league_id, name, now_epoch()],
        |row| row.get(0),
    )?;
    Ok(id)
}

/// Season-aggregate team record, keyed on (season, ESPN team id).
#[derive(Debug, Clone)]
pub struct TeamUpsert<'a> {
    pub season_id: i64,
    pub owner_id: i64,
    pub espn_team_id: &'a str,
    pub name: &'a str,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub final_standing: Option<u32>,
}

pub fn upsert_team(conn: &Connection, team: &TeamUpsert<'_>) -> Result<i64> {
    let id = conn.query_row(
        "INSERT INTO teams (season_id, owner_id, espn_team_id, name, wins, losses, ties,
                            points_for, points_against, final_standing, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)
         ON CONFLICT (season_id, espn_team_id) DO UPDATE SET
             owner_id = excluded.owner_id,
             name = excluded.name,
             wins = excluded.wins,
             losses = excluded.losses,
             ties = excluded.ties,
             points_for = excluded.points_for,
             points_against = excluded.points_against,
             final_standing = excluded.final_standing,
             updated_at = excluded.updated_at
         RETURNING id",
        params![
            team.season_id,
            team.owner_id,
            team.espn_team_id,
            team.name,
            team.wins,
            team.losses,
            team.ties,
            team.points_for,
            team.points_against,
            team.final_standing,
            now_epoch(),
        ],
        |row| row.get(0),
    )?;
    Ok(id)
}

pub fn upsert_matchup(conn: &Connection, season_id: i64, matchup: &MatchupRow) -> Result<i64> {
    let id = conn.query_row(
        "INSERT INTO matchups (season_id, week, home_team_id, away_team_id, home_score,
                               away_score, is_playoff, is_championship, matchup_type,
                               created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)
         ON CONFLICT (season_id, week, home_team_id, away_team_id) DO UPDATE SET
             home_score = excluded.home_score,
             away_score = excluded.away_score,
             is_playoff = excluded.is_playoff,
             is_championship = excluded.is_championship,
             matchup_type = excluded.matchup_type,
             updated_at = excluded.updated_at
         RETURNING id",
        params![
            season_id,
            matchup.week.as_u16(),
            matchup.home_team_id,
            matchup.away_team_id,
            matchup.home_score,
            matchup.away_score,
            matchup.is_playoff,
            matchup.is_championship,
            matchup.matchup_type.as_str(),
            now_epoch(),
        ],
        |row| row.get(0),
    )?;
    Ok(id)
}

/// Stored team row, read back for verification.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub final_standing: Option<u32>,
}

pub fn get_team(conn: &Connection, season_id: i64, espn_team_id: &str) -> Result<Option<TeamRow>> {
    let team = conn
        .query_row(
            "SELECT id, owner_id, name, wins, losses, ties, points_for, points_against,
                    final_standing
             FROM teams WHERE season_id = ?1 AND espn_team_id = ?2",
            params![season_id, espn_team_id],
            |row| {
                Ok(TeamRow {
                    id: row.get(0)?,
                    owner_id: row.get(1)?,
                    name: row.get(2)?,
                    wins: row.get(3)?,
                    losses: row.get(4)?,
                    ties: row.get(5)?,
                    points_for: row.get(6)?,
                    points_against: row.get(7)?,
                    final_standing: row.get(8)?,
                })
            },
        )
        .optional()?;
    Ok(team)
}

/// Stored matchup row, read back for verification.
#[derive(Debug, Clone)]
pub struct StoredMatchup {
    pub id: i64,
    pub week: u16,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: f64,
    pub away_score: f64,
    pub is_playoff: bool,
    pub is_championship: bool,
    pub matchup_type: MatchupType,
}

pub fn get_matchups(conn: &Connection, season_id: i64) -> Result<Vec<StoredMatchup>> {
    let mut stmt = conn.prepare(
        "SELECT id, week, home_team_id, away_team_id, home_score, away_score,
                is_playoff, is_championship, matchup_type
         FROM matchups WHERE season_id = ?1
         ORDER BY week, home_team_id",
    )?;
    let rows = stmt.query_map(params![season_id], row_to_matchup)?;

    let mut matchups = Vec::new();
    for row in rows {
        matchups.push(row?);
    }
    Ok(matchups)
}

fn row_to_matchup(row: &Row<'_>) -> rusqlite::Result<StoredMatchup> {
    let tag: String = row.get(8)?;
    Ok(StoredMatchup {
        id: row.get(0)?,
        week: row.get(1)?,
        home_team_id: row.get(2)?,
        away_team_id: row.get(3)?,
        home_score: row.get(4)?,
        away_score: row.get(5)?,
        is_playoff: row.get(6)?,
        is_championship: row.get(7)?,
        matchup_type: MatchupType::from_tag(&tag),
    })
}

pub fn count_rows(conn: &Connection, table: &str) -> Result<i64> {
    // Table names cannot be bound; restrict to the known set.
    debug_assert!(matches!(
        table,
        "leagues" | "owners" | "seasons" | "teams" | "matchups"
    ));
    let count = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(count)
}
