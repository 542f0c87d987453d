//! Import orchestration.
//!
//! Runs the whole import inside one database transaction: either every
//! discovered season lands, or the database is untouched.

use std::collections::HashMap;
use std::path::Path;

use crate::discovery::discover_seasons;
use crate::error::{ImportError, Result};
use crate::espn::{EspnApi, SeasonClient};
use crate::matchups::collect_season_matchups;
use crate::storage::queries::{self, TeamUpsert};
use crate::storage::HistoryDb;
use crate::types::Season;

/// Totals reported after a successful run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportSummary {
    pub seasons: usize,
    pub teams: usize,
    pub matchups: usize,
}

/// Discover every available season and import them oldest-first.
///
/// `from_year` is the probe's upper bound, normally [`Season::current`].
/// The database is not opened (or even created on disk) until discovery has
/// found at least one season, so a zero-season run performs no writes. Any
/// error after the transaction opens rolls the whole run back.
pub async fn run_import(
    api: &EspnApi,
    db_path: impl AsRef<Path>,
    from_year: Season,
    verbose: bool,
) -> Result<ImportSummary> {
    println!("Discovering available seasons...");
    let seasons = discover_seasons(api, from_year).await;

    let (&first, &last) = match (seasons.first(), seasons.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ImportError::NoSeasons),
    };
    println!();
    println!("Found {} seasons: {first}-{last}", seasons.len());
    println!();

    println!("Connecting to database...");
    let mut db = HistoryDb::open(db_path)?;
    let tx = db.transaction()?;

    // The most recent season carries the league's current display name.
    println!("Fetching league info from most recent season...");
    let recent = SeasonClient::connect(api, last).await?;
    let league_name = recent.league_name();
    println!("League name: {league_name}");
    println!();

    let league_row = queries::upsert_league(&tx, &api.league_id().to_string(), &league_name)?;
    let mut summary = ImportSummary::default();

    println!("Importing seasons...");
    for &year in &seasons {
        let client = SeasonClient::connect(api, year).await?;
        println!("  Importing {year} season...");

        let season_row = queries::upsert_season(&tx, league_row, year)?;
        let mut team_rows = HashMap::new();

        for team in client.teams() {
            let owner_name = team.owner_name(client.members());
            let owner_row = queries::upsert_owner(&tx, league_row, &owner_name)?;

            let record = team.overall_record();
            let team_row = queries::upsert_team(
                &tx,
                &TeamUpsert {
                    season_id: season_row,
                    owner_id: owner_row,
                    espn_team_id: &team.team_id().to_string(),
                    name: &team.display_name(),
                    wins: record.wins,
                    losses: record.losses,
                    ties: record.ties,
                    points_for: record.points_for,
                    points_against: record.points_against,
                    final_standing: team.final_standing(),
                },
            )?;
            team_rows.insert(team.team_id(), team_row);

            if verbose {
                println!("    {} ({owner_name})", team.display_name());
            }
        }

        let matchup_rows = collect_season_matchups(&client, &team_rows).await?;
        for matchup in &matchup_rows {
            queries::upsert_matchup(&tx, season_row, matchup)?;
        }

        println!(
            "    Imported {} teams, {} matchups",
            team_rows.len(),
            matchup_rows.len()
        );
        summary.seasons += 1;
        summary.teams += team_rows.len();
        summary.matchups += matchup_rows.len();
    }

    tx.commit()?;
    Ok(summary)
}
