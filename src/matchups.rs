//! Matchup collection and playoff classification.
//!
//! ESPN tags each scheduled game with a bracket type but says nothing about
//! which playoff week is the final. The championship week has to be inferred:
//! the bracket final is taken to be the last week in which a WINNERS_BRACKET
//! game occurs, which forces a two-pass design: collect every week first,
//! then assign flags.

use std::collections::HashMap;

use crate::error::Result;
use crate::espn::types::MatchupType;
use crate::espn::SeasonClient;
use crate::types::{TeamId, Week};

#[cfg(test)]
mod tests;

/// Playoff weeks assumed to follow the regular season when scanning.
pub const PLAYOFF_WEEK_ALLOWANCE: u16 = 3;

/// One matchup resolved to database team ids, ready to classify and store.
#[derive(Debug, Clone)]
pub struct MatchupRow {
    pub week: Week,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: f64,
    pub away_score: f64,
    pub matchup_type: MatchupType,
    pub is_playoff: bool,
    pub is_championship: bool,
}

/// Pass two: flag playoff and championship games in place.
///
/// `is_playoff` marks WINNERS_BRACKET games; `is_championship` additionally
/// requires the game to fall in the last WINNERS_BRACKET week observed.
/// LOSERS_BRACKET (consolation) games are stored but never flagged. Known
/// caveat: a bracket with bye weeks, or a third-place game tagged
/// WINNERS_BRACKET in the final week, would be misclassified.
pub fn classify(rows: &mut [MatchupRow]) {
    let championship_week = rows
        .iter()
        .filter(|row| row.matchup_type == MatchupType::WinnersBracket)
        .map(|row| row.week)
        .max();

    for row in rows {
        row.is_playoff = row.matchup_type == MatchupType::WinnersBracket;
        row.is_championship = row.is_playoff && Some(row.week) == championship_week;
    }
}

/// Pass one: fetch box scores week by week and resolve them against the
/// database team ids for the season, then classify.
///
/// Scans `1..=regular_season_weeks + PLAYOFF_WEEK_ALLOWANCE`. Bye entries
/// (either side absent) are skipped silently; entries whose teams cannot be
/// resolved are skipped with a warning. A fetch failure past the regular
/// season means the playoff weeks are exhausted and ends the scan; a failure
/// inside the regular season is warned about and the scan continues.
pub async fn collect_season_matchups(
    client: &SeasonClient<'_>,
    team_ids: &HashMap<TeamId, i64>,
) -> Result<Vec<MatchupRow>> {
    let regular_season_weeks = client.regular_season_weeks();
    let year = client.year();
    let mut rows = Vec::new();

    for week in 1..=regular_season_weeks + PLAYOFF_WEEK_ALLOWANCE {
        let week = Week::new(week);
        let entries = match client.box_scores(week).await {
            Ok(entries) => entries,
            Err(_) if week.as_u16() > regular_season_weeks => break,
            Err(e) => {
                println!("    ⚠ Could not fetch week {week} for {year}: {e}");
                continue;
            }
        };

        for entry in entries {
            let (home, away) = match (&entry.home, &entry.away) {
                (Some(home), Some(away)) => (home, away),
                // Bye week
                _ => continue,
            };

            let (home_id, away_id) = (home.team_id(), away.team_id());
            let (home_row, away_row) = match (team_ids.get(&home_id), team_ids.get(&away_id)) {
                (Some(&home_row), Some(&away_row)) => (home_row, away_row),
                _ => {
                    println!(
                        "    ⚠ Skipping week {week} matchup {home_id} vs {away_id} for {year}: unknown team"
                    );
                    continue;
                }
            };

            rows.push(MatchupRow {
                week,
                home_team_id: home_row,
                away_team_id: away_row,
                home_score: home.score(),
                away_score: away.score(),
                matchup_type: entry.playoff_tier_type,
                is_playoff: false,
                is_championship: false,
            });
        }
    }

    classify(&mut rows);
    Ok(rows)
}
