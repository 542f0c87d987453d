//! Per-season handle over the ESPN API.

use crate::error::Result;
use crate::espn::http::EspnApi;
use crate::espn::types::{LeagueResponse, Member, ScheduleEntry, TeamEntry};
use crate::types::{Season, Week};

/// A connected view of one league season.
///
/// Construction fetches the season's settings and teams in one request;
/// a construction failure is how season discovery learns a year is absent.
pub struct SeasonClient<'a> {
    api: &'a EspnApi,
    year: Season,
    league: LeagueResponse,
}

impl<'a> SeasonClient<'a> {
    pub async fn connect(api: &'a EspnApi, year: Season) -> Result<SeasonClient<'a>> {
        let league = api.fetch_league(year, &["mSettings", "mTeam"], None).await?;
        Ok(Self { api, year, league })
    }

    pub fn year(&self) -> Season {
        self.year
    }

    pub fn league_name(&self) -> String {
        self.league.league_name()
    }

    pub fn regular_season_weeks(&self) -> u16 {
        self.league.regular_season_weeks()
    }

    pub fn teams(&self) -> &[TeamEntry] {
        &self.league.teams
    }

    pub fn members(&self) -> &[Member] {
        &self.league.members
    }

    /// Box scores for one week. ESPN returns the full-season schedule even
    /// when asked for a single scoring period, so the entries are filtered
    /// down to the requested week here.
    pub async fn box_scores(&self, week: Week) -> Result<Vec<ScheduleEntry>> {
        let league = self
            .api
            .fetch_league(self.year, &["mMatchup"], Some(week))
            .await?;
        Ok(league
            .schedule
            .into_iter()
            .filter(|entry| entry.matchup_period_id == week.as_u16())
            .collect())
    }
}
