//! Serde models for the ESPN league JSON.
//!
//! ESPN's representation drifted over the years, so several fields come in
//! more than one shape: team names are either a single `name` or a
//! `location` + `nickname` pair, owners are either inline profile objects or
//! member GUID strings, and schedule sides in very old seasons are bare team
//! ids instead of objects. Everything heterogeneous is normalized here, at
//! the boundary, so the rest of the importer sees one shape.

use crate::types::TeamId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Weeks of regular season assumed when league settings omit the count.
pub const DEFAULT_REGULAR_SEASON_WEEKS: u16 = 14;

/// League payload, assembled from the `mSettings`, `mTeam`, and `mMatchup`
/// views. Every section is optional because each view fills in a subset.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueResponse {
    #[serde(default)]
    pub settings: Option<LeagueSettings>,
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
}

impl LeagueResponse {
    pub fn league_name(&self) -> String {
        self.settings
            .as_ref()
            .and_then(|s| s.name.clone())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Unknown League".to_string())
    }

    pub fn regular_season_weeks(&self) -> u16 {
        self.settings
            .as_ref()
            .and_then(|s| s.schedule_settings.as_ref())
            .and_then(|s| s.matchup_period_count)
            .unwrap_or(DEFAULT_REGULAR_SEASON_WEEKS)
    }
}

/// Root we deserialize out of mSettings
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "scheduleSettings", default)]
    pub schedule_settings: Option<ScheduleSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSettings {
    #[serde(rename = "matchupPeriodCount", default)]
    pub matchup_period_count: Option<u16>,
}

/// League member from the top-level `members` array; newer seasons list
/// owner GUIDs on teams and put the names here.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Owner reference on a team: an inline profile in older payloads, a member
/// GUID string in newer ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OwnerRef {
    Profile {
        #[serde(rename = "firstName", default)]
        first_name: String,
        #[serde(rename = "lastName", default)]
        last_name: String,
    },
    Guid(String),
}

/// Team from the mTeam view.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub owners: Vec<OwnerRef>,
    #[serde(rename = "rankCalculatedFinal", default)]
    pub rank_calculated_final: Option<u32>,
    #[serde(default)]
    pub record: Option<TeamRecord>,
}

impl TeamEntry {
    pub fn team_id(&self) -> TeamId {
        TeamId::new(self.id)
    }

    /// `name` when present, else `"{location} {nickname}"`, else a
    /// synthesized label.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            if !name.trim().is_empty() {
                return name.trim().to_string();
            }
        }
        let combined = format!(
            "{} {}",
            self.location.as_deref().unwrap_or(""),
            self.nickname.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();
        if combined.is_empty() {
            format!("Team {}", self.id)
        } else {
            combined
        }
    }

    /// Owner display name, tolerating the shapes ESPN has used over the
    /// years. Fallback chain: inline profile name, member lookup by GUID,
    /// the raw owner string, the team name, a synthesized label.
    pub fn owner_name(&self, members: &[Member]) -> String {
        match self.owners.first() {
            Some(OwnerRef::Profile {
                first_name,
                last_name,
            }) => {
                let name = format!("{first_name} {last_name}").trim().to_string();
                if name.is_empty() {
                    format!("Owner {}", self.id)
                } else {
                    name
                }
            }
            Some(OwnerRef::Guid(guid)) => {
                if let Some(member) = members.iter().find(|m| &m.id == guid) {
                    let name = member.full_name();
                    if !name.is_empty() {
                        return name;
                    }
                }
                guid.clone()
            }
            None => self.display_name(),
        }
    }

    /// Final regular standing. ESPN reports 0 for seasons that never
    /// finished (or ties it could not break); treat that as unknown.
    pub fn final_standing(&self) -> Option<u32> {
        self.rank_calculated_final.filter(|&rank| rank != 0)
    }

    pub fn overall_record(&self) -> OverallRecord {
        self.record
            .as_ref()
            .map(|r| r.overall.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub overall: OverallRecord,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverallRecord {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(rename = "pointsFor", default)]
    pub points_for: f64,
    #[serde(rename = "pointsAgainst", default)]
    pub points_against: f64,
}

/// One game from the mMatchup schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEntry {
    #[serde(rename = "matchupPeriodId")]
    pub matchup_period_id: u16,
    #[serde(rename = "playoffTierType", default)]
    pub playoff_tier_type: MatchupType,
    /// Absent on bye weeks.
    #[serde(default)]
    pub home: Option<TeamSide>,
    #[serde(default)]
    pub away: Option<TeamSide>,
}

/// One side of a matchup. Seasons before roughly 2016 serve a bare team id
/// here instead of an object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TeamSide {
    Detailed(MatchupTeam),
    Bare(u32),
}

impl TeamSide {
    pub fn team_id(&self) -> TeamId {
        match self {
            TeamSide::Detailed(team) => TeamId::new(team.team_id),
            TeamSide::Bare(id) => TeamId::new(*id),
        }
    }

    /// Bare references carry no score; those seasons predate per-side
    /// totals in the schedule payload.
    pub fn score(&self) -> f64 {
        match self {
            TeamSide::Detailed(team) => team.total_points,
            TeamSide::Bare(_) => 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchupTeam {
    #[serde(rename = "teamId")]
    pub team_id: u32,
    #[serde(rename = "totalPoints", default)]
    pub total_points: f64,
}

/// ESPN's bracket tag for a matchup. Anything outside the recognized set
/// (consolation ladders and the like) is folded into `None`, both coming
/// from the API and coming back out of the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchupType {
    #[default]
    None,
    WinnersBracket,
    LosersBracket,
}

impl MatchupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchupType::None => "NONE",
            MatchupType::WinnersBracket => "WINNERS_BRACKET",
            MatchupType::LosersBracket => "LOSERS_BRACKET",
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "WINNERS_BRACKET" => MatchupType::WinnersBracket,
            "LOSERS_BRACKET" => MatchupType::LosersBracket,
            _ => MatchupType::None,
        }
    }
}

impl Serialize for MatchupType {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MatchupType {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(MatchupType::from_tag(&tag))
    }
}

impl fmt::Display for MatchupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchupType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(MatchupType::from_tag(s))
    }
}
