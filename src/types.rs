//! Type-safe wrappers for ESPN identifiers, seasons, and weeks.

use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for ESPN Fantasy Football league IDs.
///
/// Prevents mixing up league IDs with other numeric values such as team IDs
/// or database row IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u32);

impl LeagueId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for ESPN team IDs (unique within a season).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for season years.
///
/// ESPN identifies a season by the calendar year it starts in (2024 for the
/// 2024-2025 season).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The season for the current calendar year, the upper bound for
    /// discovery probing.
    pub fn current() -> Self {
        use chrono::Datelike;
        Self(chrono::Utc::now().year() as u16)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for week numbers (ESPN's scoring periods).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_from_str() {
        let id: LeagueId = "757388".parse().unwrap();
        assert_eq!(id, LeagueId::new(757388));
        assert_eq!(id.to_string(), "757388");
        assert!("not-a-number".parse::<LeagueId>().is_err());
    }

    #[test]
    fn test_season_ordering() {
        assert!(Season::new(2015) < Season::new(2023));
    }

    #[test]
    fn test_current_season_is_plausible() {
        let current = Season::current();
        assert!(current >= Season::new(crate::discovery::DISCOVERY_FLOOR));
        assert!(current < Season::new(3000));
    }

    #[test]
    fn test_week_ordering() {
        assert!(Week::new(17) > Week::new(16));
    }
}
