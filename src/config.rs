//! Environment-driven configuration.
//!
//! Every value is required; the importer refuses to start before any network
//! or database work if one is missing.

use crate::error::{ImportError, Result};
use crate::types::LeagueId;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const ESPN_S2_VAR: &str = "ESPN_S2";
pub const ESPN_SWID_VAR: &str = "ESPN_SWID";
pub const LEAGUE_ID_VAR: &str = "ESPN_LEAGUE_ID";

/// Everything the importer needs, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// `espn_s2` browser cookie, required for private leagues.
    pub espn_s2: String,
    /// `SWID` browser cookie.
    pub swid: String,
    pub league_id: LeagueId,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url = require_env(DATABASE_URL_VAR)?;
        let espn_s2 = require_env(ESPN_S2_VAR)?;
        let swid = require_env(ESPN_SWID_VAR)?;
        let league_id = require_env(LEAGUE_ID_VAR)?.parse()?;

        Ok(Self {
            database_url,
            espn_s2,
            swid,
            league_id,
        })
    }
}

fn require_env(var: &'static str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ImportError::MissingEnv { var }),
    }
}
