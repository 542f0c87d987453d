//! ESPN Fantasy Football History Importer
//!
//! A one-shot batch tool that pulls every available season of an ESPN Fantasy
//! Football league (teams, owners, standings, week-by-week matchups) and
//! upserts it into a local SQLite database.
//!
//! ## How it works
//!
//! - **Season discovery**: probes league settings year by year, from the
//!   current calendar year back to 2004, treating a successful fetch as
//!   evidence the season exists.
//! - **Import**: inside one database transaction, upserts the league, then
//!   for each discovered season its teams (with owner resolution) and
//!   matchups. Matchups are classified into regular season, playoff, and
//!   championship games from ESPN's bracket tags.
//! - **Idempotence**: every write is keyed on a natural external identifier
//!   (league id, year, owner name, team id, week + teams), so re-running the
//!   import converges instead of duplicating.
//!
//! ## Environment Configuration
//!
//! ```bash
//! export DATABASE_URL=league-history.db
//! export ESPN_S2=your_espn_s2_cookie
//! export ESPN_SWID=your_swid_cookie
//! export ESPN_LEAGUE_ID=757388
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod espn;
pub mod import;
pub mod matchups;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{ImportError, Result};
pub use types::{LeagueId, Season, TeamId, Week};
