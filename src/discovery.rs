//! Season discovery by descending-year probing.

use crate::espn::{EspnApi, SeasonClient};
use crate::types::Season;


/// Oldest year worth probing; ESPN fantasy football data is not available
/// before this.
pub const DISCOVERY_FLOOR: u16 = 2004;

/// Probe every year from `from_year` down to [`DISCOVERY_FLOOR`] and return
/// the seasons the league actually has, ascending.
///
/// A successful season fetch means the year exists. Errors classified as
/// "season absent" are normal and skipped silently. Anything else is
/// surfaced as a warning while nothing has been found yet (it may be an
/// auth problem) but never halts the probe.
pub async fn discover_seasons(api: &EspnApi, from_year: Season) -> Vec<Season> {
    let mut seasons = Vec::new();

    for year in (DISCOVERY_FLOOR..=from_year.as_u16()).rev() {
        let year = Season::new(year);
        match SeasonClient::connect(api, year).await {
            Ok(_) => {
                println!("  Found season: {year}");
                seasons.push(year);
            }
            Err(e) if e.is_season_absence() => continue,
            Err(e) => {
                if seasons.is_empty() {
                    println!("  ⚠ Error accessing {year}: {e}");
                }
            }
        }
    }

    seasons.reverse();
    seasons
}
