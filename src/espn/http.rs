//! Raw HTTP access to the ESPN Fantasy Football v3 API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::Client;
use serde_json::Value;

use crate::error::{ImportError, Result};
use crate::espn::types::LeagueResponse;
use crate::types::{LeagueId, Season, Week};

#[cfg(test)]
mod tests;

/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Seasons before this year are only served from the `leagueHistory`
/// endpoint, which wraps the league in a one-element array.
pub const LEAGUE_HISTORY_CUTOFF: u16 = 2018;

/// ESPN browser cookies used to authenticate private-league requests.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub espn_s2: String,
    pub swid: String,
}

impl Credentials {
    /// Build the cookie headers ESPN expects on every request.
    fn header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let cookie = format!("SWID={}; espn_s2={}", self.swid, self.espn_s2);
        headers.insert(COOKIE, HeaderValue::from_str(&cookie)?);
        Ok(headers)
    }
}

/// Shared handle for talking to the ESPN API about one league.
///
/// The base URL is injectable so tests can stand up a mock server.
pub struct EspnApi {
    client: Client,
    base_url: String,
    headers: HeaderMap,
    league_id: LeagueId,
}

impl EspnApi {
    pub fn new(league_id: LeagueId, credentials: &Credentials) -> Result<Self> {
        Self::with_base_url(league_id, credentials, FFL_BASE_URL)
    }

    pub fn with_base_url(
        league_id: LeagueId,
        credentials: &Credentials,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: base_url.into(),
            headers: credentials.header_map()?,
            league_id,
        })
    }

    pub fn league_id(&self) -> LeagueId {
        self.league_id
    }

    /// Fetch the league payload for one season, requesting the given views.
    /// `scoring_period` narrows the mMatchup schedule to one week.
    pub async fn fetch_league(
        &self,
        year: Season,
        views: &[&str],
        scoring_period: Option<Week>,
    ) -> Result<LeagueResponse> {
        let historical = year.as_u16() < LEAGUE_HISTORY_CUTOFF;
        let url = if historical {
            format!("{}/leagueHistory/{}", self.base_url, self.league_id)
        } else {
            format!(
                "{}/seasons/{}/segments/0/leagues/{}",
                self.base_url, year, self.league_id
            )
        };

        let mut params: Vec<(&str, String)> =
            views.iter().map(|view| ("view", view.to_string())).collect();
        if historical {
            params.push(("seasonId", year.to_string()));
        }
        if let Some(week) = scoring_period {
            params.push(("scoringPeriodId", week.to_string()));
        }

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        let body: Value = response.json().await?;
        let league = match body {
            // leagueHistory responses come wrapped in an array.
            Value::Array(mut entries) => entries.pop().ok_or_else(|| ImportError::Api {
                status: status.as_u16(),
                message: format!("empty league history response for season {year}"),
            })?,
            other => other,
        };

        Ok(serde_json::from_value(league)?)
    }
}

/// Turn an error response into an [`ImportError::Api`], pulling the first
/// entry of ESPN's `messages` array out of the body when present.
fn api_error(status: u16, body: &str) -> ImportError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("messages")
                .and_then(|m| m.get(0))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no response body".to_string()
            } else {
                trimmed.to_string()
            }
        });

    ImportError::Api { status, message }
}
