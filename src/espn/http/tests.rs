//! Unit tests for the ESPN HTTP layer, backed by a wiremock server.

use super::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_credentials() -> Credentials {
    Credentials {
        espn_s2: "s2-cookie".to_string(),
        swid: "{SWID}".to_string(),
    }
}

async fn test_api(server: &MockServer) -> EspnApi {
    EspnApi::with_base_url(LeagueId::new(757388), &test_credentials(), server.uri()).unwrap()
}

#[tokio::test]
async fn test_fetch_league_modern_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seasons/2023/segments/0/leagues/757388"))
        .and(query_param("view", "mSettings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "settings": { "name": "Test League" }
        })))
        .mount(&server)
        .await;

    let api = test_api(&server).await;
    let league = api
        .fetch_league(Season::new(2023), &["mSettings"], None)
        .await
        .unwrap();
    assert_eq!(league.league_name(), "Test League");
}

#[tokio::test]
async fn test_fetch_league_historical_unwraps_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/leagueHistory/757388"))
        .and(query_param("seasonId", "2012"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "settings": { "name": "Old League" } }
        ])))
        .mount(&server)
        .await;

    let api = test_api(&server).await;
    let league = api
        .fetch_league(Season::new(2012), &["mSettings"], None)
        .await
        .unwrap();
    assert_eq!(league.league_name(), "Old League");
}

#[tokio::test]
async fn test_fetch_league_scoring_period_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seasons/2023/segments/0/leagues/757388"))
        .and(query_param("view", "mMatchup"))
        .and(query_param("scoringPeriodId", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schedule": [
                { "matchupPeriodId": 5,
                  "home": { "teamId": 1, "totalPoints": 90.0 },
                  "away": { "teamId": 2, "totalPoints": 80.0 } }
            ]
        })))
        .mount(&server)
        .await;

    let api = test_api(&server).await;
    let league = api
        .fetch_league(Season::new(2023), &["mMatchup"], Some(Week::new(5)))
        .await
        .unwrap();
    assert_eq!(league.schedule.len(), 1);
    assert_eq!(league.schedule[0].matchup_period_id, 5);
}

#[tokio::test]
async fn test_error_body_message_is_extracted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/seasons/2023/segments/0/leagues/757388"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "messages": ["League 757388 does not exist"]
        })))
        .mount(&server)
        .await;

    let api = test_api(&server).await;
    let err = api
        .fetch_league(Season::new(2023), &["mSettings"], None)
        .await
        .unwrap_err();

    match &err {
        ImportError::Api { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "League 757388 does not exist");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.is_season_absence());
}

#[tokio::test]
async fn test_plain_404_is_season_absence() {
    let server = MockServer::start().await;
    // No mocks mounted; wiremock answers 404 with an empty body.

    let api = test_api(&server).await;
    let err = api
        .fetch_league(Season::new(2023), &["mSettings"], None)
        .await
        .unwrap_err();
    assert!(err.is_season_absence());
}

#[test]
fn test_ffl_base_url_constant() {
    assert_eq!(
        FFL_BASE_URL,
        "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl"
    );
}
