use super::*;
use serde_json::json;

fn team_from(value: serde_json::Value) -> TeamEntry {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_display_name_prefers_name_field() {
    let team = team_from(json!({
        "id": 3,
        "name": "The Commish",
        "location": "Stale",
        "nickname": "Data"
    }));
    assert_eq!(team.display_name(), "The Commish");
}

#[test]
fn test_display_name_falls_back_to_location_nickname() {
    let team = team_from(json!({
        "id": 3,
        "location": "Flaming",
        "nickname": "Moes"
    }));
    assert_eq!(team.display_name(), "Flaming Moes");
}

#[test]
fn test_display_name_synthesized_when_all_blank() {
    let team = team_from(json!({ "id": 7, "name": "  " }));
    assert_eq!(team.display_name(), "Team 7");
}

#[test]
fn test_owner_name_from_inline_profile() {
    let team = team_from(json!({
        "id": 1,
        "owners": [{ "firstName": "Pat", "lastName": "Summitt" }]
    }));
    assert_eq!(team.owner_name(&[]), "Pat Summitt");
}

#[test]
fn test_owner_name_blank_profile_synthesizes_label() {
    let team = team_from(json!({
        "id": 4,
        "owners": [{ "firstName": "", "lastName": "" }]
    }));
    assert_eq!(team.owner_name(&[]), "Owner 4");
}

#[test]
fn test_owner_name_guid_resolves_through_members() {
    let team = team_from(json!({
        "id": 2,
        "owners": ["{ABC-123}"]
    }));
    let members: Vec<Member> = serde_json::from_value(json!([
        { "id": "{ABC-123}", "firstName": "Jo", "lastName": "Moss" }
    ]))
    .unwrap();
    assert_eq!(team.owner_name(&members), "Jo Moss");
}

#[test]
fn test_owner_name_unmatched_guid_is_used_verbatim() {
    let team = team_from(json!({
        "id": 2,
        "owners": ["Ancient Owner Name"]
    }));
    assert_eq!(team.owner_name(&[]), "Ancient Owner Name");
}

#[test]
fn test_owner_name_absent_falls_back_to_team_name() {
    let team = team_from(json!({ "id": 9, "name": "Orphan Squad" }));
    assert_eq!(team.owner_name(&[]), "Orphan Squad");

    let nameless = team_from(json!({ "id": 9 }));
    assert_eq!(nameless.owner_name(&[]), "Team 9");
}

#[test]
fn test_final_standing_zero_means_unknown() {
    let team = team_from(json!({ "id": 1, "rankCalculatedFinal": 0 }));
    assert_eq!(team.final_standing(), None);

    let team = team_from(json!({ "id": 1, "rankCalculatedFinal": 3 }));
    assert_eq!(team.final_standing(), Some(3));

    let team = team_from(json!({ "id": 1 }));
    assert_eq!(team.final_standing(), None);
}

#[test]
fn test_overall_record_defaults_to_zeroes() {
    let team = team_from(json!({ "id": 1 }));
    let record = team.overall_record();
    assert_eq!(record.wins, 0);
    assert_eq!(record.points_for, 0.0);

    let team = team_from(json!({
        "id": 1,
        "record": { "overall": { "wins": 10, "losses": 3, "ties": 1,
                                 "pointsFor": 1501.5, "pointsAgainst": 1320.25 } }
    }));
    let record = team.overall_record();
    assert_eq!(record.wins, 10);
    assert_eq!(record.ties, 1);
    assert_eq!(record.points_against, 1320.25);
}

#[test]
fn test_team_side_detailed_and_bare() {
    let detailed: TeamSide =
        serde_json::from_value(json!({ "teamId": 5, "totalPoints": 101.3 })).unwrap();
    assert_eq!(detailed.team_id(), crate::TeamId::new(5));
    assert_eq!(detailed.score(), 101.3);

    let bare: TeamSide = serde_json::from_value(json!(5)).unwrap();
    assert_eq!(bare.team_id(), crate::TeamId::new(5));
    assert_eq!(bare.score(), 0.0);
}

#[test]
fn test_schedule_entry_bye_week() {
    let entry: ScheduleEntry = serde_json::from_value(json!({
        "matchupPeriodId": 4,
        "home": { "teamId": 2, "totalPoints": 88.0 }
    }))
    .unwrap();
    assert!(entry.home.is_some());
    assert!(entry.away.is_none());
    assert_eq!(entry.playoff_tier_type, MatchupType::None);
}

#[test]
fn test_matchup_type_known_tags() {
    let entry: ScheduleEntry = serde_json::from_value(json!({
        "matchupPeriodId": 16,
        "playoffTierType": "WINNERS_BRACKET"
    }))
    .unwrap();
    assert_eq!(entry.playoff_tier_type, MatchupType::WinnersBracket);
}

#[test]
fn test_matchup_type_unknown_tag_folds_to_none() {
    let entry: ScheduleEntry = serde_json::from_value(json!({
        "matchupPeriodId": 16,
        "playoffTierType": "WINNERS_CONSOLATION_LADDER"
    }))
    .unwrap();
    assert_eq!(entry.playoff_tier_type, MatchupType::None);
}

#[test]
fn test_matchup_type_round_trips_as_text() {
    for tag in [
        MatchupType::None,
        MatchupType::WinnersBracket,
        MatchupType::LosersBracket,
    ] {
        let parsed: MatchupType = tag.as_str().parse().unwrap();
        assert_eq!(parsed, tag);
    }
    let parsed: MatchupType = "SOMETHING_NEW".parse().unwrap();
    assert_eq!(parsed, MatchupType::None);
}

#[test]
fn test_league_name_and_week_count_defaults() {
    let league: LeagueResponse = serde_json::from_value(json!({})).unwrap();
    assert_eq!(league.league_name(), "Unknown League");
    assert_eq!(league.regular_season_weeks(), DEFAULT_REGULAR_SEASON_WEEKS);

    let league: LeagueResponse = serde_json::from_value(json!({
        "settings": {
            "name": "The Gridiron Gang",
            "scheduleSettings": { "matchupPeriodCount": 13 }
        }
    }))
    .unwrap();
    assert_eq!(league.league_name(), "The Gridiron Gang");
    assert_eq!(league.regular_season_weeks(), 13);
}
