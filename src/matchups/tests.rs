use super::*;

fn row(week: u16, matchup_type: MatchupType) -> MatchupRow {
    MatchupRow {
        week: Week::new(week),
        home_team_id: 1,
        away_team_id: 2,
        home_score: 100.0,
        away_score: 90.0,
        matchup_type,
        is_playoff: false,
        is_championship: false,
    }
}

#[test]
fn test_last_winners_bracket_week_is_championship() {
    // Semifinals in week 16, final in week 17.
    let mut rows = vec![
        row(16, MatchupType::WinnersBracket),
        row(16, MatchupType::WinnersBracket),
        row(17, MatchupType::WinnersBracket),
    ];
    classify(&mut rows);

    assert!(rows[0].is_playoff && !rows[0].is_championship);
    assert!(rows[1].is_playoff && !rows[1].is_championship);
    assert!(rows[2].is_playoff && rows[2].is_championship);
}

#[test]
fn test_losers_bracket_is_never_playoff() {
    let mut rows = vec![
        row(16, MatchupType::WinnersBracket),
        row(16, MatchupType::LosersBracket),
        row(17, MatchupType::LosersBracket),
    ];
    classify(&mut rows);

    // The consolation game in week 17 must not inherit championship status
    // even though it lands past the last winners-bracket week.
    assert!(rows[0].is_playoff && rows[0].is_championship);
    assert!(!rows[1].is_playoff && !rows[1].is_championship);
    assert!(!rows[2].is_playoff && !rows[2].is_championship);
}

#[test]
fn test_regular_season_rows_are_untouched() {
    let mut rows = vec![row(1, MatchupType::None), row(2, MatchupType::None)];
    classify(&mut rows);
    assert!(rows.iter().all(|r| !r.is_playoff && !r.is_championship));
}

#[test]
fn test_no_winners_bracket_means_no_championship() {
    let mut rows = vec![
        row(14, MatchupType::None),
        row(15, MatchupType::LosersBracket),
    ];
    classify(&mut rows);
    assert!(rows.iter().all(|r| !r.is_championship));
}

#[test]
fn test_single_winners_bracket_week() {
    // A two-team league whose whole playoff is one game.
    let mut rows = vec![row(15, MatchupType::WinnersBracket)];
    classify(&mut rows);
    assert!(rows[0].is_playoff && rows[0].is_championship);
}

#[test]
fn test_classify_on_empty_is_a_noop() {
    let mut rows: Vec<MatchupRow> = Vec::new();
    classify(&mut rows);
    assert!(rows.is_empty());
}
