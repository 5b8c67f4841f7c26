use std::fs;
use std::path::PathBuf;

use laliga_terminal::football_data::{
    MAX_SCORERS, MAX_UPCOMING, parse_matches_json, parse_scorers_json, parse_standings_json,
    parse_teams_json,
};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_teams_fixture() {
    let raw = read_fixture("teams.json");
    let teams = parse_teams_json(&raw).expect("fixture should parse");
    assert_eq!(teams.len(), 20);
    assert_eq!(teams[0].name, "Real Madrid CF");
    assert_eq!(teams[0].tla.as_deref(), Some("RMA"));
    assert_eq!(teams[0].venue_label(), "Estadio Real Madrid");
    assert_eq!(teams[0].founded_label(), "1900");

    let oviedo = &teams[18];
    assert_eq!(oviedo.venue_label(), "Estadio");
    assert_eq!(oviedo.founded_label(), "---");
}

#[test]
fn parses_first_standings_table_only() {
    let raw = read_fixture("standings.json");
    let rows = parse_standings_json(&raw).expect("fixture should parse");
    assert_eq!(rows.len(), 20);
    let positions: Vec<u32> = rows.iter().map(|r| r.position).collect();
    assert_eq!(positions, (1..=20).collect::<Vec<_>>());
    assert_eq!(rows[0].team.display_name(), "Real Madrid");
    assert_eq!(rows[0].goals_for, 24);
    assert_eq!(rows[0].goal_difference, 18);
    assert_eq!(rows[19].team.tla.as_deref(), Some("GIR"));
}

#[test]
fn parses_scorers_fixture_truncated() {
    let raw = read_fixture("scorers.json");
    let scorers = parse_scorers_json(&raw).expect("fixture should parse");
    assert_eq!(scorers.len(), MAX_SCORERS);
    assert_eq!(scorers[0].player.name, "Kylian Mbappé");
    assert_eq!(scorers[0].goals, 9);
    assert_eq!(scorers[0].played_label(), "9");
    assert_eq!(scorers[2].played_label(), "--");
    assert_eq!(scorers[1].team.display_name(), "Atleti");
}

#[test]
fn parses_scheduled_matches_fixture_truncated() {
    let raw = read_fixture("matches.json");
    let matches = parse_matches_json(&raw).expect("fixture should parse");
    assert_eq!(matches.len(), MAX_UPCOMING);
    assert_eq!(matches[0].home_team.display_name(), "Real Madrid");
    assert_eq!(matches[0].away_team.display_name(), "Barça");
    assert_eq!(matches[0].matchday, Some(10));
    assert_eq!(matches[0].utc_date, "2025-10-18T14:00:00Z");
    assert_eq!(matches[1].venue_label(), "Estadio por confirmar");
}

#[test]
fn unexpected_fields_are_ignored() {
    let raw = r#"{"teams":[{"id":1,"name":"Girona FC","runningCompetitions":[],"coach":{"name":"x"}}]}"#;
    let teams = parse_teams_json(raw).expect("extra fields should be ignored");
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].tla, None);
}
