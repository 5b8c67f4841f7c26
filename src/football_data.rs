use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::http_client::{fetch_text, http_client};
use crate::state::{ScheduledMatch, Scorer, StandingRow, Team};

pub const MAX_SCORERS: usize = 5;
pub const MAX_UPCOMING: usize = 6;

/// Read side of the league data. The dashboard only ever asks for these four
/// collections, each already trimmed to what the page shows.
pub trait LeagueSource {
    fn teams(&self) -> Result<Vec<Team>>;
    fn standings(&self) -> Result<Vec<StandingRow>>;
    fn scorers(&self) -> Result<Vec<Scorer>>;
    fn scheduled_matches(&self) -> Result<Vec<ScheduledMatch>>;
}

#[derive(Debug, Clone)]
pub struct FootballDataClient {
    base_url: String,
    competition: String,
    token: Option<String>,
}

impl FootballDataClient {
    pub fn new(base_url: &str, competition: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            competition: competition.to_string(),
            token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.base_url, &config.competition, config.token.clone())
    }

    pub fn url(&self, resource: &str) -> String {
        format!(
            "{}/v4/competitions/{}/{resource}",
            self.base_url, self.competition
        )
    }

    fn get(&self, resource: &str) -> Result<String> {
        let client = http_client()?;
        let url = self.url(resource);
        tracing::debug!(%url, "football-data request");
        fetch_text(client, &url, self.token.as_deref())
            .with_context(|| format!("GET {resource}"))
    }
}

impl LeagueSource for FootballDataClient {
    fn teams(&self) -> Result<Vec<Team>> {
        parse_teams_json(&self.get("teams")?)
    }

    fn standings(&self) -> Result<Vec<StandingRow>> {
        parse_standings_json(&self.get("standings")?)
    }

    fn scorers(&self) -> Result<Vec<Scorer>> {
        parse_scorers_json(&self.get("scorers")?)
    }

    fn scheduled_matches(&self) -> Result<Vec<ScheduledMatch>> {
        parse_matches_json(&self.get("matches?status=SCHEDULED")?)
    }
}

#[derive(Debug, Deserialize, Default)]
struct TeamsResponse {
    #[serde(default)]
    teams: Option<Vec<Team>>,
}

#[derive(Debug, Deserialize, Default)]
struct StandingsResponse {
    #[serde(default)]
    standings: Option<Vec<StandingGroup>>,
}

#[derive(Debug, Deserialize)]
struct StandingGroup {
    #[serde(default)]
    table: Option<Vec<StandingRow>>,
}

#[derive(Debug, Deserialize, Default)]
struct ScorersResponse {
    #[serde(default)]
    scorers: Option<Vec<Scorer>>,
}

#[derive(Debug, Deserialize, Default)]
struct MatchesResponse {
    #[serde(default)]
    matches: Option<Vec<ScheduledMatch>>,
}

fn parse_response<T: DeserializeOwned + Default>(raw: &str, what: &str) -> Result<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(T::default());
    }
    serde_json::from_str(trimmed).with_context(|| format!("invalid {what} json"))
}

pub fn parse_teams_json(raw: &str) -> Result<Vec<Team>> {
    let resp: TeamsResponse = parse_response(raw, "teams")?;
    Ok(resp.teams.unwrap_or_default())
}

/// Only the first table is used when the competition returns several
/// (home/away splits, groups).
pub fn parse_standings_json(raw: &str) -> Result<Vec<StandingRow>> {
    let resp: StandingsResponse = parse_response(raw, "standings")?;
    Ok(resp
        .standings
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|group| group.table)
        .unwrap_or_default())
}

pub fn parse_scorers_json(raw: &str) -> Result<Vec<Scorer>> {
    let resp: ScorersResponse = parse_response(raw, "scorers")?;
    let mut scorers = resp.scorers.unwrap_or_default();
    scorers.truncate(MAX_SCORERS);
    Ok(scorers)
}

pub fn parse_matches_json(raw: &str) -> Result<Vec<ScheduledMatch>> {
    let resp: MatchesResponse = parse_response(raw, "matches")?;
    let mut matches = resp.matches.unwrap_or_default();
    matches.truncate(MAX_UPCOMING);
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_competition_urls() {
        let client = FootballDataClient::new("https://api.example.org/", "PD", None);
        assert_eq!(
            client.url("matches?status=SCHEDULED"),
            "https://api.example.org/v4/competitions/PD/matches?status=SCHEDULED"
        );
    }

    #[test]
    fn missing_collections_are_empty() {
        assert!(parse_teams_json("{}").expect("parse").is_empty());
        assert!(parse_teams_json(r#"{"teams":null}"#).expect("parse").is_empty());
        assert!(parse_standings_json(r#"{"standings":[]}"#).expect("parse").is_empty());
        assert!(
            parse_standings_json(r#"{"standings":[{"table":null}]}"#)
                .expect("parse")
                .is_empty()
        );
        assert!(parse_scorers_json("").expect("parse").is_empty());
        assert!(parse_matches_json("null").expect("parse").is_empty());
    }

    #[test]
    fn malformed_body_is_an_error() {
        let err = parse_teams_json("{not json").expect_err("should fail");
        assert!(format!("{err:#}").contains("invalid teams json"));
    }

    #[test]
    fn scorers_and_matches_are_truncated() {
        let scorers = (1..=9)
            .map(|i| format!(r#"{{"player":{{"id":{i},"name":"P{i}"}},"team":{{"name":"T"}},"goals":{}}}"#, 20 - i))
            .collect::<Vec<_>>()
            .join(",");
        let parsed = parse_scorers_json(&format!(r#"{{"scorers":[{scorers}]}}"#)).expect("parse");
        assert_eq!(parsed.len(), MAX_SCORERS);
        assert_eq!(parsed[0].player.name, "P1");

        let matches = (1..=10)
            .map(|i| format!(r#"{{"id":{i},"utcDate":"2025-10-18T19:00:00Z","homeTeam":{{"name":"H"}},"awayTeam":{{"name":"A"}}}}"#))
            .collect::<Vec<_>>()
            .join(",");
        let parsed = parse_matches_json(&format!(r#"{{"matches":[{matches}]}}"#)).expect("parse");
        assert_eq!(parsed.len(), MAX_UPCOMING);
        assert_eq!(parsed[5].id, 6);
    }
}
