use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::state::{StandingRow, TeamRef};

#[derive(Debug, Clone, PartialEq)]
pub struct LeagueTotals {
    /// Every match shows up twice in the table, once per side.
    pub matches_played: f64,
    pub total_goals: u32,
    pub goals_per_match: f64,
}

impl LeagueTotals {
    pub fn matches_label(&self) -> String {
        format_count(self.matches_played)
    }

    pub fn average_label(&self) -> String {
        format!("{:.1}", self.goals_per_match)
    }
}

pub fn league_totals(rows: &[StandingRow]) -> LeagueTotals {
    let played: u32 = rows.iter().map(|row| row.played_games).sum();
    let total_goals: u32 = rows.iter().map(|row| row.goals_for).sum();
    let matches_played = played as f64 / 2.0;
    let goals_per_match = if matches_played > 0.0 {
        total_goals as f64 / matches_played
    } else {
        0.0
    };
    LeagueTotals {
        matches_played,
        total_goals,
        goals_per_match,
    }
}

fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub fn goal_difference_label(diff: i32) -> String {
    if diff > 0 {
        format!("+{diff}")
    } else {
        diff.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Champions,
    Europa,
    Conference,
    Relegation,
    Normal,
}

pub const RELEGATION_SPOTS: u32 = 3;

pub fn zone_for(position: u32, table_len: usize) -> Zone {
    let table_len = table_len as u32;
    match position {
        1..=4 => Zone::Champions,
        5 => Zone::Europa,
        6 => Zone::Conference,
        p if table_len > RELEGATION_SPOTS + 6 && p > table_len - RELEGATION_SPOTS => {
            Zone::Relegation
        }
        _ => Zone::Normal,
    }
}

pub fn zone_label(zone: Zone) -> &'static str {
    match zone {
        Zone::Champions => "Champions League",
        Zone::Europa => "Europa League",
        Zone::Conference => "Conference League",
        Zone::Relegation => "Descenso",
        Zone::Normal => "",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRarity {
    Gold,
    Silver,
    Bronze,
}

pub fn card_rarity(rank_index: usize) -> CardRarity {
    match rank_index {
        0 => CardRarity::Gold,
        1 | 2 => CardRarity::Silver,
        _ => CardRarity::Bronze,
    }
}

pub fn team_short(team: &TeamRef) -> &str {
    team.tla
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| team.display_name())
}

const WEEKDAYS_ES: [&str; 7] = ["LUN", "MAR", "MIÉ", "JUE", "VIE", "SÁB", "DOM"];
const MONTHS_ES: [&str; 12] = [
    "ENE", "FEB", "MAR", "ABR", "MAY", "JUN", "JUL", "AGO", "SEPT", "OCT", "NOV", "DIC",
];

pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `("SÁB, 18 OCT", "21:00")` in the given zone, or `("POR CONFIRMAR", "--:--")`
/// when the kickoff cannot be parsed.
pub fn match_day_labels<Tz: TimeZone>(utc_date: &str, tz: &Tz) -> (String, String) {
    let Some(utc) = parse_utc(utc_date) else {
        return ("POR CONFIRMAR".to_string(), "--:--".to_string());
    };
    let local = utc.with_timezone(tz);
    let weekday = WEEKDAYS_ES[local.weekday().num_days_from_monday() as usize];
    let month = MONTHS_ES[local.month0() as usize];
    (
        format!("{weekday}, {:02} {month}", local.day()),
        format!("{:02}:{:02}", local.hour(), local.minute()),
    )
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn row(position: u32, played: u32, goals_for: u32) -> StandingRow {
        StandingRow {
            position,
            played_games: played,
            goals_for,
            ..StandingRow::default()
        }
    }

    #[test]
    fn totals_over_table() {
        let rows = vec![row(1, 10, 22), row(2, 10, 18), row(3, 9, 10)];
        let totals = league_totals(&rows);
        assert_eq!(totals.total_goals, 50);
        assert_eq!(totals.matches_played, 14.5);
        assert_eq!(totals.matches_label(), "14.5");
        assert_eq!(totals.average_label(), "3.4");
    }

    #[test]
    fn empty_table_totals_are_zero() {
        let totals = league_totals(&[]);
        assert_eq!(totals.matches_label(), "0");
        assert_eq!(totals.total_goals, 0);
        assert_eq!(totals.average_label(), "0.0");
    }

    #[test]
    fn no_games_played_does_not_divide_by_zero() {
        let totals = league_totals(&[row(1, 0, 0), row(2, 0, 0)]);
        assert_eq!(totals.average_label(), "0.0");
    }

    #[test]
    fn goal_difference_sign() {
        assert_eq!(goal_difference_label(7), "+7");
        assert_eq!(goal_difference_label(0), "0");
        assert_eq!(goal_difference_label(-3), "-3");
    }

    #[test]
    fn zones_follow_positions() {
        assert_eq!(zone_for(1, 20), Zone::Champions);
        assert_eq!(zone_for(4, 20), Zone::Champions);
        assert_eq!(zone_for(5, 20), Zone::Europa);
        assert_eq!(zone_for(6, 20), Zone::Conference);
        assert_eq!(zone_for(17, 20), Zone::Normal);
        assert_eq!(zone_for(18, 20), Zone::Relegation);
        assert_eq!(zone_for(20, 20), Zone::Relegation);
        assert_eq!(zone_for(8, 8), Zone::Normal);
    }

    #[test]
    fn rarity_by_rank() {
        assert_eq!(card_rarity(0), CardRarity::Gold);
        assert_eq!(card_rarity(1), CardRarity::Silver);
        assert_eq!(card_rarity(2), CardRarity::Silver);
        assert_eq!(card_rarity(3), CardRarity::Bronze);
        assert_eq!(card_rarity(4), CardRarity::Bronze);
    }

    #[test]
    fn match_day_in_madrid_summer_time() {
        let madrid = FixedOffset::east_opt(2 * 3600).expect("valid offset");
        let (day, time) = match_day_labels("2025-10-18T19:00:00Z", &madrid);
        assert_eq!(day, "SÁB, 18 OCT");
        assert_eq!(time, "21:00");
    }

    #[test]
    fn unparseable_kickoff_has_placeholder() {
        let (day, time) = match_day_labels("soon", &Utc);
        assert_eq!(day, "POR CONFIRMAR");
        assert_eq!(time, "--:--");
    }
}
