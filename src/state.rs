use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

use crate::carousel::CarouselController;
use crate::content::Language;
use crate::navbar::NavbarController;

pub const VENUE_FALLBACK: &str = "Estadio";
pub const FOUNDED_FALLBACK: &str = "---";
pub const MATCH_VENUE_FALLBACK: &str = "Estadio por confirmar";
pub const PLAYED_FALLBACK: &str = "--";

/// Page pixels represented by one terminal row when feeding the navbar.
pub const ROW_PIXELS: f64 = 16.0;

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Inicio,
    Equipos,
    Clasificacion,
    Estadisticas,
    Noticias,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Inicio,
        Section::Equipos,
        Section::Clasificacion,
        Section::Estadisticas,
        Section::Noticias,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Inicio => "#inicio",
            Section::Equipos => "#equipos",
            Section::Clasificacion => "#clasificacion",
            Section::Estadisticas => "#estadisticas",
            Section::Noticias => "#noticias",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Inicio => "Inicio",
            Section::Equipos => "Equipos",
            Section::Clasificacion => "Clasificación",
            Section::Estadisticas => "Estadísticas",
            Section::Noticias => "Noticias",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub crest: Option<String>,
    pub venue: Option<String>,
    pub founded: Option<u32>,
}

impl Team {
    pub fn venue_label(&self) -> &str {
        non_blank(self.venue.as_deref()).unwrap_or(VENUE_FALLBACK)
    }

    pub fn founded_label(&self) -> String {
        match self.founded {
            Some(year) if year > 0 => year.to_string(),
            _ => FOUNDED_FALLBACK.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamRef {
    pub id: Option<u64>,
    pub name: String,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub crest: Option<String>,
}

impl TeamRef {
    pub fn display_name(&self) -> &str {
        non_blank(self.short_name.as_deref()).unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StandingRow {
    pub position: u32,
    pub team: TeamRef,
    pub points: i32,
    pub played_games: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScorerPlayer {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scorer {
    pub player: ScorerPlayer,
    pub team: TeamRef,
    pub goals: u32,
    pub played_matches: Option<u32>,
}

impl Scorer {
    pub fn played_label(&self) -> String {
        match self.played_matches {
            Some(n) if n > 0 => n.to_string(),
            _ => PLAYED_FALLBACK.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduledMatch {
    pub id: u64,
    pub utc_date: String,
    pub matchday: Option<u32>,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub venue: Option<String>,
}

impl ScheduledMatch {
    pub fn venue_label(&self) -> &str {
        non_blank(self.venue.as_deref()).unwrap_or(MATCH_VENUE_FALLBACK)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Screen regions recorded by the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitRegions {
    pub carousel: Option<Rect>,
    pub carousel_left: Option<Rect>,
    pub carousel_right: Option<Rect>,
    pub floating_button: Option<Rect>,
    pub nav_links: Vec<(Section, Rect)>,
    pub menu_button: Option<Rect>,
}

#[derive(Debug)]
pub struct AppState {
    pub teams: Vec<Team>,
    pub standings: Vec<StandingRow>,
    pub scorers: Vec<Scorer>,
    pub matches: Vec<ScheduledMatch>,
    pub loading: bool,
    pub logs: VecDeque<String>,
    pub navbar: NavbarController,
    pub carousel: CarouselController,
    pub language: Language,
    pub help_overlay: bool,
    pub menu_selected: usize,
    pub page_scroll: u16,
    pub page_height: u16,
    pub viewport_height: u16,
    pub section_offsets: Vec<(Section, u16)>,
    pub hit: HitRegions,
    pub pointer_over_carousel: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            teams: Vec::new(),
            standings: Vec::new(),
            scorers: Vec::new(),
            matches: Vec::new(),
            loading: true,
            logs: VecDeque::new(),
            navbar: NavbarController::new(),
            carousel: CarouselController::new(),
            language: Language::default(),
            help_overlay: false,
            menu_selected: 0,
            page_scroll: 0,
            page_height: 0,
            viewport_height: 0,
            section_offsets: Vec::new(),
            hit: HitRegions::default(),
            pointer_over_carousel: false,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn max_page_scroll(&self) -> u16 {
        self.page_height.saturating_sub(self.viewport_height)
    }

    /// Moves the page and feeds the resulting offset to the navbar as a
    /// scroll sample.
    pub fn scroll_page_to(&mut self, row: u16) {
        let row = row.min(self.max_page_scroll());
        if row == self.page_scroll {
            return;
        }
        self.page_scroll = row;
        self.navbar.on_scroll(row as f64 * ROW_PIXELS);
    }

    /// Pulls the offset back inside a page that got shorter. The move counts
    /// as a scroll sample so the navbar sees the new position.
    pub fn clamp_page_scroll(&mut self) {
        let max = self.max_page_scroll();
        if self.page_scroll > max {
            self.page_scroll = max;
            self.navbar.on_scroll(max as f64 * ROW_PIXELS);
        }
    }

    pub fn scroll_page_by(&mut self, delta: i32) {
        let target = (self.page_scroll as i32 + delta).max(0);
        self.scroll_page_to(target.min(u16::MAX as i32) as u16);
    }

    pub fn section_offset(&self, section: Section) -> Option<u16> {
        self.section_offsets
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, offset)| *offset)
    }

    /// In-page anchor jump. Activating a link also closes the menu.
    pub fn jump_to_section(&mut self, section: Section) {
        self.navbar.close_menu();
        if let Some(offset) = self.section_offset(section) {
            self.scroll_page_to(offset);
        }
    }

    /// Section whose anchor is the last one at or above the top of the
    /// viewport.
    pub fn current_section(&self) -> Section {
        self.section_offsets
            .iter()
            .filter(|(_, offset)| *offset <= self.page_scroll)
            .map(|(s, _)| *s)
            .last()
            .unwrap_or(Section::Inicio)
    }

    pub fn menu_next(&mut self) {
        self.menu_selected = (self.menu_selected + 1) % Section::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_selected = (self.menu_selected + Section::ALL.len() - 1) % Section::ALL.len();
    }

    pub fn activate_menu_selection(&mut self) {
        let section = Section::ALL[self.menu_selected.min(Section::ALL.len() - 1)];
        self.jump_to_section(section);
    }

    /// Tracks the pointer against the carousel region and forwards
    /// enter/leave transitions.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        let inside = self
            .hit
            .carousel
            .is_some_and(|area| rect_contains(area, column, row));
        if inside == self.pointer_over_carousel {
            return;
        }
        self.pointer_over_carousel = inside;
        if inside {
            self.carousel.pointer_enter();
        } else {
            self.carousel.pointer_leave();
        }
    }

    pub fn unmount(&mut self) {
        self.carousel.detach();
        self.pointer_over_carousel = false;
    }
}

pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Delta {
    FetchStarted,
    SetTeams(Vec<Team>),
    SetStandings(Vec<StandingRow>),
    SetScorers(Vec<Scorer>),
    SetMatches(Vec<ScheduledMatch>),
    FetchFailed { what: String, error: String },
    FetchFinished,
    Log(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCommand {
    Refresh,
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::FetchStarted => {
            state.loading = true;
        }
        Delta::SetTeams(teams) => {
            state.teams = teams;
        }
        Delta::SetStandings(rows) => {
            state.standings = rows;
        }
        Delta::SetScorers(scorers) => {
            state.scorers = scorers;
        }
        Delta::SetMatches(matches) => {
            state.matches = matches;
        }
        Delta::FetchFailed { what, error } => {
            state.push_log(format!("[WARN] Error al obtener {what}: {error}"));
        }
        Delta::FetchFinished => {
            state.loading = false;
            state.push_log(format!(
                "[INFO] Datos cargados: {} equipos, {} filas, {} goleadores, {} partidos",
                state.teams.len(),
                state.standings.len(),
                state.scorers.len(),
                state.matches.len()
            ));
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}

/// Applies everything currently queued without blocking.
pub fn drain_deltas(state: &mut AppState, rx: &Receiver<Delta>) -> usize {
    let mut applied = 0;
    while let Ok(delta) = rx.try_recv() {
        apply_delta(state, delta);
        applied += 1;
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_sections() -> AppState {
        let mut state = AppState::new();
        state.page_height = 200;
        state.viewport_height = 40;
        state.section_offsets = vec![
            (Section::Inicio, 0),
            (Section::Equipos, 12),
            (Section::Clasificacion, 30),
            (Section::Estadisticas, 60),
            (Section::Noticias, 90),
        ];
        state
    }

    #[test]
    fn optional_fields_fall_back() {
        let team = Team {
            name: "Getafe CF".to_string(),
            ..Team::default()
        };
        assert_eq!(team.venue_label(), "Estadio");
        assert_eq!(team.founded_label(), "---");

        let fixture = ScheduledMatch {
            venue: Some("  ".to_string()),
            ..ScheduledMatch::default()
        };
        assert_eq!(fixture.venue_label(), "Estadio por confirmar");

        let scorer = Scorer {
            played_matches: Some(0),
            ..Scorer::default()
        };
        assert_eq!(scorer.played_label(), "--");

        let team_ref = TeamRef {
            name: "Real Madrid CF".to_string(),
            short_name: Some("Real Madrid".to_string()),
            ..TeamRef::default()
        };
        assert_eq!(team_ref.display_name(), "Real Madrid");
    }

    #[test]
    fn page_scroll_feeds_navbar() {
        let mut state = state_with_sections();
        state.scroll_page_to(20);
        assert!(!state.navbar.is_visible());

        state.scroll_page_to(3);
        assert!(state.navbar.is_visible());
        assert_eq!(state.navbar.current(), 48.0);
    }

    #[test]
    fn shrinking_page_reports_new_offset_to_navbar() {
        let mut state = state_with_sections();
        state.scroll_page_to(150);
        assert!(state.navbar.is_hidden());

        state.page_height = 45;
        state.clamp_page_scroll();
        assert_eq!(state.page_scroll, 5);
        assert_eq!(state.navbar.current(), 80.0);
        assert!(state.navbar.is_visible());

        state.page_height = 200;
        state.clamp_page_scroll();
        assert_eq!(state.page_scroll, 5);
    }

    #[test]
    fn page_scroll_is_clamped() {
        let mut state = state_with_sections();
        state.scroll_page_by(10_000);
        assert_eq!(state.page_scroll, 160);
        state.scroll_page_by(-10_000);
        assert_eq!(state.page_scroll, 0);
    }

    #[test]
    fn link_activation_jumps_and_closes_menu() {
        let mut state = state_with_sections();
        state.navbar.set_menu_open(true);
        state.menu_selected = 2;
        state.activate_menu_selection();
        assert_eq!(state.page_scroll, 30);
        assert!(!state.navbar.menu_open());
        assert_eq!(state.current_section(), Section::Clasificacion);
    }

    #[test]
    fn menu_selection_wraps() {
        let mut state = AppState::new();
        state.menu_prev();
        assert_eq!(state.menu_selected, Section::ALL.len() - 1);
        state.menu_next();
        assert_eq!(state.menu_selected, 0);
    }

    #[test]
    fn anchors_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("#calendario"), None);
    }

    #[test]
    fn pointer_transitions_pause_carousel() {
        let mut state = AppState::new();
        state.carousel.attach(300.0, 60.0);
        state.hit.carousel = Some(Rect::new(3, 10, 60, 7));

        state.pointer_moved(10, 12);
        assert!(state.carousel.paused());
        state.pointer_moved(11, 13);
        assert!(state.carousel.paused());
        state.pointer_moved(0, 0);
        assert!(!state.carousel.paused());
    }

    #[test]
    fn fetch_failure_clears_loading_only_at_finish() {
        let mut state = AppState::new();
        apply_delta(
            &mut state,
            Delta::FetchFailed {
                what: "equipos".to_string(),
                error: "http 403".to_string(),
            },
        );
        assert!(state.loading);
        assert!(state.logs.back().is_some_and(|l| l.starts_with("[WARN]")));

        apply_delta(&mut state, Delta::FetchFinished);
        assert!(!state.loading);
        assert!(state.teams.is_empty());
    }
}
