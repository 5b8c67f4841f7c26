use chrono::Local;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Widget, Wrap};

use crate::carousel::CarouselController;
use crate::content::{self, NEWS, NewsItem};
use crate::state::{AppState, HitRegions, ScheduledMatch, Scorer, Section, Team, TeamRef};
use crate::stats::{self, CardRarity, Zone};

pub const NAVBAR_HEIGHT: u16 = 3;
pub const CARD_WIDTH: u16 = 26;
pub const CARD_HEIGHT: u16 = 7;
pub const CARD_GAP: u16 = 2;
pub const ARROW_GUTTER: u16 = 3;

const HERO_HEIGHT: u16 = 10;
const SECTION_HEADER_HEIGHT: u16 = 4;
const OVERVIEW_HEIGHT: u16 = 5;
const SCORER_CARD_HEIGHT: u16 = 8;
const SIDEBAR_WIDTH: u16 = 30;
const MATCH_CARD_HEIGHT: u16 = 6;
const NEWS_CARD_HEIGHT: u16 = 5;
const FOOTER_HEIGHT: u16 = 9;
const PLACEHOLDER_HEIGHT: u16 = 2;
const FLOATING_WIDTH: u16 = 14;
const FLOATING_HEIGHT: u16 = 3;
const SIDEBAR_ROWS: usize = 6;

const ACCENT: Color = Color::Rgb(255, 75, 68);
const GOLD: Color = Color::Rgb(212, 175, 55);
const SILVER: Color = Color::Rgb(192, 192, 192);
const BRONZE: Color = Color::Rgb(205, 127, 50);

/// The whole scrollable document rendered off-screen at full height.
pub struct Page {
    pub buffer: Buffer,
    pub sections: Vec<(Section, u16)>,
    pub carousel: Option<Rect>,
    pub carousel_left: Option<Rect>,
    pub carousel_right: Option<Rect>,
}

impl Page {
    pub fn height(&self) -> u16 {
        self.buffer.area.height
    }

    /// Plain text of one page row, trailing blanks trimmed.
    pub fn line(&self, y: u16) -> String {
        buffer_line(&self.buffer, y)
    }
}

pub fn buffer_line(buf: &Buffer, y: u16) -> String {
    let area = buf.area;
    if y < area.y || y >= area.y + area.height {
        return String::new();
    }
    let mut out = String::new();
    for x in area.x..area.x + area.width {
        out.push_str(buf.get(x, y).symbol());
    }
    out.trim_end().to_string()
}

pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.size();
    let nav_height = if state.navbar.is_visible() {
        NAVBAR_HEIGHT.min(area.height)
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(nav_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    let body = chunks[1];

    match carousel_extent(body.width, state.teams.len(), state.loading) {
        Some((content, viewport)) => state.carousel.attach(content, viewport),
        None => {
            state.carousel.detach();
            state.pointer_over_carousel = false;
        }
    }

    let page = build_page(state, body.width);
    state.page_height = page.height();
    state.viewport_height = body.height;
    state.clamp_page_scroll();
    state.section_offsets = page.sections.clone();

    blit(frame.buffer_mut(), &page.buffer, state.page_scroll, body);

    let mut hit = HitRegions {
        carousel: page
            .carousel
            .and_then(|r| page_to_screen(r, state.page_scroll, body)),
        carousel_left: page
            .carousel_left
            .and_then(|r| page_to_screen(r, state.page_scroll, body)),
        carousel_right: page
            .carousel_right
            .and_then(|r| page_to_screen(r, state.page_scroll, body)),
        ..HitRegions::default()
    };

    if nav_height > 0 {
        render_navbar(frame, chunks[0], state, &mut hit);
    }
    if state.navbar.menu_open() {
        render_menu(frame, area, chunks[0], state, &mut hit);
    }
    if state.navbar.shows_floating_button() {
        let rect = floating_button_rect(body);
        if rect.width > 0 && rect.height > 0 {
            render_floating_button(frame, rect);
            hit.floating_button = Some(rect);
        }
    }

    render_status_bar(frame, chunks[2], state);

    if state.help_overlay {
        render_help_overlay(frame, area);
    }

    state.hit = hit;
}

/// Content and viewport width of the team strip for a page of `width`
/// columns, or `None` when the strip is not on the page.
pub fn carousel_extent(width: u16, teams: usize, loading: bool) -> Option<(f64, f64)> {
    if loading || teams == 0 {
        return None;
    }
    let viewport = section_inner(Rect::new(0, 0, width, 1))
        .width
        .saturating_sub(ARROW_GUTTER * 2);
    if viewport == 0 {
        return None;
    }
    let content = teams as u32 * (CARD_WIDTH + CARD_GAP) as u32 - CARD_GAP as u32;
    Some((content as f64, viewport as f64))
}

pub fn build_page(state: &AppState, width: u16) -> Page {
    let heights = [
        (Section::Inicio, HERO_HEIGHT),
        (Section::Equipos, teams_height(state)),
        (Section::Clasificacion, standings_height(state)),
        (Section::Estadisticas, stats_height(state)),
        (Section::Noticias, news_height(state)),
    ];
    let total: u16 = heights.iter().map(|(_, h)| *h).sum::<u16>() + FOOTER_HEIGHT;

    let mut page = Page {
        buffer: Buffer::empty(Rect::new(0, 0, width, total)),
        sections: Vec::with_capacity(heights.len()),
        carousel: None,
        carousel_left: None,
        carousel_right: None,
    };

    let mut y = 0;
    for (section, height) in heights {
        page.sections.push((section, y));
        let area = Rect::new(0, y, width, height);
        match section {
            Section::Inicio => render_hero(&mut page.buffer, area),
            Section::Equipos => render_teams(&mut page, area, state),
            Section::Clasificacion => render_standings(&mut page.buffer, area, state),
            Section::Estadisticas => render_stats(&mut page.buffer, area, state),
            Section::Noticias => render_news(&mut page.buffer, area, state),
        }
        y += height;
    }
    render_footer(&mut page.buffer, Rect::new(0, y, width, FOOTER_HEIGHT));
    page
}

fn blit(dst: &mut Buffer, src: &Buffer, scroll: u16, area: Rect) {
    let width = area.width.min(src.area.width);
    for row in 0..area.height {
        let sy = scroll.saturating_add(row);
        if sy >= src.area.height {
            break;
        }
        for col in 0..width {
            *dst.get_mut(area.x + col, area.y + row) = src.get(col, sy).clone();
        }
    }
}

/// Maps a page rectangle into screen space, clipped to the viewport.
pub fn page_to_screen(rect: Rect, scroll: u16, viewport: Rect) -> Option<Rect> {
    let top = rect.y.max(scroll);
    let bottom = (rect.y + rect.height).min(scroll.saturating_add(viewport.height));
    if top >= bottom {
        return None;
    }
    Some(Rect::new(
        viewport.x + rect.x,
        viewport.y + (top - scroll),
        rect.width.min(viewport.width.saturating_sub(rect.x)),
        bottom - top,
    ))
}

fn section_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}

fn heading_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Heading, two lines of intro copy and a spacer. Returns what is left.
fn render_section_header(buf: &mut Buffer, area: Rect, title: &str, intro: &str) -> Rect {
    let inner = section_inner(area);
    let title_area = Rect { height: 1, ..inner };
    Paragraph::new(Line::from(Span::styled(title.to_string(), heading_style())))
        .render(title_area, buf);
    let intro_area = Rect {
        y: inner.y + 1,
        height: 2.min(inner.height.saturating_sub(1)),
        ..inner
    };
    Paragraph::new(intro.to_string())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .render(intro_area, buf);
    Rect {
        y: inner.y + SECTION_HEADER_HEIGHT,
        height: inner.height.saturating_sub(SECTION_HEADER_HEIGHT),
        ..inner
    }
}

fn render_placeholder(buf: &mut Buffer, area: Rect, text: &str) {
    Paragraph::new(text.to_string())
        .style(dim())
        .alignment(Alignment::Center)
        .render(Rect { height: 1, ..area }, buf);
}

fn render_hero(buf: &mut Buffer, area: Rect) {
    let inner = section_inner(Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(2),
        ..area
    });
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let brand = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let brand_inner = brand.inner(cols[0]);
    brand.render(cols[0], buf);

    let logo = Paragraph::new(Line::from(Span::styled(
        "L A L I G A",
        heading_style(),
    )))
    .alignment(Alignment::Center);
    logo.render(Rect { height: 1, ..brand_inner }, buf);

    let stat_area = Rect {
        y: brand_inner.y + 3,
        height: 2.min(brand_inner.height.saturating_sub(3)),
        ..brand_inner
    };
    let stat_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(stat_area);
    for ((number, label), col) in content::HERO_STATS.iter().zip(stat_cols.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(
                number.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label.to_string(), dim())),
        ])
        .alignment(Alignment::Center)
        .render(*col, buf);
    }

    let buttons = [
        (Section::Equipos, "Ver Equipos", false),
        (Section::Clasificacion, "Clasificación", false),
        (Section::Noticias, "Noticias", false),
        (Section::Estadisticas, "Estadísticas", true),
    ];
    let mut button_spans = Vec::new();
    for (section, label, primary) in buttons {
        let style = if primary {
            Style::default().fg(Color::Black).bg(ACCENT)
        } else {
            Style::default().fg(ACCENT)
        };
        button_spans.push(Span::styled(
            format!(" [{}] {label} ", section_key(section)),
            style,
        ));
        button_spans.push(Span::raw(" "));
    }

    let right = section_inner(cols[1]);
    Paragraph::new(vec![
        Line::from(Span::styled(
            content::HERO_TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(content::HERO_SUBTITLE, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(button_spans),
    ])
    .wrap(Wrap { trim: true })
    .render(right, buf);
}

pub fn section_key(section: Section) -> char {
    match section {
        Section::Inicio => '1',
        Section::Equipos => '2',
        Section::Clasificacion => '3',
        Section::Estadisticas => '4',
        Section::Noticias => '5',
    }
}

fn teams_body_height(state: &AppState) -> u16 {
    if state.loading || state.teams.is_empty() {
        PLACEHOLDER_HEIGHT
    } else {
        CARD_HEIGHT + 1
    }
}

fn teams_height(state: &AppState) -> u16 {
    SECTION_HEADER_HEIGHT + teams_body_height(state) + 1
}

fn render_teams(page: &mut Page, area: Rect, state: &AppState) {
    let body = render_section_header(
        &mut page.buffer,
        area,
        content::TEAMS_TITLE,
        content::TEAMS_INTRO,
    );
    if state.loading {
        render_placeholder(&mut page.buffer, body, content::TEAMS_LOADING);
        return;
    }
    if state.teams.is_empty() {
        render_placeholder(&mut page.buffer, body, "Sin equipos disponibles");
        return;
    }

    let left = Rect::new(body.x, body.y, ARROW_GUTTER.min(body.width), CARD_HEIGHT);
    let strip = Rect::new(
        body.x + ARROW_GUTTER,
        body.y,
        body.width.saturating_sub(ARROW_GUTTER * 2),
        CARD_HEIGHT,
    );
    let right = Rect::new(strip.x + strip.width, body.y, ARROW_GUTTER, CARD_HEIGHT);
    if strip.width == 0 {
        return;
    }

    let arrow_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    for (rect, glyph) in [(left, " ‹ "), (right, " › ")] {
        page.buffer
            .set_string(rect.x, rect.y + CARD_HEIGHT / 2, glyph, arrow_style);
    }

    render_team_strip(&mut page.buffer, strip, &state.teams, state.carousel.column_offset());
    page.carousel = Some(strip);
    page.carousel_left = Some(left);
    page.carousel_right = Some(right);

    let pages = CarouselController::page_count(state.teams.len());
    let active = state.carousel.active_page(pages);
    let mut spans: Vec<Span> = (0..pages)
        .map(|idx| {
            if idx == active {
                Span::styled("● ", Style::default().fg(ACCENT))
            } else {
                Span::styled("○ ", dim())
            }
        })
        .collect();
    let mode = if !state.carousel.auto_scroll_enabled() {
        "MANUAL"
    } else if state.carousel.paused() {
        "PAUSA"
    } else {
        "AUTO"
    };
    spans.push(Span::styled(format!("  {mode}"), dim()));
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(
            Rect::new(body.x, body.y + CARD_HEIGHT, body.width, 1),
            &mut page.buffer,
        );
}

pub fn team_card_lines(team: &Team, index: usize) -> Vec<String> {
    let inner = (CARD_WIDTH - 2) as usize;
    let tla = team
        .tla
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| team.name.chars().take(3).collect::<String>().to_uppercase());
    let name = team
        .short_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(&team.name);
    let body = [
        format!(" {tla}  {name}"),
        format!(" {}", team.venue_label()),
        format!(" {:<10}{}", "Fundado", "Posición"),
        format!(" {:<10}{}", team.founded_label(), index + 1),
        String::new(),
    ];

    let mut lines = Vec::with_capacity(CARD_HEIGHT as usize);
    lines.push(format!("┌{}┐", "─".repeat(inner)));
    for text in body {
        lines.push(format!("│{}│", fit(&text, inner)));
    }
    lines.push(format!("└{}┘", "─".repeat(inner)));
    lines
}

/// Draws the visible slice of the strip. Cards partly scrolled out are
/// clipped column by column.
fn render_team_strip(buf: &mut Buffer, strip: Rect, teams: &[Team], offset: usize) {
    let stride = (CARD_WIDTH + CARD_GAP) as usize;
    let view_start = offset;
    let view_end = offset + strip.width as usize;

    for (idx, team) in teams.iter().enumerate() {
        let card_start = idx * stride;
        let card_end = card_start + CARD_WIDTH as usize;
        if card_end <= view_start || card_start >= view_end {
            continue;
        }
        let clip_left = view_start.saturating_sub(card_start);
        let clip_right = (view_end - card_start).min(CARD_WIDTH as usize);
        let x = strip.x + card_start.saturating_sub(view_start) as u16;

        let border = Style::default().fg(ACCENT);
        let text = Style::default().fg(Color::White);
        for (row, line) in team_card_lines(team, idx).iter().enumerate() {
            let visible: String = line
                .chars()
                .skip(clip_left)
                .take(clip_right - clip_left)
                .collect();
            let style = if row == 0 || row + 1 == CARD_HEIGHT as usize {
                border
            } else if row == 1 {
                text.add_modifier(Modifier::BOLD)
            } else {
                text
            };
            buf.set_string(x, strip.y + row as u16, visible, style);
        }
    }
}

fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        let mut out = text.to_string();
        out.extend(std::iter::repeat_n(' ', width - count));
        out
    } else if width == 0 {
        String::new()
    } else {
        let mut out: String = text.chars().take(width - 1).collect();
        out.push('…');
        out
    }
}

fn standings_body_height(state: &AppState) -> u16 {
    if state.loading {
        PLACEHOLDER_HEIGHT
    } else {
        state.standings.len() as u16 + 3 + 1
    }
}

fn standings_height(state: &AppState) -> u16 {
    SECTION_HEADER_HEIGHT + standings_body_height(state) + 1
}

/// Cell text of every standings row, in the order the table renders them.
pub fn standings_table_rows(state: &AppState) -> Vec<[String; 10]> {
    state
        .standings
        .iter()
        .map(|row| {
            [
                row.position.to_string(),
                row.team.name.clone(),
                row.points.to_string(),
                row.played_games.to_string(),
                row.won.to_string(),
                row.draw.to_string(),
                row.lost.to_string(),
                row.goals_for.to_string(),
                row.goals_against.to_string(),
                stats::goal_difference_label(row.goal_difference),
            ]
        })
        .collect()
}

fn zone_color(zone: Zone) -> Option<Color> {
    match zone {
        Zone::Champions => Some(Color::Blue),
        Zone::Europa => Some(Color::Rgb(255, 140, 0)),
        Zone::Conference => Some(Color::Green),
        Zone::Relegation => Some(Color::Red),
        Zone::Normal => None,
    }
}

fn render_standings(buf: &mut Buffer, area: Rect, state: &AppState) {
    let body = render_section_header(
        buf,
        area,
        content::STANDINGS_TITLE,
        content::STANDINGS_INTRO,
    );
    if state.loading {
        render_placeholder(buf, body, content::STANDINGS_LOADING);
        return;
    }

    let table_len = state.standings.len();
    let rows: Vec<Row> = standings_table_rows(state)
        .into_iter()
        .zip(state.standings.iter())
        .map(|(cells, row)| {
            let zone = stats::zone_for(row.position, table_len);
            let pos_style = zone_color(zone)
                .map(|c| Style::default().fg(c).add_modifier(Modifier::BOLD))
                .unwrap_or_default();
            let gd_style = match row.goal_difference {
                d if d > 0 => Style::default().fg(Color::Green),
                d if d < 0 => Style::default().fg(Color::Red),
                _ => Style::default(),
            };
            let cells: Vec<Cell> = cells
                .into_iter()
                .enumerate()
                .map(|(idx, text)| {
                    let style = match idx {
                        0 => pos_style,
                        1 => Style::default().fg(Color::White),
                        2 => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                        9 => gd_style,
                        _ => Style::default(),
                    };
                    Cell::from(text).style(style)
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(18),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
    ];
    let header = Row::new(content::STANDINGS_HEADER.to_vec())
        .style(Style::default().add_modifier(Modifier::BOLD));
    let table_height = table_len as u16 + 3;
    Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(dim()),
        )
        .render(Rect { height: table_height, ..body }, buf);

    let mut legend = Vec::new();
    for zone in [Zone::Champions, Zone::Europa, Zone::Conference, Zone::Relegation] {
        if let Some(color) = zone_color(zone) {
            legend.push(Span::styled("■ ", Style::default().fg(color)));
            legend.push(Span::raw(format!("{}   ", stats::zone_label(zone))));
        }
    }
    Paragraph::new(Line::from(legend)).render(
        Rect {
            y: body.y + table_height,
            height: 1,
            ..body
        },
        buf,
    );
}

fn stats_height(state: &AppState) -> u16 {
    let body = if state.loading {
        PLACEHOLDER_HEIGHT
    } else {
        SCORER_CARD_HEIGHT
    };
    2 + OVERVIEW_HEIGHT + 1 + 1 + body + 1
}

fn render_stats(buf: &mut Buffer, area: Rect, state: &AppState) {
    let inner = section_inner(area);
    Paragraph::new(Line::from(vec![
        Span::styled(" STATS ", Style::default().fg(Color::Black).bg(ACCENT)),
        Span::raw(" "),
        Span::styled(content::STATS_TITLE, heading_style()),
    ]))
    .render(Rect { height: 1, ..inner }, buf);

    let totals = stats::league_totals(&state.standings);
    let overview = Rect::new(inner.x, inner.y + 2, inner.width, OVERVIEW_HEIGHT);
    let cards = [
        ("Partidos Jugados", totals.matches_label(), ACCENT),
        ("Goles Totales", totals.total_goals.to_string(), GOLD),
        ("Promedio por Partido", totals.average_label(), Color::Cyan),
    ];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(overview);
    for ((label, value, color), col) in cards.into_iter().zip(cols.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, dim())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .render(*col, buf);
    }

    let title_y = overview.y + OVERVIEW_HEIGHT + 1;
    Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", content::SCORERS_BADGE),
            Style::default().fg(Color::Black).bg(GOLD),
        ),
        Span::raw(" "),
        Span::styled(content::SCORERS_TITLE, Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .render(Rect::new(inner.x, title_y, inner.width, 1), buf);

    let body = Rect::new(
        inner.x,
        title_y + 1,
        inner.width,
        inner.height.saturating_sub(title_y + 1 - inner.y),
    );
    if state.loading {
        render_placeholder(buf, body, content::DATA_LOADING);
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)])
        .split(Rect { height: SCORER_CARD_HEIGHT, ..body });
    render_scorer_cards(buf, cols[0], &state.scorers);
    render_standings_sidebar(buf, cols[1], state);
}

fn rarity_color(rarity: CardRarity) -> Color {
    match rarity {
        CardRarity::Gold => GOLD,
        CardRarity::Silver => SILVER,
        CardRarity::Bronze => BRONZE,
    }
}

fn render_scorer_cards(buf: &mut Buffer, area: Rect, scorers: &[Scorer]) {
    if scorers.is_empty() {
        render_placeholder(buf, area, "Sin datos de goleadores");
        return;
    }
    let count = scorers.len() as u32;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); scorers.len()])
        .split(area);
    for (idx, (scorer, col)) in scorers.iter().zip(cols.iter()).enumerate() {
        let color = rarity_color(stats::card_rarity(idx));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Line::from(Span::styled(
                format!(" {} ST ", scorer.goals),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        Paragraph::new(vec![
            Line::from(Span::styled(format!("#{}", idx + 1), Style::default().fg(color))),
            Line::from(Span::styled(
                scorer.player.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(scorer.team.display_name().to_string(), dim())),
            Line::from(""),
            Line::from(format!("{} Goles", scorer.goals)),
            Line::from(format!("{} Partidos", scorer.played_label())),
        ])
        .block(block)
        .render(*col, buf);
    }
}

fn render_standings_sidebar(buf: &mut Buffer, area: Rect, state: &AppState) {
    let table_len = state.standings.len();
    let lines: Vec<Line> = state
        .standings
        .iter()
        .take(SIDEBAR_ROWS)
        .map(|row| {
            let zone = stats::zone_for(row.position, table_len);
            let color = zone_color(zone).unwrap_or(Color::Gray);
            Line::from(vec![
                Span::styled(format!("{:>2} ", row.position), Style::default().fg(color)),
                Span::raw(fit(row.team.display_name(), 16)),
                Span::styled(
                    format!(" {} pts", row.points),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(dim())
                .title(" Clasificación "),
        )
        .render(area, buf);
}

fn matches_body_height(state: &AppState) -> u16 {
    if state.loading || state.matches.is_empty() {
        PLACEHOLDER_HEIGHT
    } else {
        state.matches.len().div_ceil(2) as u16 * MATCH_CARD_HEIGHT
    }
}

fn news_height(state: &AppState) -> u16 {
    let news_rows = NEWS.len().div_ceil(2) as u16;
    SECTION_HEADER_HEIGHT
        + 1
        + matches_body_height(state)
        + 1
        + 1
        + news_rows * NEWS_CARD_HEIGHT
        + 1
        + 1
}

fn render_news(buf: &mut Buffer, area: Rect, state: &AppState) {
    let body = render_section_header(buf, area, content::NEWS_TITLE, content::NEWS_INTRO);

    Paragraph::new(Line::from(vec![
        Span::styled(content::MATCHES_TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(" LIVE ", Style::default().fg(Color::White).bg(Color::Red)),
    ]))
    .render(Rect { height: 1, ..body }, buf);

    let matches_area = Rect::new(body.x, body.y + 1, body.width, matches_body_height(state));
    if state.loading {
        render_placeholder(buf, matches_area, content::MATCHES_LOADING);
    } else if state.matches.is_empty() {
        render_placeholder(buf, matches_area, "No hay partidos programados");
    } else {
        for (idx, fixture) in state.matches.iter().enumerate() {
            let rect = grid_cell(matches_area, idx, MATCH_CARD_HEIGHT);
            render_match_card(buf, rect, fixture);
        }
    }

    let news_title_y = matches_area.y + matches_area.height + 1;
    Paragraph::new(Line::from(Span::styled(
        content::LATEST_NEWS_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .render(Rect::new(body.x, news_title_y, body.width, 1), buf);

    let news_rows = NEWS.len().div_ceil(2) as u16;
    let news_area = Rect::new(
        body.x,
        news_title_y + 1,
        body.width,
        news_rows * NEWS_CARD_HEIGHT,
    );
    for (idx, item) in NEWS.iter().enumerate() {
        render_news_card(buf, grid_cell(news_area, idx, NEWS_CARD_HEIGHT), item, idx == 0);
    }

    Paragraph::new(Span::styled(
        format!("[ {} ]", content::VIEW_ALL_NEWS),
        Style::default().fg(ACCENT),
    ))
    .alignment(Alignment::Center)
    .render(
        Rect::new(body.x, news_area.y + news_area.height, body.width, 1),
        buf,
    );
}

/// Two-column grid slot for item `idx`.
fn grid_cell(area: Rect, idx: usize, height: u16) -> Rect {
    let half = area.width / 2;
    let col = (idx % 2) as u16;
    let row = (idx / 2) as u16;
    Rect::new(
        area.x + col * half,
        area.y + row * height,
        if col == 0 { half } else { area.width - half },
        height,
    )
}

fn render_match_card(buf: &mut Buffer, area: Rect, fixture: &ScheduledMatch) {
    let (day, time) = stats::match_day_labels(&fixture.utc_date, &Local);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(Line::from(vec![
            Span::styled(format!(" {day} "), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{time} ")),
            Span::styled(" PRÓXIMO ", Style::default().fg(Color::Black).bg(Color::Green)),
        ]));
    let inner = block.inner(area);
    block.render(area, buf);

    let narrow = inner.width < 50;
    let name = |team: &TeamRef| {
        if narrow {
            stats::team_short(team).to_string()
        } else {
            team.display_name().to_string()
        }
    };
    let teams = Line::from(vec![
        Span::styled(
            name(&fixture.home_team),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" LOCAL", dim()),
        Span::styled("  VS  ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(
            name(&fixture.away_team),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" VISITANTE", dim()),
    ]);

    let bar_width = inner.width.saturating_sub(12).min(30);
    let [home, draw, _] = content::PREDICTION_SPLIT;
    let home_w = bar_width * home / 100;
    let draw_w = bar_width * draw / 100;
    let away_w = bar_width.saturating_sub(home_w + draw_w);
    let prediction = Line::from(vec![
        Span::styled("Predicción ", dim()),
        Span::styled("█".repeat(home_w as usize), Style::default().fg(Color::Green)),
        Span::styled("█".repeat(draw_w as usize), Style::default().fg(Color::Yellow)),
        Span::styled("█".repeat(away_w as usize), Style::default().fg(Color::Red)),
    ]);

    let mut venue = format!("Estadio: {}", fixture.venue_label());
    if let Some(matchday) = fixture.matchday {
        venue.push_str(&format!("  ·  Jornada {matchday}"));
    }

    Paragraph::new(vec![
        teams,
        prediction,
        Line::from(Span::styled(venue, Style::default().fg(Color::Gray))),
        Line::from(Span::styled("[SEGUIR]", Style::default().fg(ACCENT))),
    ])
    .render(inner, buf);
}

fn render_news_card(buf: &mut Buffer, area: Rect, item: &NewsItem, featured: bool) {
    let border = if featured { ACCENT } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Line::from(Span::styled(
            format!(" {} ", item.category),
            Style::default().fg(Color::Black).bg(border),
        )));
    let mut meta = vec![Span::styled(item.date, dim())];
    if let Some(kind) = item.kind {
        meta.push(Span::raw("  "));
        meta.push(Span::styled(kind, Style::default().fg(ACCENT)));
    }
    Paragraph::new(vec![
        Line::from(meta),
        Line::from(Span::styled(
            item.title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(item.summary, Style::default().fg(Color::Gray))),
    ])
    .block(block)
    .render(area, buf);
}

fn render_footer(buf: &mut Buffer, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(ACCENT));
    let inner = section_inner(block.inner(area));
    block.render(area, buf);

    let mut constraints = vec![Constraint::Percentage(31)];
    constraints.extend([Constraint::Percentage(23); 3]);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        });

    Paragraph::new(vec![
        Line::from(Span::styled(content::BRAND_FULL, heading_style())),
        Line::from(Span::styled(content::FOOTER_TAGLINE, dim())),
    ])
    .render(cols[0], buf);

    for (section, col) in content::FOOTER_SECTIONS.iter().zip(cols.iter().skip(1)) {
        let mut lines = vec![Line::from(Span::styled(
            section.title,
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        for (label, anchor) in section.links {
            let linked = anchor.and_then(Section::from_anchor);
            let line = match linked {
                Some(target) => Line::from(vec![
                    Span::styled(
                        label.to_string(),
                        Style::default().add_modifier(Modifier::UNDERLINED),
                    ),
                    Span::styled(format!(" [{}]", section_key(target)), dim()),
                ]),
                None => Line::from(Span::styled(label.to_string(), Style::default().fg(Color::Gray))),
            };
            lines.push(line);
        }
        Paragraph::new(lines).render(*col, buf);
    }

    let bottom = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1,
        ..inner
    };
    let mut spans = vec![Span::styled(content::FOOTER_COPYRIGHT, dim())];
    for legal in content::FOOTER_LEGAL {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(legal, Style::default().fg(Color::Gray)));
    }
    Paragraph::new(Line::from(spans)).render(bottom, buf);
}

fn render_navbar(frame: &mut Frame, area: Rect, state: &AppState, hit: &mut HitRegions) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let current = state.current_section();
    let mut spans = vec![Span::styled(
        format!(" {} ", content::BRAND),
        Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    let mut x = inner.x + content::BRAND.chars().count() as u16 + 2;
    spans.push(Span::raw("  "));
    x += 2;
    for section in Section::ALL {
        let label = format!(" {} ", section.label());
        let width = label.chars().count() as u16;
        let style = if section == current {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        if x + width <= inner.x + inner.width {
            hit.nav_links.push((section, Rect::new(x, inner.y, width, 1)));
        }
        spans.push(Span::styled(label, style));
        x += width;
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    let menu_label = format!(" [m] Menú  {} ", state.language.code());
    let menu_width = menu_label.chars().count() as u16;
    if inner.width > menu_width {
        let rect = Rect::new(inner.x + inner.width - menu_width, inner.y, menu_width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(menu_label, Style::default().fg(Color::Gray))),
            rect,
        );
        hit.menu_button = Some(rect);
    }
}

fn render_menu(frame: &mut Frame, screen: Rect, nav: Rect, state: &AppState, hit: &mut HitRegions) {
    let width = 26.min(screen.width);
    let height = (Section::ALL.len() as u16 + 2).min(screen.height);
    let rect = Rect::new(
        screen.x + screen.width - width,
        (nav.y + nav.height).min(screen.y + screen.height.saturating_sub(height)),
        width,
        height,
    );
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Menú ");
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(idx, section)| {
            let style = if idx == state.menu_selected {
                Style::default().fg(Color::Black).bg(ACCENT)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                fit(&format!(" {} {}", section_key(*section), section.label()), inner.width as usize),
                style,
            ))
        })
        .collect();
    for (idx, section) in Section::ALL.iter().enumerate() {
        let y = inner.y + idx as u16;
        if y < inner.y + inner.height {
            hit.nav_links.push((*section, Rect::new(inner.x, y, inner.width, 1)));
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn floating_button_rect(body: Rect) -> Rect {
    let width = FLOATING_WIDTH.min(body.width);
    let height = FLOATING_HEIGHT.min(body.height);
    Rect::new(
        body.x + body.width - width,
        body.y + body.height - height,
        width,
        height,
    )
}

fn render_floating_button(frame: &mut Frame, rect: Rect) {
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} [f]", content::BRAND),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        ),
        rect,
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = "j/k Desplazar | 1-5 Secciones | h/l Carrusel | a Auto | m Menú | r Recargar | ? Ayuda | q Salir";
    let status = if state.loading {
        "Cargando...".to_string()
    } else {
        state.logs.back().cloned().unwrap_or_default()
    };
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(48)])
        .split(area);
    frame.render_widget(Paragraph::new(Span::styled(hints, dim())), cols[0]);
    let style = if status.starts_with("[WARN]") {
        Style::default().fg(Color::Yellow)
    } else {
        dim()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(status, style)).alignment(Alignment::Right),
        cols[1],
    );
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "LaLiga Terminal - Ayuda",
        "",
        "Página:",
        "  j/k or ↑/↓     Desplazar",
        "  PgUp/PgDn      Página arriba/abajo",
        "  g / G          Inicio / final",
        "  1-5            Ir a sección",
        "",
        "Carrusel:",
        "  h/l or ←/→     Anterior / siguiente",
        "  a              Auto-scroll on/off",
        "",
        "Menú:",
        "  m              Abrir/cerrar menú",
        "  f              Botón flotante",
        "  Enter          Ir al enlace",
        "  L              Idioma",
        "",
        "  r              Recargar datos",
        "  ?              Ayuda",
        "  q              Salir",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Ayuda").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
