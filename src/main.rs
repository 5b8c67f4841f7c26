use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;

use laliga_terminal::carousel::Direction as Slide;
use laliga_terminal::config::Config;
use laliga_terminal::football_data::FootballDataClient;
use laliga_terminal::logging;
use laliga_terminal::provider::{ProviderHandle, spawn_provider};
use laliga_terminal::state::{AppState, ProviderCommand, Section, drain_deltas, rect_contains};
use laliga_terminal::ui;

const IDLE_TICK: Duration = Duration::from_millis(250);
const WHEEL_ROWS: i32 = 3;

struct App {
    state: AppState,
    should_quit: bool,
    provider: Option<ProviderHandle>,
    frame_interval: Duration,
    last_frame: Instant,
}

impl App {
    fn new(provider: Option<ProviderHandle>, frame_interval: Duration) -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
            provider,
            frame_interval,
            last_frame: Instant::now(),
        }
    }

    fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if self.state.help_overlay {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('?') | KeyCode::Esc => self.state.help_overlay = false,
                _ => {}
            }
            return;
        }

        if self.state.navbar.menu_open() {
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.state.menu_next();
                    return;
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.state.menu_prev();
                    return;
                }
                KeyCode::Enter => {
                    self.state.activate_menu_selection();
                    return;
                }
                KeyCode::Esc => {
                    self.state.navbar.close_menu();
                    return;
                }
                _ => {}
            }
        }

        let page = self.state.viewport_height.saturating_sub(2).max(1) as i32;
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_page_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_page_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.state.scroll_page_by(page),
            KeyCode::PageUp => self.state.scroll_page_by(-page),
            KeyCode::Char('g') | KeyCode::Home => self.state.scroll_page_to(0),
            KeyCode::Char('G') | KeyCode::End => {
                let bottom = self.state.max_page_scroll();
                self.state.scroll_page_to(bottom);
            }
            KeyCode::Char('h') | KeyCode::Left => self.state.carousel.jump(Slide::Left, now),
            KeyCode::Char('l') | KeyCode::Right => self.state.carousel.jump(Slide::Right, now),
            KeyCode::Char('a') => {
                let enabled = !self.state.carousel.auto_scroll_enabled();
                self.state.carousel.set_auto_scroll(enabled);
            }
            KeyCode::Char('m') => self.state.navbar.toggle_menu(),
            KeyCode::Char('f') => {
                self.state.navbar.activate_floating_button();
            }
            KeyCode::Char('L') => {
                self.state.language = self.state.language.next();
                self.state.push_log(format!(
                    "[INFO] Idioma: {}",
                    self.state.language.code()
                ));
            }
            KeyCode::Char('r') => self.request_refresh(),
            KeyCode::Char('?') => self.state.help_overlay = true,
            KeyCode::Esc => self.state.navbar.close_menu(),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.state.jump_to_section(Section::ALL[idx]);
            }
            _ => {}
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        self.state.pointer_moved(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.scroll_page_by(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.state.scroll_page_by(-WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => self.on_click(mouse.column, mouse.row, now),
            _ => {}
        }
    }

    fn on_click(&mut self, column: u16, row: u16, now: Instant) {
        let hit = self.state.hit.clone();
        let inside = |area: Option<Rect>| area.is_some_and(|r| rect_contains(r, column, row));

        if inside(hit.floating_button) {
            self.state.navbar.activate_floating_button();
        } else if inside(hit.menu_button) {
            self.state.navbar.toggle_menu();
        } else if let Some((section, _)) = hit
            .nav_links
            .iter()
            .rev()
            .find(|(_, area)| rect_contains(*area, column, row))
        {
            self.state.jump_to_section(*section);
        } else if inside(hit.carousel_left) {
            self.state.carousel.jump(Slide::Left, now);
        } else if inside(hit.carousel_right) {
            self.state.carousel.jump(Slide::Right, now);
        }
    }

    fn request_refresh(&mut self) {
        let Some(provider) = &self.provider else {
            self.state.push_log("[INFO] Recarga no disponible");
            return;
        };
        if provider.request(ProviderCommand::Refresh) {
            self.state.push_log("[INFO] Recargando datos");
        } else {
            self.state.push_log("[WARN] No se pudo solicitar la recarga");
        }
    }

    /// How long the loop may block waiting for input. Short while the strip
    /// is moving, otherwise until the next timer or the idle tick.
    fn poll_timeout(&self, now: Instant) -> Duration {
        if self.state.carousel.wants_frames() {
            return self.frame_interval;
        }
        match self.state.carousel.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_TICK),
            None => IDLE_TICK,
        }
    }
}

fn main() -> io::Result<()> {
    let config = Config::load();
    let logging_error = logging::init(&config).err();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let provider = spawn_provider(FootballDataClient::from_config(&config), tx);
    tracing::info!(
        competition = %config.competition,
        base_url = %config.base_url,
        token = config.token.is_some(),
        "starting"
    );

    let mut app = App::new(Some(provider), config.frame_interval);
    if let Some(err) = logging_error {
        app.state.push_log(format!("[WARN] Logging desactivado: {err:#}"));
    }
    if config.token.is_none() {
        app.state
            .push_log("[WARN] FOOTBALL_DATA_TOKEN no definido; la API puede rechazar las peticiones");
    }
    let res = run_app(&mut terminal, &mut app, rx);

    app.state.unmount();
    drop(app.provider.take());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<laliga_terminal::state::Delta>,
) -> io::Result<()> {
    loop {
        drain_deltas(&mut app.state, &rx);

        let now = Instant::now();
        app.state.carousel.update(now);
        // Input events can wake the loop early; advance at most once per frame.
        if now.duration_since(app.last_frame) >= app.frame_interval {
            app.state.carousel.tick(now);
            app.last_frame = now;
        }

        terminal.draw(|f| ui::draw(f, &mut app.state))?;

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key, now),
                Event::Mouse(mouse) => app.on_mouse(mouse, now),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
