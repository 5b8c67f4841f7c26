//! Auto-advancing team carousel.
//!
//! Positions are in terminal columns. The controller never looks at the
//! clock itself: callers pass `now` into every time-dependent operation, so
//! the one-shot timers are plain deadlines that [`CarouselController::update`]
//! fires and [`CarouselController::detach`] drops.

use std::time::{Duration, Instant};

/// Columns advanced per frame while auto-scrolling.
pub const AUTO_SCROLL_STEP: f64 = 0.25;
/// Slack before the end of content that already counts as "at the end".
pub const END_TOLERANCE: f64 = 1.0;
/// Share of the viewport covered by one manual jump.
pub const JUMP_FRACTION: f64 = 0.7;
pub const WRAP_DELAY: Duration = Duration::from_millis(400);
pub const RESUME_DELAY: Duration = Duration::from_millis(1500);
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(300);
/// Cards per indicator page.
pub const CARDS_PER_PAGE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub content_width: f64,
    pub viewport_width: f64,
}

impl Extent {
    pub fn max_scroll(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    fn at_end(&self, scroll_left: f64) -> bool {
        scroll_left + self.viewport_width >= self.content_width - END_TOLERANCE
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SmoothScroll {
    from: f64,
    to: f64,
    started: Instant,
}

impl SmoothScroll {
    fn position(&self, now: Instant) -> (f64, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f64() / SMOOTH_SCROLL_DURATION.as_secs_f64()).min(1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, t >= 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct CarouselController {
    scroll_left: f64,
    auto_scroll_enabled: bool,
    paused: bool,
    extent: Option<Extent>,
    animation: Option<SmoothScroll>,
    wrap_at: Option<Instant>,
    resume_at: Option<Instant>,
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselController {
    pub fn new() -> Self {
        Self {
            scroll_left: 0.0,
            auto_scroll_enabled: true,
            paused: false,
            extent: None,
            animation: None,
            wrap_at: None,
            resume_at: None,
        }
    }

    /// Records the measured strip geometry. Called on every draw; the first
    /// call after construction or [`Self::detach`] mounts a fresh carousel.
    pub fn attach(&mut self, content_width: f64, viewport_width: f64) {
        if self.extent.is_none() {
            *self = Self::new();
        }
        let extent = Extent {
            content_width: content_width.max(0.0),
            viewport_width: viewport_width.max(0.0),
        };
        self.scroll_left = self.scroll_left.clamp(0.0, extent.max_scroll());
        self.extent = Some(extent);
    }

    /// Unmount. Pending timers and any running smooth scroll are cancelled so
    /// nothing fires into a torn-down view.
    pub fn detach(&mut self) {
        self.extent = None;
        self.animation = None;
        self.wrap_at = None;
        self.resume_at = None;
        self.paused = false;
    }

    pub fn is_attached(&self) -> bool {
        self.extent.is_some()
    }

    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Whole columns hidden to the left of the viewport.
    pub fn column_offset(&self) -> usize {
        self.scroll_left.max(0.0).floor() as usize
    }

    pub fn auto_scroll_enabled(&self) -> bool {
        self.auto_scroll_enabled
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn reset_pending(&self) -> bool {
        self.wrap_at.is_some()
    }

    pub fn resume_pending(&self) -> bool {
        self.resume_at.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// One display frame of auto-advance.
    pub fn tick(&mut self, now: Instant) {
        let Some(extent) = self.extent else {
            return;
        };
        if !self.auto_scroll_enabled || self.paused || self.animation.is_some() {
            return;
        }

        self.scroll_left = (self.scroll_left + AUTO_SCROLL_STEP).min(extent.max_scroll());

        if extent.at_end(self.scroll_left) && self.wrap_at.is_none() {
            self.wrap_at = Some(now + WRAP_DELAY);
        }
    }

    /// Fires due timers and advances a running smooth scroll.
    pub fn update(&mut self, now: Instant) {
        if self.extent.is_none() {
            return;
        }

        if self.resume_at.is_some_and(|at| now >= at) {
            self.resume_at = None;
            self.auto_scroll_enabled = true;
        }

        if self.wrap_at.is_some_and(|at| now >= at) {
            self.wrap_at = None;
            self.scroll_to(0.0, now);
        }

        if let Some(animation) = self.animation {
            let (position, done) = animation.position(now);
            self.scroll_left = position;
            if done {
                self.animation = None;
            }
        }
    }

    pub fn jump(&mut self, direction: Direction, now: Instant) {
        let Some(extent) = self.extent else {
            return;
        };

        self.auto_scroll_enabled = false;
        self.resume_at = Some(now + RESUME_DELAY);

        let displacement = (extent.viewport_width * JUMP_FRACTION).round();
        let target = match direction {
            Direction::Left => self.scroll_left - displacement,
            Direction::Right => self.scroll_left + displacement,
        };
        self.scroll_to(target, now);
    }

    pub fn pointer_enter(&mut self) {
        if self.extent.is_some() {
            self.paused = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.extent.is_some() {
            self.paused = false;
        }
    }

    /// Explicit user toggle. Cancels a pending re-enable so the choice sticks.
    pub fn set_auto_scroll(&mut self, enabled: bool) {
        if self.extent.is_none() {
            return;
        }
        self.auto_scroll_enabled = enabled;
        self.resume_at = None;
    }

    /// True while per-frame ticks can change anything. When false the event
    /// loop may idle until [`Self::next_deadline`].
    pub fn wants_frames(&self) -> bool {
        self.extent.is_some()
            && (self.animation.is_some() || (self.auto_scroll_enabled && !self.paused))
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.wrap_at, self.resume_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn page_count(items: usize) -> usize {
        items.div_ceil(CARDS_PER_PAGE)
    }

    /// Indicator page for the current position, in `0..pages`.
    pub fn active_page(&self, pages: usize) -> usize {
        let Some(extent) = self.extent else {
            return 0;
        };
        let max = extent.max_scroll();
        if pages <= 1 || max <= 0.0 {
            return 0;
        }
        let ratio = (self.scroll_left / max).clamp(0.0, 1.0);
        ((ratio * (pages - 1) as f64).round() as usize).min(pages - 1)
    }

    fn scroll_to(&mut self, target: f64, now: Instant) {
        let Some(extent) = self.extent else {
            return;
        };
        let to = target.clamp(0.0, extent.max_scroll());
        self.animation = Some(SmoothScroll {
            from: self.scroll_left,
            to,
            started: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached(content: f64, viewport: f64) -> CarouselController {
        let mut carousel = CarouselController::new();
        carousel.attach(content, viewport);
        carousel
    }

    #[test]
    fn detached_operations_are_noops() {
        let now = Instant::now();
        let mut carousel = CarouselController::new();
        carousel.tick(now);
        carousel.jump(Direction::Right, now);
        carousel.pointer_enter();
        carousel.update(now + Duration::from_secs(5));
        assert_eq!(carousel.scroll_left(), 0.0);
        assert!(carousel.auto_scroll_enabled());
        assert!(!carousel.paused());
        assert!(!carousel.wants_frames());
        assert!(carousel.next_deadline().is_none());
    }

    #[test]
    fn tick_advances_by_fixed_step() {
        let now = Instant::now();
        let mut carousel = attached(500.0, 80.0);
        for _ in 0..8 {
            carousel.tick(now);
        }
        assert!((carousel.scroll_left() - 2.0).abs() < 1e-9);
        assert_eq!(carousel.column_offset(), 2);
        assert!(!carousel.reset_pending());
    }

    #[test]
    fn tick_never_moves_while_disabled() {
        let now = Instant::now();
        let mut carousel = attached(500.0, 80.0);
        carousel.tick(now);
        let before = carousel.scroll_left();
        carousel.set_auto_scroll(false);
        for _ in 0..1_000 {
            carousel.tick(now);
        }
        assert_eq!(carousel.scroll_left(), before);
        assert!(!carousel.wants_frames());
    }

    #[test]
    fn hover_pauses_without_touching_auto_scroll() {
        let now = Instant::now();
        let mut carousel = attached(500.0, 80.0);
        carousel.pointer_enter();
        for _ in 0..10 {
            carousel.tick(now);
        }
        assert_eq!(carousel.scroll_left(), 0.0);
        assert!(carousel.auto_scroll_enabled());

        carousel.pointer_leave();
        carousel.tick(now);
        assert_eq!(carousel.scroll_left(), AUTO_SCROLL_STEP);
    }

    #[test]
    fn reaching_end_schedules_delayed_smooth_reset() {
        let now = Instant::now();
        let mut carousel = attached(41.0, 40.0);

        carousel.tick(now);
        assert_eq!(carousel.scroll_left(), AUTO_SCROLL_STEP);
        assert!(carousel.reset_pending());
        assert_eq!(carousel.next_deadline(), Some(now + WRAP_DELAY));

        carousel.update(now + WRAP_DELAY - Duration::from_millis(1));
        assert!(carousel.reset_pending());
        assert_eq!(carousel.scroll_left(), AUTO_SCROLL_STEP);

        carousel.update(now + WRAP_DELAY);
        assert!(!carousel.reset_pending());
        assert!(carousel.is_animating());

        carousel.update(now + WRAP_DELAY + SMOOTH_SCROLL_DURATION);
        assert!(!carousel.is_animating());
        assert_eq!(carousel.scroll_left(), 0.0);
    }

    #[test]
    fn end_reset_is_scheduled_once() {
        let now = Instant::now();
        let mut carousel = attached(41.0, 40.0);
        carousel.tick(now);
        carousel.tick(now + Duration::from_millis(100));
        assert_eq!(carousel.next_deadline(), Some(now + WRAP_DELAY));
    }

    #[test]
    fn jump_disables_then_resumes_after_delay() {
        let now = Instant::now();
        let mut carousel = attached(500.0, 80.0);

        carousel.jump(Direction::Right, now);
        assert!(!carousel.auto_scroll_enabled());

        carousel.update(now + RESUME_DELAY - Duration::from_millis(1));
        assert!(!carousel.auto_scroll_enabled());

        carousel.update(now + RESUME_DELAY);
        assert!(carousel.auto_scroll_enabled());
        assert!(!carousel.resume_pending());
    }

    #[test]
    fn jump_moves_seventy_percent_of_viewport() {
        let now = Instant::now();
        let mut carousel = attached(500.0, 80.0);

        carousel.jump(Direction::Right, now);
        carousel.update(now + SMOOTH_SCROLL_DURATION);
        assert_eq!(carousel.scroll_left(), 56.0);

        let later = now + SMOOTH_SCROLL_DURATION;
        carousel.jump(Direction::Left, later);
        carousel.update(later + SMOOTH_SCROLL_DURATION);
        assert_eq!(carousel.scroll_left(), 0.0);
    }

    #[test]
    fn jump_is_clamped_to_content() {
        let now = Instant::now();
        let mut carousel = attached(100.0, 80.0);
        carousel.jump(Direction::Right, now);
        carousel.update(now + SMOOTH_SCROLL_DURATION);
        assert_eq!(carousel.scroll_left(), 20.0);

        carousel.jump(Direction::Left, now + SMOOTH_SCROLL_DURATION);
        carousel.update(now + SMOOTH_SCROLL_DURATION * 2);
        assert_eq!(carousel.scroll_left(), 0.0);
    }

    #[test]
    fn smooth_scroll_is_gradual() {
        let now = Instant::now();
        let mut carousel = attached(500.0, 100.0);
        carousel.jump(Direction::Right, now);
        carousel.update(now + SMOOTH_SCROLL_DURATION / 2);
        let mid = carousel.scroll_left();
        assert!(mid > 0.0 && mid < 70.0, "mid={mid}");
        assert!(carousel.wants_frames());
    }

    #[test]
    fn detach_cancels_pending_timers() {
        let now = Instant::now();
        let mut carousel = attached(41.0, 40.0);
        carousel.tick(now);
        carousel.jump(Direction::Left, now);
        assert!(carousel.next_deadline().is_some());

        carousel.detach();
        assert!(carousel.next_deadline().is_none());
        assert!(!carousel.is_animating());
        carousel.update(now + Duration::from_secs(10));
        assert!(!carousel.auto_scroll_enabled());

        carousel.attach(41.0, 40.0);
        assert!(carousel.auto_scroll_enabled());
        assert_eq!(carousel.scroll_left(), 0.0);
    }

    #[test]
    fn attach_clamps_position_when_content_shrinks() {
        let now = Instant::now();
        let mut carousel = attached(500.0, 100.0);
        carousel.jump(Direction::Right, now);
        carousel.update(now + SMOOTH_SCROLL_DURATION);
        assert_eq!(carousel.scroll_left(), 70.0);

        carousel.attach(150.0, 100.0);
        assert_eq!(carousel.scroll_left(), 50.0);
    }

    #[test]
    fn indicator_pages() {
        assert_eq!(CarouselController::page_count(0), 0);
        assert_eq!(CarouselController::page_count(4), 1);
        assert_eq!(CarouselController::page_count(20), 5);
        assert_eq!(CarouselController::page_count(21), 6);

        let now = Instant::now();
        let mut carousel = attached(200.0, 100.0);
        assert_eq!(carousel.active_page(5), 0);
        carousel.jump(Direction::Right, now);
        carousel.update(now + SMOOTH_SCROLL_DURATION);
        carousel.jump(Direction::Right, now + SMOOTH_SCROLL_DURATION);
        carousel.update(now + SMOOTH_SCROLL_DURATION * 2);
        assert_eq!(carousel.scroll_left(), 100.0);
        assert_eq!(carousel.active_page(5), 4);
    }
}
