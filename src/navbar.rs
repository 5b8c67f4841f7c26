//! Hide-on-scroll navigation bar.
//!
//! The bar hides when the page scrolls down past [`HIDE_THRESHOLD`] and only
//! comes back once the page is near the top again, or when the menu is
//! opened. Scrolling up while below the threshold leaves it hidden.

/// Scroll offset (in page pixels) at or above which the bar may hide.
pub const HIDE_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavbarController {
    current: f64,
    last: f64,
    hidden: bool,
    menu_open: bool,
    threshold: f64,
}

impl Default for NavbarController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavbarController {
    pub fn new() -> Self {
        Self::with_threshold(HIDE_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            current: 0.0,
            last: 0.0,
            hidden: false,
            menu_open: false,
            threshold,
        }
    }

    /// Feeds one scroll sample.
    pub fn on_scroll(&mut self, position: f64) {
        self.current = position;
        if position <= self.threshold {
            self.hidden = false;
            self.menu_open = false;
        } else if position > self.last && !self.menu_open {
            self.hidden = true;
        }
        self.last = position;
    }

    pub fn visibility(&self) -> Visibility {
        if self.hidden && !self.menu_open {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility() == Visibility::Visible
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn last(&self) -> f64 {
        self.last
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
        if open {
            self.hidden = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.set_menu_open(!self.menu_open);
    }

    /// A nav link was activated.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// The floating re-entry button is only offered while the bar is hidden
    /// and the menu is closed.
    pub fn shows_floating_button(&self) -> bool {
        self.hidden && !self.menu_open
    }

    /// Returns false when the button is not on screen.
    pub fn activate_floating_button(&mut self) -> bool {
        if !self.shows_floating_button() {
            return false;
        }
        self.set_menu_open(true);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled_to(positions: &[f64]) -> NavbarController {
        let mut nav = NavbarController::new();
        for &p in positions {
            nav.on_scroll(p);
        }
        nav
    }

    #[test]
    fn near_top_is_always_visible_and_closes_menu() {
        for prior in [
            scrolled_to(&[]),
            scrolled_to(&[100.0, 300.0]),
            {
                let mut nav = scrolled_to(&[100.0, 300.0]);
                nav.set_menu_open(true);
                nav
            },
        ] {
            for p in [0.0, 12.5, 79.9, 80.0] {
                let mut nav = prior.clone();
                nav.on_scroll(p);
                assert_eq!(nav.visibility(), Visibility::Visible, "p={p}");
                assert!(!nav.menu_open(), "p={p}");
                assert!(!nav.is_hidden(), "p={p}");
            }
        }
    }

    #[test]
    fn scrolling_down_past_threshold_hides_until_back_near_top() {
        let mut nav = scrolled_to(&[40.0, 81.0, 120.0, 500.0]);
        assert_eq!(nav.visibility(), Visibility::Hidden);

        // Scrolling back up while still below the threshold keeps it hidden.
        for p in [400.0, 250.0, 81.0] {
            nav.on_scroll(p);
            assert_eq!(nav.visibility(), Visibility::Hidden, "p={p}");
        }

        nav.on_scroll(80.0);
        assert_eq!(nav.visibility(), Visibility::Visible);
    }

    #[test]
    fn last_tracks_previous_sample() {
        let mut nav = NavbarController::new();
        nav.on_scroll(10.0);
        nav.on_scroll(90.0);
        assert_eq!(nav.current(), 90.0);
        assert_eq!(nav.last(), 90.0);
        nav.on_scroll(95.0);
        assert!(nav.is_hidden());
    }

    #[test]
    fn opening_menu_forces_visible() {
        let mut nav = scrolled_to(&[200.0, 400.0]);
        assert_eq!(nav.visibility(), Visibility::Hidden);

        nav.set_menu_open(true);
        assert_eq!(nav.visibility(), Visibility::Visible);
        assert!(!nav.is_hidden());

        // Keeps scrolling down with the menu open.
        nav.on_scroll(600.0);
        assert_eq!(nav.visibility(), Visibility::Visible);
        assert!(!nav.is_hidden());
    }

    #[test]
    fn floating_button_only_when_hidden_and_closed() {
        let mut nav = NavbarController::new();
        assert!(!nav.shows_floating_button());
        assert!(!nav.activate_floating_button());

        nav.on_scroll(300.0);
        assert!(nav.shows_floating_button());
        assert!(nav.activate_floating_button());
        assert!(nav.menu_open());
        assert!(!nav.shows_floating_button());
        assert!(nav.is_visible());
    }

    #[test]
    fn link_click_closes_menu_and_toggle_flips() {
        let mut nav = NavbarController::new();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.close_menu();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }
}
