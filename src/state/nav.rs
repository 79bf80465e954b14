use crate::models::DEFAULT_ACTIVE_LINK;

/// Scroll offset in pixels past which the navigation turns opaque
pub const SCROLL_THRESHOLD: f64 = 10.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Local state of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub active_link: &'static str,
    pub scrolled: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            menu_open: false,
            active_link: DEFAULT_ACTIVE_LINK,
            scrolled: false,
        }
    }
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Desktop link click
    pub fn activate(&mut self, id: &'static str) {
        self.active_link = id;
    }

    /// Link click inside the mobile menu, which also collapses it
    pub fn activate_from_menu(&mut self, id: &'static str) {
        self.active_link = id;
        self.menu_open = false;
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_link == id
    }

    /// Returns whether the scrolled flag changed
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}
