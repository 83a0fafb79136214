//! Navigation State
//!
//! Header styling and the mobile hamburger menu.

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    header_offset: f64,
    scroll_threshold: f64,
    is_scrolled: bool,
    mobile_menu_open: bool,
}

impl NavState {
    pub fn new(header_offset: f64, scroll_threshold: f64) -> Self {
        Self {
            header_offset,
            scroll_threshold,
            is_scrolled: false,
            mobile_menu_open: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.is_scrolled = scroll_y > self.scroll_threshold;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Close the menu and return where to scroll for a section at
    /// `offset_top`, leaving room for the fixed header
    pub fn scroll_target(&mut self, offset_top: f64) -> f64 {
        self.mobile_menu_open = false;
        offset_top - self.header_offset
    }
}
