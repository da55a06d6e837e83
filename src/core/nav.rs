use super::constants::HEADER_SCROLL_THRESHOLD_PX;

#[inline]
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD_PX
}

/// Open/closed state of the mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[inline]
    pub fn should_close_on_document_click(&self, inside_nav: bool, inside_toggle: bool) -> bool {
        self.open && !inside_nav && !inside_toggle
    }
}

/// Source to swap in for a lazily loaded image, if the markup provided one.
#[inline]
pub fn lazy_source(data_src: Option<&str>) -> Option<&str> {
    data_src.map(str::trim).filter(|s| !s.is_empty())
}
