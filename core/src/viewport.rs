use crate::config::PresentationConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutUpdate {
    pub parallax_enabled: bool,
    pub card_height_px: f64,
}

#[derive(Clone, Debug)]
pub struct ViewportState {
    breakpoint_px: f64,
    card_height_wide_px: f64,
    card_height_narrow_px: f64,
    overlay_scroll_factor: f64,
    width: f64,
    parallax_enabled: bool,
    touch_locked: bool,
    last_scroll_offset: f64,
}

impl ViewportState {
    pub fn new(config: &PresentationConfig, width: f64) -> Self {
        Self {
            breakpoint_px: config.breakpoint_px,
            card_height_wide_px: config.card_height_wide_px,
            card_height_narrow_px: config.card_height_narrow_px,
            overlay_scroll_factor: config.overlay_scroll_factor,
            width,
            parallax_enabled: width > config.breakpoint_px,
            touch_locked: false,
            last_scroll_offset: 0.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_wide(&self) -> bool {
        self.width > self.breakpoint_px
    }

    pub fn parallax_enabled(&self) -> bool {
        self.parallax_enabled && !self.touch_locked
    }

    pub fn touch_locked(&self) -> bool {
        self.touch_locked
    }

    pub fn last_scroll_offset(&self) -> f64 {
        self.last_scroll_offset
    }

    pub fn card_height_px(&self) -> f64 {
        if self.is_wide() {
            self.card_height_wide_px
        } else {
            self.card_height_narrow_px
        }
    }

    pub fn on_resize(&mut self, width: f64) -> LayoutUpdate {
        self.width = width;
        self.parallax_enabled = self.is_wide() && !self.touch_locked;
        LayoutUpdate {
            parallax_enabled: self.parallax_enabled,
            card_height_px: self.card_height_px(),
        }
    }

    // Irreversible for the rest of the session.
    pub fn on_touch(&mut self) -> bool {
        let changed = !self.touch_locked;
        self.touch_locked = true;
        self.parallax_enabled = false;
        changed
    }

    pub fn on_scroll(&mut self, offset: f64) -> f64 {
        self.last_scroll_offset = offset;
        offset * self.overlay_scroll_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_follows_width() {
        let config = PresentationConfig::default();
        assert!(ViewportState::new(&config, 1280.0).parallax_enabled());
        assert!(!ViewportState::new(&config, 768.0).parallax_enabled());
    }

    #[test]
    fn second_touch_reports_no_change() {
        let config = PresentationConfig::default();
        let mut viewport = ViewportState::new(&config, 1280.0);
        assert!(viewport.on_touch());
        assert!(!viewport.on_touch());
    }
}
