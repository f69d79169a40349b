use serde::Deserialize;

use crate::section::Section;

pub const ANIMATION_SPEED_S: f64 = 0.4;
pub const PARALLAX_INTENSITY: f64 = 0.05;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const BREAKPOINT_PX: f64 = 768.0;
pub const CARD_HEIGHT_WIDE_PX: f64 = 380.0;
pub const CARD_HEIGHT_NARROW_PX: f64 = 320.0;
pub const SETTLE_MS: u32 = 300;
pub const SHOW_DELAY_MS: u32 = 50;
pub const RESIZE_QUIET_MS: u32 = 250;
pub const SCROLL_QUIET_MS: u32 = 16;
pub const OVERLAY_SCROLL_FACTOR: f64 = 0.3;
pub const SECTION_HIDE_OFFSET_PX: f64 = 20.0;
pub const TOUCH_TRANSITION_S: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct StaggerProfile {
    pub duration_s: f64,
    pub step_s: f64,
    pub offset_px: f64,
}

impl StaggerProfile {
    pub const CV: StaggerProfile = StaggerProfile {
        duration_s: 0.6,
        step_s: 0.1,
        offset_px: 30.0,
    };

    pub const LETTER: StaggerProfile = StaggerProfile {
        duration_s: 0.5,
        step_s: 0.15,
        offset_px: 20.0,
    };
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub animation_speed_s: f64,
    pub parallax_intensity: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub breakpoint_px: f64,
    pub card_height_wide_px: f64,
    pub card_height_narrow_px: f64,
    pub settle_ms: u32,
    pub show_delay_ms: u32,
    pub resize_quiet_ms: u32,
    pub scroll_quiet_ms: u32,
    pub overlay_scroll_factor: f64,
    pub section_hide_offset_px: f64,
    pub touch_transition_s: f64,
    pub cv: StaggerProfile,
    pub letter: StaggerProfile,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            animation_speed_s: ANIMATION_SPEED_S,
            parallax_intensity: PARALLAX_INTENSITY,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_string(),
            breakpoint_px: BREAKPOINT_PX,
            card_height_wide_px: CARD_HEIGHT_WIDE_PX,
            card_height_narrow_px: CARD_HEIGHT_NARROW_PX,
            settle_ms: SETTLE_MS,
            show_delay_ms: SHOW_DELAY_MS,
            resize_quiet_ms: RESIZE_QUIET_MS,
            scroll_quiet_ms: SCROLL_QUIET_MS,
            overlay_scroll_factor: OVERLAY_SCROLL_FACTOR,
            section_hide_offset_px: SECTION_HIDE_OFFSET_PX,
            touch_transition_s: TOUCH_TRANSITION_S,
            cv: StaggerProfile::CV,
            letter: StaggerProfile::LETTER,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config json invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be a finite, non-negative number (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("breakpoint_px must be positive (got {0})")]
    Breakpoint(f64),
    #[error("reveal_threshold must be within 0..=1 (got {0})")]
    Threshold(f64),
}

impl PresentationConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PresentationConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("animation_speed_s", self.animation_speed_s),
            ("parallax_intensity", self.parallax_intensity),
            ("card_height_wide_px", self.card_height_wide_px),
            ("card_height_narrow_px", self.card_height_narrow_px),
            ("overlay_scroll_factor", self.overlay_scroll_factor),
            ("section_hide_offset_px", self.section_hide_offset_px),
            ("touch_transition_s", self.touch_transition_s),
            ("cv.duration_s", self.cv.duration_s),
            ("cv.step_s", self.cv.step_s),
            ("letter.duration_s", self.letter.duration_s),
            ("letter.step_s", self.letter.step_s),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if !self.breakpoint_px.is_finite() || self.breakpoint_px <= 0.0 {
            return Err(ConfigError::Breakpoint(self.breakpoint_px));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Threshold(self.reveal_threshold));
        }
        Ok(())
    }

    pub fn stagger_for(&self, section: Section) -> Option<StaggerProfile> {
        match section {
            Section::Menu => None,
            Section::Cv => Some(self.cv),
            Section::Letter => Some(self.letter),
        }
    }
}
