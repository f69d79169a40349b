use crate::config::{PresentationConfig, StaggerProfile};
use crate::section::Section;
use crate::style;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceStep {
    pub index: usize,
    pub delay_s: f64,
    pub duration_s: f64,
    pub from_offset_px: f64,
}

impl EntranceStep {
    pub fn hidden_transform(&self) -> String {
        style::translate_y(self.from_offset_px)
    }

    pub fn settled_transform(&self) -> String {
        style::translate_y(0.0)
    }

    pub fn transition(&self) -> String {
        style::delayed_ease_transition(self.duration_s, self.delay_s)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntrancePlan {
    pub steps: Vec<EntranceStep>,
}

impl EntrancePlan {
    pub fn new(profile: StaggerProfile, count: usize) -> Self {
        let steps = (0..count)
            .map(|index| EntranceStep {
                index,
                delay_s: index as f64 * profile.step_s,
                duration_s: profile.duration_s,
                from_offset_px: profile.offset_px,
            })
            .collect();
        Self { steps }
    }

    pub fn for_section(section: Section, count: usize, config: &PresentationConfig) -> Self {
        match config.stagger_for(section) {
            Some(profile) => Self::new(profile, count),
            None => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn total_duration_s(&self) -> f64 {
        self.steps
            .last()
            .map(|step| step.delay_s + step.duration_s)
            .unwrap_or(0.0)
    }
}
