use crate::section::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPhase {
    Idle(Section),
    Transitioning {
        from: Section,
        to: Section,
        started_ms: u64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Section,
    pub to: Section,
    pub settle_at_ms: u64,
}

// Single owner of the current section; a request arriving mid-transition is dropped.
#[derive(Clone, Debug)]
pub struct Navigator {
    phase: NavPhase,
    settle_ms: u64,
}

impl Navigator {
    pub fn new(settle_ms: u32) -> Self {
        Self::starting_at(Section::Menu, settle_ms)
    }

    pub fn starting_at(section: Section, settle_ms: u32) -> Self {
        Self {
            phase: NavPhase::Idle(section),
            settle_ms: settle_ms as u64,
        }
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn current_section(&self) -> Section {
        match self.phase {
            NavPhase::Idle(section) => section,
            NavPhase::Transitioning { from, .. } => from,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, NavPhase::Transitioning { .. })
    }

    pub fn settle_ms(&self) -> u64 {
        self.settle_ms
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        match self.phase {
            NavPhase::Idle(_) => None,
            NavPhase::Transitioning { started_ms, .. } => {
                Some(started_ms.saturating_add(self.settle_ms))
            }
        }
    }

    pub fn request(&mut self, target: Section, now_ms: u64) -> Option<Transition> {
        let NavPhase::Idle(current) = self.phase else {
            return None;
        };
        if current == target {
            return None;
        }
        self.phase = NavPhase::Transitioning {
            from: current,
            to: target,
            started_ms: now_ms,
        };
        Some(Transition {
            from: current,
            to: target,
            settle_at_ms: now_ms.saturating_add(self.settle_ms),
        })
    }

    pub fn settle(&mut self) -> Option<Section> {
        let NavPhase::Transitioning { to, .. } = self.phase else {
            return None;
        };
        self.phase = NavPhase::Idle(to);
        Some(to)
    }

    pub fn settle_due(&mut self, now_ms: u64) -> Option<Section> {
        let deadline = self.deadline_ms()?;
        if now_ms < deadline {
            return None;
        }
        self.settle()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(crate::config::SETTLE_MS)
    }
}
