// Keeps only the latest value pushed within the quiet window.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    quiet_ms: u64,
    pending: Option<(T, u64)>,
    generation: u64,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_ms: u32) -> Self {
        Self {
            quiet_ms: quiet_ms as u64,
            pending: None,
            generation: 0,
        }
    }

    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    // Returns the generation a wake-up timer should present to `fire`.
    pub fn push(&mut self, value: T, now_ms: u64) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some((value, now_ms.saturating_add(self.quiet_ms)));
        self.generation
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let deadline = self.deadline_ms()?;
        if now_ms < deadline {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    // Timer-driven release: superseded wake-ups carry a stale generation and yield nothing.
    pub fn fire(&mut self, generation: u64) -> Option<T> {
        if generation != self.generation {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}
