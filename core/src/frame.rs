// Holds the latest value until the next frame; only the first offer asks for a frame.
#[derive(Clone, Debug)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    scheduled: bool,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self {
            pending: None,
            scheduled: false,
        }
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, value: T) -> bool {
        self.pending = Some(value);
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn take_frame(&mut self) -> Option<T> {
        self.scheduled = false;
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.scheduled = false;
        self.pending = None;
    }
}
