use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;

use vitrine_core::Debouncer;

use crate::clock::now_ms;

pub(crate) type DebouncedAction<T> = Rc<dyn Fn(T)>;

pub(crate) struct Debounced<T: 'static> {
    state: Rc<RefCell<Debouncer<T>>>,
    timer: RefCell<Option<Timeout>>,
    action: DebouncedAction<T>,
}

impl<T: 'static> Debounced<T> {
    pub(crate) fn new(quiet_ms: u32, action: DebouncedAction<T>) -> Self {
        Self {
            state: Rc::new(RefCell::new(Debouncer::new(quiet_ms))),
            timer: RefCell::new(None),
            action,
        }
    }

    pub(crate) fn call(&self, value: T) {
        let (generation, quiet_ms) = {
            let mut state = self.state.borrow_mut();
            let generation = state.push(value, now_ms());
            (generation, state.quiet_ms())
        };
        let state = Rc::clone(&self.state);
        let action = Rc::clone(&self.action);
        let timeout = Timeout::new(quiet_ms.min(u32::MAX as u64) as u32, move || {
            let released = state.borrow_mut().fire(generation);
            if let Some(value) = released {
                action(value);
            }
        });
        // Replacing the handle clears the superseded timeout.
        *self.timer.borrow_mut() = Some(timeout);
    }

    pub(crate) fn cancel(&self) {
        self.timer.borrow_mut().take();
        self.state.borrow_mut().cancel();
    }
}
