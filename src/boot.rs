use std::cell::Cell;

use gloo::console;

thread_local! {
    static READY_SENT: Cell<bool> = Cell::new(false);
}

pub(crate) const PHASE_ATTRIBUTE: &str = "data-vitrine-phase";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BootPhase {
    Config,
    Bindings,
    Listeners,
    Ready,
}

impl BootPhase {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            BootPhase::Config => "config",
            BootPhase::Bindings => "bindings",
            BootPhase::Listeners => "listeners",
            BootPhase::Ready => "ready",
        }
    }
}

fn with_root<F: FnOnce(&web_sys::Element)>(action: F) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    action(&root);
}

pub(crate) fn set_phase(phase: BootPhase, detail: &str) {
    console::log!("vitrine:", phase.as_str(), detail);
    with_root(|root| {
        let _ = root.set_attribute(PHASE_ATTRIBUTE, phase.as_str());
    });
}

pub(crate) fn ready() {
    let already_sent = READY_SENT.with(|flag| flag.replace(true));
    if already_sent {
        return;
    }
    set_phase(BootPhase::Ready, "presenter ready for interaction");
}

pub(crate) fn is_ready() -> bool {
    READY_SENT.with(|flag| flag.get())
}
