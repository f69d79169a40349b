mod animation;
mod app_config;
mod bindings;
mod boot;
mod clock;
mod debounce;
mod navigation;
mod preload;
mod presenter;
mod reveal;
mod viewport;

use gloo::events::EventListener;

pub use vitrine_core::{NavPhase, PresentationConfig, Section};

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| presenter::init()).forget();
    } else {
        presenter::init();
    }
}

pub fn navigate(section: Section) {
    presenter::navigate(section);
}

pub fn current_section() -> Option<Section> {
    presenter::current_section()
}

pub fn navigation_phase() -> Option<NavPhase> {
    presenter::navigation_phase()
}

pub fn is_transitioning() -> bool {
    presenter::is_transitioning()
}

pub fn parallax_enabled() -> bool {
    presenter::parallax_enabled()
}

pub fn is_ready() -> bool {
    boot::is_ready()
}
