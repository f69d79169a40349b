use gloo::console;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use vitrine_core::{PresentationConfig, REVEALED_CLASS, REVEAL_SELECTOR};

use crate::bindings::query_elements;

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub(crate) struct RevealObserver {
    _observer: IntersectionObserver,
    _callback: RevealCallback,
}

impl RevealObserver {
    pub(crate) fn install(document: &Document, config: &PresentationConfig) -> Option<Self> {
        let callback: RevealCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        options.set_root_margin(&config.reveal_root_margin);
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(err) => {
                    console::warn!("scroll reveal unavailable", err);
                    return None;
                }
            };

        let targets = query_elements(document, REVEAL_SELECTOR);
        for target in &targets {
            observer.observe(target);
        }
        console::log!("scroll reveal watching", targets.len() as u32);
        Some(Self {
            _observer: observer,
            _callback: callback,
        })
    }
}
