use gloo::console;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlImageElement, Window};

use vitrine_core::preload::{preload_images, TOUCH_DEVICE_CLASS, TOUCH_TUNED_SELECTOR};
use vitrine_core::style;
use vitrine_core::PresentationConfig;

use crate::bindings::{query_html, set_style};

pub(crate) fn preload_gallery() -> Vec<HtmlImageElement> {
    let mut images = Vec::new();
    for src in preload_images() {
        let Ok(image) = HtmlImageElement::new() else {
            continue;
        };
        image.set_src(src);
        images.push(image);
    }
    images
}

pub(crate) fn is_touch_device(window: &Window) -> bool {
    let has_touch_handler =
        Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_touch_handler || window.navigator().max_touch_points() > 0
}

pub(crate) fn tune_for_touch(document: &Document, config: &PresentationConfig) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1(TOUCH_DEVICE_CLASS);
    }
    let transition = style::transform_first_transition(config.touch_transition_s);
    let elements = query_html(document, TOUCH_TUNED_SELECTOR);
    for element in &elements {
        set_style(element, "transition", &transition);
    }
    console::log!("touch device, lighter transitions on", elements.len() as u32);
}
