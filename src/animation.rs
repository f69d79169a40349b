use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use vitrine_core::style::{OPACITY_HIDDEN, OPACITY_VISIBLE};
use vitrine_core::{EntrancePlan, PresentationConfig, Section};

use crate::bindings::{set_style, PageBindings};

pub(crate) fn animate_entrance(bindings: &PageBindings, section: Section, config: &PresentationConfig) {
    let elements = bindings.content(section).to_vec();
    let plan = EntrancePlan::for_section(section, elements.len(), config);
    if plan.is_empty() {
        return;
    }
    for (element, step) in elements.iter().zip(&plan.steps) {
        set_style(element, "opacity", OPACITY_HIDDEN);
        set_style(element, "transform", &step.hidden_transform());
    }
    let delay_ms = config.show_delay_ms;
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        for (element, step) in elements.iter().zip(&plan.steps) {
            set_style(element, "transition", &step.transition());
            set_style(element, "opacity", OPACITY_VISIBLE);
            set_style(element, "transform", &step.settled_transform());
        }
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::bindings::style_value;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    #[wasm_bindgen_test(async)]
    async fn letter_blocks_fade_in_with_stagger() {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document
            .create_element("div")
            .expect("create fixture")
            .dyn_into::<HtmlElement>()
            .expect("fixture is html");
        root.set_inner_html(
            r#"<p class="letter-block"></p><p class="letter-block"></p><p class="letter-block"></p>"#,
        );
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("attach fixture");

        let config = PresentationConfig::default();
        let bindings = PageBindings::collect(&document);
        animate_entrance(&bindings, Section::Letter, &config);

        let blocks = bindings.content(Section::Letter);
        assert_eq!(blocks.len(), 3);
        assert_eq!(style_value(&blocks[0], "opacity"), "0");
        assert_eq!(style_value(&blocks[1], "transform"), "translateY(20px)");

        TimeoutFuture::new(config.show_delay_ms + 20).await;

        assert_eq!(style_value(&blocks[0], "opacity"), "1");
        assert!(style_value(&blocks[0], "transition").contains("0.5s"));
        assert!(style_value(&blocks[2], "transition").contains("0.3s"));
        root.remove();
    }
}
