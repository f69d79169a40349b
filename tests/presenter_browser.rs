#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use vitrine::{NavPhase, Section};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<div class="section-overlay"></div>
<div id="main-menu">
  <div class="menu-option" id="cv-option"></div>
  <div class="menu-option" id="letter-option"></div>
  <button id="cv-btn"></button>
  <button id="letter-btn"></button>
</div>
<div id="cv-section" style="display: none">
  <button id="back-from-cv"></button>
  <div class="cv-card"></div>
  <div class="cv-card"></div>
  <div class="timeline-item"></div>
</div>
<div id="letter-section" style="display: none">
  <button id="back-from-letter"></button>
  <p class="letter-block"></p>
</div>
"#;

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document available")
}

fn html_by_id(document: &Document, id: &str) -> HtmlElement {
    document
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("{id} missing"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

fn style(element: &HtmlElement, name: &str) -> String {
    element.style().get_property_value(name).unwrap_or_default()
}

// Mounts the page once, then waits until the presenter is idle on the menu.
async fn presenter_at_menu() -> Document {
    let document = document();
    if document.get_element_by_id("main-menu").is_none() {
        let fixture = document
            .create_element("div")
            .expect("create fixture")
            .dyn_into::<HtmlElement>()
            .expect("fixture is html");
        fixture.set_inner_html(PAGE);
        document
            .body()
            .expect("body available")
            .append_child(&fixture)
            .expect("attach fixture");
    }
    vitrine::start();
    assert!(vitrine::is_ready());

    while vitrine::is_transitioning() {
        TimeoutFuture::new(50).await;
    }
    if vitrine::current_section() != Some(Section::Menu) {
        vitrine::navigate(Section::Menu);
        TimeoutFuture::new(320).await;
    }
    // Lets a pending show step finish.
    TimeoutFuture::new(100).await;
    assert_eq!(vitrine::navigation_phase(), Some(NavPhase::Idle(Section::Menu)));
    document
}

#[wasm_bindgen_test(async)]
async fn cv_button_settles_after_settle_delay() {
    let document = presenter_at_menu().await;

    html_by_id(&document, "cv-btn").click();
    assert!(matches!(
        vitrine::navigation_phase(),
        Some(NavPhase::Transitioning {
            from: Section::Menu,
            to: Section::Cv,
            ..
        })
    ));
    assert!(vitrine::is_transitioning());
    let menu = html_by_id(&document, "main-menu");
    assert_eq!(style(&menu, "opacity"), "0");

    TimeoutFuture::new(320).await;

    assert_eq!(vitrine::navigation_phase(), Some(NavPhase::Idle(Section::Cv)));
    assert!(!vitrine::is_transitioning());
    assert_eq!(style(&menu, "display"), "none");
    let cv = html_by_id(&document, "cv-section");
    assert_eq!(style(&cv, "display"), "block");
    let letter = html_by_id(&document, "letter-section");
    assert_eq!(style(&letter, "display"), "none");

    TimeoutFuture::new(80).await;
    assert_eq!(style(&cv, "opacity"), "1");
}

#[wasm_bindgen_test(async)]
async fn click_during_transition_is_dropped() {
    let document = presenter_at_menu().await;

    html_by_id(&document, "cv-btn").click();
    html_by_id(&document, "letter-btn").click();
    assert!(matches!(
        vitrine::navigation_phase(),
        Some(NavPhase::Transitioning {
            to: Section::Cv,
            ..
        })
    ));

    TimeoutFuture::new(400).await;
    assert_eq!(vitrine::current_section(), Some(Section::Cv));
    let letter = html_by_id(&document, "letter-section");
    assert_eq!(style(&letter, "display"), "none");
}

#[wasm_bindgen_test(async)]
async fn cv_entrance_staggers_cards() {
    let document = presenter_at_menu().await;

    vitrine::navigate(Section::Cv);
    TimeoutFuture::new(500).await;

    let cards = document.query_selector_all(".cv-card").expect("query cards");
    assert_eq!(cards.length(), 2);
    let second = cards
        .item(1)
        .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        .expect("second card");
    assert_eq!(style(&second, "opacity"), "1");
    assert!(style(&second, "transition").contains("0.1s"));
}

#[wasm_bindgen_test(async)]
async fn back_is_accepted_once_settled() {
    let document = presenter_at_menu().await;

    html_by_id(&document, "cv-btn").click();
    TimeoutFuture::new(320).await;
    html_by_id(&document, "back-from-cv").click();
    assert!(matches!(
        vitrine::navigation_phase(),
        Some(NavPhase::Transitioning {
            from: Section::Cv,
            to: Section::Menu,
            ..
        })
    ));

    TimeoutFuture::new(400).await;
    assert_eq!(vitrine::navigation_phase(), Some(NavPhase::Idle(Section::Menu)));
}

#[wasm_bindgen_test(async)]
async fn touch_lock_survives_resize() {
    let document = presenter_at_menu().await;

    let _ = document.dispatch_event(&Event::new("touchstart").expect("touch event"));
    assert!(!vitrine::parallax_enabled());

    let window = web_sys::window().expect("window");
    let _ = window.dispatch_event(&Event::new("resize").expect("resize event"));
    TimeoutFuture::new(300).await;
    assert!(!vitrine::parallax_enabled());
}
