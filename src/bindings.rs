use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use vitrine_core::{Section, MENU_OPTION_SELECTOR, OVERLAY_SELECTOR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Trigger {
    CvButton,
    CvOption,
    LetterButton,
    LetterOption,
    BackFromCv,
    BackFromLetter,
}

impl Trigger {
    pub(crate) const ALL: [Trigger; 6] = [
        Trigger::CvButton,
        Trigger::CvOption,
        Trigger::LetterButton,
        Trigger::LetterOption,
        Trigger::BackFromCv,
        Trigger::BackFromLetter,
    ];

    pub(crate) fn element_id(self) -> &'static str {
        match self {
            Trigger::CvButton => "cv-btn",
            Trigger::CvOption => "cv-option",
            Trigger::LetterButton => "letter-btn",
            Trigger::LetterOption => "letter-option",
            Trigger::BackFromCv => "back-from-cv",
            Trigger::BackFromLetter => "back-from-letter",
        }
    }

    pub(crate) fn target(self) -> Section {
        match self {
            Trigger::CvButton | Trigger::CvOption => Section::Cv,
            Trigger::LetterButton | Trigger::LetterOption => Section::Letter,
            Trigger::BackFromCv | Trigger::BackFromLetter => Section::Menu,
        }
    }
}

// Looked up once at startup; anything absent stays `None`/empty and its effects are skipped.
pub(crate) struct PageBindings {
    main_menu: Option<HtmlElement>,
    cv_section: Option<HtmlElement>,
    letter_section: Option<HtmlElement>,
    triggers: Vec<(Trigger, HtmlElement)>,
    menu_options: Vec<HtmlElement>,
    cv_content: Vec<HtmlElement>,
    letter_content: Vec<HtmlElement>,
    overlay: Option<HtmlElement>,
}

impl PageBindings {
    pub(crate) fn collect(document: &Document) -> Self {
        let triggers = Trigger::ALL
            .iter()
            .filter_map(|trigger| {
                element_by_id(document, trigger.element_id()).map(|element| (*trigger, element))
            })
            .collect();
        Self {
            main_menu: element_by_id(document, Section::Menu.element_id()),
            cv_section: element_by_id(document, Section::Cv.element_id()),
            letter_section: element_by_id(document, Section::Letter.element_id()),
            triggers,
            menu_options: query_html(document, MENU_OPTION_SELECTOR),
            cv_content: query_groups(document, Section::Cv.content_selectors()),
            letter_content: query_groups(document, Section::Letter.content_selectors()),
            overlay: query_html(document, OVERLAY_SELECTOR).into_iter().next(),
        }
    }

    pub(crate) fn section(&self, section: Section) -> Option<&HtmlElement> {
        match section {
            Section::Menu => self.main_menu.as_ref(),
            Section::Cv => self.cv_section.as_ref(),
            Section::Letter => self.letter_section.as_ref(),
        }
    }

    pub(crate) fn content(&self, section: Section) -> &[HtmlElement] {
        match section {
            Section::Menu => &[],
            Section::Cv => &self.cv_content,
            Section::Letter => &self.letter_content,
        }
    }

    pub(crate) fn triggers(&self) -> &[(Trigger, HtmlElement)] {
        &self.triggers
    }

    pub(crate) fn menu_options(&self) -> &[HtmlElement] {
        &self.menu_options
    }

    pub(crate) fn overlay(&self) -> Option<&HtmlElement> {
        self.overlay.as_ref()
    }
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn query_elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn query_html(document: &Document, selector: &str) -> Vec<HtmlElement> {
    query_elements(document, selector)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn query_groups(document: &Document, selectors: &[&str]) -> Vec<HtmlElement> {
    selectors
        .iter()
        .flat_map(|selector| query_html(document, selector))
        .collect()
}

pub(crate) fn set_style(element: &HtmlElement, name: &str, value: &str) {
    let _ = element.style().set_property(name, value);
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) fn style_value(element: &HtmlElement, name: &str) -> String {
    element.style().get_property_value(name).unwrap_or_default()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn fixture(html: &str) -> (Document, HtmlElement) {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document
            .create_element("div")
            .expect("create fixture")
            .dyn_into::<HtmlElement>()
            .expect("fixture is html");
        root.set_inner_html(html);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("attach fixture");
        (document, root)
    }

    #[wasm_bindgen_test]
    fn missing_elements_bind_as_empty() {
        let (document, root) = fixture("<p>nothing here</p>");
        let bindings = PageBindings::collect(&document);
        assert!(bindings.section(Section::Letter).is_none());
        assert!(bindings.content(Section::Letter).is_empty());
        assert!(bindings.overlay().is_none());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn cv_content_keeps_group_order() {
        let (document, root) = fixture(
            r#"<div class="gallery-item" id="g"></div>
               <div class="timeline-item" id="t"></div>
               <div class="cv-card" id="c1"></div>
               <div class="cv-card" id="c2"></div>"#,
        );
        let bindings = PageBindings::collect(&document);
        let ids: Vec<String> = bindings
            .content(Section::Cv)
            .iter()
            .map(|element| element.id())
            .collect();
        assert_eq!(ids, vec!["c1", "c2", "t", "g"]);
        root.remove();
    }
}
