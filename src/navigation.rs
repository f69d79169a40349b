use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use vitrine_core::style::{self, DISPLAY_BLOCK, DISPLAY_NONE, OPACITY_HIDDEN, OPACITY_VISIBLE};
use vitrine_core::{NavPhase, Navigator, PresentationConfig, Section, Transition};

use crate::animation::animate_entrance;
use crate::bindings::{set_style, PageBindings};
use crate::clock::now_ms;

pub(crate) struct NavigationDriver {
    navigator: RefCell<Navigator>,
    bindings: Rc<PageBindings>,
    config: Rc<PresentationConfig>,
}

impl NavigationDriver {
    pub(crate) fn new(bindings: Rc<PageBindings>, config: Rc<PresentationConfig>) -> Rc<Self> {
        Rc::new(Self {
            navigator: RefCell::new(Navigator::new(config.settle_ms)),
            bindings,
            config,
        })
    }

    pub(crate) fn phase(&self) -> NavPhase {
        self.navigator.borrow().phase()
    }

    pub(crate) fn current_section(&self) -> Section {
        self.navigator.borrow().current_section()
    }

    pub(crate) fn is_transitioning(&self) -> bool {
        self.navigator.borrow().is_transitioning()
    }

    pub(crate) fn request_navigate(self: &Rc<Self>, target: Section) {
        let transition = self.navigator.borrow_mut().request(target, now_ms());
        let Some(transition) = transition else {
            return;
        };
        console::log!("navigate", transition.from.as_str(), "->", transition.to.as_str());
        self.hide_section(transition.from);
        let driver = Rc::clone(self);
        spawn_local(async move {
            driver.run_transition(transition).await;
        });
    }

    async fn run_transition(&self, transition: Transition) {
        TimeoutFuture::new(self.config.settle_ms).await;
        if let Some(element) = self.bindings.section(transition.from) {
            set_style(element, "display", DISPLAY_NONE);
        }
        if let Some(element) = self.bindings.section(transition.to) {
            set_style(element, "display", DISPLAY_BLOCK);
        }
        self.navigator.borrow_mut().settle();

        TimeoutFuture::new(self.config.show_delay_ms).await;
        if let Some(element) = self.bindings.section(transition.to) {
            set_style(element, "opacity", OPACITY_VISIBLE);
            set_style(element, "transform", &style::translate_y(0.0));
            set_style(
                element,
                "transition",
                &style::ease_transition(self.config.animation_speed_s),
            );
            animate_entrance(&self.bindings, transition.to, &self.config);
        }
    }

    fn hide_section(&self, section: Section) {
        let Some(element) = self.bindings.section(section) else {
            return;
        };
        set_style(element, "opacity", OPACITY_HIDDEN);
        set_style(
            element,
            "transform",
            &style::translate_y(self.config.section_hide_offset_px),
        );
    }
}
