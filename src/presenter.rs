use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, HtmlImageElement, Window};

use vitrine_core::{NavPhase, Section};

use crate::app_config::load_presentation_config;
use crate::bindings::PageBindings;
use crate::boot::{self, BootPhase};
use crate::navigation::NavigationDriver;
use crate::preload::{is_touch_device, preload_gallery, tune_for_touch};
use crate::reveal::RevealObserver;
use crate::viewport::ViewportAdapter;

thread_local! {
    static PRESENTER: RefCell<Option<Rc<Presenter>>> = RefCell::new(None);
}

pub(crate) struct Presenter {
    navigation: Rc<NavigationDriver>,
    viewport: Rc<ViewportAdapter>,
    _reveal: Option<RevealObserver>,
    _preloaded: Vec<HtmlImageElement>,
    _click_listeners: Vec<EventListener>,
}

impl Presenter {
    fn assemble(window: Window, document: &Document) -> Self {
        let config = Rc::new(load_presentation_config(document));
        boot::set_phase(BootPhase::Config, "presentation config loaded");

        let bindings = Rc::new(PageBindings::collect(document));
        boot::set_phase(
            BootPhase::Bindings,
            &format!("{} navigation triggers bound", bindings.triggers().len()),
        );

        let navigation = NavigationDriver::new(Rc::clone(&bindings), Rc::clone(&config));
        let click_listeners = bindings
            .triggers()
            .iter()
            .map(|(trigger, element)| {
                let target = trigger.target();
                let navigation = Rc::clone(&navigation);
                EventListener::new(element, "click", move |_| {
                    navigation.request_navigate(target);
                })
            })
            .collect();

        let touch_device = is_touch_device(&window);
        let viewport = ViewportAdapter::new(window, Rc::clone(&bindings), Rc::clone(&config));
        viewport.install_listeners(document);
        let reveal = RevealObserver::install(document, &config);
        boot::set_phase(BootPhase::Listeners, "input listeners installed");

        let preloaded = preload_gallery();
        if touch_device {
            tune_for_touch(document, &config);
        }

        Self {
            navigation,
            viewport,
            _reveal: reveal,
            _preloaded: preloaded,
            _click_listeners: click_listeners,
        }
    }
}

pub(crate) fn init() {
    if PRESENTER.with(|slot| slot.borrow().is_some()) {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let presenter = Rc::new(Presenter::assemble(window, &document));
    PRESENTER.with(|slot| {
        *slot.borrow_mut() = Some(presenter);
    });
    boot::ready();
}

fn with_presenter<R>(action: impl FnOnce(&Rc<Presenter>) -> R) -> Option<R> {
    let presenter = PRESENTER.with(|slot| slot.borrow().clone())?;
    Some(action(&presenter))
}

pub(crate) fn navigate(section: Section) {
    with_presenter(|presenter| presenter.navigation.request_navigate(section));
}

pub(crate) fn current_section() -> Option<Section> {
    with_presenter(|presenter| presenter.navigation.current_section())
}

pub(crate) fn navigation_phase() -> Option<NavPhase> {
    with_presenter(|presenter| presenter.navigation.phase())
}

pub(crate) fn is_transitioning() -> bool {
    with_presenter(|presenter| presenter.navigation.is_transitioning()).unwrap_or(false)
}

pub(crate) fn parallax_enabled() -> bool {
    with_presenter(|presenter| presenter.viewport.parallax_enabled()).unwrap_or(false)
}
