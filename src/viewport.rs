use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, MouseEvent, Window};

use vitrine_core::style;
use vitrine_core::{FrameCoalescer, ParallaxOffset, PresentationConfig, ViewportState};

use crate::bindings::{set_style, PageBindings};
use crate::debounce::Debounced;

pub(crate) struct ViewportAdapter {
    window: Window,
    bindings: Rc<PageBindings>,
    config: Rc<PresentationConfig>,
    state: RefCell<ViewportState>,
    frames: RefCell<FrameCoalescer<ParallaxOffset>>,
    frame_handle: RefCell<Option<AnimationFrame>>,
    resize: Debounced<f64>,
    scroll: Debounced<f64>,
    pointer_listener: RefCell<Option<EventListener>>,
    listeners: RefCell<Vec<EventListener>>,
}

fn inner_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

impl ViewportAdapter {
    pub(crate) fn new(
        window: Window,
        bindings: Rc<PageBindings>,
        config: Rc<PresentationConfig>,
    ) -> Rc<Self> {
        let (width, _) = inner_size(&window);
        let state = ViewportState::new(&config, width);
        Rc::new_cyclic(|weak: &Weak<Self>| {
            let on_resize = weak.clone();
            let on_scroll = weak.clone();
            Self {
                resize: Debounced::new(
                    config.resize_quiet_ms,
                    Rc::new(move |width: f64| {
                        if let Some(adapter) = on_resize.upgrade() {
                            adapter.apply_resize(width);
                        }
                    }),
                ),
                scroll: Debounced::new(
                    config.scroll_quiet_ms,
                    Rc::new(move |offset: f64| {
                        if let Some(adapter) = on_scroll.upgrade() {
                            adapter.apply_scroll(offset);
                        }
                    }),
                ),
                window,
                bindings,
                config,
                state: RefCell::new(state),
                frames: RefCell::new(FrameCoalescer::new()),
                frame_handle: RefCell::new(None),
                pointer_listener: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
            }
        })
    }

    pub(crate) fn parallax_enabled(&self) -> bool {
        self.state.borrow().parallax_enabled()
    }

    pub(crate) fn install_listeners(self: &Rc<Self>, document: &Document) {
        let adapter = Rc::clone(self);
        let pointer = EventListener::new(document, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            adapter.queue_parallax(event.client_x() as f64, event.client_y() as f64);
        });
        *self.pointer_listener.borrow_mut() = Some(pointer);

        let mut listeners = Vec::new();
        let adapter = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "resize", move |_| {
            let (width, _) = inner_size(&adapter.window);
            adapter.resize.call(width);
        }));
        let adapter = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "scroll", move |_| {
            let offset = adapter.window.scroll_y().unwrap_or(0.0);
            adapter.scroll.call(offset);
        }));
        let adapter = Rc::clone(self);
        listeners.push(EventListener::new(document, "touchstart", move |_| {
            adapter.disable_parallax_for_touch();
        }));
        let adapter = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "beforeunload", move |_| {
            adapter.detach_pointer();
        }));
        *self.listeners.borrow_mut() = listeners;
    }

    fn queue_parallax(self: &Rc<Self>, client_x: f64, client_y: f64) {
        if !self.parallax_enabled() || self.bindings.menu_options().is_empty() {
            return;
        }
        let (width, height) = inner_size(&self.window);
        let offset = ParallaxOffset::from_pointer(
            client_x,
            client_y,
            width,
            height,
            self.config.parallax_intensity,
        );
        if !self.frames.borrow_mut().offer(offset) {
            return;
        }
        let adapter = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            adapter.frame_handle.borrow_mut().take();
            adapter.apply_parallax_frame();
        });
        *self.frame_handle.borrow_mut() = Some(handle);
    }

    fn apply_parallax_frame(&self) {
        let Some(offset) = self.frames.borrow_mut().take_frame() else {
            return;
        };
        if !self.parallax_enabled() {
            return;
        }
        for (index, card) in self.bindings.menu_options().iter().enumerate() {
            set_style(card, "transform", &offset.card_tilt(index).transform());
        }
    }

    pub(crate) fn apply_resize(&self, width: f64) {
        let update = self.state.borrow_mut().on_resize(width);
        let height = style::px(update.card_height_px);
        for card in self.bindings.menu_options() {
            set_style(card, "height", &height);
        }
    }

    pub(crate) fn apply_scroll(&self, offset: f64) {
        let translate = self.state.borrow_mut().on_scroll(offset);
        if let Some(overlay) = self.bindings.overlay() {
            set_style(overlay, "transform", &style::translate_y(translate));
        }
    }

    pub(crate) fn disable_parallax_for_touch(&self) {
        if !self.state.borrow_mut().on_touch() {
            return;
        }
        self.frames.borrow_mut().clear();
        self.frame_handle.borrow_mut().take();
        console::log!("touch detected, parallax disabled");
    }

    fn detach_pointer(&self) {
        self.pointer_listener.borrow_mut().take();
        self.frame_handle.borrow_mut().take();
        self.resize.cancel();
        self.scroll.cancel();
    }
}
