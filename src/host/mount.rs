use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use crate::app::GreetingTree;
use crate::error::{GreetingError, GreetingResult};

use super::debounce::{Debouncer, RESIZE_DEBOUNCE_MS};
use super::frame_loop::FrameLoop;
use super::resize::WrapperObserver;

/// A running engine plus the two resize sources that replay it.
///
/// The wrapper's `ResizeObserver` restarts immediately; window `resize` events
/// go through a 120 ms debounce first. Dropping this detaches both and stops
/// the frame loop.
pub struct Mounted {
    window: Window,
    frame_loop: Rc<FrameLoop>,
    _observer: WrapperObserver,
    on_resize: Closure<dyn FnMut()>,
}

impl Mounted {
    pub fn attach(window: Window, wrapper: &Element, engine: GreetingTree) -> GreetingResult<Self> {
        let frame_loop = FrameLoop::start(window.clone(), engine)?;

        let observed = Rc::clone(&frame_loop);
        let observer = WrapperObserver::observe(wrapper, move || {
            if let Err(e) = observed.resize() {
                log::error!("wrapper resize failed: {}", e);
            }
        })?;

        let debounced = Rc::clone(&frame_loop);
        let debouncer = Debouncer::new(window.clone(), RESIZE_DEBOUNCE_MS, move || {
            if let Err(e) = debounced.resize() {
                log::error!("resize failed: {}", e);
            }
        });
        let on_resize = Closure::wrap(Box::new(move || {
            if let Err(e) = debouncer.trigger() {
                log::error!("failed to debounce resize: {}", e);
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(|e| GreetingError::from_js("add_event_listener", e))?;

        Ok(Self {
            window,
            frame_loop,
            _observer: observer,
            on_resize,
        })
    }

    pub fn frame_loop(&self) -> &Rc<FrameLoop> {
        &self.frame_loop
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref::<js_sys::Function>())
        {
            log::warn!("remove_event_listener failed: {:?}", e);
        }
        self.frame_loop.stop();
    }
}
