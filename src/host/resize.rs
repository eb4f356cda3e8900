use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, ResizeObserver};

use crate::error::{GreetingError, GreetingResult};

/// Calls back whenever the observed element's box changes size.
///
/// Not debounced. The first notification arrives right after `observe`.
pub struct WrapperObserver {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl WrapperObserver {
    pub fn observe(target: &Element, mut on_resize: impl FnMut() + 'static) -> GreetingResult<Self> {
        let callback = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
            on_resize();
        }) as Box<dyn FnMut(js_sys::Array)>);

        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(|e| GreetingError::from_js("ResizeObserver", e))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for WrapperObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
