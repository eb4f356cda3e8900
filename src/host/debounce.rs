use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::{GreetingError, GreetingResult};

/// Quiet period before a burst of resize events is acted on
pub const RESIZE_DEBOUNCE_MS: i32 = 120;

/// Trailing-edge timer: only the last `trigger` in a burst runs the callback
pub struct Debouncer {
    window: Window,
    wait_ms: i32,
    pending: Cell<Option<i32>>,
    callback: Closure<dyn FnMut()>,
}

impl Debouncer {
    pub fn new(window: Window, wait_ms: i32, callback: impl FnMut() + 'static) -> Self {
        Self {
            window,
            wait_ms,
            pending: Cell::new(None),
            callback: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
        }
    }

    pub fn trigger(&self) -> GreetingResult<()> {
        self.cancel();
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref::<js_sys::Function>(),
                self.wait_ms,
            )
            .map_err(|e| GreetingError::from_js("set_timeout", e))?;
        self.pending.set(Some(handle));
        Ok(())
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
