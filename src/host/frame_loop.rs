use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::app::GreetingTree;
use crate::error::{GreetingError, GreetingResult};

/// Chains `requestAnimationFrame` callbacks into an engine until it is done.
///
/// At most one frame is in flight. Restarting cancels it before scheduling
/// a fresh one, so two runs never interleave.
pub struct FrameLoop {
    window: Window,
    engine: RefCell<GreetingTree>,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    /// Take ownership of the engine and schedule its first frame
    pub fn start(window: Window, engine: GreetingTree) -> GreetingResult<Rc<Self>> {
        let frame_loop = Rc::new(Self {
            window,
            engine: RefCell::new(engine),
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak: Weak<Self> = Rc::downgrade(&frame_loop);
        *frame_loop.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(frame_loop) = weak.upgrade() {
                frame_loop.tick(timestamp);
            }
        }) as Box<dyn FnMut(f64)>));

        frame_loop.request()?;
        Ok(frame_loop)
    }

    /// Resize the engine and replay the animation
    pub fn resize(&self) -> GreetingResult<()> {
        self.cancel();
        self.engine.borrow_mut().apply_resize()?;
        log::debug!("animation restarted after resize");
        self.request()
    }

    /// Cancel the in-flight frame, if any. `resize` schedules again.
    pub fn stop(&self) {
        self.cancel();
    }

    /// Borrow the engine between frames
    pub fn engine(&self) -> Ref<'_, GreetingTree> {
        self.engine.borrow()
    }

    fn tick(&self, timestamp: f64) {
        self.handle.set(None);
        let more = self.engine.borrow_mut().draw_frame(timestamp);
        match more {
            Ok(true) => {
                if let Err(e) = self.request() {
                    log::error!("failed to schedule frame: {}", e);
                }
            }
            Ok(false) => {}
            Err(e) => log::error!("frame failed: {}", e),
        }
    }

    fn request(&self) -> GreetingResult<()> {
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| GreetingError::dom("frame callback missing"))?;
        let handle = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(|e| GreetingError::from_js("request_animation_frame", e))?;
        self.handle.set(Some(handle));
        Ok(())
    }

    fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.window.cancel_animation_frame(handle) {
                log::warn!("cancel_animation_frame failed: {:?}", e);
            }
        }
    }
}
