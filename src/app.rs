use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, HtmlElement, Window};

use crate::animation::AnimationSession;
use crate::data::TreeConfig;
use crate::error::{GreetingError, GreetingResult};
use crate::growth::TreeGrowth;
use crate::host::GreetingLabel;
use crate::layout::Viewport;
use crate::render::CanvasRenderer;

/// Engine state exposed to JavaScript: one tree on one canvas
#[wasm_bindgen]
pub struct GreetingTree {
    window: Window,
    session: AnimationSession,
    renderer: CanvasRenderer,
    greeting: GreetingLabel,
    /// Element whose box defines the viewport
    wrapper: Element,
}

#[wasm_bindgen]
impl GreetingTree {
    /// Create an engine with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        greeting: HtmlElement,
        wrapper: Element,
    ) -> Result<GreetingTree, JsValue> {
        Ok(Self::build(canvas, greeting, wrapper, TreeConfig::default())?)
    }

    /// Create an engine from a YAML configuration
    #[wasm_bindgen]
    pub fn with_config(
        canvas: HtmlCanvasElement,
        greeting: HtmlElement,
        wrapper: Element,
        yaml: &str,
    ) -> Result<GreetingTree, JsValue> {
        let config = TreeConfig::from_yaml(yaml)?;
        Ok(Self::build(canvas, greeting, wrapper, config)?)
    }

    /// Re-read the wrapper size, reproject the tree and restart the growth
    #[wasm_bindgen]
    pub fn handle_resize(&mut self) -> Result<(), JsValue> {
        Ok(self.apply_resize()?)
    }

    /// Replay the growth from the beginning
    #[wasm_bindgen]
    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.session.restart();
        Ok(self.greeting.hide()?)
    }

    /// Draw the frame for a `requestAnimationFrame` timestamp.
    /// Returns true while another frame is needed.
    #[wasm_bindgen]
    pub fn frame(&mut self, timestamp: f64) -> Result<bool, JsValue> {
        Ok(self.draw_frame(timestamp)?)
    }

    #[wasm_bindgen]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[wasm_bindgen]
    pub fn branch_count(&self) -> usize {
        self.session.prepared().len()
    }

    /// Milliseconds from the first frame until the last branch is grown
    #[wasm_bindgen]
    pub fn total_duration(&self) -> f64 {
        self.session.total_duration()
    }
}

impl GreetingTree {
    pub fn build(
        canvas: HtmlCanvasElement,
        greeting: HtmlElement,
        wrapper: Element,
        config: TreeConfig,
    ) -> GreetingResult<Self> {
        config.validate()?;
        let window = web_sys::window().ok_or_else(|| GreetingError::dom("no window"))?;

        let tree = TreeGrowth::new(config.clone()).grow();
        log::info!(
            "grew tree: {} branches, seed {}, {:.0}ms to full growth",
            tree.len(),
            config.seed,
            tree.total_duration()
        );

        let viewport = read_viewport(&window, &wrapper);
        let session = AnimationSession::new(tree, config, viewport);
        let renderer = CanvasRenderer::new(canvas)?;

        let mut engine = Self {
            window,
            session,
            renderer,
            greeting: GreetingLabel::new(greeting),
            wrapper,
        };
        engine.apply_resize()?;
        Ok(engine)
    }

    pub fn session(&self) -> &AnimationSession {
        &self.session
    }

    pub fn apply_resize(&mut self) -> GreetingResult<()> {
        let viewport = read_viewport(&self.window, &self.wrapper);
        self.renderer.resize(&viewport)?;
        self.session.viewport_changed(viewport);
        self.position_greeting()?;
        self.greeting.hide()
    }

    pub fn draw_frame(&mut self, timestamp: f64) -> GreetingResult<bool> {
        let frame = self.session.frame(timestamp);
        self.renderer.execute(&frame.commands)?;

        if frame.reveal_greeting {
            self.greeting.show()?;
            // Now rendered, so its measured height is reliable
            self.position_greeting()?;
        }

        Ok(!frame.finished)
    }

    fn position_greeting(&self) -> GreetingResult<()> {
        let height = self.greeting.metrics(&self.window).effective_height();
        let placement = self.session.greeting_placement(height);
        self.greeting.place(&placement)
    }
}

fn read_viewport(window: &Window, wrapper: &Element) -> Viewport {
    let rect = wrapper.get_bounding_client_rect();
    Viewport::new(rect.width(), rect.height(), window.device_pixel_ratio())
}
