use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

pub mod animation;
pub mod app;
pub mod data;
pub mod error;
pub mod growth;
pub mod host;
pub mod layout;
pub mod math;
pub mod render;

pub use app::GreetingTree;
pub use data::TreeConfig;
pub use error::{GreetingError, GreetingResult};

use host::Mounted;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second init (e.g. module re-evaluation) keeps the first logger
    console_log::init_with_level(log::Level::Info).ok();
}

/// Grow the default tree in `canvas_id`, reveal `greeting_id` when done,
/// and replay whenever the element matching `wrapper_selector` or the window
/// changes size.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, greeting_id: &str, wrapper_selector: &str) -> Result<(), JsValue> {
    Ok(mount_internal(canvas_id, greeting_id, wrapper_selector, TreeConfig::default())?)
}

/// Same as `mount` with a YAML configuration
#[wasm_bindgen]
pub fn mount_with_config(
    canvas_id: &str,
    greeting_id: &str,
    wrapper_selector: &str,
    yaml: &str,
) -> Result<(), JsValue> {
    let config = TreeConfig::from_yaml(yaml)?;
    Ok(mount_internal(canvas_id, greeting_id, wrapper_selector, config)?)
}

fn mount_internal(
    canvas_id: &str,
    greeting_id: &str,
    wrapper_selector: &str,
    config: TreeConfig,
) -> GreetingResult<()> {
    let window = web_sys::window().ok_or_else(|| GreetingError::dom("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| GreetingError::dom("no document"))?;

    let canvas: HtmlCanvasElement = element_by_id(&document, canvas_id)?;
    let greeting: HtmlElement = element_by_id(&document, greeting_id)?;
    let wrapper = document
        .query_selector(wrapper_selector)
        .map_err(|e| GreetingError::from_js("query_selector", e))?
        .ok_or_else(|| GreetingError::dom(format!("missing {}", wrapper_selector)))?;

    let engine = GreetingTree::build(canvas, greeting, wrapper.clone(), config)?;
    let mounted = Mounted::attach(window, &wrapper, engine)?;
    // Lives as long as the page
    std::mem::forget(mounted);

    Ok(())
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> GreetingResult<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GreetingError::dom(format!("missing #{}", id)))?
        .dyn_into::<T>()
        .map_err(|el: Element| GreetingError::dom(format!("#{} is a <{}>", id, el.tag_name().to_lowercase())))
}
