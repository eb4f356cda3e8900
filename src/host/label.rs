use web_sys::{HtmlElement, Window};

use crate::error::{GreetingError, GreetingResult};
use crate::layout::{GreetingPlacement, LabelMetrics};

const VISIBLE_CLASS: &str = "is-visible";

/// Leading number of a CSS length such as `"28.8px"`; `None` for `"normal"`
pub fn parse_css_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0)))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The DOM element that shows the greeting once the tree is grown
pub struct GreetingLabel {
    element: HtmlElement,
}

impl GreetingLabel {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// Rendered height plus the computed font metrics used as fallbacks
    pub fn metrics(&self, window: &Window) -> LabelMetrics {
        let height = self.element.get_bounding_client_rect().height();
        let style = window.get_computed_style(&self.element).ok().flatten();
        let property = |name: &str| {
            style
                .as_ref()
                .and_then(|s| s.get_property_value(name).ok())
                .and_then(|v| parse_css_px(&v))
        };

        LabelMetrics {
            height,
            line_height: property("line-height"),
            font_size: property("font-size"),
        }
    }

    pub fn place(&self, placement: &GreetingPlacement) -> GreetingResult<()> {
        let style = self.element.style();
        style
            .set_property("left", &placement.left_css())
            .and_then(|_| style.set_property("top", &placement.top_css()))
            .map_err(|e| GreetingError::from_js("greeting style", e))
    }

    pub fn show(&self) -> GreetingResult<()> {
        self.set_visible(true)
    }

    pub fn hide(&self) -> GreetingResult<()> {
        self.set_visible(false)
    }

    fn set_visible(&self, visible: bool) -> GreetingResult<()> {
        let classes = self.element.class_list();
        let toggled = if visible {
            classes.add_1(VISIBLE_CLASS)
        } else {
            classes.remove_1(VISIBLE_CLASS)
        };
        toggled
            .and_then(|_| {
                self.element
                    .set_attribute("aria-hidden", if visible { "false" } else { "true" })
            })
            .map_err(|e| GreetingError::from_js("greeting visibility", e))
    }
}
