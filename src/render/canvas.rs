use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::commands::DrawCommand;
use crate::error::{GreetingError, GreetingResult};
use crate::layout::Viewport;

/// Wrapper around a canvas and its 2D context that executes draw commands
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> GreetingResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GreetingError::from_js("get_context", e))?
            .ok_or_else(|| GreetingError::dom("Failed to get 2D context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GreetingError::dom("Context is not a CanvasRenderingContext2d"))?;

        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the viewport and draw in CSS pixels
    pub fn resize(&self, viewport: &Viewport) -> GreetingResult<()> {
        let (device_width, device_height) = viewport.device_size();
        self.canvas.set_width(device_width);
        self.canvas.set_height(device_height);

        let style = self.canvas.style();
        style
            .set_property("width", "100%")
            .and_then(|_| style.set_property("height", "100%"))
            .map_err(|e| GreetingError::from_js("canvas style", e))?;

        let dpr = viewport.device_pixel_ratio;
        self.ctx
            .set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(|e| GreetingError::from_js("set_transform", e))
    }

    pub fn execute(&self, commands: &[DrawCommand]) -> GreetingResult<()> {
        let ctx = &self.ctx;
        ctx.set_line_cap("round");

        for command in commands {
            match command {
                DrawCommand::Clear => self.clear()?,
                DrawCommand::StrokeLine { from, to, width, color } => {
                    ctx.begin_path();
                    ctx.move_to(from.x, from.y);
                    ctx.line_to(to.x, to.y);
                    ctx.set_line_width(*width);
                    ctx.set_stroke_style_str(&color.to_string());
                    ctx.stroke();
                }
                DrawCommand::FillCircle { center, radius, color } => {
                    ctx.begin_path();
                    ctx.set_fill_style_str(&color.to_string());
                    ctx.arc(center.x, center.y, *radius, 0.0, std::f64::consts::TAU)
                        .map_err(|e| GreetingError::from_js("arc", e))?;
                    ctx.fill();
                }
            }
        }

        Ok(())
    }

    /// Clear in device pixels with an identity transform, then restore the scale
    fn clear(&self) -> GreetingResult<()> {
        let ctx = &self.ctx;
        ctx.save();
        let identity = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        if identity.is_ok() {
            ctx.clear_rect(
                0.0,
                0.0,
                self.canvas.width() as f64,
                self.canvas.height() as f64,
            );
        }
        ctx.restore();
        identity.map_err(|e| GreetingError::from_js("set_transform", e))
    }
}
