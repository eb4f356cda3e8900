use crate::growth::Bounds;
use crate::math::Vec2;

/// Margin around the tree as a share of the smaller viewport side
pub const PADDING_FRACTION: f64 = 0.08;
/// Smallest normalized extent used for fitting, so a flat tree still scales
pub const MIN_EXTENT: f64 = 0.01;

/// Drawing area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    /// Negative or non-finite sizes collapse to zero; a bad pixel ratio becomes 1.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let size = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: size(width),
            height: size(height),
            device_pixel_ratio: dpr,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Backing store size in device pixels
    pub fn device_size(&self) -> (u32, u32) {
        (
            (self.width * self.device_pixel_ratio).round() as u32,
            (self.height * self.device_pixel_ratio).round() as u32,
        )
    }
}

/// Uniform scale and translation that fits the tree into a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub padding: f64,
}

impl Layout {
    /// Fit `bounds` inside the viewport minus padding, keeping aspect ratio
    pub fn compute(viewport: &Viewport, bounds: &Bounds) -> Self {
        let width = viewport.width;
        let height = viewport.height;
        let padding = width.min(height) * PADDING_FRACTION;

        let norm_width = bounds.width().max(MIN_EXTENT);
        let norm_height = bounds.height().max(MIN_EXTENT);
        let scale = ((width - padding * 2.0) / norm_width)
            .min((height - padding * 2.0) / norm_height)
            .max(0.0);

        let center = bounds.center();

        Self {
            width,
            height,
            scale,
            center_x: center.x,
            center_y: center.y,
            padding,
        }
    }

    /// Normalized point to pixels. Pixel y grows downward.
    pub fn project(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            (point.x - self.center_x) * self.scale + self.width / 2.0,
            self.height / 2.0 - (point.y - self.center_y) * self.scale,
        )
    }
}
