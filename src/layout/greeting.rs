use crate::growth::Bounds;
use super::projection::Layout;

/// Label height assumed when nothing better can be measured
pub const DEFAULT_LABEL_HEIGHT: f64 = 24.0;
/// Line height as a multiple of font size, when only the font size is known
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;
/// Gap between canopy and label as a share of label height
pub const GAP_FRACTION: f64 = 0.2;
pub const MIN_GAP: f64 = 12.0;
/// The label never goes above this offset from the top edge
pub const SAFE_TOP_MARGIN: f64 = 24.0;

/// Rendered size information read from the greeting label
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LabelMetrics {
    /// Bounding box height; zero while the label has not been laid out
    pub height: f64,
    /// Computed `line-height` in pixels, if it parsed as a number
    pub line_height: Option<f64>,
    /// Computed `font-size` in pixels, if it parsed as a number
    pub font_size: Option<f64>,
}

impl LabelMetrics {
    pub fn measured(height: f64) -> Self {
        Self {
            height,
            ..Default::default()
        }
    }

    /// Measured height, else line height, else font size based estimate
    pub fn effective_height(&self) -> f64 {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(self.height) {
            return self.height;
        }
        if let Some(line_height) = self.line_height.filter(|v| usable(*v)) {
            return line_height;
        }
        if let Some(font_size) = self.font_size.filter(|v| usable(*v)) {
            return font_size * LINE_HEIGHT_FACTOR;
        }
        DEFAULT_LABEL_HEIGHT
    }
}

/// Where the greeting label goes, in CSS pixels relative to the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreetingPlacement {
    /// Horizontal anchor (the label is centered on it by its stylesheet)
    pub left: f64,
    pub top: f64,
}

impl GreetingPlacement {
    /// Place the label above the top of the canopy
    pub fn compute(layout: &Layout, bounds: &Bounds, label_height: f64) -> Self {
        let top_point = layout.project(bounds.top_center());
        let gap = (label_height * GAP_FRACTION).max(MIN_GAP);
        let candidate_top = top_point.y - label_height - gap;

        Self {
            left: layout.width / 2.0,
            top: candidate_top.max(SAFE_TOP_MARGIN),
        }
    }

    pub fn left_css(&self) -> String {
        format!("{}px", self.left)
    }

    pub fn top_css(&self) -> String {
        format!("{}px", self.top)
    }
}
