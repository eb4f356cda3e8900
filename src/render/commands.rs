//! Backend-independent drawing commands produced by the animation step

use std::fmt;
use crate::math::Vec2;

/// CSS `hsl()` color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Degrees
    pub hue: f64,
    /// Percent
    pub saturation: f64,
    /// Percent
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self { hue, saturation, lightness }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

const TRUNK_HUE: f64 = 315.0;
const HUE_STEP: f64 = 8.0;
const TRUNK_LIGHTNESS: f64 = 55.0;
const LIGHTNESS_STEP: f64 = 2.0;
const MAX_LIGHTNESS: f64 = 75.0;
const LEAF_RADIUS_FACTOR: f64 = 0.35;
const MIN_LEAF_RADIUS: f64 = 1.2;

/// Stroke color: hue cools and lightness rises toward the leaves
pub fn branch_color(depth: u32) -> Hsl {
    let depth = depth as f64;
    let lightness = (TRUNK_LIGHTNESS + depth * LIGHTNESS_STEP).min(MAX_LIGHTNESS);
    Hsl::new(TRUNK_HUE - depth * HUE_STEP, 70.0, lightness)
}

/// Fill color of the marker drawn on a fully grown leaf
pub fn leaf_color(depth: u32) -> Hsl {
    Hsl::new(branch_color(depth).hue + 10.0, 80.0, 75.0)
}

pub fn leaf_radius(thickness: f64) -> f64 {
    (thickness * LEAF_RADIUS_FACTOR).max(MIN_LEAF_RADIUS)
}

/// One drawing operation in CSS pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface, in device pixels
    Clear,
    /// Round-capped straight stroke
    StrokeLine {
        from: Vec2,
        to: Vec2,
        width: f64,
        color: Hsl,
    },
    FillCircle {
        center: Vec2,
        radius: f64,
        color: Hsl,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(branch_color(0).to_string(), "hsl(315, 70%, 55%)");
        assert_eq!(branch_color(2).to_string(), "hsl(299, 70%, 59%)");
        assert_eq!(leaf_color(9).to_string(), "hsl(253, 80%, 75%)");
    }

    #[test]
    fn test_lightness_capped() {
        assert_eq!(branch_color(10).lightness, 75.0);
        assert_eq!(branch_color(30).lightness, 75.0);
        assert!(branch_color(30).hue < branch_color(29).hue);
    }

    #[test]
    fn test_leaf_radius_floor() {
        assert_eq!(leaf_radius(1.0), 1.2);
        assert!((leaf_radius(10.0) - 3.5).abs() < 1e-12);
    }
}
