use crate::math::Vec2;

/// Axis-aligned box over every branch endpoint in normalized space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    /// The tree is rooted at the origin, so the box starts there
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

impl Bounds {
    /// Zero-size box at a point
    pub fn at(point: Vec2) -> Self {
        Self {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
        }
    }

    pub fn include(&mut self, point: Vec2) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    pub fn include_segment(&mut self, start: Vec2, end: Vec2) {
        self.include(start);
        self.include(end);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Highest point of the canopy, horizontally centered
    pub fn top_center(&self) -> Vec2 {
        Vec2::new((self.min_x + self.max_x) / 2.0, self.max_y)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        let b = Bounds::default();
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
        assert!(b.contains(Vec2::ZERO));
    }

    #[test]
    fn test_include_grows_monotonically() {
        let mut b = Bounds::default();
        b.include_segment(Vec2::ZERO, Vec2::new(0.0, 1.0));
        b.include(Vec2::new(-0.5, 0.4));
        b.include(Vec2::new(0.25, 0.2));

        assert_eq!(b.min_x, -0.5);
        assert_eq!(b.max_x, 0.25);
        assert_eq!(b.min_y, 0.0);
        assert_eq!(b.max_y, 1.0);
        assert_eq!(b.center(), Vec2::new(-0.125, 0.5));
        assert_eq!(b.top_center(), Vec2::new(-0.125, 1.0));
    }
}
