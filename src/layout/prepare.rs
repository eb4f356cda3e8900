use crate::data::TreeConfig;
use crate::growth::Branch;
use crate::math::Vec2;
use super::projection::Layout;

/// A branch projected into pixel space, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedBranch {
    pub start: Vec2,
    pub end: Vec2,
    pub depth: u32,
    pub start_time: f64,
    pub duration: f64,
    /// Stroke width in CSS pixels
    pub thickness: f64,
}

impl PreparedBranch {
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Tip position after growing to `progress` of full length
    pub fn tip_at(&self, progress: f64) -> Vec2 {
        self.start.lerp(&self.end, progress)
    }
}

/// Project every branch through `layout`. Rerun in full when the layout changes.
pub fn prepare_branches(branches: &[Branch], layout: &Layout, config: &TreeConfig) -> Vec<PreparedBranch> {
    branches
        .iter()
        .map(|branch| PreparedBranch {
            start: layout.project(branch.start),
            end: layout.project(branch.end),
            depth: branch.depth,
            start_time: branch.start_time,
            duration: branch.duration,
            thickness: config.thickness_at(branch.depth),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::TreeGrowth;
    use crate::layout::Viewport;

    #[test]
    fn test_preparation_is_idempotent() {
        let config = TreeConfig::default();
        let tree = TreeGrowth::new(config.clone()).grow();
        let layout = Layout::compute(&Viewport::new(1024.0, 768.0, 2.0), &tree.bounds);

        let first = prepare_branches(&tree.branches, &layout, &config);
        let second = prepare_branches(&tree.branches, &layout, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_preparation_keeps_timing_and_order() {
        let config = TreeConfig::default().with_max_depth(3);
        let tree = TreeGrowth::new(config.clone()).grow();
        let layout = Layout::compute(&Viewport::new(600.0, 600.0, 1.0), &tree.bounds);
        let prepared = prepare_branches(&tree.branches, &layout, &config);

        assert_eq!(prepared.len(), tree.len());
        for (p, b) in prepared.iter().zip(&tree.branches) {
            assert_eq!(p.depth, b.depth);
            assert_eq!(p.start_time, b.start_time);
            assert_eq!(p.duration, b.duration);
            assert_eq!(p.start, layout.project(b.start));
            assert_eq!(p.end, layout.project(b.end));
        }
    }

    #[test]
    fn test_thickness_decays_with_depth() {
        let config = TreeConfig::default().with_max_depth(2);
        let tree = TreeGrowth::new(config.clone()).grow();
        let layout = Layout::compute(&Viewport::new(300.0, 300.0, 1.0), &tree.bounds);
        let prepared = prepare_branches(&tree.branches, &layout, &config);

        assert_eq!(prepared[0].thickness, 11.0);
        assert!((prepared[1].thickness - 11.0 * 0.72).abs() < 1e-12);
        assert!(prepared[2].thickness < prepared[1].thickness);
    }

    #[test]
    fn test_tip_interpolates_linearly() {
        let branch = PreparedBranch {
            start: Vec2::new(100.0, 200.0),
            end: Vec2::new(100.0, 100.0),
            depth: 0,
            start_time: 0.0,
            duration: 1.0,
            thickness: 1.0,
        };
        assert_eq!(branch.tip_at(0.0), branch.start);
        assert_eq!(branch.tip_at(0.25), Vec2::new(100.0, 175.0));
        assert_eq!(branch.tip_at(1.0), branch.end);
    }

    #[test]
    fn test_preparation_leaves_source_untouched() {
        let config = TreeConfig::default().with_max_depth(2);
        let tree = TreeGrowth::new(config.clone()).grow();
        let before = tree.branches.clone();
        let layout = Layout::compute(&Viewport::new(300.0, 300.0, 1.0), &tree.bounds);
        let _ = prepare_branches(&tree.branches, &layout, &config);
        assert_eq!(tree.branches, before);
    }
}
