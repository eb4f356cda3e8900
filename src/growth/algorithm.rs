use crate::data::{TreeConfig, MAX_SUPPORTED_DEPTH};
use crate::math::{to_radians, Lcg, Vec2};
use super::bounds::Bounds;

/// One segment of the generated tree, in normalized space
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub start: Vec2,
    pub end: Vec2,
    /// Generation (depth from root, 0 = trunk)
    pub depth: u32,
    /// Offset on the animation clock at which growth begins
    pub start_time: f64,
    /// Time taken to grow to full length
    pub duration: f64,
}

impl Branch {
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

/// Generated branches in pre-order, plus the box around them
#[derive(Debug, Clone, PartialEq)]
pub struct GrownTree {
    pub branches: Vec<Branch>,
    pub bounds: Bounds,
    pub max_depth: u32,
}

impl GrownTree {
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn root(&self) -> Option<&Branch> {
        self.branches.first()
    }

    /// Clock time at which the last branch finishes growing
    pub fn total_duration(&self) -> f64 {
        self.branches
            .iter()
            .fold(0.0, |acc, branch| acc.max(branch.end_time()))
    }

    /// Indices of the left and right child of the branch at `index`.
    ///
    /// In pre-order the left child follows its parent directly and the right
    /// child follows the whole left subtree.
    pub fn children_of(&self, index: usize) -> Option<(usize, usize)> {
        let branch = self.branches.get(index)?;
        if branch.depth >= self.max_depth {
            return None;
        }
        let subtree_levels = self.max_depth - branch.depth;
        let left_subtree_size = (1usize << subtree_levels) - 1;
        Some((index + 1, index + 1 + left_subtree_size))
    }
}

/// Per-node inputs to the recursive growth step
#[derive(Debug, Clone, Copy)]
struct GrowthNode {
    origin: Vec2,
    length: f64,
    /// Degrees clockwise from vertical
    angle: f64,
    depth: u32,
    start_time: f64,
}

/// Tree growth algorithm
pub struct TreeGrowth {
    pub config: TreeConfig,
}

impl TreeGrowth {
    /// Depths past `MAX_SUPPORTED_DEPTH` are clamped to it
    pub fn new(mut config: TreeConfig) -> Self {
        if config.max_depth > MAX_SUPPORTED_DEPTH {
            log::warn!(
                "max_depth {} clamped to {}",
                config.max_depth,
                MAX_SUPPORTED_DEPTH
            );
            config.max_depth = MAX_SUPPORTED_DEPTH;
        }
        Self { config }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.config.seed = seed;
        self
    }

    /// Grow the full tree. Same config, same tree.
    pub fn grow(&self) -> GrownTree {
        let mut rng = Lcg::new(self.config.seed);
        let mut branches = Vec::with_capacity(self.config.branch_count());

        let root = GrowthNode {
            origin: Vec2::ZERO,
            length: self.config.base_length,
            angle: 0.0,
            depth: 0,
            start_time: 0.0,
        };
        self.grow_branch(root, &mut rng, &mut branches);

        let bounds = branches.iter().fold(Bounds::default(), |mut bounds, branch| {
            bounds.include_segment(branch.start, branch.end);
            bounds
        });

        log::debug!(
            "grew {} branches, bounds {:.3}x{:.3}",
            branches.len(),
            bounds.width(),
            bounds.height()
        );

        GrownTree {
            branches,
            bounds,
            max_depth: self.config.max_depth,
        }
    }

    fn grow_branch(&self, node: GrowthNode, rng: &mut Lcg, out: &mut Vec<Branch>) {
        let config = &self.config;
        let direction = Vec2::from_vertical_angle(to_radians(node.angle));
        let end = node.origin + direction.scale(node.length);

        out.push(Branch {
            start: node.origin,
            end,
            depth: node.depth,
            start_time: node.start_time,
            duration: config.duration_at(node.depth),
        });

        if node.depth >= config.max_depth {
            return;
        }

        // Left jitter is drawn before right; the tree shape depends on it
        let left_jitter = rng.jitter(config.angle_jitter);
        let right_jitter = rng.jitter(config.angle_jitter);

        let child = GrowthNode {
            origin: end,
            length: node.length * config.length_decay,
            angle: node.angle,
            depth: node.depth + 1,
            start_time: node.start_time + config.level_delay,
        };

        self.grow_branch(
            GrowthNode {
                angle: node.angle - config.base_angle + left_jitter,
                ..child
            },
            rng,
            out,
        );
        self.grow_branch(
            GrowthNode {
                angle: node.angle + config.base_angle + right_jitter,
                ..child
            },
            rng,
            out,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> GrownTree {
        TreeGrowth::new(TreeConfig::default().with_max_depth(2)).grow()
    }

    /// Walk the pre-order list and return (parent, child) index pairs
    fn parent_child_pairs(tree: &GrownTree) -> Vec<(usize, usize)> {
        (0..tree.len())
            .filter_map(|i| tree.children_of(i).map(|(l, r)| [(i, l), (i, r)]))
            .flatten()
            .collect()
    }

    #[test]
    fn test_small_tree_shape() {
        let tree = small_tree();
        assert_eq!(tree.len(), 7);

        let root = tree.root().unwrap();
        assert_eq!(root.start, Vec2::ZERO);
        assert_eq!(root.end, Vec2::new(0.0, 1.0));
        assert_eq!(root.start_time, 0.0);
        assert_eq!(root.duration, 1100.0);

        let (left, right) = tree.children_of(0).unwrap();
        assert_eq!((left, right), (1, 4));
        assert_eq!(tree.branches[left].start_time, 380.0);
        assert_eq!(tree.branches[right].start_time, 380.0);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let config = TreeConfig::default();
        let tree1 = TreeGrowth::new(config.clone()).grow();
        let tree2 = TreeGrowth::new(config).grow();

        assert_eq!(tree1, tree2);
        for (a, b) in tree1.branches.iter().zip(&tree2.branches) {
            assert_eq!(a.end.x.to_bits(), b.end.x.to_bits());
            assert_eq!(a.end.y.to_bits(), b.end.y.to_bits());
        }
    }

    #[test]
    fn test_seed_changes_shape() {
        let tree1 = TreeGrowth::new(TreeConfig::default()).grow();
        let tree2 = TreeGrowth::new(TreeConfig::default()).with_seed(1).grow();
        assert_ne!(tree1.branches, tree2.branches);
    }

    #[test]
    fn test_branch_count_matches_depth() {
        for depth in 0..=6 {
            let tree = TreeGrowth::new(TreeConfig::default().with_max_depth(depth)).grow();
            assert_eq!(tree.len(), (1 << (depth + 1)) - 1);
            assert_eq!(tree.branches.iter().filter(|b| b.is_root()).count(), 1);
            assert!(tree.branches.iter().all(|b| b.depth <= depth));
        }
    }

    #[test]
    fn test_excessive_depth_is_clamped() {
        for depth in [MAX_SUPPORTED_DEPTH + 1, 63, 64, u32::MAX] {
            let growth = TreeGrowth::new(TreeConfig::default().with_max_depth(depth));
            assert_eq!(growth.config.max_depth, MAX_SUPPORTED_DEPTH);
        }
        let growth = TreeGrowth::new(TreeConfig::default().with_max_depth(4));
        assert_eq!(growth.config.max_depth, 4);
    }

    #[test]
    fn test_single_branch_tree() {
        let tree = TreeGrowth::new(TreeConfig::default().with_max_depth(0)).grow();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.children_of(0), None);
        assert_eq!(tree.bounds.width(), 0.0);
        assert_eq!(tree.bounds.height(), 1.0);
    }

    #[test]
    fn test_children_connect_to_parent() {
        let tree = TreeGrowth::new(TreeConfig::default()).grow();
        let pairs = parent_child_pairs(&tree);
        assert_eq!(pairs.len(), tree.len() - 1);

        for (parent, child) in pairs {
            let p = &tree.branches[parent];
            let c = &tree.branches[child];
            assert_eq!(c.start, p.end);
            assert_eq!(c.depth, p.depth + 1);
        }
    }

    #[test]
    fn test_child_timing_follows_parent() {
        let config = TreeConfig::default();
        let tree = TreeGrowth::new(config.clone()).grow();

        for i in 0..tree.len() {
            if let Some((left, right)) = tree.children_of(i) {
                let parent = &tree.branches[i];
                assert_eq!(tree.branches[left].start_time, parent.start_time + config.level_delay);
                assert_eq!(tree.branches[left].start_time, tree.branches[right].start_time);
            }
        }
    }

    #[test]
    fn test_children_lengths_decay() {
        let config = TreeConfig::default();
        let tree = TreeGrowth::new(config.clone()).grow();
        for branch in &tree.branches {
            let expected = config.base_length * config.length_decay.powi(branch.depth as i32);
            let actual = branch.start.distance(&branch.end);
            assert!((actual - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_left_child_leans_left_without_jitter() {
        let config = TreeConfig {
            angle_jitter: 0.0,
            ..TreeConfig::default().with_max_depth(1)
        };
        let tree = TreeGrowth::new(config).grow();
        let left = &tree.branches[1];
        let right = &tree.branches[2];

        assert!(left.end.x < 0.0);
        assert!(right.end.x > 0.0);
        assert!((left.end.x + right.end.x).abs() < 1e-12);
    }

    #[test]
    fn test_jitter_draw_order() {
        let config = TreeConfig::default().with_max_depth(1);
        let tree = TreeGrowth::new(config.clone()).grow();

        let mut rng = Lcg::new(config.seed);
        let left_angle = -config.base_angle + rng.jitter(config.angle_jitter);
        let right_angle = config.base_angle + rng.jitter(config.angle_jitter);

        let child_len = config.base_length * config.length_decay;
        let expected_left = Vec2::UP + Vec2::from_vertical_angle(to_radians(left_angle)) * child_len;
        let expected_right = Vec2::UP + Vec2::from_vertical_angle(to_radians(right_angle)) * child_len;

        assert_eq!(tree.branches[1].end, expected_left);
        assert_eq!(tree.branches[2].end, expected_right);
    }

    #[test]
    fn test_bounds_cover_all_endpoints() {
        let tree = TreeGrowth::new(TreeConfig::default()).grow();
        for branch in &tree.branches {
            assert!(tree.bounds.contains(branch.start));
            assert!(tree.bounds.contains(branch.end));
        }
        let top = tree
            .branches
            .iter()
            .map(|b| b.end.y)
            .fold(f64::MIN, f64::max);
        assert_eq!(tree.bounds.max_y, top);
    }

    #[test]
    fn test_total_duration() {
        let config = TreeConfig::default().with_max_depth(2);
        let tree = TreeGrowth::new(config.clone()).grow();
        let leaf_end = 2.0 * config.level_delay + config.duration_at(2);
        let root_end = config.duration_at(0);
        assert!((tree.total_duration() - leaf_end.max(root_end)).abs() < 1e-9);
    }
}
