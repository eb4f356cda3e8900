use serde::Deserialize;
use crate::error::{GreetingError, GreetingResult};

/// Deepest tree we agree to build; the branch count doubles per level
pub const MAX_SUPPORTED_DEPTH: u32 = 20;

/// Static knobs for the tree generator, branch thickness and growth pacing.
///
/// Times are in milliseconds and angles in degrees. Every field has a default,
/// so YAML input only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Depth of the leaves (root is depth 0)
    pub max_depth: u32,
    /// Length of the trunk in normalized units
    pub base_length: f64,
    /// Length multiplier per level
    pub length_decay: f64,
    /// Angle each child turns away from its parent
    pub base_angle: f64,
    /// Total width of the random angle offset applied to each child
    pub angle_jitter: f64,
    /// Growth time of the trunk
    pub base_duration: f64,
    /// Growth time multiplier per level
    pub duration_decay: f64,
    /// Delay between a branch starting and its children starting
    pub level_delay: f64,
    /// Stroke width of the trunk in CSS pixels
    pub base_thickness: f64,
    /// Stroke width multiplier per level
    pub thickness_decay: f64,
    pub seed: u32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 9,
            base_length: 1.0,
            length_decay: 0.72,
            base_angle: 32.0,
            angle_jitter: 16.0,
            base_duration: 1100.0,
            duration_decay: 0.83,
            level_delay: 380.0,
            base_thickness: 11.0,
            thickness_decay: 0.72,
            seed: 20260213,
        }
    }
}

impl TreeConfig {
    /// Parse from YAML and validate
    pub fn from_yaml(yaml: &str) -> GreetingResult<Self> {
        let config: TreeConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> GreetingResult<()> {
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(GreetingError::config(format!(
                "max_depth {} exceeds the supported maximum of {}",
                self.max_depth, MAX_SUPPORTED_DEPTH
            )));
        }

        let fields = [
            ("base_length", self.base_length),
            ("length_decay", self.length_decay),
            ("base_angle", self.base_angle),
            ("angle_jitter", self.angle_jitter),
            ("base_duration", self.base_duration),
            ("duration_decay", self.duration_decay),
            ("level_delay", self.level_delay),
            ("base_thickness", self.base_thickness),
            ("thickness_decay", self.thickness_decay),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(GreetingError::config(format!("{} must be finite", name)));
            }
        }

        for (name, value) in [
            ("base_length", self.base_length),
            ("base_duration", self.base_duration),
            ("base_thickness", self.base_thickness),
        ] {
            if value <= 0.0 {
                return Err(GreetingError::config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("length_decay", self.length_decay),
            ("duration_decay", self.duration_decay),
            ("thickness_decay", self.thickness_decay),
        ] {
            if value <= 0.0 || value > 1.0 {
                return Err(GreetingError::config(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("angle_jitter", self.angle_jitter),
            ("level_delay", self.level_delay),
        ] {
            if value < 0.0 {
                return Err(GreetingError::config(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Number of branches a full binary tree of this depth contains,
    /// saturating at `usize::MAX`
    pub fn branch_count(&self) -> usize {
        self.max_depth
            .checked_add(1)
            .and_then(|levels| 1usize.checked_shl(levels))
            .map_or(usize::MAX, |n| n.wrapping_sub(1))
    }

    pub fn duration_at(&self, depth: u32) -> f64 {
        self.base_duration * self.duration_decay.powi(depth as i32)
    }

    pub fn thickness_at(&self, depth: u32) -> f64 {
        self.base_thickness * self.thickness_decay.powi(depth as i32)
    }
}
