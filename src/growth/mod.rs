//! Seeded binary tree generation in normalized space

pub mod algorithm;
pub mod bounds;

pub use algorithm::{Branch, GrownTree, TreeGrowth};
pub use bounds::Bounds;
