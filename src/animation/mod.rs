//! Animation module for tree growth
//!
//! Each branch grows on its own schedule from a shared clock, with an
//! ease-out curve. The session reports when the whole tree is grown.

mod growth_animation;
mod easing;

pub use growth_animation::{phase_for, progress_for, AnimationSession, BranchPhase, Frame};
pub use easing::ease_out_cubic;
