//! Fitting the normalized tree into the viewport
//!
//! Everything here is a pure function of the grown tree and the current
//! viewport, so a resize simply recomputes it all.

pub mod projection;
pub mod prepare;
pub mod greeting;

pub use projection::{Layout, Viewport};
pub use prepare::{prepare_branches, PreparedBranch};
pub use greeting::{GreetingPlacement, LabelMetrics};
