//! Browser glue around the animation core
//!
//! Label mutation, resize observation and coalescing, and frame scheduling. Nothing here does
//! geometry; it only feeds the session and applies its output.

pub mod debounce;
pub mod frame_loop;
pub mod label;
pub mod mount;
pub mod resize;

pub use debounce::{Debouncer, RESIZE_DEBOUNCE_MS};
pub use frame_loop::FrameLoop;
pub use label::GreetingLabel;
pub use mount::Mounted;
pub use resize::WrapperObserver;
