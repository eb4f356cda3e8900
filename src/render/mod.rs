pub mod commands;
pub mod canvas;

pub use commands::{branch_color, leaf_color, leaf_radius, DrawCommand, Hsl};
pub use canvas::CanvasRenderer;
