pub mod config;

pub use config::{TreeConfig, MAX_SUPPORTED_DEPTH};
