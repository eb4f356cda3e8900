pub mod vec2;
pub mod prng;

pub use vec2::Vec2;
pub use prng::Lcg;

/// Degrees to radians
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}
