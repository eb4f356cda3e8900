//! Easing for branch growth

/// Fast start, decelerating into full length: `(t - 1)^3 + 1`.
///
/// Input is clamped to [0, 1].
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = t.clamp(0.0, 1.0) - 1.0;
    inv * inv * inv + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_ease_strictly_increasing() {
        let mut prev = ease_out_cubic(0.0);
        for i in 1..=1000 {
            let v = ease_out_cubic(i as f64 / 1000.0);
            assert!(v > prev, "ease-out cubic should be strictly increasing");
            prev = v;
        }
    }

    #[test]
    fn test_ease_out_decelerates() {
        let early = ease_out_cubic(0.1) - ease_out_cubic(0.0);
        let late = ease_out_cubic(1.0) - ease_out_cubic(0.9);
        assert!(early > late);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_ease_clamps_input() {
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(1.5), 1.0);
    }
}
