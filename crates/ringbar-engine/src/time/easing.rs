//! Easing curves over normalized time `t ∈ [0, 1]`.

use std::f32::consts::PI;

/// Ease-in/ease-out: slow start, fast middle, slow end.
///
/// `cos((t + 1)·π) / 2 + 0.5`. Input is clamped to `[0, 1]`, and the
/// endpoints map exactly to `0.0` and `1.0`.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

/// Linear interpolation from `a` to `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[test]
    fn midpoint_is_half() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn slow_at_edges_fast_in_middle() {
        let edge = ease_in_out(0.1) - ease_in_out(0.0);
        let middle = ease_in_out(0.55) - ease_in_out(0.45);
        assert!(edge < 0.1);
        assert!(middle > 0.1);
    }

    #[test]
    fn is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn clamps_out_of_range_input() {
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn lerp_basic() {
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
        assert_eq!(lerp(20.0, 10.0, 1.0), 10.0);
    }
}
