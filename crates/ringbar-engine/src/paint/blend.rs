//! Per-channel color interpolation.

use super::Color;

/// Blends `start` toward `end` at position `t` (expected in `[0, 1]`).
///
/// Each channel is `c1 + floor(t * (c2 - c1) + 0.5)`, i.e. round-half-up on the
/// delta in both directions, so `t = 0` and `t = 1` hit the endpoints exactly.
/// Callers pass in-range channels, so the result needs no clamping.
pub fn blend(start: Color, end: Color, t: f32) -> Color {
    Color {
        r: channel(start.r, end.r, t),
        g: channel(start.g, end.g, t),
        b: channel(start.b, end.b, t),
        a: channel(start.a, end.a, t),
    }
}

#[inline]
fn channel(c1: u8, c2: u8, t: f32) -> u8 {
    let delta = (t * (c2 as f32 - c1 as f32) + 0.5).floor() as i32;
    (c1 as i32 + delta) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Color { Color::from_rgba8(v, v, v, v) }

    #[test]
    fn same_color_is_fixed_point() {
        let c = Color::from_argb(0xFF4C_DEF6);
        for t in [0.0, 0.13, 0.5, 0.77, 1.0] {
            assert_eq!(blend(c, c, t), c);
        }
    }

    #[test]
    fn endpoints() {
        let s = Color::from_argb(0xFF4C_DEF6);
        let e = Color::from_argb(0xFF00_70E3);
        assert_eq!(blend(s, e, 0.0), s);
        assert_eq!(blend(s, e, 1.0), e);
        assert_eq!(blend(e, s, 0.0), e);
        assert_eq!(blend(e, s, 1.0), s);
    }

    #[test]
    fn decreasing_channel_reaches_end_exactly() {
        assert_eq!(blend(gray(10), gray(0), 1.0), gray(0));
        assert_eq!(blend(gray(255), gray(0), 1.0), gray(0));
    }

    #[test]
    fn midpoint_of_zero_and_ten() {
        assert_eq!(blend(gray(0), gray(10), 0.5), gray(5));
    }

    #[test]
    fn rounds_half_up_not_to_even() {
        // 10 + 0.5 rounds to 11; banker's rounding would give 10.
        assert_eq!(blend(gray(10), gray(11), 0.5), gray(11));
        assert_eq!(blend(gray(12), gray(13), 0.5), gray(13));
    }

    #[test]
    fn channels_are_independent() {
        let s = Color::from_rgba8(0, 255, 100, 255);
        let e = Color::from_rgba8(255, 0, 100, 255);
        assert_eq!(blend(s, e, 0.25), Color::from_rgba8(64, 191, 100, 255));
    }

    #[test]
    fn decreasing_channel_rounds_half_up() {
        // -6 + 0.5 = -5.5 -> -6
        assert_eq!(blend(gray(10), gray(0), 0.6), gray(4));
        // -5 + 0.5 = -4.5 -> -5
        assert_eq!(blend(gray(10), gray(0), 0.5), gray(5));
    }
}
