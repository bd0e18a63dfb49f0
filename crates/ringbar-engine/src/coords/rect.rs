use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the top
    /// and bottom. Size never goes negative; an over-inset rect collapses onto
    /// its center.
    #[inline]
    #[must_use]
    pub fn inset(self, dx: f32, dy: f32) -> Self {
        let c = self.center();
        let w = (self.size.x - 2.0 * dx).max(0.0);
        let h = (self.size.y - 2.0 * dy).max(0.0);
        Rect::new(
            (self.origin.x + dx).min(c.x),
            (self.origin.y + dy).min(c.y),
            w,
            h,
        )
    }

    /// Moves the rectangle so its top-left corner is at `(x, y)`, keeping its size.
    #[inline]
    #[must_use]
    pub fn offset_to(self, x: f32, y: f32) -> Self {
        Rect::from_origin_size(Vec2::new(x, y), self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_uniform() {
        let inner = r(0.0, 0.0, 100.0, 80.0).inset(4.0, 4.0);
        assert_eq!(inner, r(4.0, 4.0, 92.0, 72.0));
    }

    #[test]
    fn inset_keeps_center() {
        let rect = r(10.0, 20.0, 50.0, 50.0);
        assert_eq!(rect.inset(5.0, 5.0).center(), rect.center());
    }

    #[test]
    fn inset_collapses_to_center() {
        let inner = r(0.0, 0.0, 10.0, 10.0).inset(20.0, 20.0);
        assert_eq!(inner, r(5.0, 5.0, 0.0, 0.0));
        assert!(inner.is_empty());
    }

    // ── offset_to ─────────────────────────────────────────────────────────

    #[test]
    fn offset_to_keeps_size() {
        let moved = r(1.0, 2.0, 8.0, 8.0).offset_to(40.0, 16.0);
        assert_eq!(moved, r(40.0, 16.0, 8.0, 8.0));
    }

    // ── misc ──────────────────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        let rect = r(10.0, 10.0, 20.0, 40.0);
        assert_eq!(rect.center(), Vec2::new(20.0, 30.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
