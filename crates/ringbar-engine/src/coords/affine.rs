use super::Vec2;

/// 2D affine transform in logical pixel space.
///
/// Maps `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`.
///
/// Composition follows canvas conventions: [`Affine::concat`] appends an inner
/// transform that is applied to local coordinates *before* `self`, the same way
/// a `rotate` call on a canvas affects everything drawn after it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Affine {
    pub const IDENTITY: Affine = Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn translation(dx: f32, dy: f32) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: dx, f: dy }
    }

    /// Clockwise rotation (screen space) around the origin.
    #[inline]
    pub fn rotation(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self { a: c, b: s, c: -s, d: c, e: 0.0, f: 0.0 }
    }

    /// Clockwise rotation around `pivot`.
    #[inline]
    pub fn rotation_about(degrees: f32, pivot: Vec2) -> Self {
        Self::translation(pivot.x, pivot.y)
            .concat(Self::rotation(degrees))
            .concat(Self::translation(-pivot.x, -pivot.y))
    }

    /// Returns `self ∘ inner`: `inner` is applied first.
    #[inline]
    #[must_use]
    pub fn concat(self, inner: Affine) -> Affine {
        Affine {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            e: self.a * inner.e + self.c * inner.f + self.e,
            f: self.b * inner.e + self.d * inner.f + self.f,
        }
    }

    /// Canvas-style `rotate(degrees, px, py)`.
    #[inline]
    #[must_use]
    pub fn rotated_about(self, degrees: f32, pivot: Vec2) -> Affine {
        self.concat(Self::rotation_about(degrees, pivot))
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Returns the inverse transform, or `None` when the matrix is singular.
    pub fn inverse(self) -> Option<Affine> {
        let det = self.a * self.d - self.b * self.c;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        Some(Affine {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            e: (self.c * self.f - self.d * self.e) * inv,
            f: (self.b * self.e - self.a * self.f) * inv,
        })
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}
