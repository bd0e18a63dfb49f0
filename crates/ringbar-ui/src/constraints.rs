use ringbar_engine::coords::Vec2;

/// Size used on an axis that has no upper bound.
pub const DEFAULT_SIZE: f32 = 100.0;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// An axis is exact when `min == max`, bounded when `max` is finite, and
/// unbounded otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Side of the square a round widget takes under these constraints.
    ///
    /// Per axis: exact (tight) → that size; bounded → the smaller of the two
    /// bounds; unbounded → [`DEFAULT_SIZE`]. The square uses the smaller axis.
    pub fn square_side(self) -> f32 {
        let bound = self.max.x.min(self.max.y);
        let axis = |min: f32, max: f32| {
            if min == max && max.is_finite() {
                max
            } else if max.is_finite() {
                bound
            } else {
                DEFAULT_SIZE
            }
        };
        axis(self.min.x, self.max.x).min(axis(self.min.y, self.max.y))
    }
}
