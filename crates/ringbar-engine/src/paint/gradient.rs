use crate::coords::{Affine, Vec2};

use super::{Color, blend};

/// Two-color angular (sweep) gradient in logical pixel space.
///
/// Semantics:
/// - color at angle `θ` around `center` is `blend(start, end, θ / 360)`,
///   with `θ` measured clockwise from +X in `[0, 360)`
/// - `rotation_deg` rotates the gradient's angular origin around `center`;
///   it is a plain value, so a rotated gradient is a new gradient
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SweepGradient {
    pub center: Vec2,
    pub start: Color,
    pub end: Color,
    pub rotation_deg: f32,
}

impl SweepGradient {
    #[inline]
    pub fn new(center: Vec2, start: Color, end: Color) -> Self {
        Self { center, start, end, rotation_deg: 0.0 }
    }

    /// Returns a copy with the local rotation replaced.
    #[inline]
    #[must_use]
    pub fn with_rotation(self, degrees: f32) -> Self {
        Self { rotation_deg: degrees, ..self }
    }

    /// Evaluates the gradient at `p`, given in the same space as `center`.
    pub fn color_at(&self, p: Vec2) -> Color {
        let local = if self.rotation_deg == 0.0 {
            p
        } else {
            Affine::rotation_about(-self.rotation_deg, self.center).apply(p)
        };
        let t = (local - self.center).angle_deg() / 360.0;
        blend(self.start, self.end, t)
    }
}
