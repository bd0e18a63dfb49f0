//! Paint model shared between the ring composer and drawing surfaces.
//!
//! Scope:
//! - color representation (straight alpha, 8 bits per channel)
//! - per-channel color blending
//! - paint sources (solid, sweep gradient) and paint style (fill, stroke)
//!
//! Geometry types remain in `coords`.

mod blend;
pub mod color;
pub mod gradient;

pub use blend::blend;
pub use color::Color;
pub use gradient::SweepGradient;

/// Paint source for filling or stroking geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    SweepGradient(SweepGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Resolves the paint color at `p` (in the paint's coordinate space).
    #[inline]
    pub fn color_at(&self, p: crate::coords::Vec2) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::SweepGradient(g) => g.color_at(p),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<SweepGradient> for Paint {
    fn from(g: SweepGradient) -> Self {
        Paint::SweepGradient(g)
    }
}

/// How a shape's area is covered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PaintStyle {
    /// Cover the interior.
    Fill,
    /// Cover a band of the given width centered on the outline.
    Stroke { width: f32 },
}
