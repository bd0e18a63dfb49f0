//! Coordinate and geometry types shared across the ring composer and surfaces.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are degrees, measured clockwise from +X (a consequence of +Y down).

mod affine;
mod rect;
mod vec2;

pub use affine::Affine;
pub use rect::Rect;
pub use vec2::Vec2;
