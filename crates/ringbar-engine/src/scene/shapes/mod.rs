pub(crate) mod arc;
pub(crate) mod oval;

pub use arc::ArcCmd;
pub use oval::OvalCmd;

use crate::coords::{Rect, Vec2};

/// Radius of the ellipse inscribed in `rect` along `dir` (from the center).
///
/// Degenerates to the circle radius for square rects.
#[inline]
pub(crate) fn ellipse_radius(rect: Rect, dir: Vec2) -> f32 {
    let rx = rect.width() * 0.5;
    let ry = rect.height() * 0.5;
    if rx == ry {
        return rx;
    }
    let len = dir.length();
    if len == 0.0 {
        return rx.min(ry);
    }
    let (cos, sin) = (dir.x / len, dir.y / len);
    rx * ry / ((ry * cos).powi(2) + (rx * sin).powi(2)).sqrt()
}
