use crate::coords::{Rect, Vec2};
use crate::paint::{Paint, PaintStyle};
use crate::scene::{DrawCmd, DrawList};

use super::ellipse_radius;

/// Oval draw payload: the ellipse inscribed in `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct OvalCmd {
    pub rect: Rect,
    pub paint: Paint,
    pub style: PaintStyle,
}

impl OvalCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint, style: PaintStyle) -> Self {
        Self { rect, paint, style }
    }

    pub fn covers(&self, p: Vec2) -> bool {
        if self.rect.is_empty() {
            return false;
        }
        let d = p - self.rect.center();
        let r = ellipse_radius(self.rect, d);
        match self.style {
            PaintStyle::Fill => d.length() <= r,
            PaintStyle::Stroke { width } => (d.length() - r).abs() <= width * 0.5,
        }
    }
}

impl DrawList {
    /// Records a filled oval.
    #[inline]
    pub fn push_fill_oval(&mut self, rect: Rect, paint: Paint) {
        self.push(DrawCmd::Oval(OvalCmd::new(rect, paint, PaintStyle::Fill)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn disc() -> OvalCmd {
        OvalCmd::new(Rect::new(0.0, 0.0, 10.0, 10.0), Paint::solid(Color::WHITE), PaintStyle::Fill)
    }

    #[test]
    fn fill_covers_center_not_corner() {
        assert!(disc().covers(Vec2::new(5.0, 5.0)));
        assert!(!disc().covers(Vec2::new(0.5, 0.5)));
    }

    #[test]
    fn stroke_covers_outline_only() {
        let ring = OvalCmd { style: PaintStyle::Stroke { width: 2.0 }, ..disc() };
        assert!(ring.covers(Vec2::new(10.0, 5.0)));
        assert!(!ring.covers(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn ellipse_uses_both_radii() {
        let wide = OvalCmd { rect: Rect::new(0.0, 0.0, 20.0, 10.0), ..disc() };
        assert!(wide.covers(Vec2::new(19.0, 5.0)));
        assert!(!wide.covers(Vec2::new(10.0, 10.5)));
    }
}
